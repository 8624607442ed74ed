use uuid::Uuid;

use crate::error::AppError;
use crate::models::Lesson;

pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

/// Ids travel as raw bytes and must be exactly 16 of them.
pub fn parse_id(bytes: &[u8], field: &str) -> Result<Uuid, AppError> {
    Uuid::from_slice(bytes).map_err(|_| {
        AppError::Validation(format!(
            "{} must be 16 bytes, got {}",
            field,
            bytes.len()
        ))
    })
}

pub fn require_id(bytes: Option<&[u8]>, field: &str) -> Result<Uuid, AppError> {
    match bytes {
        Some(bytes) => parse_id(bytes, field),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_lessons(lessons: &[Lesson]) -> Result<(), AppError> {
    if let Some(index) = lessons.iter().position(|l| l.title.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "lessons[{}].title must not be empty",
            index
        )));
    }
    Ok(())
}

/// Pagination values arrive as signed protobuf ints. Zero keeps the default.
pub fn validate_page_value(value: i32, field: &str) -> Result<u32, AppError> {
    u32::try_from(value)
        .map_err(|_| AppError::Validation(format!("{} must not be negative", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Intro to X").is_ok());
        assert!(matches!(validate_title("   "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_id_requires_16_bytes() {
        let id = Uuid::now_v7();
        assert_eq!(parse_id(id.as_bytes(), "id").unwrap(), id);
        assert!(parse_id(&[1, 2, 3], "id").is_err());
        assert!(require_id(None, "creatorId").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(19.99).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_page_value() {
        assert_eq!(validate_page_value(0, "page").unwrap(), 0);
        assert_eq!(validate_page_value(3, "page").unwrap(), 3);
        assert!(validate_page_value(-1, "pageSize").is_err());
    }
}
