use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::error::AppError;
use crate::repository::{CourseRepository, MockCourseRepository, SqliteCourseRepository};
use crate::store::CourseStore;

/// Opens the sqlite pool. In mock mode the pool is lazy and never creates the
/// database file.
pub async fn connect_db(config: &Config) -> Result<SqlitePool, AppError> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(!config.debug_data);
    let pool_options = SqlitePoolOptions::new().max_connections(5);
    if config.debug_data {
        Ok(pool_options.connect_lazy_with(connect_options))
    } else {
        Ok(pool_options.connect_with(connect_options).await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: Arc<dyn CourseRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Picks the course backend from `config.debug_data`.
    pub fn new(config: Config, db: SqlitePool) -> Self {
        let courses: Arc<dyn CourseRepository> = if config.debug_data {
            let store = if config.seed_mock_data {
                CourseStore::seeded()
            } else {
                CourseStore::new()
            };
            Arc::new(MockCourseRepository::new(store))
        } else {
            Arc::new(SqliteCourseRepository::new(db.clone()))
        };

        Self {
            db,
            courses,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(debug_data: bool) -> (Config, std::path::PathBuf) {
        let path = std::env::temp_dir().join(format!("coursify-{}.db", uuid::Uuid::now_v7()));
        let mut config = Config::for_addr(([127, 0, 0, 1], 0).into());
        config.debug_data = debug_data;
        config.database_url = format!("sqlite://{}", path.display());
        (config, path)
    }

    #[tokio::test]
    async fn test_mock_mode_leaves_no_database_file() {
        let (config, path) = file_config(true);

        let pool = connect_db(&config).await.unwrap();
        let state = AppState::new(config, pool);
        assert!(!state.courses.list_courses().await.unwrap().is_empty());

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_database_mode_creates_file() {
        let (config, path) = file_config(false);

        let pool = connect_db(&config).await.unwrap();
        assert!(path.exists());

        pool.close().await;
        std::fs::remove_file(&path).unwrap();
    }
}
