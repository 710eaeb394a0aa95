//! Server configuration
//!
//! Everything comes from environment variables (with `.env` support via
//! dotenv in main) and falls back to development defaults.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for runtime data (database, logs)
    pub work_dir: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Log filter ("info", "sala_server=debug", ...)
    pub log_level: String,
    /// Log file directory; None logs to stdout only
    pub log_dir: Option<String>,
    /// "development" or "production"
    pub environment: String,
    /// HS256 signing secret
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let work_dir = env::var("SALA_WORK_DIR").unwrap_or_else(|_| "./sala_data".to_string());
        let http_port = env::var("SALA_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let log_level = env::var("SALA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_dir = env::var("SALA_LOG_DIR").ok();
        let environment =
            env::var("SALA_ENV").unwrap_or_else(|_| "development".to_string());
        let jwt_secret = env::var("SALA_JWT_SECRET")
            .unwrap_or_else(|_| "sala-dev-secret-change-in-production".to_string());

        Self {
            work_dir,
            http_port,
            log_level,
            log_dir,
            environment,
            jwt_secret,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Create the work directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        if let Some(log_dir) = &self.log_dir {
            std::fs::create_dir_all(log_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = Config {
            work_dir: "./sala_data".to_string(),
            http_port: 8080,
            log_level: "info".to_string(),
            log_dir: None,
            environment: "development".to_string(),
            jwt_secret: "x".to_string(),
        };
        assert!(!config.is_production());
        assert_eq!(
            config.database_dir(),
            PathBuf::from("./sala_data/database")
        );
    }
}
