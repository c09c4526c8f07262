use std::env;
use std::path::PathBuf;

/// Runtime settings, read once at startup. Every value has a default so the
/// service starts with no environment configured at all.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("hiring.sqlite"));

        Config {
            host,
            port,
            database_path,
        }
    }
}
