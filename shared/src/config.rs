use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("EHOTELS_DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("EHOTELS_DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            username: std::env::var("EHOTELS_DB_USER")?,
            password: std::env::var("EHOTELS_DB_PASSWORD")?,
            database: std::env::var("EHOTELS_DB_NAME").unwrap_or_else(|_| "ehotels".into()),
        };
        Ok(Self { database })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}
