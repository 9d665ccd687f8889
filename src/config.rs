use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub pool_name: String,
    pub pool_size: u32,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_host = env::var("DBHOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let db_user = env::var("DBUSER").unwrap_or_else(|_| "postgres".to_string());
        let db_password = env::var("DBPASS").unwrap_or_else(|_| "postgres".to_string());
        let db_name = env::var("DBNAME").unwrap_or_else(|_| "elegancechocolat".to_string());
        let db_port = env::var("DBPORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5432);
        let pool_name = env::var("DBPOOLNAME").unwrap_or_else(|_| "mypool".to_string());
        let pool_size = env::var("DBPOOLSIZE")
            .ok()
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(5);
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        Self {
            db_host,
            db_user,
            db_password,
            db_name,
            db_port,
            pool_name,
            pool_size,
            host,
            port,
        }
    }
}
