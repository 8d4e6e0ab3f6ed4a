/// Configuration management
///
/// All settings come from environment variables (optionally via a `.env`
/// file). `DATABASE_URL` and `JWT_SECRET` are required; startup fails
/// without them.
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    pub database_url: String,
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,
    pub jwt_secret: String,
    /// Base URL used when building share links handed back to clients.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_share_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let config: Config = envy::from_iter(vec![
            (
                "DATABASE_URL".to_string(),
                "postgres://localhost/brain".to_string(),
            ),
            ("JWT_SECRET".to_string(), "secret".to_string()),
        ])
        .expect("config should deserialize");

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.share_base_url, "http://localhost:8080");
    }

    #[test]
    fn missing_required_fields_fail() {
        let result: Result<Config, _> = envy::from_iter(vec![(
            "DATABASE_URL".to_string(),
            "postgres://localhost/brain".to_string(),
        )]);
        assert!(result.is_err());
    }
}
