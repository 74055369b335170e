use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup.
    ///
    /// The connection string is read from `uri` first and `DATABASE_URL` second;
    /// empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let database_url = get("uri").or_else(|| get("DATABASE_URL")).ok_or_else(|| {
            anyhow::anyhow!("Database connection string missing. Set uri or DATABASE_URL in .env")
        })?;

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: get("PORT").unwrap_or_else(|| "3001".into()).parse()?,
            db_max_connections: get("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".into())
                .parse()?,
        })
    }
}
