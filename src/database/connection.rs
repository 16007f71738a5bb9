use crate::config::Config;
use crate::error::Result;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{ConnectOptions, PgConnection};

/// Connection factory built from the externally supplied database settings.
///
/// Every caller gets its own dedicated connection, opened on demand and
/// closed (or dropped) before the operation returns. There is no pool.
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        // Trusted server certificates skip verification; untrusted demand
        // the full chain.
        let ssl_mode = if config.db_trust_certificate {
            PgSslMode::Prefer
        } else {
            PgSslMode::VerifyFull
        };

        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password)
            .ssl_mode(ssl_mode);

        Self { options }
    }

    pub async fn connect(&self) -> Result<PgConnection> {
        let conn = self.options.connect().await?;
        Ok(conn)
    }
}
