use crate::auth::util::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use qr_protocol::Secret;
use std::net::SocketAddr;

/// Development fallback secrets from before secrets became
/// mandatory configuration. A deployment still running on one of
/// them is misconfigured and must refuse to start instead of
/// silently issuing forgeable tickets.
const LEGACY_DEV_SECRETS: &[&str] = &[
    "sunnysplash-qr-secret-2025",
    "sunnysplash-payment-secret-2025",
];

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    /// Park identifier embedded in every signed QR payload.
    pub park: String,

    pub qr_secret: Secret,
    pub payment_secret: Secret,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("SUNNY_SPLASH_GATE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("SUNNY_SPLASH_GATE_LOG_FILENAME")?;
        let bind_address = Self::env_var("SUNNY_SPLASH_GATE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("SUNNY_SPLASH_GATE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("SUNNY_SPLASH_GATE_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("SUNNY_SPLASH_GATE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("SUNNY_SPLASH_GATE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "SUNNY_SPLASH_GATE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("SUNNY_SPLASH_GATE_JWT_KEY")?)?;
        let park = Self::env_var("SUNNY_SPLASH_GATE_PARK_ID")?;
        let qr_secret = Self::secret_var("SUNNY_SPLASH_GATE_QR_SECRET")?;
        let payment_secret = Self::secret_var("SUNNY_SPLASH_GATE_PAYMENT_SECRET")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            park,
            qr_secret,
            payment_secret,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn secret_var(name: &'static str) -> anyhow::Result<Secret> {
        let value = Self::env_var(name)?;

        if LEGACY_DEV_SECRETS.contains(&value.as_str()) {
            return Err(anyhow!(
                "environment variable {name} is set to a well known development default"
            ));
        }

        Secret::new(value).map_err(|err| anyhow!("environment variable {name}: {err}"))
    }
}
