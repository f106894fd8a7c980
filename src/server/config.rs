use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::auth::AccessPolicy,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_CORS_ALLOWED_DOMAIN: &str = "university-dashboard-pi.vercel.app";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Frontend domain; the domain itself and its subdomains pass CORS over HTTPS.
    pub cors_allowed_domain: String,

    /// Policy applied to the aggregate report routes.
    pub report_access: AccessPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let report_access = match lookup("REPORT_ACCESS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "REPORT_ACCESS".to_string(),
                value,
            })?,
            None => AccessPolicy::Public,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            cors_allowed_domain: lookup("CORS_ALLOWED_DOMAIN")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_DOMAIN.to_string()),
            report_access,
        })
    }
}
