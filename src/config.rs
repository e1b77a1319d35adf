use std::env;
use std::num::NonZeroU32;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_api_url: String,
    pub bind_addr: String,
    pub ddragon_fallback_version: String,
    pub static_cache_path: String,
    pub language: String,
    pub backend_rate_limit_per_second: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
        const DEFAULT_BACKEND_RATE_LIMIT_PER_SECOND: u32 = 20;
        const DEFAULT_DDRAGON_VERSION: &str = "15.13.1";
        const DEFAULT_LANGUAGE: &str = "en_US";

        let backend_api_url = env::var("BACKEND_API_URL")
            .map_err(|_| AppError::Config("BACKEND_API_URL must be set".into()))?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

        let ddragon_fallback_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        let static_cache_path =
            env::var("STATIC_CACHE_PATH").unwrap_or_else(|_| "./static_cache.db3".into());

        let language = env::var("LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.into());

        let backend_rate_limit_per_second = env::var("BACKEND_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_BACKEND_RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN)
            });

        Ok(Self {
            backend_api_url,
            bind_addr,
            ddragon_fallback_version,
            static_cache_path,
            language,
            backend_rate_limit_per_second,
        })
    }
}
