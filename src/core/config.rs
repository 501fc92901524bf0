use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub region_api: RegionApiConfig,
    pub postal_api: PostalApiConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Region hierarchy API (api-wilayah-indonesia)
#[derive(Debug, Clone)]
pub struct RegionApiConfig {
    pub base_url: String,
    /// Appended to every list path, e.g. ".json" for the static dataset
    pub path_suffix: String,
    pub timeout: Duration,
}

/// Postal code search API (kodepos)
#[derive(Debug, Clone)]
pub struct PostalApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// In-memory address sessions
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for longer than this are dropped
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            region_api: RegionApiConfig::from_env()?,
            postal_api: PostalApiConfig::from_env()?,
            sessions: SessionConfig::from_env()?,
        })
    }
}

fn secs_from_env(key: &str, default: u64) -> Result<Duration, String> {
    let secs = env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .map_err(|_| format!("{} must be a valid number", key))?;
    Ok(Duration::from_secs(secs))
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Wilayah Kodepos API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Indonesian region selection and postal code lookup".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl RegionApiConfig {
    const DEFAULT_BASE_URL: &'static str = "https://www.emsifa.com/api-wilayah-indonesia/api";
    const DEFAULT_PATH_SUFFIX: &'static str = ".json";
    const DEFAULT_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("REGION_API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        // An explicitly empty suffix is allowed (for APIs without extensions)
        let path_suffix = env::var("REGION_API_PATH_SUFFIX")
            .unwrap_or_else(|_| Self::DEFAULT_PATH_SUFFIX.to_string());

        let timeout = secs_from_env("REGION_API_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            path_suffix,
            timeout,
        })
    }
}

impl PostalApiConfig {
    const DEFAULT_BASE_URL: &'static str = "https://kodepos.vercel.app";
    const DEFAULT_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("POSTAL_API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let timeout = secs_from_env("POSTAL_API_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self { base_url, timeout })
    }
}

impl SessionConfig {
    const DEFAULT_IDLE_TTL_SECS: u64 = 1800; // 30 minutes
    const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let idle_ttl = secs_from_env("ADDRESS_SESSION_IDLE_TTL_SECS", Self::DEFAULT_IDLE_TTL_SECS)?;
        let sweep_interval = secs_from_env(
            "ADDRESS_SESSION_SWEEP_INTERVAL_SECS",
            Self::DEFAULT_SWEEP_INTERVAL_SECS,
        )?;

        if sweep_interval.is_zero() {
            return Err("ADDRESS_SESSION_SWEEP_INTERVAL_SECS must be greater than 0".to_string());
        }

        Ok(Self {
            idle_ttl,
            sweep_interval,
        })
    }
}
