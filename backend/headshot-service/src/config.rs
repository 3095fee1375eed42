/// Configuration management for headshot-service
///
/// Loads configuration from environment variables with sensible defaults.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub upstream: UpstreamConfig,
    pub fetch: FetchConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list; "*" allows any origin
    pub allowed_origins: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpstreamConfig {
    pub roster_base_url: String,
    pub search_base_url: String,
    pub image_base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FetchConfig {
    /// Per-attempt timeout for image candidates, in seconds
    pub timeout_secs: u64,
    /// Timeout for roster and search calls, in seconds
    pub roster_timeout_secs: u64,
    /// Concurrent image fetches per batch
    pub concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("HEADSHOT_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("HEADSHOT_SERVICE_PORT")
                    .unwrap_or_else(|_| "8086".to_string())
                    .parse()
                    .unwrap_or(8086),
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            upstream: UpstreamConfig {
                roster_base_url: std::env::var("ROSTER_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api-web.nhle.com/v1".to_string()),
                search_base_url: std::env::var("PLAYER_SEARCH_BASE_URL")
                    .unwrap_or_else(|_| "https://search.d3.nhle.com/api/v1".to_string()),
                image_base_url: std::env::var("IMAGE_HOST_BASE_URL")
                    .unwrap_or_else(|_| "https://assets.nhle.com/mugs/nhl".to_string()),
            },
            fetch: FetchConfig {
                timeout_secs: std::env::var("IMAGE_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
                roster_timeout_secs: std::env::var("ROSTER_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .unwrap_or(8),
                concurrency: std::env::var("IMAGE_FETCH_CONCURRENCY")
                    .unwrap_or_else(|_| "6".to_string())
                    .parse()
                    .unwrap_or(6),
            },
        })
    }
}
