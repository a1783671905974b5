use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CANDIDATES_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/\
2PACX-1vTAdbdhuieyA-axzb4aLe8c7zdAYXBLPNrIxKRder6j1ZAlj2g4U1k0YzkZbm_dEcSwBik4CJ57FROJ/\
pub?gid=813046237&single=true&output=csv";

const DEFAULT_JOBS_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/\
2PACX-1vSbD6wUrZEt9kuSQpUT2pw0FMOb7h1y8xeX-hDTeiiZUPjtV0ohK_WcFtCSt_4nuxdtn9zqFS8z8aGw/\
pub?gid=116813539&single=true&output=csv";

/// Location of the bundled dashboard page relative to the workspace root.
const DEFAULT_DASHBOARD_PAGE: &str = "services/api/static/index.html";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub sources: SourceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .or_else(|_| env::var("PORT"))
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let dashboard_page = env::var("DASHBOARD_PAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DASHBOARD_PAGE));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let candidates = SourceLocation::parse(
            &env::var("CANDIDATES_CSV_URL")
                .unwrap_or_else(|_| DEFAULT_CANDIDATES_CSV_URL.to_string()),
        )?;
        let jobs = SourceLocation::parse(
            &env::var("JOBS_CSV_URL").unwrap_or_else(|_| DEFAULT_JOBS_CSV_URL.to_string()),
        )?;
        let label = env::var("DATA_SOURCE_LABEL").unwrap_or_else(|_| "Google Sheets".to_string());
        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                dashboard_page,
            },
            telemetry: TelemetryConfig { log_level },
            sources: SourceConfig {
                candidates,
                jobs,
                label,
                fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Static page served at `/`.
    pub dashboard_page: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the candidate roster and the open-jobs table come from.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub candidates: SourceLocation,
    pub jobs: SourceLocation,
    /// Reported as `data_source` when the roster loads.
    pub label: String,
    pub fetch_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    Url(String),
    Path(PathBuf),
}

impl SourceLocation {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptySource);
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{url}"),
            SourceLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidTimeout,
    EmptySource,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidTimeout => {
                write!(f, "FETCH_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::EmptySource => {
                write!(f, "CANDIDATES_CSV_URL and JOBS_CSV_URL must not be blank")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout | ConfigError::EmptySource => {
                None
            }
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "PORT",
            "APP_LOG_LEVEL",
            "CANDIDATES_CSV_URL",
            "JOBS_CSV_URL",
            "DATA_SOURCE_LABEL",
            "FETCH_TIMEOUT_SECS",
            "DASHBOARD_PAGE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.server.dashboard_page,
            PathBuf::from("services/api/static/index.html")
        );
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.sources.label, "Google Sheets");
        assert_eq!(config.sources.fetch_timeout, Duration::from_secs(15));
        assert!(matches!(config.sources.candidates, SourceLocation::Url(_)));
        assert!(matches!(config.sources.jobs, SourceLocation::Url(_)));
    }

    #[test]
    fn default_dashboard_page_ships_with_workspace() {
        let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
        assert!(workspace_root.join(DEFAULT_DASHBOARD_PAGE).is_file());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 5000));
        reset_env();
    }

    #[test]
    fn falls_back_to_bare_port_variable() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PORT", "8080");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8080);

        env::set_var("APP_PORT", "9090");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9090);
        reset_env();
    }

    #[test]
    fn rejects_invalid_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FETCH_TIMEOUT_SECS", "soon");
        let error = AppConfig::load().expect_err("timeout must be numeric");
        assert!(matches!(error, ConfigError::InvalidTimeout));
        reset_env();
    }

    #[test]
    fn source_location_distinguishes_urls_and_paths() {
        assert_eq!(
            SourceLocation::parse(" https://example.com/export.csv ").expect("url parses"),
            SourceLocation::Url("https://example.com/export.csv".to_string())
        );
        assert_eq!(
            SourceLocation::parse("fixtures/roster.csv").expect("path parses"),
            SourceLocation::Path(PathBuf::from("fixtures/roster.csv"))
        );
        assert!(matches!(
            SourceLocation::parse("   "),
            Err(ConfigError::EmptySource)
        ));
    }
}
