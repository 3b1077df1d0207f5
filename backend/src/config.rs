use std::env;
use dotenv::dotenv;
use serde::Deserialize;
use log::{info, warn};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub level: String,
}

const DEFAULT_BACKEND_URL: &str = "http://0.0.0.0:50002";
const DEFAULT_PORT: u16 = 50002;

impl Config {
    fn parse_backend_url(url: &str) -> (String, u16) {
        // BACKEND_URL looks like "http://localhost:50002"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or("127.0.0.1").to_string();
            let port = parsed_url.port().unwrap_or(DEFAULT_PORT);
            (host, port)
        } else {
            ("127.0.0.1".to_string(), DEFAULT_PORT)
        }
    }

    fn load_env_files() {
        match env::var("ENV_FILE_PATH") {
            Ok(path) if !path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", path);
                dotenv::from_filename(&path).ok();
            }
            _ => {
                dotenv().ok();
                let environment_hint = Self::environment_from_env();
                let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
                if env_file != ".env.development" {
                    let _ = dotenv::from_filename(&env_file);
                }
            }
        }
    }

    fn environment_from_env() -> Environment {
        env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development)
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_env_files();

        let environment = Self::environment_from_env();
        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            environment: environment.clone(),
            server: Self::load_server_config(&environment),
            cors: Self::load_cors_config(&environment),
            logging: Self::load_logging_config(&environment),
        };

        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    fn load_server_config(env: &Environment) -> ServerConfig {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let (host, port) = Self::parse_backend_url(&backend_url);
        let default_workers = match env {
            Environment::Production => 4,
            Environment::Development | Environment::Test => 1,
        };

        ServerConfig {
            // SERVER_HOST takes precedence over the BACKEND_URL host
            host: env::var("SERVER_HOST").unwrap_or(host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(port),
            workers: env::var("BACKEND_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(default_workers),
        }
    }

    fn load_cors_config(env: &Environment) -> CorsConfig {
        let allowed_origins = match env::var("FRONTEND_ORIGINS") {
            Ok(list) => Self::split_origins(&list),
            Err(_) => match env {
                Environment::Production => {
                    warn!("FRONTEND_ORIGINS not set in production, cross-origin requests will be refused");
                    Vec::new()
                }
                Environment::Development | Environment::Test => vec![
                    "http://localhost:50003".to_string(),
                    "http://127.0.0.1:50003".to_string(),
                ],
            },
        };
        CorsConfig { allowed_origins }
    }

    fn split_origins(list: &str) -> Vec<String> {
        list.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Logging settings alone, for initializing the logger before `load`
    pub fn logging_from_env() -> LoggingConfig {
        Self::load_logging_config(&Self::environment_from_env())
    }

    fn load_logging_config(env: &Environment) -> LoggingConfig {
        let fallback = match env {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        };
        LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| fallback.to_string()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }
        if self.server.workers == 0 {
            anyhow::bail!("Worker count cannot be 0");
        }
        if self.is_production()
            && self.cors.allowed_origins.iter().any(|o| o.contains("localhost"))
        {
            anyhow::bail!("Production CORS origins cannot contain 'localhost'");
        }
        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("CORS origins: {:?}", self.cors.allowed_origins);
        info!("Log level: {}", self.logging.level);

        if self.environment == Environment::Development {
            warn!("Running in development mode with in-memory sample data");
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
