use std::env;
use std::fmt;
use std::path::PathBuf;

/// Error raised when required configuration is absent at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Process-wide settings loaded from the environment at startup
///
/// The token signing secret and the password pepper are required; everything
/// else carries a development default.
pub struct BootstrapSettings {
    database_url: String,
    jwt_secret: String,
    password_pepper: String,
    upload_dir: PathBuf,
    port: String,
    bind_addr: String,
}

impl BootstrapSettings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://logistics.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let password_pepper =
            env::var("PASSWORD_PEPPER").map_err(|_| ConfigError::MissingVar("PASSWORD_PEPPER"))?;

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let bind_addr = format!("0.0.0.0:{}", port);

        Ok(Self {
            database_url,
            jwt_secret,
            password_pepper,
            upload_dir,
            port,
            bind_addr,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .field("upload_dir", &self.upload_dir)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
