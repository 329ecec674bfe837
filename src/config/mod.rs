// Configuration layer - bootstrap settings and logging setup

pub mod bootstrap_settings;
pub mod logging;

pub use bootstrap_settings::{BootstrapSettings, ConfigError};
