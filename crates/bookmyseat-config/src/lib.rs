pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, DEFAULT_PAGE_SIZE, LoggingConfig, Profile, ReviewOptions, ServicesConfig, TracingOptions};
pub use paths::{config_dir_override, PathManager};
