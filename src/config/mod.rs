//! 生成バイナリの設定管理を行うモジュール

/// Settings file loader
mod loader;
/// Settings types
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_settings,
};
pub use types::{
    ConfigError,
    GeneratorSettings,
};
