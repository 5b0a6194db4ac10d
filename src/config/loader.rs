//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    GeneratorSettings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".label-bundle.json";

/// Loads the settings from `<root>/.label-bundle.json`.
///
/// 設定ファイルが無い場合はデフォルト設定を返す
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(root: &Path) -> Result<GeneratorSettings, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(GeneratorSettings::default());
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: GeneratorSettings = serde_json::from_str(&content)?;
    settings.validate()?;

    Ok(settings)
}
