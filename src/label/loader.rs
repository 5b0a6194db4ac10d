//! ラベルのシードファイル読み込み

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use super::Label;

/// Defines errors that may occur while loading label records.
#[derive(Error, Debug)]
pub enum LabelError {
    /// Error when failing to read the seed file
    #[error("Failed to read label file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when failing to parse the seed file
    #[error("Failed to parse label file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the full label set from a JSON seed file.
///
/// 重複したレコードは 1 件に畳まれる
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_labels(path: &Path) -> Result<HashSet<Label>, LabelError> {
    tracing::debug!("Loading labels from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let labels: HashSet<Label> = serde_json::from_str(&content)?;

    Ok(labels)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_labels`: camelCase キーの JSON 配列を読み込める
    #[rstest]
    fn test_load_labels_from_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        fs::write(
            &path,
            r#"[
                {"labelId": "greeting", "labelKrNm": "인사", "labelEngNm": "Greeting"},
                {"labelId": "farewell", "labelKrNm": "작별", "labelEngNm": "Farewell"}
            ]"#,
        )
        .unwrap();

        let labels = load_labels(&path).unwrap();

        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&Label {
            label_id: "greeting".to_string(),
            label_kr_nm: "인사".to_string(),
            label_eng_nm: "Greeting".to_string(),
        }));
    }

    /// `load_labels`: 重複レコードは 1 件になる
    #[rstest]
    fn test_load_labels_collapses_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        fs::write(
            &path,
            r#"[
                {"labelId": "greeting", "labelKrNm": "인사", "labelEngNm": "Greeting"},
                {"labelId": "greeting", "labelKrNm": "인사", "labelEngNm": "Greeting"}
            ]"#,
        )
        .unwrap();

        let labels = load_labels(&path).unwrap();

        assert_eq!(labels.len(), 1);
    }

    /// `load_labels`: ファイルが無ければ Io エラー
    #[rstest]
    fn test_load_labels_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_labels(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(LabelError::Io(_))));
    }

    /// `load_labels`: 壊れた JSON は Parse エラー
    #[rstest]
    fn test_load_labels_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        fs::write(&path, "not json").unwrap();

        let result = load_labels(&path);

        assert!(matches!(result, Err(LabelError::Parse(_))));
    }
}
