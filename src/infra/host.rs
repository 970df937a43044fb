//! Loads the collection data the page was rendered with.

use std::{fs, path::Path};

use dioxus::prelude::*;
use tracing::info;

use crate::domain::{AppSettings, HostData, HostDataError};

/// Globals the server template defines; any of them may be missing.
const PAGE_GLOBALS_SCRIPT: &str = r#"
const pick = (name) => (typeof window[name] !== 'undefined' ? window[name] : null);
return {
    cardNames: pick('cardNames'),
    cardValues: pick('cardValues'),
    expenseLabels: pick('expenseLabels'),
    expenseValues: pick('expenseValues'),
    collectionRows: pick('collectionRows'),
    rotatingImages: pick('rotatingImages'),
};
"#;

pub async fn load_host_data(settings: &AppSettings) -> Result<HostData, HostDataError> {
    let data = match settings.snapshot_path.as_deref() {
        Some(path) => {
            info!("loading collection snapshot from {}", path.display());
            read_snapshot(path)?
        }
        None => {
            let value = document::eval(PAGE_GLOBALS_SCRIPT)
                .await
                .map_err(|err| HostDataError::Eval(err.to_string()))?;
            HostData::from_value(value)?
        }
    };

    info!(
        "host data: {} rows, {} chart cards, {} expense categories, {} rotating images",
        data.rows.len(),
        data.card_names.len(),
        data.expense_labels.len(),
        data.rotating_images.len()
    );
    Ok(data)
}

pub fn read_snapshot(path: &Path) -> Result<HostData, HostDataError> {
    let text = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    HostData::from_value(value)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_test_file(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tcg-ledger-{prefix}-{nanos}.json"))
    }

    #[test]
    fn snapshot_file_is_parsed() {
        let path = unique_test_file("snapshot");
        fs::write(
            &path,
            r#"{ "cardNames": ["Luffy"], "cardValues": [12.5], "collectionRows": [{ "id": 1 }] }"#,
        )
        .expect("should write snapshot");

        let data = read_snapshot(&path).expect("snapshot should load");
        assert_eq!(data.card_names, vec!["Luffy".to_string()]);
        assert_eq!(data.card_values, vec![12.5]);
        assert_eq!(data.rows.len(), 1);

        fs::remove_file(&path).expect("should cleanup snapshot");
    }

    #[test]
    fn missing_or_invalid_snapshot_is_reported() {
        let path = unique_test_file("missing");
        assert!(matches!(read_snapshot(&path), Err(HostDataError::Io(_))));

        let path = unique_test_file("invalid");
        fs::write(&path, "{ not json").expect("should write snapshot");
        assert!(matches!(read_snapshot(&path), Err(HostDataError::Json(_))));
        fs::remove_file(&path).expect("should cleanup snapshot");
    }
}
