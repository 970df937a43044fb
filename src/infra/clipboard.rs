use dioxus::prelude::*;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access was rejected")]
    Rejected,
    #[error("clipboard script failed: {0}")]
    Script(String),
}

/// Writes `text` through `navigator.clipboard`.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let script = clipboard_script(text);
    match document::eval(&script).await {
        Ok(serde_json::Value::Bool(true)) => Ok(()),
        Ok(_) => {
            warn!("clipboard write rejected by the page");
            Err(ClipboardError::Rejected)
        }
        Err(err) => {
            warn!("clipboard script failed: {err}");
            Err(ClipboardError::Script(err.to_string()))
        }
    }
}

fn clipboard_script(text: &str) -> String {
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const data = {payload};
        if (!navigator.clipboard || !navigator.clipboard.writeText) {{
            return false;
        }}
        try {{
            await navigator.clipboard.writeText(data);
            return true;
        }} catch (_err) {{
            return false;
        }}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_embedded_as_json_string() {
        let script = clipboard_script("xfer $19.00 to \"Andrew\"\n");
        assert!(script.starts_with(r#"const data = "xfer $19.00 to \"Andrew\"\n";"#));
        assert!(script.contains("navigator.clipboard.writeText(data)"));
    }
}
