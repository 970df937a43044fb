pub const APP_NAME: &str = "TCG Ledger";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// `git describe` output captured by `build.rs`, absent outside a checkout.
pub const GIT_DESCRIBE: Option<&str> = option_env!("TCG_LEDGER_GIT_DESCRIBE");

pub fn version_label() -> String {
    GIT_DESCRIBE.map_or_else(|| format!("v{APP_VERSION}"), str::to_string)
}

pub fn window_title() -> String {
    format!("{APP_NAME} {}", version_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_carries_name_and_version() {
        let title = window_title();
        assert!(title.starts_with("TCG Ledger "));
        assert!(title.ends_with(&version_label()));
    }
}
