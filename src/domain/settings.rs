use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use super::{
    message::ContactDetails, rotation::DEFAULT_ROTATION_INTERVAL, row::parse_number,
    subtotal::DEFAULT_MAILING_FEE,
};

pub const DEFAULT_PRICE_SERVER: &str = "http://127.0.0.1:5000/";

/// User-tunable constants, persisted as `settings.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL serving `/get_live_price/{id}`.
    pub price_server_url: String,
    pub mailing_fee: f64,
    pub contact: ContactDetails,
    pub rotation_interval_secs: u64,
    /// Optional JSON snapshot used instead of the page globals.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            price_server_url: DEFAULT_PRICE_SERVER.to_string(),
            mailing_fee: DEFAULT_MAILING_FEE,
            contact: ContactDetails::default(),
            rotation_interval_secs: DEFAULT_ROTATION_INTERVAL.as_secs(),
            snapshot_path: None,
        }
    }
}

impl AppSettings {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_secs(self.rotation_interval_secs.max(1))
    }
}

/// Raw text of the settings form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
    pub price_server_url: String,
    pub mailing_fee: String,
    pub contact_phone: String,
    pub contact_name: String,
    pub rotation_interval_secs: String,
    pub snapshot_path: String,
}

impl From<&AppSettings> for SettingsForm {
    fn from(settings: &AppSettings) -> Self {
        Self {
            price_server_url: settings.price_server_url.clone(),
            mailing_fee: format!("{:.2}", settings.mailing_fee),
            contact_phone: settings.contact.phone.clone(),
            contact_name: settings.contact.name.clone(),
            rotation_interval_secs: settings.rotation_interval_secs.to_string(),
            snapshot_path: settings
                .snapshot_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}

impl SettingsForm {
    pub fn parse(&self) -> Result<AppSettings, String> {
        let price_server_url = self.price_server_url.trim();
        let parsed_url = url::Url::parse(price_server_url)
            .map_err(|_| "Price server must be an absolute URL.".to_string())?;
        if parsed_url.cannot_be_a_base() {
            return Err("Price server must be an http(s) URL.".to_string());
        }

        let mailing_fee = parse_number(&self.mailing_fee)
            .filter(|fee| *fee >= 0.0)
            .ok_or_else(|| "Mailing fee must be a non-negative number.".to_string())?;

        let phone = self.contact_phone.trim();
        let name = self.contact_name.trim();
        if phone.is_empty() || name.is_empty() {
            return Err("Contact number and name are required.".to_string());
        }

        let rotation_interval_secs = self
            .rotation_interval_secs
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| "Rotation interval must be a whole number of seconds.".to_string())?;

        let snapshot = self.snapshot_path.trim();
        Ok(AppSettings {
            price_server_url: price_server_url.to_string(),
            mailing_fee,
            contact: ContactDetails {
                phone: phone.to_string(),
                name: name.to_string(),
            },
            rotation_interval_secs,
            snapshot_path: (!snapshot.is_empty()).then(|| PathBuf::from(snapshot)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_form() {
        let defaults = AppSettings::default();
        let form = SettingsForm::from(&defaults);
        assert_eq!(form.mailing_fee, "3.50");
        assert_eq!(form.parse(), Ok(defaults));
    }

    #[test]
    fn partial_settings_file_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "mailing_fee": 4.0 }"#).expect("settings should parse");
        assert_eq!(settings.mailing_fee, 4.0);
        assert_eq!(settings.contact, ContactDetails::default());
        assert_eq!(settings.rotation_interval(), Duration::from_secs(5));
    }

    #[test]
    fn form_rejects_bad_input() {
        let mut form = SettingsForm::from(&AppSettings::default());
        form.mailing_fee = "-1".into();
        assert!(form.parse().is_err());

        let mut form = SettingsForm::from(&AppSettings::default());
        form.price_server_url = "not a url".into();
        assert!(form.parse().is_err());

        let mut form = SettingsForm::from(&AppSettings::default());
        form.contact_name = "  ".into();
        assert!(form.parse().is_err());

        let mut form = SettingsForm::from(&AppSettings::default());
        form.rotation_interval_secs = "0".into();
        assert!(form.parse().is_err());
    }

    #[test]
    fn form_trims_base_url_and_snapshot() {
        let mut form = SettingsForm::from(&AppSettings::default());
        form.price_server_url = " https://cards.example.com/api ".into();
        form.snapshot_path = " /tmp/collection.json ".into();
        let settings = form.parse().unwrap();
        assert_eq!(settings.price_server_url, "https://cards.example.com/api");
        assert_eq!(
            settings.snapshot_path,
            Some(PathBuf::from("/tmp/collection.json"))
        );
    }
}
