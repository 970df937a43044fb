//! Client for the collection server's live price lookup.
//!
//! One request per call: no cache, retry or timeout.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{LivePrice, LivePriceOutcome};

const USER_AGENT: &str = concat!("tcg-ledger/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LivePriceError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("price server URL cannot take path segments: {0}")]
    UnsupportedBase(String),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct LivePriceEnvelope {
    #[serde(default)]
    prices: Option<Vec<LivePrice>>,
}

#[derive(Clone)]
pub struct LivePriceClient {
    http: Client,
    base_url: Url,
}

impl LivePriceClient {
    pub fn new(base: &str) -> Result<Self, LivePriceError> {
        let mut base_url = Url::parse(base)?;
        if base_url.cannot_be_a_base() {
            return Err(LivePriceError::UnsupportedBase(base.to_string()));
        }
        // `Url::join` replaces the last path segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// `GET {base}/get_live_price/{key}`.
    pub async fn get_live_price(&self, key: &str) -> Result<LivePriceOutcome, LivePriceError> {
        let url = self.url(key)?;
        info!("requesting live price from {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            info!("live price lookup for {key} returned {status}");
            return Ok(LivePriceOutcome::NotFound);
        }

        let body: serde_json::Value = response.json().await?;
        let outcome = parse_live_prices(body);
        debug!("live price lookup for {key}: {outcome:?}");
        Ok(outcome)
    }

    fn url(&self, key: &str) -> Result<Url, LivePriceError> {
        let mut url = self.base_url.join("get_live_price/")?;
        url.path_segments_mut()
            .map_err(|_| LivePriceError::UnsupportedBase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(key);
        Ok(url)
    }
}

/// Any body without a non-empty `prices` array counts as not found.
pub fn parse_live_prices(body: serde_json::Value) -> LivePriceOutcome {
    match serde_json::from_value::<LivePriceEnvelope>(body) {
        Ok(LivePriceEnvelope {
            prices: Some(prices),
        }) if !prices.is_empty() => LivePriceOutcome::Found(prices),
        _ => LivePriceOutcome::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_price_is_found() {
        let outcome = parse_live_prices(json!({ "prices": [{ "rarity": "R", "price_yen": 500 }] }));
        assert_eq!(
            outcome,
            LivePriceOutcome::Found(vec![LivePrice {
                rarity: "R".into(),
                price_yen: 500.0,
            }])
        );
    }

    #[test]
    fn empty_missing_or_malformed_prices_are_not_found() {
        assert_eq!(parse_live_prices(json!({ "prices": [] })), LivePriceOutcome::NotFound);
        assert_eq!(parse_live_prices(json!({})), LivePriceOutcome::NotFound);
        assert_eq!(parse_live_prices(json!({ "prices": null })), LivePriceOutcome::NotFound);
        assert_eq!(
            parse_live_prices(json!({ "prices": [{ "rarity": "R" }] })),
            LivePriceOutcome::NotFound
        );
        assert_eq!(parse_live_prices(json!("oops")), LivePriceOutcome::NotFound);
    }

    #[test]
    fn url_keeps_base_path_and_encodes_key() {
        let client = LivePriceClient::new("https://cards.example.com/shop/").unwrap();
        assert_eq!(
            client.url("OP01-024").unwrap().as_str(),
            "https://cards.example.com/shop/get_live_price/OP01-024"
        );
        assert_eq!(
            client.url("ST 10/2").unwrap().as_str(),
            "https://cards.example.com/shop/get_live_price/ST%2010%2F2"
        );
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_last_segment() {
        let client = LivePriceClient::new("https://cards.example.com/api").unwrap();
        assert_eq!(
            client.url("OP01-024").unwrap().as_str(),
            "https://cards.example.com/api/get_live_price/OP01-024"
        );

        let root = LivePriceClient::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            root.url("42").unwrap().as_str(),
            "http://127.0.0.1:5000/get_live_price/42"
        );
    }

    #[test]
    fn opaque_base_is_rejected() {
        assert!(matches!(
            LivePriceClient::new("mailto:seller@example.com"),
            Err(LivePriceError::UnsupportedBase(_))
        ));
    }
}
