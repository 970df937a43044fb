use serde::Deserialize;

use super::row::format_yen;

pub const NOT_FOUND_TEXT: &str = "No live price found.";
pub const FAILED_TEXT: &str = "Error fetching price.";

/// One marketplace quote for a card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LivePrice {
    pub rarity: String,
    pub price_yen: f64,
}

impl LivePrice {
    pub fn label(&self) -> String {
        format!("{}: ¥{}", self.rarity, format_yen(self.price_yen))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LivePriceOutcome {
    Found(Vec<LivePrice>),
    NotFound,
}

/// Lifecycle of one row's live price button. Terminal states never change.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LivePriceState {
    #[default]
    Idle,
    Fetching,
    Rendered(Vec<LivePrice>),
    NotFound,
    Failed,
}

impl LivePriceState {
    /// Moves `Idle` to `Fetching`; any other state refuses.
    pub fn begin(&mut self) -> bool {
        if matches!(self, LivePriceState::Idle) {
            *self = LivePriceState::Fetching;
            true
        } else {
            false
        }
    }

    /// Settles an in-flight request. Ignored unless currently fetching.
    pub fn resolve<E>(&mut self, result: Result<LivePriceOutcome, E>) {
        if !matches!(self, LivePriceState::Fetching) {
            return;
        }
        *self = match result {
            Ok(LivePriceOutcome::Found(prices)) if !prices.is_empty() => {
                LivePriceState::Rendered(prices)
            }
            Ok(_) => LivePriceState::NotFound,
            Err(_) => LivePriceState::Failed,
        };
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LivePriceState::Rendered(_) | LivePriceState::NotFound | LivePriceState::Failed
        )
    }

    pub fn button_visible(&self) -> bool {
        !self.is_terminal()
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            LivePriceState::Fetching => "Fetching...",
            _ => "Get Live Price",
        }
    }

    /// Lines to render below the (hidden) button.
    pub fn lines(&self) -> Vec<String> {
        match self {
            LivePriceState::Rendered(prices) => prices.iter().map(LivePrice::label).collect(),
            _ => Vec::new(),
        }
    }

    pub fn error_text(&self) -> Option<&'static str> {
        match self {
            LivePriceState::NotFound => Some(NOT_FOUND_TEXT),
            LivePriceState::Failed => Some(FAILED_TEXT),
            _ => None,
        }
    }
}
