pub mod clipboard;
pub mod host;
pub mod live_price;
