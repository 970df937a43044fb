//! Collection page state and the calculations behind it.

pub mod chart;
pub mod collection;
pub mod host_data;
pub mod live_price;
pub mod message;
pub mod nav;
pub mod rotation;
pub mod row;
pub mod settings;
pub mod sort;
pub mod subtotal;

#[allow(unused_imports)]
pub use chart::{BarChart, PieChart};
#[allow(unused_imports)]
pub use collection::CollectionState;
#[allow(unused_imports)]
pub use host_data::{HostData, HostDataError};
#[allow(unused_imports)]
pub use live_price::{LivePrice, LivePriceOutcome, LivePriceState};
#[allow(unused_imports)]
pub use message::ContactDetails;
#[allow(unused_imports)]
pub use nav::NavState;
#[allow(unused_imports)]
pub use rotation::Rotation;
#[allow(unused_imports)]
pub use row::{Currency, DivisorOutcome, RawRow, Row, RowId};
#[allow(unused_imports)]
pub use settings::{AppSettings, SettingsForm};
#[allow(unused_imports)]
pub use sort::{SortDirection, SortState};
#[allow(unused_imports)]
pub use subtotal::MailingFee;
