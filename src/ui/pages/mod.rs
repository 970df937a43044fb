pub mod collection;
pub mod expenses;
pub mod home;
pub mod settings;

pub use collection::CollectionPage;
pub use expenses::ExpensesPage;
pub use home::HomePage;
pub use settings::SettingsPage;
