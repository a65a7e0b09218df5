//! Page components

mod collection;
mod home;

pub use collection::CollectionPage;
pub use home::Home;
