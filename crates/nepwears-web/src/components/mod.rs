//! Leptos UI components

mod coming_soon;
mod hero;
mod navbar;

pub use coming_soon::ComingSoon;
pub use hero::Hero;
pub use navbar::Navbar;
