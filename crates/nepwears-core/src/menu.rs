//! Static navigation links

/// A fixed navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// First entry of every collections menu
pub const SHOP_ALL: NavLink = NavLink::new("Shop All", "/product");

/// Desktop header links after the "Shop By Collection" dropdown
pub const DESKTOP_LINKS: &[NavLink] = &[
    NavLink::new("Best Sellers", "/best-sellers"),
    NavLink::new("Returns & Exchanges", "/returns"),
];

/// Mobile menu links after the "Shop" submenu
pub const MOBILE_LINKS: &[NavLink] = &[
    NavLink::new("Best Sellers", "/best-sellers"),
    NavLink::new("New Arrivals", "/new-arrivals"),
    NavLink::new("Return and Exchanges", "/returns"),
    NavLink::new("About Us", "/about"),
];

/// Bottom of the mobile menu
pub const MOBILE_FOOTER_LINKS: &[NavLink] = &[
    NavLink::new("Account", "/login"),
    NavLink::new("Contact", "/contact"),
];

pub const ACCOUNT: NavLink = NavLink::new("Account", "/login");
pub const SEARCH: NavLink = NavLink::new("Search", "/search");
pub const CART: NavLink = NavLink::new("Shopping Cart", "/cart");

/// Route of a collection page
pub fn collection_href(slug: &str) -> String {
    format!("/{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_href() {
        assert_eq!(collection_href("old-money-polos"), "/old-money-polos");
    }
}
