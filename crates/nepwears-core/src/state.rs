//! Navigation bar state and the snapshot handed to the render surface

use crate::collections::{
    visible_collections, CollectionItem, CollectionsStatus, DEFAULT_COLLECTION_MENU_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Which expandable panel is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropdownId {
    /// Desktop "Shop By Collection" (hover)
    Shop,
    /// Mobile "Shop" submenu (tap)
    MobileShop,
}

impl DropdownId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownId::Shop => "shop",
            DropdownId::MobileShop => "mobile-shop",
        }
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI element that toggled the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Hamburger in the header
    MenuButton,
    /// Close button inside the menu
    CloseButton,
    /// Backdrop behind the menu
    Overlay,
    /// A link inside the menu
    NavigationLink,
}

/// Interactive state of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavState {
    pub mobile_menu_open: bool,
    pub active_dropdown: Option<DropdownId>,
    /// Page scrolled away from the top
    pub scrolled: bool,
}

impl NavState {
    /// Close `id` if it is the open panel, otherwise make it the open panel
    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        self.active_dropdown = if self.active_dropdown == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn is_dropdown_open(&self, id: DropdownId) -> bool {
        self.active_dropdown == Some(id)
    }
}

/// Everything the render surface needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub state: NavState,
    pub collections: Vec<CollectionItem>,
    pub collections_status: CollectionsStatus,
    pub collection_menu_limit: usize,
}

impl NavSnapshot {
    /// Collections a menu lists, capped and in provider order
    ///
    /// Never more than `DEFAULT_COLLECTION_MENU_LIMIT`, whatever the configured limit.
    pub fn visible_collections(&self) -> &[CollectionItem] {
        let limit = self
            .collection_menu_limit
            .min(DEFAULT_COLLECTION_MENU_LIMIT);
        visible_collections(&self.collections, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = NavState::default();
        assert!(!state.mobile_menu_open);
        assert_eq!(state.active_dropdown, None);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_toggle_dropdown_flips_same_identity() {
        let mut state = NavState::default();
        state.toggle_dropdown(DropdownId::Shop);
        assert!(state.is_dropdown_open(DropdownId::Shop));
        state.toggle_dropdown(DropdownId::Shop);
        assert_eq!(state.active_dropdown, None);
    }

    #[test]
    fn test_toggle_dropdown_replaces_other_identity() {
        let mut state = NavState::default();
        state.toggle_dropdown(DropdownId::Shop);
        state.toggle_dropdown(DropdownId::MobileShop);
        assert_eq!(state.active_dropdown, Some(DropdownId::MobileShop));
        assert!(!state.is_dropdown_open(DropdownId::Shop));
    }

    #[test]
    fn test_dropdown_id_wire_names() {
        assert_eq!(
            serde_json::to_string(&DropdownId::MobileShop).unwrap(),
            r#""mobile-shop""#
        );
        assert_eq!(DropdownId::Shop.to_string(), "shop");
    }
}
