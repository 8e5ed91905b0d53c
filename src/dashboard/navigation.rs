use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub key: String,
    pub label: String,
}

/// Side navigation with a single selected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMenu {
    items: Vec<NavItem>,
    selected: String,
}

impl NavigationMenu {
    /// Builds a menu keyed `"1"..` in label order.
    ///
    /// Falls back to the first entry when `selected` names no item.
    #[must_use]
    pub fn new(labels: &[&str], selected: &str) -> Self {
        let items: Vec<NavItem> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| NavItem {
                key: (index + 1).to_string(),
                label: (*label).to_owned(),
            })
            .collect();
        let selected = if items.iter().any(|item| item.key == selected) {
            selected.to_owned()
        } else {
            items.first().map(|item| item.key.clone()).unwrap_or_default()
        };
        Self { items, selected }
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    #[must_use]
    pub fn selected(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.key == self.selected)
    }

    /// Returns `false` and keeps the current selection for unknown keys.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.items.iter().any(|item| item.key == key) {
            return false;
        }
        self.selected = key.to_owned();
        true
    }
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self::new(
            &[
                "Order Supply",
                "Capacity Fulfillment",
                "Service Quality",
                "Gross Margin Trend",
            ],
            "4",
        )
    }
}
