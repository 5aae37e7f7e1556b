use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    pub path: String,
}

/// One selectable row in the launcher's result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherItem {
    pub uid: usize,
    pub title: String,
    pub subtitle: String,
    /// Passed back to the launcher's action when the row is chosen
    pub arg: String,
    pub icon: ItemIcon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<LauncherItem>,
}
