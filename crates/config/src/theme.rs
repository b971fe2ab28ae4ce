#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    pub edit_links: bool,
    // Order is display order; entries name groups defined in content files and
    // are not checked against them here.
    pub sidebar_group_order: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            edit_links: true,
            sidebar_group_order: vec![
                "getting-started".to_owned(),
                "building-blocks".to_owned(),
                "examples".to_owned(),
            ],
        }
    }
}

impl ThemeConfig {
    /// Display titles for the declared sidebar groups, in declared order.
    pub fn sidebar_group_titles(&self) -> Vec<String> {
        self.sidebar_group_order
            .iter()
            .map(crate::slug::titleize_slug)
            .collect()
    }
}
