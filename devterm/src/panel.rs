//! Sidebar panels and color theme.
//!
//! Both are pure UI toggles with no attached data: switching affects which
//! view outputs are shown and nothing else. No state crosses between panels.

use serde::Deserialize;

/// Top-level sidebar panels, mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// The buffer list / file explorer
    #[default]
    Explorer,
    /// The assistant chat surface (content opaque to the core)
    Assistant,
}

impl Panel {
    pub fn toggle(&self) -> Self {
        match self {
            Panel::Explorer => Panel::Assistant,
            Panel::Assistant => Panel::Explorer,
        }
    }

    /// Title label shown above the panel.
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Explorer => "EXPLORER",
            Panel::Assistant => "ASSISTANT",
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_toggle_is_an_involution() {
        assert_eq!(Panel::Explorer.toggle(), Panel::Assistant);
        assert_eq!(Panel::Explorer.toggle().toggle(), Panel::Explorer);
    }

    #[test]
    fn panel_titles() {
        assert_eq!(Panel::Explorer.title(), "EXPLORER");
        assert_eq!(Panel::Assistant.title(), "ASSISTANT");
    }

    #[test]
    fn theme_defaults_dark_and_toggles() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().as_str(), "light");
    }
}
