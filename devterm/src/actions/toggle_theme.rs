//! Toggle the color theme

use crate::Terminal;
use tracing::debug;

impl Terminal {
    /// Flip between dark and light.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.as_str(), "theme switched");
    }
}

#[cfg(test)]
mod tests {
    use crate::{Terminal, Theme};

    #[test]
    fn theme_toggles_and_shows_in_snapshot() {
        let mut term = Terminal::test();
        assert_eq!(term.theme(), Theme::Dark);
        term.toggle_theme();
        assert_eq!(term.snapshot().theme, Theme::Light);
    }
}
