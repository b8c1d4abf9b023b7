use crate::constants::{Palette, DARK_PALETTE, LIGHT_PALETTE};
use crate::core::timeline::AccentKey;

/// Resolves palette colors for the active theme. Constructed once in the app
/// root and passed down; components never reach for a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeService {
    dark: bool,
}

impl ThemeService {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn palette(&self) -> &'static Palette {
        if self.dark {
            &DARK_PALETTE
        } else {
            &LIGHT_PALETTE
        }
    }

    pub fn accent(&self, key: AccentKey) -> &'static str {
        self.palette().accent(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_palette() {
        let mut theme = ThemeService::new(false);
        assert_eq!(theme.palette().bg_base, LIGHT_PALETTE.bg_base);
        theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.palette().bg_base, DARK_PALETTE.bg_base);
    }

    #[test]
    fn test_accent_resolution_follows_theme() {
        let light = ThemeService::new(false);
        let dark = ThemeService::new(true);
        assert_ne!(
            light.accent(AccentKey::Work),
            dark.accent(AccentKey::Work)
        );
    }
}
