use colored::{Color, Colorize};

/// Wraps text in terminal styles, or passes it through when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer {
    enabled: bool,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }

    pub fn paint_bold(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(color).bold().to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bold().to_string()
    }

    pub fn dim(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.dimmed().to_string()
    }
}
