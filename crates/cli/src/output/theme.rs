//! Color theme for human-readable output

use console::Style;

/// Role of a piece of text, each with a fixed style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    HostMessage,
    Alias,
    Url,
    AccessKey,
    SecretKey,
    Api,
    Error,
}

impl Role {
    fn style(self) -> Style {
        match self {
            Role::HostMessage => Style::new().green(),
            Role::Alias => Style::new().cyan().bold(),
            Role::Url => Style::new().cyan(),
            Role::AccessKey | Role::SecretKey => Style::new().blue(),
            Role::Api => Style::new().yellow(),
            Role::Error => Style::new().red().bold(),
        }
    }
}

/// Applies role styles, or nothing when colors are off
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Theme that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        role.style().force_styling(true).apply_to(text).to_string()
    }
}
