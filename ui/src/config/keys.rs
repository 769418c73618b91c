use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_design_picker: Option<char>,

    // Navigation keys
    key_legal: Option<char>,
    key_profile: Option<char>,
    key_down: Option<char>,
    key_up: Option<char>,

    // Call-to-action
    key_open_cta: Option<char>,
}

impl KeyBindingsConfig {
    // Global keys
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn design_picker(&self) -> char {
        self.key_design_picker.unwrap_or('t')
    }

    // Navigation keys
    pub fn legal(&self) -> char {
        self.key_legal.unwrap_or('l')
    }

    pub fn profile(&self) -> char {
        self.key_profile.unwrap_or('p')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    // Call-to-action
    pub fn open_cta(&self) -> char {
        self.key_open_cta.unwrap_or('o')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let keys = KeyBindingsConfig::default();
        assert_eq!(keys.quit(), 'q');
        assert_eq!(keys.design_picker(), 't');
        assert_eq!(keys.legal(), 'l');
        assert_eq!(keys.profile(), 'p');
        assert_eq!(keys.down(), 'j');
        assert_eq!(keys.up(), 'k');
        assert_eq!(keys.open_cta(), 'o');
    }
}
