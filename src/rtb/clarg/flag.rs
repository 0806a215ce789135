const FLAG_PREFIX: &str = "-";

/// A boolean switch matched by the exact token `-name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    key: String,
    found: bool,
    value: bool,
}

impl Flag {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = format!("{}{}", FLAG_PREFIX, name);
        Self {
            name,
            key,
            found: false,
            value: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token that switches this flag on.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.key == token
    }

    pub(crate) fn mark_found(&mut self) {
        self.found = true;
        self.value = true;
    }

    pub(crate) fn reset(&mut self) {
        self.found = false;
        self.value = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_dash_name() {
        let flag = Flag::new("verbose");
        assert_eq!(flag.key(), "-verbose");
        assert!(!flag.found());
        assert!(!flag.value());
    }

    #[test]
    fn matches_exact_token_only() {
        let flag = Flag::new("b");
        assert!(flag.matches("-b"));
        assert!(!flag.matches("-bb"));
        assert!(!flag.matches("b"));
        assert!(!flag.matches("-b=1"));
    }
}
