use std::collections::BTreeMap;

use crate::ResolveError;

/// Snapshot of the process environment.
///
/// Resolution only ever reads from a snapshot, so it can be driven from tests
/// with a literal map instead of mutating the real process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a variable, treating blank values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, key: &str) -> Result<&str, ResolveError> {
        self.get(key).ok_or_else(|| ResolveError::missing(key))
    }

    /// Interpret a variable as a boolean switch.
    ///
    /// Any non-blank value turns the switch on except the explicit
    /// `0`, `false`, `no` and `off`.
    pub fn flag(&self, key: &str) -> bool {
        let Some(value) = self.get(key) else {
            return false;
        };
        !matches!(
            value.to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        )
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_missing() {
        let env = Environment::new();
        assert_eq!(env.get("BRANCH"), None);
    }

    #[test]
    fn get_blank_is_unset() {
        let env = Environment::new().with("BRANCH", "   ");
        assert_eq!(env.get("BRANCH"), None);
    }

    #[test]
    fn get_trims() {
        let env = Environment::new().with("BRANCH", " main\n");
        assert_eq!(env.get("BRANCH"), Some("main"));
    }

    #[test]
    fn require_reports_name() {
        let env = Environment::new();
        match env.require("DEPLOY_PRIME_URL") {
            Err(ResolveError::MissingEnvironmentVariable { name }) => {
                assert_eq!(name, "DEPLOY_PRIME_URL");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn flag_truthy() {
        for value in ["1", "true", "TRUE", "Yes", "on", " true ", "enabled"] {
            let env = Environment::new().with("NETLIFY", value);
            assert!(env.flag("NETLIFY"), "{value:?}");
        }
    }

    #[test]
    fn flag_falsy() {
        for value in ["", "  ", "0", "false", "False", " OFF ", "no", "off"] {
            let env = Environment::new().with("NETLIFY", value);
            assert!(!env.flag("NETLIFY"), "{value:?}");
        }
        assert!(!Environment::new().flag("NETLIFY"));
    }

    #[test]
    fn from_iter_last_wins() {
        let env: Environment = [("BRANCH", "dev"), ("BRANCH", "main")].into_iter().collect();
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("BRANCH"), Some("main"));
    }
}
