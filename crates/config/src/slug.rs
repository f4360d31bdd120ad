use crate::ResolveError;

/// One `(pattern, replacement)` step of slug derivation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct SlugRule {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

impl SlugRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered slug substitutions. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Slug {
    pub substitutions: Vec<SlugRule>,
}

impl Default for Slug {
    fn default() -> Self {
        Self {
            substitutions: vec![
                // whitespace is `\s` plus the `\x1c`-`\x1f` information separators
                // drop everything but word characters, whitespace, `+` and `-`
                SlugRule::new(r"[^\w\s\x1c-\x1f+-]", ""),
                SlugRule::new(r"\A[\s\x1c-\x1f]*", ""),
                SlugRule::new(r"[\s\x1c-\x1f]*\z", ""),
                SlugRule::new(r"[\s\x1c-\x1f]+", "-"),
            ],
        }
    }
}

impl Slug {
    pub fn compile(&self) -> Result<Slugifier, ResolveError> {
        let rules = self
            .substitutions
            .iter()
            .map(|rule| {
                let regex =
                    regex::Regex::new(&rule.pattern).map_err(|e| ResolveError::InvalidSlugRule {
                        pattern: rule.pattern.clone(),
                        source: e,
                    })?;
                Ok((regex, rule.replacement.clone()))
            })
            .collect::<Result<Vec<_>, ResolveError>>()?;
        Ok(Slugifier { rules })
    }
}

/// Compiled form of [`Slug`].
#[derive(Debug, Clone)]
pub struct Slugifier {
    rules: Vec<(regex::Regex, String)>,
}

impl Slugifier {
    /// Create a slug for a content title.
    pub fn slugify<S: AsRef<str>>(&self, title: S) -> String {
        self.slugify_str(title.as_ref())
    }

    fn slugify_str(&self, title: &str) -> String {
        self.rules
            .iter()
            .fold(title.to_owned(), |acc, (regex, replacement)| {
                regex
                    .replace_all(&acc, regex::NoExpand(replacement.as_str()))
                    .into_owned()
            })
    }
}

#[cfg(test)]
mod test_slug {
    use super::*;

    fn default_slugifier() -> Slugifier {
        Slug::default().compile().unwrap()
    }

    #[test]
    fn slugify_title() {
        let actual = default_slugifier().slugify("  Hello, World!  ");
        assert_eq!(actual, "Hello-World");
    }

    #[test]
    fn slugify_steps() {
        let rules = Slug::default().substitutions;
        let mut input = "  Hello, World!  ".to_owned();
        let expected = ["  Hello World  ", "Hello World  ", "Hello World", "Hello-World"];
        for (rule, expected) in rules.iter().zip(expected) {
            let single = Slug {
                substitutions: vec![rule.clone()],
            }
            .compile()
            .unwrap();
            input = single.slugify(&input);
            assert_eq!(input, expected);
        }
    }

    #[test]
    fn slugify_errno_title() {
        let actual = default_slugifier().slugify("EBADF: what's a bad file descriptor?");
        assert_eq!(actual, "EBADF-whats-a-bad-file-descriptor");
    }

    #[test]
    fn slugify_keeps_plus_and_dash() {
        let actual = default_slugifier().slugify("C++ and   x86-64");
        assert_eq!(actual, "C++-and-x86-64");
    }

    #[test]
    fn slugify_unicode_words() {
        let actual = default_slugifier().slugify("Glückert über  Æneid");
        assert_eq!(actual, "Glückert-über-Æneid");
    }

    #[test]
    fn slugify_information_separators() {
        let slugifier = default_slugifier();
        assert_eq!(slugifier.slugify("a\u{1c}b"), "a-b");
        assert_eq!(slugifier.slugify("\u{1f} a \u{1d}b\u{1e}"), "a-b");
    }

    #[test]
    fn slugify_blank() {
        assert_eq!(default_slugifier().slugify(" \t!? \n"), "");
    }

    #[test]
    fn slugify_order_matters() {
        let mut substitutions = Slug::default().substitutions;
        substitutions.rotate_left(3);
        let reordered = Slug { substitutions }.compile().unwrap();
        assert_eq!(reordered.slugify("  Hello, World!  "), "-Hello-World-");
    }

    #[test]
    fn slugify_replacement_is_literal() {
        let slugifier = Slug {
            substitutions: vec![SlugRule::new(r"\s+", "$1")],
        }
        .compile()
        .unwrap();
        assert_eq!(slugifier.slugify("a b"), "a$1b");
    }

    #[test]
    fn compile_rejects_invalid_pattern() {
        let slug = Slug {
            substitutions: vec![SlugRule::new("(unclosed", "")],
        };
        match slug.compile() {
            Err(ResolveError::InvalidSlugRule { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    proptest::proptest! {
        #[test]
        fn slugify_idempotent(title in ".*") {
            let slugifier = default_slugifier();
            let once = slugifier.slugify(&title);
            let twice = slugifier.slugify(&once);
            proptest::prop_assert_eq!(once, twice);
        }

        #[test]
        fn slugify_has_no_whitespace(title in ".*") {
            let slug = default_slugifier().slugify(&title);
            proptest::prop_assert!(!slug.contains(char::is_whitespace));
        }
    }
}
