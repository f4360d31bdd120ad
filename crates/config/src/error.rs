use std::fmt;

/// Failure to turn the declarative [`Config`](crate::Config) into a
/// [`SiteConfig`](crate::SiteConfig).
#[derive(Debug)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum ResolveError {
    /// Hosted-preview mode was signaled but a companion variable is absent.
    MissingEnvironmentVariable { name: String },
    /// A slug substitution pattern does not compile.
    InvalidSlugRule {
        pattern: String,
        source: regex::Error,
    },
}

impl ResolveError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingEnvironmentVariable {
            name: name.to_owned(),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnvironmentVariable { name } => {
                write!(f, "missing environment variable `{name}`")
            }
            Self::InvalidSlugRule { pattern, .. } => {
                write!(f, "invalid slug substitution pattern `{pattern}`")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingEnvironmentVariable { .. } => None,
            Self::InvalidSlugRule { source, .. } => Some(source),
        }
    }
}
