use std::fmt;

use crate::Environment;
use crate::ResolveError;

pub const DEFAULT_PREVIEW_FLAG_VAR: &str = "NETLIFY";
pub const DEFAULT_BRANCH_VAR: &str = "BRANCH";
pub const DEFAULT_PREVIEW_URL_VAR: &str = "DEPLOY_PRIME_URL";
pub const DEFAULT_PRODUCTION_BRANCH: &str = "main";
pub const DEFAULT_PRODUCTION_URL: &str = "https://ebadblog.com";

/// Where the site is published and how the hosting platform reports it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Deploy {
    pub preview_flag_var: String,
    pub branch_var: String,
    pub preview_url_var: String,
    pub production_branch: String,
    pub production_url: String,
}

impl Default for Deploy {
    fn default() -> Self {
        Self {
            preview_flag_var: DEFAULT_PREVIEW_FLAG_VAR.to_owned(),
            branch_var: DEFAULT_BRANCH_VAR.to_owned(),
            preview_url_var: DEFAULT_PREVIEW_URL_VAR.to_owned(),
            production_branch: DEFAULT_PRODUCTION_BRANCH.to_owned(),
            production_url: DEFAULT_PRODUCTION_URL.to_owned(),
        }
    }
}

impl Deploy {
    /// Work out which deployment context the environment describes.
    pub fn detect(&self, env: &Environment) -> Result<Deployment, ResolveError> {
        if !env.flag(&self.preview_flag_var) {
            log::debug!(
                "`{}` not set, building with a root-relative site URL",
                self.preview_flag_var
            );
            return Ok(Deployment::Local);
        }

        let branch = env.require(&self.branch_var)?.to_owned();
        let deployment = if branch == self.production_branch {
            Deployment::Production { branch }
        } else {
            let url = trim_url(env.require(&self.preview_url_var)?);
            if url.is_empty() {
                return Err(ResolveError::missing(&self.preview_url_var));
            }
            Deployment::Preview {
                branch,
                url: url.to_owned(),
            }
        };
        log::debug!("Detected {deployment}");
        Ok(deployment)
    }

    /// Base URL the generator should prefix absolute links with.
    pub fn site_url(&self, deployment: &Deployment) -> String {
        match deployment {
            Deployment::Local => String::new(),
            Deployment::Preview { url, .. } => url.clone(),
            Deployment::Production { .. } => trim_url(&self.production_url).to_owned(),
        }
    }
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum Deployment {
    /// Not running on the hosting platform.
    Local,
    /// A non-production branch served at a platform-assigned URL.
    Preview { branch: String, url: String },
    Production { branch: String },
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local build"),
            Self::Preview { branch, url } => write!(f, "preview of `{branch}` at {url}"),
            Self::Production { branch } => write!(f, "production build of `{branch}`"),
        }
    }
}
