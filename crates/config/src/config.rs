use std::fmt;
use std::path;

use super::*;

pub const CONFIG_FILE_NAME: &str = "_ebadblog.yml";

/// Declarative site settings, before the deployment environment is applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub site: Site,
    pub theme: Theme,
    pub content: RelPath,
    pub static_paths: Vec<RelPath>,
    pub default_pagination: usize,
    pub feeds: Feeds,
    pub markdown: Markdown,
    pub slug: Slug,
    pub deploy: Deploy,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            site: Default::default(),
            theme: Default::default(),
            content: RelPath::from("content"),
            static_paths: vec![RelPath::from("css"), RelPath::from("images")],
            default_pagination: 10,
            feeds: Default::default(),
            markdown: Default::default(),
            slug: Default::default(),
            deploy: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {CONFIG_FILE_NAME} file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Apply the deployment environment, producing the settings for one run.
    pub fn resolve(self, env: &Environment) -> Result<SiteConfig, ResolveError> {
        let Config {
            root,
            site,
            theme,
            content,
            static_paths,
            default_pagination,
            feeds,
            markdown,
            slug,
            deploy,
        } = self;

        let slugifier = slug.compile()?;
        let deployment = deploy.detect(env)?;
        let site_url = deploy.site_url(&deployment);
        log::debug!("Resolved site URL `{site_url}` for {deployment}");

        let Site {
            author,
            name,
            subtitle,
            header_cover,
            timezone,
            default_lang,
            social,
        } = site;
        let Theme {
            path: theme_path,
            color_scheme_css,
            css_override,
            disable_custom_javascript,
        } = theme;

        Ok(SiteConfig {
            root,
            author,
            site_name: name,
            site_subtitle: subtitle,
            feed_domain: site_url.clone(),
            site_url,
            header_cover,
            theme: theme_path,
            content_path: content,
            timezone,
            default_language: default_lang,
            color_scheme_stylesheet: color_scheme_css,
            custom_stylesheet_override: css_override,
            disable_theme_scripting: disable_custom_javascript,
            feed_paths: feeds,
            social_links: social,
            pagination_size: default_pagination,
            static_asset_paths: static_paths,
            markdown_extensions: markdown.extension_configs,
            markdown_output_format: markdown.output_format,
            slug_sanitization_rules: slug.substitutions,
            deployment,
            slugifier,
        })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Settings for one generator run, resolved against the deployment environment.
#[derive(Debug, Clone, serde::Serialize)]
#[non_exhaustive]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub author: String,
    pub site_name: String,
    pub site_subtitle: String,
    pub site_url: String,
    pub header_cover: Option<RelPath>,
    pub theme: RelPath,
    pub content_path: RelPath,
    pub timezone: String,
    pub default_language: String,
    pub color_scheme_stylesheet: String,
    pub custom_stylesheet_override: Option<RelPath>,
    pub disable_theme_scripting: bool,
    /// Always equal to `site_url`.
    pub feed_domain: String,
    pub feed_paths: Feeds,
    pub social_links: Vec<SocialLink>,
    pub pagination_size: usize,
    pub static_asset_paths: Vec<RelPath>,
    pub markdown_extensions: std::collections::BTreeMap<String, ExtensionOptions>,
    pub markdown_output_format: String,
    pub slug_sanitization_rules: Vec<SlugRule>,
    pub deployment: Deployment,
    #[serde(skip)]
    slugifier: Slugifier,
}

impl SiteConfig {
    pub fn slugify<S: AsRef<str>>(&self, title: S) -> String {
        self.slugifier.slugify(title)
    }

    pub fn feed_url(&self, kind: FeedKind, slug: &str) -> Option<String> {
        self.feed_paths
            .url(kind, &self.feed_domain, slug, &self.default_language)
    }

    pub fn is_root_relative(&self) -> bool {
        self.site_url.is_empty()
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
