use crate::RelPath;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    pub path: RelPath,
    pub color_scheme_css: String,
    pub css_override: Option<RelPath>,
    pub disable_custom_javascript: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            path: RelPath::from("theme/pelican-clean-blog"),
            color_scheme_css: "monokai.css".to_owned(),
            css_override: Some(RelPath::from("css/custom.css")),
            disable_custom_javascript: true,
        }
    }
}
