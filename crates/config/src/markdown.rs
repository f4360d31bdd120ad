use std::collections::BTreeMap;

pub type ExtensionOptions = BTreeMap<String, String>;

/// Markdown processor settings passed through to the generator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Markdown {
    pub extension_configs: BTreeMap<String, ExtensionOptions>,
    pub output_format: String,
}

impl Default for Markdown {
    fn default() -> Self {
        let mut extension_configs = BTreeMap::new();
        extension_configs.insert("markdown.extensions.extra".to_owned(), ExtensionOptions::new());
        extension_configs.insert("markdown.extensions.meta".to_owned(), ExtensionOptions::new());
        extension_configs.insert(
            "markdown.extensions.codehilite".to_owned(),
            [("guess_lang", "false"), ("css_class", "highlight")]
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        );
        Self {
            extension_configs,
            output_format: "html5".to_owned(),
        }
    }
}
