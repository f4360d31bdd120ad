use crate::RelPath;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub author: String,
    pub name: String,
    pub subtitle: String,
    pub header_cover: Option<RelPath>,
    pub timezone: String,
    pub default_lang: String,
    pub social: Vec<SocialLink>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            author: "Jannik Glückert".to_owned(),
            name: "EBADBLOG".to_owned(),
            subtitle: "A blog about weirdly named POSIX error codes and more".to_owned(),
            header_cover: Some(RelPath::from("images/errno.jpg")),
            timezone: "Europe/Berlin".to_owned(),
            default_lang: "en".to_owned(),
            social: vec![SocialLink {
                platform: "github".to_owned(),
                url: "https://github.com/Jannik2099".to_owned(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}
