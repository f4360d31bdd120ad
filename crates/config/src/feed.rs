use std::fmt;

use crate::RelPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedKind {
    AllAtom,
    CategoryAtom,
    TranslationAtom,
    AuthorAtom,
    AuthorRss,
}

impl FeedKind {
    pub const ALL: [FeedKind; 5] = [
        Self::AllAtom,
        Self::CategoryAtom,
        Self::TranslationAtom,
        Self::AuthorAtom,
        Self::AuthorRss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllAtom => "all_atom",
            Self::CategoryAtom => "category_atom",
            Self::TranslationAtom => "translation_atom",
            Self::AuthorAtom => "author_atom",
            Self::AuthorRss => "author_rss",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output paths for each feed the generator may write.
///
/// `None` disables a feed. Paths may contain `{slug}` (category or author
/// slug) and `{lang}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Feeds {
    pub all_atom: Option<RelPath>,
    pub category_atom: Option<RelPath>,
    pub translation_atom: Option<RelPath>,
    pub author_atom: Option<RelPath>,
    pub author_rss: Option<RelPath>,
}

impl Feeds {
    pub fn path(&self, kind: FeedKind) -> Option<&RelPath> {
        match kind {
            FeedKind::AllAtom => self.all_atom.as_ref(),
            FeedKind::CategoryAtom => self.category_atom.as_ref(),
            FeedKind::TranslationAtom => self.translation_atom.as_ref(),
            FeedKind::AuthorAtom => self.author_atom.as_ref(),
            FeedKind::AuthorRss => self.author_rss.as_ref(),
        }
    }

    pub fn is_enabled(&self, kind: FeedKind) -> bool {
        self.path(kind).is_some()
    }

    pub fn enabled(&self) -> impl Iterator<Item = (FeedKind, &RelPath)> + '_ {
        FeedKind::ALL
            .into_iter()
            .filter_map(|kind| self.path(kind).map(|path| (kind, path)))
    }

    /// Absolute URL of a feed, `None` when the feed is disabled.
    pub fn url(&self, kind: FeedKind, domain: &str, slug: &str, lang: &str) -> Option<String> {
        let path = self.path(kind)?;
        let path = path.as_str().replace("{slug}", slug).replace("{lang}", lang);
        let domain = domain.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Some(format!("{domain}/{path}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_disables_everything() {
        let feeds = Feeds::default();
        for kind in FeedKind::ALL {
            assert!(!feeds.is_enabled(kind), "{kind}");
            assert_eq!(feeds.url(kind, "https://ebadblog.com", "c", "en"), None);
        }
        assert_eq!(feeds.enabled().count(), 0);
    }

    #[test]
    fn url_renders_placeholders() {
        let feeds = Feeds {
            category_atom: Some(RelPath::from("feeds/{slug}.{lang}.atom.xml")),
            ..Default::default()
        };
        assert_eq!(
            feeds
                .url(FeedKind::CategoryAtom, "https://ebadblog.com/", "posix", "en")
                .as_deref(),
            Some("https://ebadblog.com/feeds/posix.en.atom.xml")
        );
    }

    #[test]
    fn url_with_root_relative_domain() {
        let feeds = Feeds {
            all_atom: Some(RelPath::from("feeds/all.atom.xml")),
            ..Default::default()
        };
        assert_eq!(
            feeds.url(FeedKind::AllAtom, "", "", "en").as_deref(),
            Some("/feeds/all.atom.xml")
        );
    }

    #[test]
    fn enabled_in_declaration_order() {
        let feeds = Feeds {
            author_rss: Some(RelPath::from("feeds/{slug}.rss.xml")),
            all_atom: Some(RelPath::from("feeds/all.atom.xml")),
            ..Default::default()
        };
        let kinds: Vec<_> = feeds.enabled().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![FeedKind::AllAtom, FeedKind::AuthorRss]);
    }
}
