use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::site::is_email_address;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("scheme pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: Cow<'static, str>,
    pub label: Cow<'static, str>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-relative path such as `/blog`
    Relative,
    /// URL carrying its own scheme
    Absolute,
    /// `mailto:` URI or a bare address
    Email
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkKind::Relative => "relative",
            LinkKind::Absolute => "absolute",
            LinkKind::Email => "email"
        };
        f.write_str(name)
    }
}

const fn link(href: &'static str, label: &'static str) -> Link {
    Link {
        href: Cow::Borrowed(href),
        label: Cow::Borrowed(label)
    }
}

pub static NAV_LINKS: [Link; 4] = [
    link("/blog", "blog"),
    link("/authors", "authors"),
    link("/about", "about"),
    link("/tags", "tags")
];

pub static SOCIAL_LINKS: [Link; 4] = [
    link("https://github.com/SilenceMonk", "GitHub"),
    link("https://twitter.com/enscry", "Twitter"),
    link("silencemonkg@gmail.com", "Email"),
    link("/rss.xml", "RSS")
];

impl Link {
    pub fn kind(&self) -> Option<LinkKind> {
        let href: &str = &self.href;
        if href.starts_with('/') {
            Some(LinkKind::Relative)
        } else if href.starts_with("mailto:") {
            Some(LinkKind::Email)
        } else if SCHEME_RE.is_match(href) {
            Some(LinkKind::Absolute)
        } else if is_email_address(href) {
            Some(LinkKind::Email)
        } else {
            None
        }
    }

    /// Value to put in an anchor's `href`. Bare addresses gain `mailto:`.
    pub fn anchor_href(&self) -> Cow<'_, str> {
        match self.kind() {
            Some(LinkKind::Email) if !self.href.starts_with("mailto:") => {
                Cow::Owned(format!("mailto:{}", self.href))
            }
            _ => Cow::Borrowed(&*self.href)
        }
    }

    /// `list` names the link list in error messages, e.g. `nav[2]`.
    pub fn validate(&self, list: &str) -> Vec<SiteError> {
        let mut errors = Vec::new();
        if self.label.trim().is_empty() {
            errors.push(SiteError::invalid(
                format!("{list}.label"),
                "must not be empty"
            ));
        }
        if self.kind().is_none() {
            errors.push(SiteError::invalid(
                format!("{list}.href"),
                format!("`{}` is not a path, URL or email address", self.href)
            ));
        }
        errors
    }
}
