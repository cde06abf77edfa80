use std::borrow::Cow;
use std::num::NonZeroU32;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

static SITE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+(/\S*)?$").expect("url pattern"));

/// Site-wide metadata handed to the rendering layer.
///
/// Serialized keys keep the upper-case names the templates expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SiteConfig {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub num_posts_on_homepage: u32,
    pub posts_per_page: NonZeroU32,
    #[serde(rename = "SITEURL")]
    pub site_url: Cow<'static, str>
}

pub static SITE: SiteConfig = SiteConfig {
    title: Cow::Borrowed("saaaadcat"),
    description: Cow::Borrowed("Yo saaaadcat!!!"),
    email: Cow::Borrowed("silencemonkg@gmail.com"),
    num_posts_on_homepage: 2,
    posts_per_page: NonZeroU32::new(3).unwrap(),
    site_url: Cow::Borrowed("https://silencemonk.github.io/")
};

impl SiteConfig {
    pub fn to_table(&self) -> Result<toml::Table, SiteError> {
        match toml::Value::try_from(self)? {
            toml::Value::Table(table) => Ok(table),
            _ => Err(SiteError::NotATable)
        }
    }

    pub fn from_table(table: toml::Table) -> Result<Self, SiteError> {
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Number of posts shown on the homepage when `total` posts exist.
    pub fn homepage_post_count(&self, total: usize) -> usize {
        total.min(self.num_posts_on_homepage as usize)
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.posts_per_page.get() as usize)
    }

    /// Index range of the posts on 1-based `page`, `None` past the last page.
    pub fn page_range(&self, page: usize, total: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count(total) {
            return None;
        }
        let per_page = self.posts_per_page.get() as usize;
        let start = (page - 1) * per_page;
        Some(start..start.saturating_add(per_page).min(total))
    }

    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Vec<SiteError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(SiteError::invalid("TITLE", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            errors.push(SiteError::invalid("DESCRIPTION", "must not be empty"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(SiteError::invalid(
                "EMAIL",
                format!("`{}` is not an email address", self.email)
            ));
        }
        if !SITE_URL_RE.is_match(&self.site_url) {
            errors.push(SiteError::invalid(
                "SITEURL",
                format!("`{}` is not an absolute http(s) URL", self.site_url)
            ));
        }
        errors
    }
}

pub(crate) fn is_email_address(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}
