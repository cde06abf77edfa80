use std::fmt;
use std::path::PathBuf;

const MANIFEST_NAME: &str = "site.toml";

/// Directory holding an optional `site.toml`, printable for clap defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDir(pub PathBuf);

impl SiteDir {
    pub fn manifest(&self) -> PathBuf {
        self.0.join(MANIFEST_NAME)
    }
}

impl fmt::Display for SiteDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<String> for SiteDir {
    fn from(s: String) -> Self {
        SiteDir(PathBuf::from(s))
    }
}

impl From<&str> for SiteDir {
    fn from(s: &str) -> Self {
        SiteDir(PathBuf::from(s))
    }
}
