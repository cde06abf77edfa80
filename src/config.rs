use std::fs;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::link::{Link, NAV_LINKS, SOCIAL_LINKS};
use crate::path_util::SiteDir;
use crate::site::{SITE, SiteConfig};

/// Everything the renderer reads: site metadata and both link lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_site")]
    pub site: SiteConfig,
    #[serde(default = "default_nav")]
    pub nav: Vec<Link>,
    #[serde(default = "default_social")]
    pub social: Vec<Link>
}

fn default_site() -> SiteConfig {
    SITE.clone()
}

fn default_nav() -> Vec<Link> {
    NAV_LINKS.to_vec()
}

fn default_social() -> Vec<Link> {
    SOCIAL_LINKS.to_vec()
}

impl Config {
    pub fn builtin() -> Self {
        Self {
            site: default_site(),
            nav: default_nav(),
            social: default_social()
        }
    }

    /// Reads `site.toml` from `dir`, falling back to the built-ins when absent.
    pub fn load(dir: &SiteDir) -> Result<Self, SiteError> {
        let manifest = dir.manifest();
        if !manifest.exists() {
            info!("No {} found, using built-in config", manifest.display());
            return Ok(Self::builtin());
        }
        info!("Reading config from {}", manifest.display());
        let config: Config = toml::from_str(&fs::read_to_string(&manifest)?)?;
        debug!("{:?}", &config);
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, SiteError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Vec<SiteError> {
        let nav = self
            .nav
            .iter()
            .enumerate()
            .flat_map(|(i, l)| l.validate(&format!("nav[{i}]")));
        let social = self
            .social
            .iter()
            .enumerate()
            .flat_map(|(i, l)| l.validate(&format!("social[{i}]")));
        self.site.validate().into_iter().chain(nav).chain(social).collect()
    }
}
