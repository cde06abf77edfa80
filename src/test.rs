use std::path::PathBuf;
use std::sync::Once;

use env_logger::Env;

use crate::config::Config;
use crate::error::SiteError;
use crate::link::{Link, LinkKind, NAV_LINKS, SOCIAL_LINKS};
use crate::path_util::SiteDir;
use crate::site::{SITE, SiteConfig};

static INIT: Once = Once::new();

fn test_dir(name: &str) -> SiteDir {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("saaaadcat=debug,warn"))
            .is_test(true)
            .init();
    });
    SiteDir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test").join(name))
}

#[test]
fn test_nav_links() {
    let labels: Vec<_> = NAV_LINKS.iter().map(|l| &*l.label).collect();
    assert_eq!(labels, ["blog", "authors", "about", "tags"]);
    for link in &NAV_LINKS {
        assert!(!link.label.is_empty());
        assert!(link.href.starts_with('/'));
        assert_eq!(link.kind(), Some(LinkKind::Relative));
    }
    assert_eq!(NAV_LINKS[0].href, "/blog");
    assert_eq!(NAV_LINKS[0].label, "blog");
}

#[test]
fn test_link_literals() {
    let pairs = |links: &'static [Link]| -> Vec<(&'static str, &'static str)> {
        links.iter().map(|l| (&*l.href, &*l.label)).collect()
    };
    assert_eq!(
        pairs(&NAV_LINKS),
        [
            ("/blog", "blog"),
            ("/authors", "authors"),
            ("/about", "about"),
            ("/tags", "tags")
        ]
    );
    assert_eq!(
        pairs(&SOCIAL_LINKS),
        [
            ("https://github.com/SilenceMonk", "GitHub"),
            ("https://twitter.com/enscry", "Twitter"),
            ("silencemonkg@gmail.com", "Email"),
            ("/rss.xml", "RSS")
        ]
    );
}

#[test]
fn test_social_links() {
    let labels: Vec<_> = SOCIAL_LINKS.iter().map(|l| &*l.label).collect();
    assert_eq!(labels, ["GitHub", "Twitter", "Email", "RSS"]);

    let email = &SOCIAL_LINKS[2];
    assert!(!email.href.contains(':'), "email href carries no scheme");
    assert_eq!(email.kind(), Some(LinkKind::Email));
    assert_eq!(email.anchor_href(), "mailto:silencemonkg@gmail.com");

    assert_eq!(SOCIAL_LINKS[3].href, "/rss.xml");
    assert_eq!(SOCIAL_LINKS[0].kind(), Some(LinkKind::Absolute));
}

#[test]
fn test_site_pagination_bounds() {
    assert!(SITE.posts_per_page.get() > 0);
    assert_eq!(SITE.site_url, "https://silencemonk.github.io/");
}

#[test]
fn test_site_round_trip() {
    let table = SITE.to_table().expect("serializes");
    assert_eq!(SiteConfig::from_table(table).expect("deserializes"), SITE);
}

#[test]
fn test_builtin_config_is_valid() {
    let problems = Config::builtin().validate();
    assert!(problems.is_empty(), "{:?}", problems);
}

#[test]
fn test_load_missing_manifest_uses_builtin() {
    let config = Config::load(&test_dir("does-not-exist")).expect("loads");
    assert_eq!(config, Config::builtin());
}

#[test]
fn test_load_full_manifest() {
    let config = Config::load(&test_dir("custom")).expect("loads");
    assert_eq!(config.site.title, "other");
    assert_eq!(config.site.posts_per_page.get(), 10);
    assert_eq!(config.nav.len(), 1);
    assert_eq!(config.social[0].anchor_href(), "mailto:someone@example.org");
    assert!(config.validate().is_empty());
}

#[test]
fn test_load_partial_manifest_keeps_builtin_sections() {
    let config = Config::load(&test_dir("partial")).expect("loads");
    assert_eq!(config.site, SITE);
    assert_eq!(config.nav.len(), 1);
    assert_eq!(config.nav[0].href, "/home");
    assert_eq!(config.social, SOCIAL_LINKS.to_vec());
}

#[test]
fn test_load_rejects_zero_page_size() {
    match Config::load(&test_dir("broken")) {
        Err(SiteError::Parse(e)) => {
            let message = e.to_string();
            assert!(message.contains("nonzero"), "{message}");
            assert!(message.contains("POSTS_PER_PAGE"), "{message}");
        }
        other => panic!("expected a parse error, got {:?}", other)
    }
}

#[test]
fn test_config_toml_round_trip() {
    let text = Config::builtin().to_toml().expect("serializes");
    let back: Config = toml::from_str(&text).expect("parses");
    assert_eq!(back, Config::builtin());
}
