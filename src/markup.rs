//! Slide extraction from hero markup.
//!
//! The hero element is marked with `data-hero="slides"`. Slide data lives in
//! three independent attribute lists (`data-hero-title`, `data-hero-sub`,
//! `data-hero-bg`) and background layers are the elements classed `hero-bg`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{HeroError, Result};
use crate::slide::Slide;

static HERO_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-hero\s*=\s*["']slides["']"#).expect("valid hero root pattern"));
static HERO_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-hero-(title|sub|bg)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid hero attribute pattern")
});
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid class pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroMarkup {
    pub titles: Vec<String>,
    pub subtitles: Vec<String>,
    pub backgrounds: Vec<String>,
    pub layer_count: usize,
}

impl HeroMarkup {
    pub fn parse(html: &str) -> Self {
        let Some(root) = HERO_ROOT.find(html) else {
            debug!("no hero element in markup");
            return Self::default();
        };
        let scope = &html[root.start()..];

        let mut markup = Self::default();
        for caps in HERO_ATTR.captures_iter(scope) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            let value = decode_entities(value);
            match &caps[1] {
                "title" => markup.titles.push(value),
                "sub" => markup.subtitles.push(value),
                _ => markup.backgrounds.push(value),
            }
        }

        markup.layer_count = CLASS_ATTR
            .captures_iter(scope)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .filter(|class| class.as_str().split_whitespace().any(|c| c == "hero-bg"))
            .count();

        markup
    }

    pub fn load(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path).map_err(|source| HeroError::Io { path: path.to_path_buf(), source })?;
        Ok(Self::parse(&html))
    }

    /// One slide per complete (title, subtitle, background) triple.
    pub fn slides(&self) -> Vec<Slide> {
        self.titles
            .iter()
            .zip(&self.subtitles)
            .zip(&self.backgrounds)
            .map(|((title, subtitle), background)| Slide::new(title, subtitle, background))
            .collect()
    }
}

/// Background references are relative to the page that declares them.
pub fn resolve_background(page_dir: &Path, reference: &str) -> PathBuf {
    let reference = reference.trim();
    let reference = reference.strip_prefix("./").unwrap_or(reference);
    page_dir.join(reference)
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
