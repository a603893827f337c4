use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\n|/n|\r?\n").expect("valid line break pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// One entry of the hero rotation. Built once from markup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    pub background: String,
}

impl Slide {
    pub fn new(title: &str, subtitle: &str, background: &str) -> Self {
        Self {
            title: one_line(title),
            subtitle: one_line(subtitle),
            background: background.trim().to_string(),
        }
    }
}

/// Collapses line break markers (`\n` typed literally, `/n`, real newlines)
/// and whitespace runs so the text renders on a single line.
pub fn one_line(text: &str) -> String {
    let text = LINE_BREAK_MARKERS.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}
