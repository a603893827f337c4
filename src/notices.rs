//! Notice list and notice board, read from a static `notices.json`.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{HeroError, Result};

pub const EMPTY_PLACEHOLDER: &str = "No notices have been posted.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

pub fn parse_notices(json: &str, path: &Path) -> Result<Vec<Notice>> {
    serde_json::from_str(json).map_err(|source| HeroError::Json { path: path.to_path_buf(), source })
}

pub fn load_notices(path: &Path) -> Result<Vec<Notice>> {
    let json = fs::read_to_string(path).map_err(|source| HeroError::Io { path: path.to_path_buf(), source })?;
    parse_notices(&json, path)
}

/// Failures leave the list empty; they are logged, never surfaced.
pub fn notices_or_empty(path: &Path) -> Vec<Notice> {
    load_notices(path).unwrap_or_else(|e| {
        warn!("failed to load notices: {}", e);
        Vec::new()
    })
}

/// A rendered row of the simple notice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Notice { date: String, title: String, content: Option<String> },
    Placeholder(&'static str),
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Notice { date, title, content } => {
                write!(f, "{date}  {title}")?;
                if let Some(content) = content {
                    write!(f, "\n    {content}")?;
                }
                Ok(())
            }
            ListItem::Placeholder(text) => f.write_str(text),
        }
    }
}

/// First `limit` notices in file order, or a single placeholder row.
pub fn notice_list(notices: &[Notice], limit: Option<usize>) -> Vec<ListItem> {
    let take = limit.unwrap_or(notices.len());
    let items: Vec<ListItem> = notices
        .iter()
        .take(take)
        .map(|n| ListItem::Notice {
            date: n.date.clone(),
            title: n.title.clone(),
            content: n.content.clone().filter(|c| !c.is_empty()),
        })
        .collect();

    if items.is_empty() {
        vec![ListItem::Placeholder(EMPTY_PLACEHOLDER)]
    } else {
        items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow<'a> {
    pub number: usize,
    pub title: &'a str,
    pub date: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDetail<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub content: &'a str,
}

/// Board view: newest first by the digits of `date`, ties keep file order.
pub struct NoticeBoard {
    sorted: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(notices: Vec<Notice>) -> Self {
        let mut sorted = notices;
        sorted.sort_by(|a, b| compare_dates_desc(&a.date, &b.date));
        Self { sorted }
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = BoardRow<'_>> {
        self.sorted.iter().enumerate().map(|(i, n)| BoardRow { number: i + 1, title: &n.title, date: &n.date })
    }

    /// Detail panel for the row at `idx` (0-based).
    pub fn open(&self, idx: usize) -> Option<NoticeDetail<'_>> {
        self.sorted.get(idx).map(|n| NoticeDetail {
            title: &n.title,
            date: &n.date,
            content: n.content.as_deref().unwrap_or(""),
        })
    }
}

fn date_digits(date: &str) -> String {
    date.chars().filter(char::is_ascii_digit).collect()
}

fn compare_dates_desc(a: &str, b: &str) -> Ordering {
    date_digits(b).cmp(&date_digits(a))
}
