use tracing::debug;

pub const DEFAULT_TAB: &str = "tab1";

/// Tab menu plus content panels matched by identifier.
/// At most one menu item and one panel are active at a time.
#[derive(Debug, Clone)]
pub struct TabSwitcher {
    ids: Vec<String>,
    active: Option<usize>,
}

impl TabSwitcher {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { ids: ids.into_iter().map(Into::into).collect(), active: None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.ids[i].as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|t| t == id)
    }

    /// Activates `id`; an unknown id leaves every tab inactive.
    pub fn show(&mut self, id: &str) {
        self.active = self.ids.iter().position(|t| t == id);
        if self.active.is_none() {
            debug!(id, "no tab panel with this id");
        }
    }

    /// Resolves the initial tab from a URL fragment such as `#tab2`.
    pub fn from_fragment(&mut self, fragment: &str, default: Option<&str>) {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if !id.is_empty() && self.contains(id) {
            self.show(id);
        } else {
            self.show(default.unwrap_or(DEFAULT_TAB));
        }
    }
}
