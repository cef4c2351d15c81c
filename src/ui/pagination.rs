use super::list::ListState;

/// What the pagination control shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    /// The control for `list`, or `None` when there is only one page.
    pub fn for_list(list: &ListState) -> Option<Self> {
        if list.total_pages() <= 1 {
            return None;
        }
        Some(Self {
            label: format!("Page {} of {}", list.current_page(), list.total_pages()),
            previous_enabled: list.has_previous(),
            next_enabled: list.has_next(),
        })
    }
}
