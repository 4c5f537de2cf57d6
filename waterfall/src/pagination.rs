/// Reveals items in batches as the window approaches the revealed tail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pagination {
    page_size: Option<usize>,
    initial: Option<usize>,
    current_page: usize,
}

impl Pagination {
    pub(crate) fn new(page_size: Option<usize>, initial: Option<usize>) -> Self {
        Self {
            page_size,
            initial,
            current_page: 1,
        }
    }

    pub(crate) fn configure(&mut self, page_size: Option<usize>, initial: Option<usize>) {
        self.page_size = page_size;
        self.initial = initial;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.page_size.is_some()
    }

    pub(crate) fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of revealed items, not clamped to the item count. `usize::MAX` when disabled.
    pub(crate) fn revealed(&self) -> usize {
        let Some(page_size) = self.page_size else {
            return usize::MAX;
        };
        let first = self.initial.unwrap_or(page_size);
        first.saturating_add(page_size.saturating_mul(self.current_page - 1))
    }

    pub(crate) fn advance(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    pub(crate) fn reset(&mut self) {
        self.current_page = 1;
    }
}
