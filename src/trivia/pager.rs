use std::num::NonZeroUsize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(NonZeroUsize);

impl Page {
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Page)
    }

    pub fn number(self) -> usize {
        self.0.get()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(NonZeroUsize::MIN)
    }
}

/// Returns the slice of `items` shown on `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = (page.number() - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
