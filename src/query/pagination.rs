use crate::config::ServiceConfig;

/// Bounds used to clamp requested pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: crate::config::DEFAULT_PAGE_SIZE,
            max_size: crate::config::DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl From<&ServiceConfig> for PageLimits {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            default_size: config.default_page_size,
            max_size: config.max_page_size,
        }
    }
}

/// Effective page after clamping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub from: usize,
    pub size: usize,
}

impl Page {
    /// Clamp a requested page against `total` recalls.
    ///
    /// An offset below zero or past `total` resets to 0; a size that is not
    /// positive or exceeds the maximum resets to the default.
    pub fn clamp(total: usize, from: i64, size: i64, limits: PageLimits) -> Self {
        let from = usize::try_from(from)
            .ok()
            .filter(|&from| from <= total)
            .unwrap_or(0);
        let size = usize::try_from(size)
            .ok()
            .filter(|&size| size > 0 && size <= limits.max_size)
            .unwrap_or(limits.default_size);
        Self { from, size }
    }

    /// The slice of `items` covered by this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if items.is_empty() || self.from >= items.len() {
            return &[];
        }
        let end = self.from.saturating_add(self.size).min(items.len());
        &items[self.from..end]
    }
}
