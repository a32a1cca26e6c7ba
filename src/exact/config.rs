//! Exact search configuration.

/// Configuration for [`ExactRunner`](super::ExactRunner).
///
/// # Examples
///
/// ```
/// use ring_placement::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_items(6).with_fix_first(true);
/// assert_eq!(config.max_items, 6);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Largest item count the runner accepts.
    pub max_items: usize,

    /// Pin the first item to slot 0.
    pub fix_first: bool,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_items: 8,
            fix_first: false,
        }
    }
}

impl ExactConfig {
    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    pub fn with_fix_first(mut self, fix: bool) -> Self {
        self.fix_first = fix;
        self
    }
}
