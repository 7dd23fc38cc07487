//! Layout configuration.

/// First id handed out to column sets created by [`GridLayout::add_row`](crate::GridLayout::add_row).
pub const AUTO_COLUMN_SET_ID_BASE: u32 = 1 << 20;

/// Options for a [`GridLayout`](crate::GridLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    fill_height: bool,
    auto_id_base: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            fill_height: false,
            auto_id_base: AUTO_COLUMN_SET_ID_BASE,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow rows into the container's spare height, by row resize weight.
    ///
    /// Off by default: rows keep their fixed or content-derived height and
    /// any extra container height stays below the last row.
    pub fn fill_height(mut self, fill_height: bool) -> Self {
        self.fill_height = fill_height;
        self
    }

    /// Set the first id used for anonymous column sets.
    pub fn auto_id_base(mut self, base: u32) -> Self {
        self.auto_id_base = base;
        self
    }

    #[must_use]
    pub fn fills_height(&self) -> bool {
        self.fill_height
    }

    #[must_use]
    pub fn first_auto_id(&self) -> u32 {
        self.auto_id_base
    }
}
