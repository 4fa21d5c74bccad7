use tabledom::Tag;

/// Options for [`crate::ColumnSortBinder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderConfig {
    /// Elements that get a click listener.
    pub header_tag: Tag,
    /// Fall back to the text's digits when it has no leading number.
    pub digit_fallback: bool,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            header_tag: Tag::Th,
            digit_fallback: true,
        }
    }
}

impl BinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_tag(mut self, tag: Tag) -> Self {
        self.header_tag = tag;
        self
    }

    pub fn digit_fallback(mut self, enabled: bool) -> Self {
        self.digit_fallback = enabled;
        self
    }
}
