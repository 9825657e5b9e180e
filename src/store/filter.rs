/// Transient search text and selected-tag set feeding the derived
/// views. Never persisted; cleared independently of entity state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub search_text: String,
    pub selected_tags: Vec<String>,
}

impl Filter {
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selected_tags.clear();
    }
}
