//! Export configuration shared by the transformer and the packaging layer.

use serde::Serialize;

/// Labels and thresholds used while converting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    /// Tag attached to every card.
    pub category_tag: String,
    /// Prefix of the per-card tag; the card id is appended.
    pub tag_prefix: String,
    /// Deck name written into the tagged-markup document.
    pub deck_name: String,
    /// Deck-level tags written into the tagged-markup document.
    pub deck_tags: String,
    /// Number of cards dumped to the sample file.
    pub sample_count: usize,
    /// Fronts shorter than this many characters are flagged.
    pub short_front_threshold: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            category_tag: "ME_Exam".to_string(),
            tag_prefix: "Problem_".to_string(),
            deck_name: "Mechanical Engineering Exam".to_string(),
            deck_tags: "ME_Exam,EIT".to_string(),
            sample_count: 3,
            short_front_threshold: 10,
        }
    }
}

impl ExportConfig {
    /// Tags for a card, derived only from its id.
    pub fn tags_for(&self, id: &str) -> Vec<String> {
        vec![
            self.category_tag.clone(),
            format!("{}{}", self.tag_prefix, id),
        ]
    }
}
