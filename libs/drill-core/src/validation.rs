//! Post-conversion checks.
//!
//! Nothing here rejects a card. Findings are warnings for the caller to
//! report.

use crate::types::TransformedCard;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What looked suspicious about a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// `\(` or `\)` survived the math rules.
    UnprocessedLatex { id: String },
    /// Front side is short enough to suggest a parsing problem.
    ShortFront { id: String, length: usize },
    /// Id already used by an earlier card.
    DuplicateId { id: String },
}

impl Warning {
    pub fn message(&self) -> String {
        match self {
            Self::UnprocessedLatex { id } => {
                format!("card {} may have unprocessed LaTeX expressions", id)
            }
            Self::ShortFront { id, length } => format!(
                "card {} has a very short front side ({} chars), check for parsing issues",
                id, length
            ),
            Self::DuplicateId { id } => format!("card id {} appears more than once", id),
        }
    }
}

/// Summary of a set of converted cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_cards: usize,
    pub media_references: usize,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn latex_issues(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::UnprocessedLatex { .. }))
            .count()
    }
}

fn has_escaped_paren(text: &str) -> bool {
    text.contains("\\(") || text.contains("\\)")
}

/// Check converted cards for leftovers of the source markup.
pub fn validate(cards: &[TransformedCard], short_front_threshold: usize) -> ValidationReport {
    let mut report = ValidationReport {
        total_cards: cards.len(),
        ..Default::default()
    };
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for card in cards {
        if has_escaped_paren(&card.front.text) || has_escaped_paren(&card.back.text) {
            report.warnings.push(Warning::UnprocessedLatex {
                id: card.id.clone(),
            });
        }

        let length = card.front.text.chars().count();
        if length < short_front_threshold {
            report.warnings.push(Warning::ShortFront {
                id: card.id.clone(),
                length,
            });
        }

        let count = seen.entry(card.id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            report.warnings.push(Warning::DuplicateId {
                id: card.id.clone(),
            });
        }

        report.media_references += card.front.media.len() + card.back.media.len();
    }

    report
}
