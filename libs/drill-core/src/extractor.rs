//! Card extractor for org-drill documents.
//!
//! # Format
//! ```text
//! ** TODO 12 Beam deflection                          :drill:
//! :PROPERTIES:
//! :ID:       4f1c...
//! :END:
//! A cantilever of length \(L\) carries ...
//! ****
//! The deflection is ...
//! ```
//!
//! A card starts at a heading carrying a problem number and the `:drill:`
//! tag and runs to the next such heading or the end of the document. The
//! first `****` line splits question from answer. Cards without a divider
//! are skipped.

use crate::types::RawCard;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::iter::Enumerate;
use std::str::Lines;

static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*+[ \t]+(?:(?:TODO|DONE)[ \t]+)?(\d+)\b.*:drill:").unwrap()
});

const DIVIDER: &str = "****";
const PROPERTIES_START: &str = ":PROPERTIES:";
const PROPERTIES_END: &str = ":END:";

/// Why a card segment produced no RawCard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingDivider,
    EmptyAnswer,
}

/// A header that was found but dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCard {
    pub id: String,
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Everything one pass over a document produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub cards: Vec<RawCard>,
    pub skipped: Vec<SkippedCard>,
}

impl Extraction {
    /// Number of card headers seen, kept or not.
    pub fn headers_seen(&self) -> usize {
        self.cards.len() + self.skipped.len()
    }
}

/// Extract cards lazily, in document order.
///
/// Calling this again on the same text restarts extraction from the top.
pub fn extract(content: &str) -> Cards<'_> {
    Cards {
        lines: content.lines().enumerate(),
        pending: None,
    }
}

/// Extract every card and record the headers that were skipped.
pub fn extract_all(content: &str) -> Extraction {
    let mut cards = extract(content);
    let mut extraction = Extraction::default();

    while let Some(segment) = cards.next_segment() {
        match segment {
            Ok(card) => extraction.cards.push(card),
            Err(skipped) => extraction.skipped.push(skipped),
        }
    }

    extraction
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Properties,
    Question,
    Answer,
}

enum LineType<'a> {
    Header(&'a str),
    Divider { line: &'a str, rest: &'a str },
    PropertiesStart(&'a str),
    PropertiesEnd(&'a str),
    Text(&'a str),
}

impl<'a> LineType<'a> {
    fn parse(line: &'a str) -> Self {
        if let Some(caps) = HEADER_REGEX.captures(line) {
            let id = caps.get(1).map_or("", |m| m.as_str());
            return LineType::Header(id);
        }

        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(DIVIDER) {
            LineType::Divider {
                line,
                rest: rest.trim_start_matches('*').trim(),
            }
        } else if trimmed.eq_ignore_ascii_case(PROPERTIES_START) {
            LineType::PropertiesStart(line)
        } else if trimmed.eq_ignore_ascii_case(PROPERTIES_END) {
            LineType::PropertiesEnd(line)
        } else {
            LineType::Text(line)
        }
    }

    /// The line exactly as written in the document.
    fn text(&self) -> &'a str {
        match *self {
            LineType::Header(_) => "",
            LineType::Divider { line, .. }
            | LineType::PropertiesStart(line)
            | LineType::PropertiesEnd(line)
            | LineType::Text(line) => line,
        }
    }
}

struct CardBuilder {
    id: String,
    start_line: usize,
    state: State,
    question: Vec<String>,
    answer: Vec<String>,
    saw_divider: bool,
}

impl CardBuilder {
    fn new(id: String, start_line: usize) -> Self {
        Self {
            id,
            start_line,
            state: State::Question,
            question: Vec::new(),
            answer: Vec::new(),
            saw_divider: false,
        }
    }

    fn has_question_content(&self) -> bool {
        self.question.iter().any(|line| !line.trim().is_empty())
    }

    fn push(&mut self, line: LineType<'_>) {
        match (self.state, line) {
            (State::Properties, LineType::PropertiesEnd(_)) => self.state = State::Question,
            (State::Properties, _) => {}
            (State::Question, LineType::PropertiesStart(_)) if !self.has_question_content() => {
                self.state = State::Properties;
            }
            (State::Question, LineType::Divider { rest, .. }) => {
                self.state = State::Answer;
                self.saw_divider = true;
                if !rest.is_empty() {
                    self.answer.push(rest.to_string());
                }
            }
            (State::Question, other) => self.question.push(other.text().to_string()),
            (State::Answer, other) => self.answer.push(other.text().to_string()),
        }
    }

    fn build(self) -> Result<RawCard, SkippedCard> {
        let skip = |reason| SkippedCard {
            id: self.id.clone(),
            line_number: self.start_line,
            reason,
        };

        if !self.saw_divider {
            return Err(skip(SkipReason::MissingDivider));
        }

        let answer = self.answer.join("\n").trim().to_string();
        if answer.is_empty() {
            return Err(skip(SkipReason::EmptyAnswer));
        }

        Ok(RawCard {
            question: self.question.join("\n").trim().to_string(),
            answer,
            id: self.id,
            line_number: self.start_line,
        })
    }
}

/// Lazy iterator over the cards of one document.
#[derive(Debug, Clone)]
pub struct Cards<'a> {
    lines: Enumerate<Lines<'a>>,
    pending: Option<(String, usize)>,
}

impl Cards<'_> {
    fn next_header(&mut self) -> Option<(String, usize)> {
        if let Some(header) = self.pending.take() {
            return Some(header);
        }
        self.lines.by_ref().find_map(|(idx, line)| match LineType::parse(line) {
            LineType::Header(id) => Some((id.to_string(), idx + 1)),
            _ => None,
        })
    }

    fn next_segment(&mut self) -> Option<Result<RawCard, SkippedCard>> {
        let (id, start_line) = self.next_header()?;
        let mut builder = CardBuilder::new(id, start_line);

        for (idx, line) in self.lines.by_ref() {
            match LineType::parse(line) {
                LineType::Header(next_id) => {
                    self.pending = Some((next_id.to_string(), idx + 1));
                    break;
                }
                other => builder.push(other),
            }
        }

        Some(builder.build())
    }
}

impl Iterator for Cards<'_> {
    type Item = RawCard;

    fn next(&mut self) -> Option<RawCard> {
        loop {
            match self.next_segment()? {
                Ok(card) => {
                    tracing::debug!(id = %card.id, line = card.line_number, "extracted card");
                    return Some(card);
                }
                Err(skipped) => {
                    tracing::debug!(
                        id = %skipped.id,
                        line = skipped.line_number,
                        reason = ?skipped.reason,
                        "skipped card"
                    );
                }
            }
        }
    }
}
