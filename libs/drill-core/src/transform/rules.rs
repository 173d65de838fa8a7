//! Patterns shared by the dialect rule tables.
//!
//! Each dialect lists the rules it applies, in order. A later rule sees the
//! output of every earlier one, so tables are ordered so that no rule
//! consumes markup another rule still needs to recognise.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// How a matched span is rewritten.
pub(crate) enum Replace {
    /// `regex` replacement template (`${1}` for groups, `$$` for a literal `$`).
    Template(&'static str),
    /// Computed replacement.
    With(fn(&Captures<'_>) -> String),
}

/// One rewrite step of a dialect.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static Lazy<Regex>,
    pub replace: Replace,
}

impl Rule {
    pub fn apply(&self, text: &str) -> String {
        let rewritten = match self.replace {
            Replace::Template(template) => self.pattern.replace_all(text, template),
            Replace::With(render) => self.pattern.replace_all(text, |caps: &Captures<'_>| render(caps)),
        };
        rewritten.into_owned()
    }
}

/// Run a rule table over a segment.
pub(crate) fn apply_all(rules: &[Rule], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        let next = rule.apply(&acc);
        if next != acc {
            tracing::trace!(rule = rule.name, "rule rewrote segment");
        }
        next
    })
}

/// A single option letter in `\(A\)` or `$A$` form.
pub(crate) static OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\\\(|\$)([A-D])(?:\\\)|\$)").unwrap());

/// `\( ... \)` on one line.
pub(crate) static INLINE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\((.+?)\\\)").unwrap());

/// `\[ ... \]`, possibly across lines.
pub(crate) static DISPLAY_MATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap());

/// `$$ ... $$`.
pub(crate) static DOLLAR_DISPLAY_MATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap());

/// `$ ... $` on one line.
pub(crate) static DOLLAR_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([^$\n]+?)\$").unwrap());

/// A run of asterisks, a span free of asterisks and newlines, another run.
pub(crate) static ASTERISK_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\*+)([^*\n]+)(\*+)").unwrap());

/// A whole `<tex>` element, or an asterisk span that never reaches into markup.
pub(crate) static TEX_OR_ASTERISK_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s:<tex>.*?</tex>)|(\*+)([^*\n<]+)(\*+)").unwrap());

/// `**Label:**`, with optional space before the closing asterisks.
pub(crate) static BOLD_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+?):\s*\*\*").unwrap());

/// `***The answer is (B).***`, whatever the option letter was wrapped in.
pub(crate) static ANSWER_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*\*\*The answer is\s*(?:<b>|<strong>)?[\\($]*([A-D])[\\)$]*(?:</b>|</strong>)?\s*\.\*\*\*",
    )
    .unwrap()
});

/// Backslash left in front of a parenthesis.
pub(crate) static STRAY_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([()])").unwrap());

pub(crate) static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n").unwrap());

pub(crate) static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n").unwrap());

/// Wrap a single-asterisk span; longer runs belong to the bold rules.
fn emphasis(caps: &Captures<'_>, open: &str, close: &str) -> String {
    if caps[1].len() == 1 && caps[3].len() == 1 {
        format!("{}{}{}", open, &caps[2], close)
    } else {
        caps[0].to_string()
    }
}

pub(crate) fn emphasis_em(caps: &Captures<'_>) -> String {
    emphasis(caps, "<em>", "</em>")
}

pub(crate) fn emphasis_i(caps: &Captures<'_>) -> String {
    emphasis(caps, "<i>", "</i>")
}

/// Like [`emphasis_i`], but leaves `<tex>` elements untouched.
pub(crate) fn emphasis_i_outside_tex(caps: &Captures<'_>) -> String {
    match caps.get(1) {
        Some(_) => emphasis(caps, "<i>", "</i>"),
        None => caps[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static ITALIC: Rule = Rule {
        name: "italic",
        pattern: &ASTERISK_SPAN,
        replace: Replace::With(emphasis_em),
    };

    #[test]
    fn emphasis_only_touches_single_asterisks() {
        assert_eq!(ITALIC.apply("*a* and *b*"), "<em>a</em> and <em>b</em>");
        assert_eq!(ITALIC.apply("**Given:** *m*"), "**Given:** <em>m</em>");
        assert_eq!(
            ITALIC.apply("***The answer is (B).***"),
            "***The answer is (B).***"
        );
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(ITALIC.apply("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn unmatched_pattern_leaves_text_alone() {
        let rule = Rule {
            name: "label",
            pattern: &BOLD_LABEL,
            replace: Replace::Template("<b>${1}:</b> "),
        };
        assert_eq!(rule.apply("no labels here"), "no labels here");
        assert_eq!(rule.apply("**Step 1: **go"), "<b>Step 1:</b> go");
    }

    #[test]
    fn answer_phrase_accepts_any_wrapping() {
        for text in [
            r"***The answer is \(C\).***",
            "***The answer is (C).***",
            "***The answer is $C$.***",
            "***The answer is <b>C</b>.***",
            "***The answer is <strong>(C)</strong>.***",
        ] {
            let caps = ANSWER_PHRASE.captures(text).expect(text);
            assert_eq!(&caps[1], "C");
        }
    }
}
