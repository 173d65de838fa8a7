//! Rule tables for the two delimited formats.
//!
//! Both keep HTML inline and LaTeX in `$` delimiters. The plain table turns
//! line breaks into `<br>`; the slotted table leaves them for the CSV
//! writer to quote.

use super::rules::*;

pub(crate) static PLAIN_RULES: [Rule; 8] = [
    Rule {
        name: "option_marker",
        pattern: &OPTION_MARKER,
        replace: Replace::Template("<strong>(${1})</strong>"),
    },
    Rule {
        name: "inline_math",
        pattern: &INLINE_MATH,
        replace: Replace::Template("$$${1}$$"),
    },
    Rule {
        name: "display_math",
        pattern: &DISPLAY_MATH,
        replace: Replace::Template("$$$$${1}$$$$"),
    },
    Rule {
        name: "italic",
        pattern: &ASTERISK_SPAN,
        replace: Replace::With(emphasis_em),
    },
    Rule {
        name: "bold_label",
        pattern: &BOLD_LABEL,
        replace: Replace::Template("<strong>${1}:</strong> "),
    },
    Rule {
        name: "answer_phrase",
        pattern: &ANSWER_PHRASE,
        replace: Replace::Template("<strong>The answer is (${1}).</strong>"),
    },
    Rule {
        name: "stray_escape",
        pattern: &STRAY_ESCAPE,
        replace: Replace::Template("${1}"),
    },
    Rule {
        name: "line_break",
        pattern: &LINE_BREAK,
        replace: Replace::Template("<br>"),
    },
];

pub(crate) static SLOTTED_RULES: [Rule; 7] = [
    Rule {
        name: "option_marker",
        pattern: &OPTION_MARKER,
        replace: Replace::Template("<b>(${1})</b>"),
    },
    Rule {
        name: "inline_math",
        pattern: &INLINE_MATH,
        replace: Replace::Template("$$${1}$$"),
    },
    Rule {
        name: "display_math",
        pattern: &DISPLAY_MATH,
        replace: Replace::Template("$$$$${1}$$$$"),
    },
    Rule {
        name: "italic",
        pattern: &ASTERISK_SPAN,
        replace: Replace::With(emphasis_i),
    },
    Rule {
        name: "bold_label",
        pattern: &BOLD_LABEL,
        replace: Replace::Template("<b>${1}:</b> "),
    },
    Rule {
        name: "answer_phrase",
        pattern: &ANSWER_PHRASE,
        replace: Replace::Template("<b>The answer is (${1}).</b>"),
    },
    Rule {
        name: "stray_escape",
        pattern: &STRAY_ESCAPE,
        replace: Replace::Template("${1}"),
    },
];
