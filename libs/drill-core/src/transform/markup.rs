//! Rule table for the deck XML format.
//!
//! Text is escaped before any rule runs, so the tags the rules inject are
//! the only markup in the result.

use super::rules::*;

/// Escape the five XML metacharacters.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(crate) static MARKUP_RULES: [Rule; 11] = [
    Rule {
        name: "option_marker",
        pattern: &OPTION_MARKER,
        replace: Replace::Template("<b>${1}</b>"),
    },
    Rule {
        name: "display_math",
        pattern: &DISPLAY_MATH,
        replace: Replace::Template("<tex>${1}</tex>"),
    },
    Rule {
        name: "inline_math",
        pattern: &INLINE_MATH,
        replace: Replace::Template("<tex>${1}</tex>"),
    },
    Rule {
        name: "dollar_display_math",
        pattern: &DOLLAR_DISPLAY_MATH,
        replace: Replace::Template("<tex>${1}</tex>"),
    },
    Rule {
        name: "dollar_math",
        pattern: &DOLLAR_MATH,
        replace: Replace::Template("<tex>${1}</tex>"),
    },
    Rule {
        name: "italic",
        pattern: &TEX_OR_ASTERISK_SPAN,
        replace: Replace::With(emphasis_i_outside_tex),
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
    Rule {
        name: "paragraph_break",
        pattern: &PARAGRAPH_BREAK,
        replace: Replace::Template("<br></br><br></br>"),
    },
    Rule {
        name: "line_break",
        pattern: &LINE_BREAK,
        replace: Replace::Template("<br></br>"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn markup(text: &str) -> String {
        apply_all(&MARKUP_RULES, &escape_markup(text))
    }

    #[test]
    fn escapes_all_five_metacharacters() {
        assert_eq!(
            escape_markup(r#"a < b && c > "d" 'e'"#),
            "a &lt; b &amp;&amp; c &gt; &quot;d&quot; &apos;e&apos;"
        );
    }

    #[test]
    fn escaping_clean_text_is_idempotent() {
        let text = "plain text with (parens) and $x$";
        let once = escape_markup(text);
        assert_eq!(once, text);
        assert_eq!(escape_markup(&once), once);
    }

    #[test]
    fn math_becomes_tex() {
        assert_eq!(markup(r"find \(v_0\) and $t$"), "find <tex>v_0</tex> and <tex>t</tex>");
        assert_eq!(markup(r"\[F = ma\]"), "<tex>F = ma</tex>");
        assert_eq!(markup("$$x^2$$"), "<tex>x^2</tex>");
    }

    #[test]
    fn math_comparison_is_escaped_inside_tex() {
        assert_eq!(markup(r"\(a < b\)"), "<tex>a &lt; b</tex>");
    }

    #[test]
    fn options_become_bold() {
        assert_eq!(markup(r"\(A\) 2 kN"), "<b>A</b> 2 kN");
        assert_eq!(markup("$C$ 4 kN"), "<b>C</b> 4 kN");
    }

    #[test]
    fn answer_phrase_after_option_rewrite() {
        assert_eq!(
            markup(r"***The answer is \(B\).***"),
            "<b>The answer is (B).</b>"
        );
    }

    #[test]
    fn paragraph_and_line_breaks() {
        assert_eq!(markup("a\n\nb\nc"), "a<br></br><br></br>b<br></br>c");
    }

    #[test]
    fn emphasis_and_labels() {
        assert_eq!(
            markup("**Solution: **mass *m*"),
            "<b>Solution:</b> mass <i>m</i>"
        );
    }

    #[test]
    fn asterisk_inside_math_does_not_pair_with_emphasis() {
        assert_eq!(
            markup(r"Find \(x^*\) where *x* is optimal"),
            "Find <tex>x^*</tex> where <i>x</i> is optimal"
        );
        assert_eq!(markup(r"\(a*b*c\) and *d*"), "<tex>a*b*c</tex> and <i>d</i>");
    }
}
