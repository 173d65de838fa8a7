//! HTML preview of the source cards, rendered with MathJax.

use drill_core::media::{self, MarkerSyntax};
use drill_core::{escape_markup, ExportConfig, RawCard};
use std::fmt::Write;

/// Directory, relative to the preview page, holding copied images.
pub const PREVIEW_IMAGES_DIR: &str = "preview_images";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title} Preview</title>
    <style>
        body { font-family: 'Helvetica', sans-serif; margin: 20px; background: #f5f5f5; }
        .card { border: 1px solid #ccc; margin: 15px 0; padding: 15px; background: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .card-header { background: #2c3e50; color: white; padding: 10px; margin: -15px -15px 15px; }
        .question { margin-bottom: 20px; }
        .answer { background: #f9f9f9; padding: 15px; border-left: 4px solid #2980b9; }
        img { max-width: 100%; border: 1px solid #ddd; }
        hr { border: 0; height: 1px; background: #ddd; margin: 20px 0; }
    </style>
    <script type="text/x-mathjax-config">
        MathJax.Hub.Config({
            tex2jax: {inlineMath: [['$','$'], ['\\(','\\)']]}
        });
    </script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.5/MathJax.js?config=TeX-AMS_HTML"></script>
</head>
<body>
    <h1>{title}</h1>
    <p>Preview of converted flashcards with LaTeX equations and diagrams</p>
"#;

fn render_side(text: &str, alt: &str) -> String {
    let escaped = escape_markup(text);
    let with_images = media::rewrite_markers(&escaped, MarkerSyntax::Lenient, |name| {
        format!(r#"<img src="{}/{}" alt="{}">"#, PREVIEW_IMAGES_DIR, name, alt)
    });
    with_images.replace("\n\n", "<br><br>").replace('\n', "<br>")
}

/// Render the preview page from the cards as they appear in the source.
pub fn render_preview(cards: &[RawCard], config: &ExportConfig) -> String {
    let title = escape_markup(&config.deck_name);
    let mut html = HEAD.replace("{title}", &title);

    for card in cards {
        let _ = write!(
            html,
            concat!(
                "<div class=\"card\">",
                "<div class=\"card-header\"><h3>Problem {id}</h3></div>",
                "<div class=\"question\"><strong>Question:</strong><br>{front}</div><hr>",
                "<div class=\"answer\"><strong>Solution:</strong><br>{back}</div>",
                "</div>\n"
            ),
            id = escape_markup(&card.id),
            front = render_side(&card.question, "Question diagram"),
            back = render_side(&card.answer, "Solution diagram"),
        );
    }

    html.push_str("</body></html>\n");
    html
}
