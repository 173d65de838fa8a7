//! Sample org-drill documents.

/// Generate an org document with `num_cards` well-formed cards.
///
/// Card ids start at 1. Every card has a properties block.
pub fn sample_org_content(num_cards: usize) -> String {
    let mut doc = String::from("#+TITLE: Exam drill\n\n* Problems\n");
    for i in 1..=num_cards {
        doc.push_str(&format!(
            "** TODO {} Problem {} :drill:\n:PROPERTIES:\n:ID: card-{}\n:END:\nWhat is \\(x_{}\\)?\n****\nIt is *x*.\n\n",
            i, i, i, i
        ));
    }
    doc
}

/// The worked example used across the tests: one card with two images in
/// the question, one in the answer, and a card missing its divider.
pub fn exam_with_images() -> &'static str {
    "* Exam\n\
     *** 3 :drill:\n\
     A beam is loaded as in [[./images/7.png]] and [[./images/8.png]]. Find \\(M\\).\n\
     \\(A\\) 10 kNm\n\
     \\(B\\) 20 kNm\n\
     ****\n\
     **Step 1: **Sum moments.\n\
     \n\
     [[./images/9.png]]\n\
     \n\
     ***The answer is \\(B\\).***\n\
     *** 4 :drill:\n\
     This card has no divider.\n\
     *** 5 :drill:\n\
     Which material is *ductile*?\n\
     ****\n\
     Steel & copper.\n"
}
