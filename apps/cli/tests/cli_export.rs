//! End-to-end tests for the drill-export binary.

mod common;

use std::fs::File;
use std::io::Read;

use predicates::prelude::*;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;
use drill_export::hashing::hash_bytes;

fn csv_records(text: &str) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(text.as_bytes())
        .records()
        .map(|r| r.expect("valid csv record"))
        .collect()
}

/// Test the worked example through the 3-column CSV.
#[test]
fn test_csv_worked_example() {
    let ctx = TestContext::new();
    ctx.write_document("*** 3 :drill:\nWhat is \\(x\\)?\n****\nIt is *x*.\n*** 4 :drill:\n...");

    ctx.command().args(["--format", "csv"]).assert().success();

    let csv = ctx.read_output("anki_import.csv");
    assert_eq!(
        csv,
        "\"Front\",\"Back\",\"Tags\"\n\"What is $x$?\",\"It is <em>x</em>.\",\"ME_Exam,Problem_3\"\n"
    );
    assert!(ctx.output().join("media_files_needed.txt").is_file());
    assert!(ctx.output().join("import_instructions.txt").is_file());
}

/// Test every well-formed card is extracted, in order.
#[test]
fn test_csv_many_cards_in_order() {
    let ctx = TestContext::new();
    ctx.write_document(&fixtures::sample_org_content(25));

    ctx.command().args(["-f", "csv"]).assert().success();

    let records = csv_records(&ctx.read_output("anki_import.csv"));
    assert_eq!(records.len(), 25);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(&record[2], format!("ME_Exam,Problem_{}", i + 1));
        assert_eq!(&record[0], format!("What is $x_{}$?", i + 1));
    }
}

/// Test a document without cards fails.
#[test]
fn test_zero_cards_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_document("* Notes\nNothing to drill here.\n");

    ctx.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no drill cards found"));
}

/// Test a missing input file fails with its path.
#[test]
fn test_missing_input_is_fatal() {
    let ctx = TestContext::new();

    ctx.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

/// Test the slotted CSV keeps the first image per side.
#[test]
fn test_slotted_first_image_wins() {
    let ctx = TestContext::new();
    ctx.write_document(fixtures::exam_with_images());
    ctx.write_image("7.png", b"seven");
    ctx.write_image("8.png", b"eight");

    ctx.command().args(["--format", "slotted"]).assert().success();

    let records = csv_records(&ctx.read_output("ankiapp_import.csv"));
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][3], "7.png");
    assert_eq!(&records[0][4], "9.png");
    assert_eq!(&records[0][5], "");
    assert_eq!(&records[1][3], "");
    assert!(!records[0][0].contains("[["));

    assert!(ctx.output().join("media/7.png").is_file());
    assert!(ctx.output().join("media/8.png").is_file());
    let report = ctx.read_output("image_report_slotted.txt");
    assert!(report.contains("- 9.png"));
}

/// Test the XML deck points at hashed blobs and ships them in the archive.
#[test]
fn test_xml_package_uses_content_hashes() {
    let ctx = TestContext::new();
    ctx.write_document(fixtures::exam_with_images());
    ctx.write_image("7.png", b"seven");
    ctx.write_image("8.png", b"eight");

    ctx.command().args(["--format", "xml"]).assert().success();

    let hash7 = hash_bytes(b"seven");
    let xml = ctx.read_output("anki_import.xml");
    assert!(xml.contains(&format!(r#"<img id="{}" />"#, hash7)));
    assert!(xml.contains(r#"<img id="9.png" />"#));
    assert!(xml.contains("<b>The answer is (B).</b>"));
    assert!(xml.contains("Steel &amp; copper."));
    assert!(!xml.contains("Problem_4"));
    roxmltree::Document::parse(&xml).expect("deck XML is well-formed");

    let mut archive =
        zip::ZipArchive::new(File::open(ctx.output().join("anki_import.zip")).unwrap()).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert!(names.contains(&"anki_import.xml".to_string()));
    assert!(names.contains(&"blobs/7.png".to_string()));
    assert!(names.contains(&format!("blobs/{}", hash7)));
    assert!(names.contains(&format!("blobs/{}.png", hash7)));

    let mut zipped_xml = String::new();
    archive
        .by_name("anki_import.xml")
        .unwrap()
        .read_to_string(&mut zipped_xml)
        .unwrap();
    assert_eq!(zipped_xml, xml);

    assert!(ctx.output().join("preview.html").is_file());
    assert!(ctx.output().join("preview_images/7.png").is_file());
    assert!(ctx.read_output("image_report_xml.txt").contains("- 9.png"));
    assert!(ctx.output().join("README.txt").is_file());
}

/// Test --dump-cards prints the converted cards.
#[test]
fn test_dump_cards_prints_json() {
    let ctx = TestContext::new();
    ctx.write_document(fixtures::exam_with_images());

    let output = ctx
        .command()
        .args(["--format", "csv", "--dump-cards"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["dialect"], "csv");
    assert_eq!(dump["config"]["deck_name"], "Mechanical Engineering Exam");
    assert_eq!(dump["skipped"][0]["id"], "4");
    assert_eq!(dump["skipped"][0]["reason"], "missing_divider");

    let cards = &dump["cards"];
    let ids: Vec<_> = cards
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["3", "5"]);
    assert_eq!(cards[0]["front"]["media"], serde_json::json!(["7.png", "8.png"]));
}

/// Test all formats land in one directory.
#[test]
fn test_all_formats() {
    let ctx = TestContext::new();
    ctx.write_document(&fixtures::sample_org_content(3));

    ctx.command().assert().success();

    for name in [
        "anki_import.csv",
        "ankiapp_import.csv",
        "anki_import.xml",
        "anki_import.zip",
        "sample_cards_csv.txt",
        "sample_cards_slotted.txt",
        "sample_cards_xml.txt",
    ] {
        assert!(ctx.output().join(name).is_file(), "{name} missing");
    }
}

/// Test each image-aware format keeps its own image report.
#[test]
fn test_all_formats_keep_separate_image_reports() {
    let ctx = TestContext::new();
    ctx.write_document(fixtures::exam_with_images());
    ctx.write_image("7.png", b"seven");

    ctx.command().assert().success();

    for name in ["image_report_slotted.txt", "image_report_xml.txt"] {
        let report = ctx.read_output(name);
        assert!(report.contains("- 9.png"), "{name} lost its missing list");
    }
    assert!(!ctx.output().join("image_report.txt").exists());
    assert!(!ctx.output().join("image_report_csv.txt").exists());
}

/// Test configuration is read from the environment.
#[test]
fn test_deck_name_from_env() {
    let ctx = TestContext::new();
    ctx.write_document(&fixtures::sample_org_content(1));

    ctx.command()
        .args(["-f", "xml"])
        .env("DRILL_DECK_NAME", "Statics & Dynamics")
        .env("DRILL_CATEGORY_TAG", "FE")
        .assert()
        .success();

    let xml = ctx.read_output("anki_import.xml");
    assert!(xml.contains(r#"<deck name="Statics &amp; Dynamics""#));
    assert!(xml.contains(r#"<card tags="FE,Problem_1">"#));
}
