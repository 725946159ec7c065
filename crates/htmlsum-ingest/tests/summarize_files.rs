//! End-to-end summaries of documents written to disk.

use std::path::{Path, PathBuf};

use htmlsum_core::{Field, SummarizerOptions, SummaryDefaults};
use htmlsum_ingest::{summarize_file, Summarizer};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Release notes</title>
  <meta charset="utf-8">
  <meta name="Author" content="Docs Team">
  <meta name="description" content="What changed in this release">
  <meta name="keywords" content="release, changelog">
  <meta http-equiv="Last-Modified" content="Wed, 14 Oct 2026 08:00:00 GMT">
  <style>h1 { color: red; }</style>
</head>
<body>
  <!-- <h1>commented out</h1> -->
  <h2>Overview</h2>
  <h1>
     Version   2.0
  </h1>
  <p>
     This release   rewrites the parser.
  </p>
  <p>Second paragraph.</p>
</body>
</html>
"#;

fn write_page(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_full_page_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(dir.path(), "release.html", PAGE);

    let options = SummarizerOptions::new(&path).with_fields(["KEYWORDS", "TITLE"]);
    let s = Summarizer::with_defaults(options, SummaryDefaults::new()).unwrap();
    let record = s.summary().expect("summary should succeed");

    assert_eq!(record.field(Field::Title), Some("Release notes"));
    assert_eq!(record.field(Field::Author), Some("Docs Team"));
    assert_eq!(record.field(Field::Description), Some("What changed in this release"));
    assert_eq!(record.field(Field::Headline), Some("Version 2.0"));
    assert_eq!(record.field(Field::FirstPara), Some("This release rewrites the parser."));
    assert_eq!(
        record.field(Field::LastModifiedMeta),
        Some("Wed, 14 Oct 2026 08:00:00 GMT")
    );
    assert_eq!(record.field(Field::CreatedMeta), record.field(Field::LastModifiedMeta));
    assert_ne!(record.field(Field::LastModifiedFile), Some("[Not available]"));
    assert_eq!(record.get("KEYWORDS"), Some("release, changelog"));
    assert_eq!(record.len(), Field::ALL.len() + 1);
}

#[test]
fn test_bare_document_is_all_placeholder_except_file_times() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(dir.path(), "bare.html", "<html><body><div>hi</div></body></html>");

    let record = summarize_file(&path, "N/A", &[]).unwrap();
    for field in [
        Field::Title,
        Field::Author,
        Field::Description,
        Field::Headline,
        Field::FirstPara,
    ] {
        assert_eq!(record.field(field), Some("N/A"), "{field}");
    }
    assert_eq!(
        record.field(Field::LastModifiedMeta),
        record.field(Field::LastModifiedFile)
    );
    assert!(record.iter().all(|(_, v)| !v.is_empty()));
}

#[test]
fn test_options_bundle_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(dir.path(), "bundle.html", "<h2>Bar</h2>");
    let json = serde_json::json!({
        "PATH": path,
        "NOT_AVAILABLE": "(none)",
        "FIELDS": ["ROBOTS"],
    })
    .to_string();

    let options = SummarizerOptions::from_json(&json).unwrap();
    let s = Summarizer::with_defaults(options, SummaryDefaults::new()).unwrap();
    let record = s.summary().unwrap();
    assert_eq!(record.field(Field::Headline), Some("Bar"));
    assert_eq!(record.get("ROBOTS"), Some("(none)"));
    assert_eq!(s.placeholder(), "(none)");
}

#[test]
fn test_repeated_summaries_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(dir.path(), "same.html", PAGE);

    let mut s = Summarizer::with_defaults(SummarizerOptions::new(&path), SummaryDefaults::new())
        .unwrap();
    let first = s.summary().cloned().unwrap();
    let second = s.get_summary(Some(&path)).unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_load_file_nonexistent() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing-here.html");

    let mut s = Summarizer::with_defaults(SummarizerOptions::new(&missing), SummaryDefaults::new())
        .unwrap();
    assert!(s.summary().is_none());
    let err = s.load_file(None).unwrap_err();
    assert!(err.to_string().contains("nothing-here.html"));
    assert!(s.summary().is_none());
}
