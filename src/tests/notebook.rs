use super::*;
use crate::notebook::{read_title, strip_heading};
use crate::{extract_title_with, CellType, Error, Notebook, Source, TitleError};
use pretty_assertions::assert_eq;

fn title_of(doc: &Value) -> Result<String, TitleError> {
    doc.to_string().parse::<Notebook>().unwrap().title()
}

#[test]
fn heading_markers_stripped() {
    let doc = notebook(vec![markdown(&["# Hello\n", "body\n"])]);
    assert_eq!(title_of(&doc), Ok("Hello".to_string()));
}

#[test]
fn deeper_headings_and_padding() {
    let doc = notebook(vec![markdown(&["   ### Deep dive   \n"])]);
    assert_eq!(title_of(&doc), Ok("Deep dive".to_string()));

    let doc = notebook(vec![markdown(&["#NoSpace"])]);
    assert_eq!(title_of(&doc), Ok("NoSpace".to_string()));
}

#[test]
fn plain_first_line_kept() {
    let doc = notebook(vec![markdown(&["Just a sentence.\n"])]);
    assert_eq!(title_of(&doc), Ok("Just a sentence.".to_string()));
}

#[test]
fn inner_hashes_kept() {
    let doc = notebook(vec![markdown(&["## C# for #1 fans\n"])]);
    assert_eq!(title_of(&doc), Ok("C# for #1 fans".to_string()));
}

#[test]
fn code_cells_skipped() {
    let doc = notebook(vec![
        code(&["# not a title\n"]),
        json!({"cell_type": "raw", "source": ["# raw\n"]}),
        markdown(&["# Real title\n"]),
    ]);
    assert_eq!(title_of(&doc), Ok("Real title".to_string()));
}

#[test]
fn only_first_markdown_cell_consulted() {
    let doc = notebook(vec![markdown(&["##  \n"]), markdown(&["# Second\n"])]);
    assert_eq!(title_of(&doc), Ok(String::new()));
}

#[test]
fn no_markdown_cell() {
    let doc = notebook(vec![code(&["print('hi')\n"])]);
    assert_eq!(title_of(&doc), Err(TitleError::NoMarkdownCell));

    assert_eq!(
        "{}".parse::<Notebook>().unwrap().title(),
        Err(TitleError::NoMarkdownCell)
    );
}

#[test]
fn empty_source_is_a_failure() {
    let doc = notebook(vec![markdown(&[]), markdown(&["# Later\n"])]);
    assert_eq!(title_of(&doc), Err(TitleError::EmptySource));

    let doc = notebook(vec![json!({"cell_type": "markdown", "metadata": {}})]);
    assert_eq!(title_of(&doc), Err(TitleError::EmptySource));

    let doc = notebook(vec![json!({"cell_type": "markdown", "source": ""})]);
    assert_eq!(title_of(&doc), Err(TitleError::EmptySource));
}

#[test]
fn string_source() {
    let doc = notebook(vec![json!({
        "cell_type": "markdown",
        "source": "# From a string\nsecond line\n",
    })]);
    assert_eq!(title_of(&doc), Ok("From a string".to_string()));
}

#[test]
fn odd_cells_after_title_ignored() {
    let odd_cells = [
        json!({"cell_type": "code", "source": null}),
        json!({"cell_type": null, "source": ["x\n"]}),
        json!({"cell_type": "code", "source": [1]}),
        json!(42),
        json!(["markdown", ["# list"]]),
    ];

    for odd in odd_cells {
        let doc = notebook(vec![markdown(&["# Title\n"]), odd.clone()]);
        assert_eq!(title_of(&doc), Ok("Title".to_string()), "{}", odd);
    }
}

#[test]
fn odd_cells_before_title_skipped() {
    let doc = notebook(vec![
        json!("not a cell"),
        json!({"cell_type": 7, "source": "# seven"}),
        json!({"cell_type": "markdown", "source": {"text": "# nested"}}),
        markdown(&["# Later\n"]),
    ]);
    assert_eq!(title_of(&doc), Err(TitleError::EmptySource));

    let doc = notebook(vec![json!(null), json!(true), markdown(&["# Found\n"])]);
    assert_eq!(title_of(&doc), Ok("Found".to_string()));
}

#[test]
fn markdown_cell_with_bad_source() {
    for source in [json!(null), json!([1, "# two"]), json!(3)] {
        let doc = notebook(vec![json!({"cell_type": "markdown", "source": source})]);
        assert_eq!(title_of(&doc), Err(TitleError::EmptySource));
    }
}

#[test]
fn cell_model() {
    let nb: Notebook = r#"{"cells": [
        {"cell_type": "markdown", "source": ["a\n", "b"]},
        {"cell_type": "heading", "source": "x"},
        {"source": []}
    ]}"#
    .parse()
    .unwrap();

    assert_eq!(nb.cells.len(), 3);
    assert_eq!(nb.cells[0].cell_type, CellType::Markdown);
    assert_eq!(
        nb.cells[0].source,
        Source::Lines(vec!["a\n".to_string(), "b".to_string()])
    );
    assert_eq!(nb.cells[1].cell_type, CellType::Unknown);
    assert_eq!(nb.cells[1].source.first_line(), Some("x"));
    assert_eq!(nb.cells[2].cell_type, CellType::Unknown);
    assert_eq!(nb.cells[2].source.first_line(), None);
}

#[test]
fn strip_heading_edges() {
    assert_eq!(strip_heading("#"), "");
    assert_eq!(strip_heading(" # # Twice"), "# Twice");
    assert_eq!(strip_heading("\t#\tTabbed\r\n"), "Tabbed");
    assert_eq!(strip_heading(""), "");
}

#[test]
fn read_title_from_file() {
    let dir = tempfile::tempdir().unwrap();
    write_titled(dir.path(), "intro.ipynb", "Introduction");

    let path = dir.path().join("intro.ipynb");
    assert_eq!(read_title(&path).unwrap(), "Introduction");
}

#[test]
fn read_title_errors_carry_path() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.ipynb");
    match read_title(&missing) {
        Err(Error::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("unexpected {:?}", other),
    }

    let broken = dir.path().join("broken.ipynb");
    fs::write(&broken, "{ not json").unwrap();
    match read_title(&broken) {
        Err(err @ Error::Parse { .. }) => assert_eq!(err.path(), broken.as_path()),
        other => panic!("unexpected {:?}", other),
    }

    let untitled = dir.path().join("untitled.ipynb");
    write_notebook(dir.path(), "untitled.ipynb", &notebook(vec![]));
    match read_title(&untitled) {
        Err(Error::Title { source, .. }) => assert_eq!(source, TitleError::NoMarkdownCell),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn malformed_file_reports_and_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ipynb");
    fs::write(&path, "this is not json").unwrap();

    let mut diagnostics = Vec::new();
    assert_eq!(extract_title_with(&path, &mut diagnostics), None);

    let diagnostics = String::from_utf8(diagnostics).unwrap();
    assert!(diagnostics.starts_with("Error reading "), "{}", diagnostics);
    assert!(
        diagnostics.contains(path.to_str().unwrap()),
        "{}",
        diagnostics
    );
    assert!(diagnostics.ends_with('\n'));
    assert_eq!(diagnostics.lines().count(), 1);
}

#[test]
fn missing_title_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_notebook(dir.path(), "code.ipynb", &notebook(vec![code(&["x = 1\n"])]));

    let mut diagnostics = Vec::new();
    let title = extract_title_with(&dir.path().join("code.ipynb"), &mut diagnostics);
    assert_eq!(title, None);
    assert!(String::from_utf8(diagnostics)
        .unwrap()
        .contains("no markdown cell found"));
}

#[test]
fn empty_title_is_not_absent() {
    let dir = tempfile::tempdir().unwrap();
    write_notebook(
        dir.path(),
        "hashes.ipynb",
        &notebook(vec![markdown(&["###\n"])]),
    );

    let mut diagnostics = Vec::new();
    let title = extract_title_with(&dir.path().join("hashes.ipynb"), &mut diagnostics);
    assert_eq!(title, Some(String::new()));
    assert!(diagnostics.is_empty());
}

#[test]
fn extraction_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    write_titled(dir.path(), "same.ipynb", "Same");
    let path = dir.path().join("same.ipynb");
    let before = fs::read(&path).unwrap();

    assert_eq!(
        extract_title_with(&path, &mut Vec::new()),
        Some("Same".to_string())
    );
    assert_eq!(fs::read(&path).unwrap(), before);
}
