//! Stylesheets loaded from disk and used for rendering.

use std::io::Write;
use std::sync::Arc;

use console::Color;
use tempfile::NamedTempFile;
use tincture::{args, CollectingSink, StyleAttributes, Styles, StylesheetError, Tincture};

const STYLESHEET: &str = r##"
title:
  fg: cyan
  bold: true
warning: "yellow italic"
muted:
  dim: true
disabled: muted
accent:
  fg: "#ff6b35"
"##;

fn write_stylesheet(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn renders_with_styles_from_file() {
    let file = write_stylesheet(STYLESHEET);
    let styles = Styles::from_file(file.path()).unwrap();
    assert_eq!(
        styles.names().collect::<Vec<_>>(),
        vec!["accent", "disabled", "muted", "title", "warning"]
    );

    let sink = Arc::new(CollectingSink::new());
    let tincture = Tincture::new(styles).with_sink(sink.clone());
    let text = tincture.format(
        "<title>%@</title> <warning>%d</warning> <disabled>off</disabled>",
        &args!["Build", 3],
    );

    assert_eq!(text.to_plain(), "Build 3 off");
    assert_eq!(
        text.attributes_at(0),
        Some(&StyleAttributes::new().fg(Color::Cyan).bold())
    );
    assert_eq!(
        text.attributes_at(6),
        Some(&StyleAttributes::new().fg(Color::Yellow).italic())
    );
    assert_eq!(
        text.attributes_at(8),
        Some(&StyleAttributes::new().dim())
    );
    assert!(sink.is_empty());
}

#[test]
fn code_styles_override_loaded_ones() {
    let file = write_stylesheet(STYLESHEET);
    let styles = Styles::from_file(file.path())
        .unwrap()
        .merge(Styles::new().add("title", StyleAttributes::new().underline()));

    let text = Tincture::new(styles).styled("<title>T</title>");
    assert_eq!(
        text.attributes_at(0),
        Some(&StyleAttributes::new().underline())
    );
}

#[test]
fn errors_name_the_file() {
    let file = write_stylesheet("title:\n  fg: nope\n");
    let err = Styles::from_file(file.path()).unwrap_err();

    assert!(matches!(err, StylesheetError::InvalidColor { .. }));
    assert_eq!(err.path(), Some(file.path()));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn dangling_alias_is_rejected() {
    let file = write_stylesheet("title: missing_style\n");
    let err = Styles::from_file(file.path()).unwrap_err();
    assert!(matches!(err, StylesheetError::AliasError { .. }));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Styles::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, StylesheetError::Load { .. }));
}
