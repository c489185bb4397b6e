//! # reportfs Library Behaviour Tests
//!
//! File: cli/tests/properties.rs
//!
//! ## Overview
//!
//! Exercises the public library API end to end: gzip round trips, appends,
//! line splitting, CSV conversion and rendering-mode resolution.
//!

use reportfs::common::fs::FileHelper;
use reportfs::core::config::LineSeparator;
use reportfs::report::{
    rendering_mode_from_resource, to_csv, Cell, DataSet, MemoryResourceProvider, RendererKind,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_round_trips_leave_no_sibling() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let helper = FileHelper::new();
    let text = "line one\nlínea dos\n";
    let bytes: Vec<u8> = (0..=255u8).collect();

    for name in ["report.txt", "report.txt.gz"] {
        let path = dir.path().join(name);
        helper.write_string(&path, text)?;
        assert_eq!(helper.read_string(&path)?, text);
    }
    for name in ["blob.bin", "blob.bin.gz"] {
        let path = dir.path().join(name);
        helper.write_bytes(&path, &bytes)?;
        assert_eq!(helper.read_bytes(&path)?, bytes);
    }

    let mut names: Vec<String> = fs::read_dir(dir.path())?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(
        names,
        vec!["blob.bin", "blob.bin.gz", "report.txt", "report.txt.gz"]
    );
    Ok(())
}

#[test]
fn test_abc_bytes_scenario() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("x.gz");
    let helper = FileHelper::new();
    helper.write_bytes(&path, &[0x41, 0x42, 0x43])?;
    assert_eq!(helper.read_bytes(&path)?, vec![0x41, 0x42, 0x43]);
    assert!(!dir.path().join("x").exists());
    Ok(())
}

#[test]
fn test_appends_become_lines() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let helper = FileHelper::new();
    let path = dir.path().join("audit.log.gz");
    let entries: Vec<String> = (1..=5).map(|i| format!("entry {}", i)).collect();
    for entry in &entries {
        helper.append_string(&path, entry)?;
    }
    assert_eq!(helper.read_lines(&path)?, entries);
    assert_eq!(
        helper.read_string(&path)?,
        entries.join(LineSeparator::platform())
    );
    Ok(())
}

#[test]
fn test_joined_content_splits_back() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let helper = FileHelper::new();
    let path = dir.path().join("parts.txt");
    let parts = ["alpha", "beta, gamma", "", "delta"];
    helper.write_string(&path, &parts.join(LineSeparator::platform()))?;
    assert_eq!(helper.read_lines(&path)?, parts);
    Ok(())
}

#[test]
fn test_to_csv_matches_rows() -> anyhow::Result<()> {
    let ds = DataSet::new(["id", "name"])
        .with_row(vec![Cell::Integer(1), "Ana".into()])?
        .with_row(vec![Cell::Integer(2), "Bo".into()])?;
    assert_eq!(to_csv(&ds)?, "id,name\n1,Ana\n2,Bo\n");
    Ok(())
}

#[test]
fn test_rendering_mode_resolution() -> anyhow::Result<()> {
    let provider = MemoryResourceProvider::new()
        .with_resource("foo.xls", "<Workbook/>")
        .with_resource("foo.txt", "plain")
        .with_resource("foo.odt", "other");

    let xls = rendering_mode_from_resource("Spreadsheet", "foo.xls", &provider)?;
    assert_eq!(xls.extension, "xls");
    assert_eq!(xls.renderer.kind(), RendererKind::ExcelTemplate);

    for name in ["foo.txt", "foo.odt"] {
        let mode = rendering_mode_from_resource("Text", name, &provider)?;
        assert_eq!(mode.renderer.kind(), RendererKind::TextTemplate);
        let design = mode.renderer.design(None).expect("fixed design");
        assert_eq!(design.template().unwrap().content_type, "text/plain");
    }
    Ok(())
}
