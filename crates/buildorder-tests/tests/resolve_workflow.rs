//! E2E tests for the resolve and check commands
//!
//! Manifests are written to real temporary directories and commands run
//! in-process through the same handlers the binary uses.

use anyhow::Result;
use buildorder_lib::application::{Commands, OutputFormat};
use buildorder_tests::{ManifestBuilder, TestWorkspace};

fn sample_manifest() -> Result<String> {
    ManifestBuilder::new()
        .target("A", &["B", "C"])
        .target("B", &["D"])
        .target("C", &["D", "E"])
        .target("D", &["E"])
        .target("E", &[])
        .build()
}

#[test]
fn e2e_resolve_sample_manifest() -> Result<()> {
    let workspace = TestWorkspace::with_manifest(&sample_manifest()?)?;

    let output = workspace.run(Commands::Resolve {
        format: OutputFormat::Text,
        prerequisites_first: false,
    })?;

    assert!(output.result.is_ok());
    assert_eq!(output.stdout, "Build Order:\nA\nB\nC\nD\nE\n");
    Ok(())
}

#[test]
fn e2e_resolve_json_and_prerequisites_first() -> Result<()> {
    let workspace = TestWorkspace::with_manifest(&sample_manifest()?)?;

    assert_eq!(workspace.resolve_json(false)?, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(workspace.resolve_json(true)?, vec!["E", "D", "C", "B", "A"]);
    Ok(())
}

#[test]
fn e2e_phantom_dependencies_are_skipped() -> Result<()> {
    let manifest = ManifestBuilder::new()
        .target("app", &["libc", "core"])
        .target("core", &["libc"])
        .build()?;
    let workspace = TestWorkspace::with_manifest(&manifest)?;

    assert_eq!(workspace.resolve_json(false)?, vec!["app", "core"]);
    Ok(())
}

#[test]
fn e2e_redeclared_target_uses_latest_dependencies() -> Result<()> {
    let manifest = ManifestBuilder::new()
        .target("a", &["b"])
        .target("b", &["a"])
        .target("b", &[])
        .build()?;
    let workspace = TestWorkspace::with_manifest(&manifest)?;

    assert_eq!(workspace.resolve_json(false)?, vec!["a", "b"]);
    Ok(())
}

#[test]
fn e2e_target_names_needing_toml_escapes() -> Result<()> {
    let bell = "bell\u{7}";
    let quoted = "say \"hi\"\\now";
    let manifest = ManifestBuilder::new()
        .target("ünïcode", &[bell, "tab\there"])
        .target(bell, &[quoted])
        .target(quoted, &["line\nbreak"])
        .build()?;
    let workspace = TestWorkspace::with_manifest(&manifest)?;

    assert_eq!(workspace.resolve_json(false)?, vec!["ünïcode", bell, quoted]);
    Ok(())
}

#[test]
fn e2e_cycle_is_reported_by_resolve_and_check() -> Result<()> {
    let manifest = ManifestBuilder::new()
        .target("compile", &["link"])
        .target("link", &["package"])
        .target("package", &["compile"])
        .build()?;
    let workspace = TestWorkspace::with_manifest(&manifest)?;

    let resolve = workspace.run(Commands::default())?;
    let err = resolve.result.unwrap_err();
    assert!(resolve.stdout.is_empty());
    assert_eq!(err.to_string(), "Cycle: compile → link → package → compile");

    let check = workspace.run(Commands::Check)?;
    assert_eq!(
        check.result.unwrap_err().to_string(),
        "Cycle detected: compile → link → package → compile"
    );
    Ok(())
}

#[test]
fn e2e_empty_manifest() -> Result<()> {
    let workspace = TestWorkspace::with_manifest("")?;

    let output = workspace.run(Commands::default())?;
    assert!(output.result.is_ok());
    assert_eq!(output.stdout, "Build Order:\n");

    assert!(workspace.manifest_path.exists());
    Ok(())
}
