#![cfg(unix)]

use std::collections::BTreeMap;

use p5k_core::config::BuilderConfig;
use p5k_ops::ops_build::{BuildService, ExternalBuilder};
use p5k_util::errors::P5kError;
use tempfile::TempDir;

fn sh_builder(script: &str, artifact: &str) -> BuilderConfig {
    BuilderConfig {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        artifact: artifact.to_string(),
        env: BTreeMap::new(),
    }
}

fn build_message(result: Result<p5k_ops::ops_build::BuildResult, P5kError>) -> String {
    match result {
        Err(P5kError::Build { message }) => message,
        other => panic!("expected build failure, got {other:?}"),
    }
}

#[test]
fn builder_runs_in_project_root_and_returns_artifact() {
    let tmp = TempDir::new().unwrap();
    let config = sh_builder(
        "mkdir -p out/{profile} && touch out/{profile}/{target}.elf",
        "out/{profile}/{target}.elf",
    );
    let builder = ExternalBuilder::new(tmp.path(), config, false);

    let result = builder.build("p5k-core", "riscv32-kernel").unwrap();

    assert_eq!(
        result.outfile(),
        tmp.path().join("out/riscv32-kernel/p5k-core.elf")
    );
    assert!(result.outfile().is_file());
    assert_eq!(result.target, "p5k-core");
    assert_eq!(result.profile, "riscv32-kernel");
}

#[test]
fn builder_passes_configured_env() {
    let tmp = TempDir::new().unwrap();
    let mut config = sh_builder("touch \"$KERNEL_NAME\"", "kernel.elf");
    config
        .env
        .insert("KERNEL_NAME".to_string(), "kernel.elf".to_string());
    let builder = ExternalBuilder::new(tmp.path(), config, true);

    let result = builder.build("p5k-core", "riscv32-kernel").unwrap();
    assert_eq!(result.outfile(), tmp.path().join("kernel.elf"));
}

#[test]
fn builder_nonzero_exit_includes_captured_stderr() {
    let tmp = TempDir::new().unwrap();
    let config = sh_builder("echo 'error: no such component' >&2; exit 2", "kernel.elf");
    let builder = ExternalBuilder::new(tmp.path(), config, false);

    let message = build_message(builder.build("p5k-core", "riscv32-kernel"));
    assert!(message.contains("`sh` exited with"), "got: {message}");
    assert!(message.contains("error: no such component"), "got: {message}");
}

#[test]
fn builder_success_without_artifact_is_build_failure() {
    let tmp = TempDir::new().unwrap();
    let config = sh_builder("true", "missing.elf");
    let builder = ExternalBuilder::new(tmp.path(), config, false);

    let message = build_message(builder.build("p5k-core", "riscv32-kernel"));
    assert!(message.contains("produced no artifact"), "got: {message}");
}

#[test]
fn builder_missing_program_is_build_failure() {
    let tmp = TempDir::new().unwrap();
    let config = BuilderConfig {
        program: "nonexistent_builder_xyz_123".to_string(),
        ..BuilderConfig::default()
    };
    let builder = ExternalBuilder::new(tmp.path(), config, false);

    let message = build_message(builder.build("p5k-core", "riscv32-kernel"));
    assert!(message.contains("nonexistent_builder_xyz_123"), "got: {message}");
}

#[test]
fn from_project_finds_config_in_ancestor() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("p5k.toml"),
        "[builder]\nprogram = \"sh\"\nargs = [\"-c\", \"touch k.elf\"]\nartifact = \"k.elf\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("src").join("p5k-core");
    std::fs::create_dir_all(&nested).unwrap();

    let builder = ExternalBuilder::from_project(&nested, false).unwrap();
    assert_eq!(builder.root(), tmp.path());

    let result = builder.build("p5k-core", "riscv32-kernel").unwrap();
    assert_eq!(result.outfile(), tmp.path().join("k.elf"));
}
