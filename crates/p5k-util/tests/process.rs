use p5k_util::errors::P5kError;
use p5k_util::process::CommandBuilder;

#[test]
fn test_builder_captures_stdout() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_builder_preserves_argument_order() {
    let output = CommandBuilder::new("echo")
        .args(["-machine", "virt"])
        .arg("-nographic")
        .exec()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "-machine virt -nographic");
}

#[cfg(unix)]
#[test]
fn test_builder_with_env() {
    let output = CommandBuilder::new("sh")
        .arg("-c")
        .arg("echo $P5K_TEST_VAR")
        .env("P5K_TEST_VAR", "p5k_test_value")
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "p5k_test_value");
}

#[cfg(unix)]
#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("p5k_cwd_test.marker"), "ok").unwrap();

    let output = CommandBuilder::new("ls")
        .arg("p5k_cwd_test.marker")
        .cwd(tmp.path())
        .exec()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().contains("p5k_cwd_test.marker"));
}

#[cfg(unix)]
#[test]
fn test_builder_status_reports_exit_code() {
    let status = CommandBuilder::new("sh")
        .args(["-c", "exit 3"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(3));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    assert!(matches!(result, Err(P5kError::Io(_))));
}

#[test]
fn test_replace_nonexistent_program_returns_error() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123")
        .arg("-kernel")
        .replace();
    match result {
        Err(P5kError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_builder_display_quotes_whitespace() {
    let cmd = CommandBuilder::new("qemu-system-riscv32")
        .args(["-serial", "mon:stdio", "-kernel", "/tmp/my kernel.elf"]);
    assert_eq!(
        cmd.to_string(),
        "qemu-system-riscv32 -serial mon:stdio -kernel '/tmp/my kernel.elf'"
    );
}
