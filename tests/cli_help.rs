use std::process::Command;

#[test]
fn help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_hippo"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["deploy", "secret", "envs"] {
        assert!(stdout.contains(command), "missing '{command}' in:\n{stdout}");
    }
}

#[test]
fn version_matches_package() {
    let output = Command::new(env!("CARGO_BIN_EXE_hippo"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("hippo {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn secret_set_without_pairs_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_hippo"))
        .args(["secret", "set", "dev", "acme"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
