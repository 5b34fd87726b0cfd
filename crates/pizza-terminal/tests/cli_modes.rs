// crates/pizza-terminal/tests/cli_modes.rs
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn script_mode_ignores_a_broken_config_env_var() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let mut child = Command::new(env!("CARGO_BIN_EXE_pizza-terminal"))
        .args(["--script", "-"])
        .env("PIZZA_CONFIG", &missing)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"A, Small, , , Pickup\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim_end(),
        "P, 0, Small pizza - no toppings (Pickup)"
    );
}
