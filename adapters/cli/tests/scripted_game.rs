use std::{
    io::Write,
    process::{Command, Stdio},
};

fn play(script: &str, args: &[&str]) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_frontline"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch frontline binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    let output = child.wait_with_output().expect("frontline did not exit");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn scripted_move_hands_the_turn_to_russia() {
    let (success, stdout, stderr) = play("1 1\n2 1\nquit\n", &[]);

    assert!(success, "frontline failed: {stderr}");
    assert!(stdout.starts_with("Welcome to Frontline.\n"));
    assert!(stdout.contains("Turn: Germany (movement) - Weather: Summer"));
    assert!(stdout.contains("> selected g1"));
    assert!(stdout.contains("> g1 moved (1, 1) -> (2, 1); turn passes to Russia"));
    assert!(stdout.contains("Turn: Russia (movement) - Weather: Summer"));
    assert!(stderr.contains("unit moved"), "logs go to stderr: {stderr}");
}

#[test]
fn passing_twice_advances_the_weather() {
    let (success, stdout, _) = play("end\nend\n", &["--log", "off"]);

    assert!(success);
    assert!(stdout.contains("> turn passes to Germany, round 2 begins in Fall"));
    assert!(stdout.contains("Turn: Germany (movement) - Weather: Fall"));
}

#[test]
fn missing_scenario_file_is_reported() {
    let (success, _, stderr) = play("", &["--scenario", "/nonexistent/frontline.toml"]);

    assert!(!success);
    assert!(stderr.contains("/nonexistent/frontline.toml"));
}
