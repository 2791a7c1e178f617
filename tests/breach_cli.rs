use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn breach_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_breach").expect("breach test binary not built")
}

#[test]
fn breach_help_mentions_name() {
    let output = Command::new(breach_bin())
        .arg("--help")
        .output()
        .expect("run breach --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Breach Protocol"));
    assert!(combined.contains("--grid-size"));
}

#[test]
fn breach_rejects_sequence_longer_than_buffer() {
    let output = Command::new(breach_bin())
        .args(["--buffer-size", "2", "--sequence-length", "3"])
        .output()
        .expect("run breach with invalid sizes");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("--sequence-length"));
}

#[test]
fn breach_rejects_tiny_grid() {
    let output = Command::new(breach_bin())
        .args(["--grid-size", "1"])
        .output()
        .expect("run breach with a 1x1 grid");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--grid-size"));
}
