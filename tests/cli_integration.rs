use serde_json::Value;
use std::process::Command;

const ZERO_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mnemonic-checksum"));
    cmd.env_remove("MNEMONIC_CHECKSUM_DEBUG")
        .env_remove("MNEMONIC_CHECKSUM_JSON");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let output = cli().arg("--json").args(args).output().expect("cli runs");
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    serde_json::from_str(&stdout).expect("stdout is valid json")
}

#[test]
fn generated_mnemonic_validates() {
    for words in ["12", "15", "18", "21", "24"] {
        let generated = run_json(&["generate", "--words", words]);
        assert_eq!(generated["success"], true);
        let phrase = generated["data"]["mnemonic"].as_str().expect("mnemonic string");
        assert_eq!(phrase.split(' ').count().to_string(), words);

        let validated = run_json(&["validate", phrase]);
        assert_eq!(validated["success"], true, "{:?}", validated);
        assert_eq!(validated["data"]["valid"], true);
        assert_eq!(
            validated["data"]["entropy_hex"],
            generated["data"]["entropy_hex"]
        );
    }
}

#[test]
fn validate_prints_labeled_steps() {
    let words: Vec<&str> = ZERO_MNEMONIC.split(' ').collect();
    let output = cli().arg("validate").args(&words).output().expect("cli runs");
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Binary representation: "));
    assert_eq!(lines[2], "Extracted checksum: 0011");
    assert_eq!(lines[3], "Hex of the entropy: 00000000000000000000000000000000");
    assert_eq!(lines[5], "Recalculated checksum: 0011");
    assert_eq!(lines[6], "Checksum is valid");
}

#[test]
fn invalid_checksum_is_a_verdict_not_an_error() {
    let phrase = ZERO_MNEMONIC.replace("about", "abandon");
    let output = cli().args(["validate", phrase.as_str()]).output().expect("cli runs");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("Checksum is invalid"));
}

#[test]
fn unknown_word_fails_with_message() {
    let output = cli()
        .args(["validate", "abandon", "notaword"])
        .output()
        .expect("cli runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Word 'notaword' at position 1"));
}

#[test]
fn unknown_word_json_envelope() {
    let response = run_json(&["validate", "notaword"]);
    assert_eq!(response["success"], false);
    assert_eq!(response["error"]["code"], "unknown_word");
}

#[test]
fn checksum_command() {
    let response = run_json(&["checksum", "00000000000000000000000000000000"]);
    assert_eq!(response["data"]["checksum"], "0011");
    assert_eq!(response["data"]["entropy_bits"], 128);

    let output = cli().args(["checksum", "xyz"]).output().expect("cli runs");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn bits_command() {
    let response = run_json(&["bits", "abandon", "about", "zoo"]);
    assert_eq!(response["data"]["words"][1]["bits"], "00000000011");
    assert_eq!(response["data"]["binary"], "000000000000000000001111111111111");
    assert_eq!(response["data"]["decimal"], "8191");
}

#[test]
fn rejects_nonstandard_word_count() {
    let output = cli().args(["generate", "--words", "13"]).output().expect("cli runs");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid word count: 13"));
}
