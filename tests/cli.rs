use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fcsons(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fcsons").unwrap();
    cmd.env("FCSONS_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FCSONS_CONTACT_ENDPOINT");
    cmd
}

#[test]
fn banner_without_subcommand() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wealth Management Redefined."))
        .stdout(predicate::str::contains("fcsons tui"));
}

#[test]
fn calc_sip_defaults() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args(["calc", "sip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹ 3,00,000"))
        .stdout(predicate::str::contains("₹ 1,12,432"))
        .stdout(predicate::str::contains("₹ 4,12,432"));
}

#[test]
fn calc_lumpsum_json() {
    let dir = TempDir::new().unwrap();
    let output = fcsons(&dir)
        .args(["calc", "lumpsum", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input"]["mode"], "lumpsum");
    assert_eq!(report["result"]["invested"], 100_000);
    assert_eq!(report["result"]["returns"], 76_234);
    assert_eq!(report["result"]["total"], 176_234);
}

#[test]
fn calc_zero_rate_sip() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args(["calc", "sip", "--amount", "1000", "--rate", "0", "--years", "2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 24000"));
}

#[test]
fn calc_rejects_zero_years() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args(["calc", "sip", "--years", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn calc_rejects_unbounded_years() {
    let dir = TempDir::new().unwrap();
    for mode in ["sip", "lumpsum"] {
        fcsons(&dir)
            .args(["calc", mode, "--years", "400000000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Duration must be between 1 and 100 years"));
    }

    fcsons(&dir)
        .args(["calc", "sip", "--years", "100", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"invested\": 6000000"));
}

#[test]
fn services_list_and_show() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args(["services", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mutual Funds"))
        .stdout(predicate::str::contains("FD and Bonds"));

    fcsons(&dir)
        .args(["services", "show", "forex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forex"));

    fcsons(&dir)
        .args(["services", "show", "6", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Accounting & Taxation\""));
}

#[test]
fn services_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args(["services", "show", "Crypto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn contact_validates_before_sending() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args([
            "contact",
            "--name",
            "Ravi Kumar",
            "--email",
            "not-an-email",
            "--phone",
            "+91 63995 88252",
            "--message",
            "Need advice",
            "--endpoint",
            "http://127.0.0.1:9/send_info",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address").count(1));
}

#[test]
fn contact_rejects_unknown_subject() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .args([
            "contact",
            "--name",
            "Ravi Kumar",
            "--email",
            "ravi@example.com",
            "--phone",
            "+91 63995 88252",
            "--subject",
            "Crypto",
            "--message",
            "Need advice",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown service 'Crypto'"));
}

#[test]
fn ask_without_key_apologizes() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .env_remove("API_KEY")
        .args(["ask", "What", "is", "a", "SIP?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm sorry, I cannot connect"));
}

#[test]
fn init_then_config() {
    let dir = TempDir::new().unwrap();
    fcsons(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    fcsons(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.5-flash"))
        .stdout(predicate::str::contains("send_info"));
}
