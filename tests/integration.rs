use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("card-brand")
}

mod batch_mode {
    use super::*;

    #[test]
    fn test_classify_visa() {
        cmd()
            .arg("4111111111111111")
            .assert()
            .success()
            .stdout(predicate::str::contains("Visa"))
            .stdout(predicate::str::contains("************1111"));
    }

    #[test]
    fn test_classify_multiple_numbers() {
        cmd()
            .args(["4111111111111111", "5500000000000004", "340000000000009"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Visa"))
            .stdout(predicate::str::contains("MasterCard"))
            .stdout(predicate::str::contains("American Express"))
            .stdout(predicate::str::contains("3 number(s) checked"));
    }

    #[test]
    fn test_classify_with_separators() {
        cmd()
            .arg("6011 0000-0000 0004")
            .assert()
            .success()
            .stdout(predicate::str::contains("Discover"));
    }

    #[test]
    fn test_full_number_never_echoed() {
        cmd()
            .arg("5500000000000004")
            .assert()
            .success()
            .stdout(predicate::str::contains("5500000000000004").not())
            .stdout(predicate::str::contains("************0004"));
    }

    #[test]
    fn test_unknown_number_succeeds_by_default() {
        cmd()
            .arg("1234567890123")
            .assert()
            .success()
            .stdout(predicate::str::contains("Unknown"));
    }

    #[test]
    fn test_strict_mode_fails_on_unknown() {
        cmd()
            .args(["--strict", "1234567890123"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_invalid_input_exits_2() {
        cmd()
            .arg("123")
            .assert()
            .failure()
            .code(2)
            .stdout(predicate::str::contains("at least 13"));
    }

    #[test]
    fn test_quiet_suppresses_banner() {
        cmd()
            .args(["--quiet", "4111111111111111"])
            .assert()
            .success()
            .stdout(predicate::str::contains("CARD BRAND ANALYSIS").not());
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_structure() {
        let output = cmd()
            .args(["--format", "json", "4111111111111111", "123"])
            .assert()
            .failure()
            .code(2)
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["recognized"], 1);
        assert_eq!(parsed["summary"]["invalid"], 1);
        assert_eq!(parsed["cards"][0]["brand"], "visa");
        assert_eq!(parsed["cards"][0]["number"], "************1111");
        assert_eq!(parsed["cards"][1]["valid"], false);
    }

    #[test]
    fn test_json_masks_numbers() {
        cmd()
            .args(["--format", "json", "3530111333300000"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3530111333300000").not())
            .stdout(predicate::str::contains("************0000"));
    }
}

mod interactive_mode {
    use super::*;

    #[test]
    fn test_classify_and_quit() {
        cmd()
            .write_stdin("4111 1111 1111 1111\nn\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("CARD BRAND IDENTIFIER"))
            .stdout(predicate::str::contains("ANALYSIS RESULT"))
            .stdout(predicate::str::contains("Visa"))
            .stdout(predicate::str::contains("************1111"));
    }

    #[test]
    fn test_exit_keyword() {
        cmd()
            .write_stdin("exit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Bye!"));
    }

    #[test]
    fn test_continue_then_quit() {
        cmd()
            .write_stdin("30000000000004\ny\n3530111333300000\nn\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Diners Club"))
            .stdout(predicate::str::contains("JCB"));
    }

    #[test]
    fn test_invalid_input_retry() {
        cmd()
            .write_stdin("oops\n\nsair\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Error:"))
            .stdout(predicate::str::contains("Bye!"));
    }

    #[test]
    fn test_eof_terminates_gracefully() {
        cmd()
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Bye!"));
    }
}
