use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn grog() -> assert_cmd::Command {
    cargo_bin_cmd!("grog").into()
}

#[test]
fn help_works() {
    grog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vagrantfile generator"));
}

#[test]
fn help_mentions_output_flag() {
    grog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"));
}

// Piped stdio must fail up front — before any probing or prompting —
// so these tests never spawn vagrant or knife.
#[test]
fn refuses_to_run_without_a_terminal() {
    let dir = tempfile::tempdir().unwrap();

    grog()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));

    // And no output file appeared
    assert!(!dir.path().join("Vagrantfile").exists());
}

#[test]
fn non_terminal_run_leaves_existing_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Vagrantfile");
    std::fs::write(&path, "# hands off\n").unwrap();

    grog().current_dir(dir.path()).assert().failure();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hands off\n");
}
