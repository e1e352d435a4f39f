use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("colonize");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("compare"));
    Ok(())
}

#[test]
fn presets_command_prints_both_presets() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("colonize");
    cmd.arg("presets");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# optimistic"))
        .stdout(predicate::str::contains("# pessimistic"))
        .stdout(predicate::str::contains("total_systems: 200000000000"));
}
