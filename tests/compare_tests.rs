use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn compare_prints_side_by_side_statistics() {
    let fast = assert_fs::NamedTempFile::new("fast.yaml").unwrap();
    fast.write_str(
        "total_systems: 1000\nship_survival_prob: 1.0\ncolony_found_prob: 1.0\nyears_per_round: 10\nmax_rounds: 50\nn_simulations: 5\n",
    )
    .unwrap();
    let slow = assert_fs::NamedTempFile::new("slow.yaml").unwrap();
    slow.write_str(
        "total_systems: 1000\nship_survival_prob: 0.5\ncolony_found_prob: 0.5\nyears_per_round: 10\nmax_rounds: 50\nn_simulations: 5\n",
    )
    .unwrap();
    let fast_arg = fast.path().to_str().unwrap();
    let slow_arg = slow.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("colonize");
    cmd.args(["compare", "-a", fast_arg, "-b", slow_arg, "--seed", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario Comparison"))
        .stdout(predicate::str::contains(format!("Statistic | {fast_arg} | {slow_arg}")))
        .stdout(predicate::str::contains("Time to 99% | 100 yrs ± 0"));
}

#[test]
fn compare_rejects_unknown_scenario() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("colonize");
    cmd.args(["compare", "-a", "optimistic", "-b", "no-such-scenario", "-n", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load scenario no-such-scenario"));
}

#[test]
fn compare_writes_overlay_charts_for_different_round_lengths() {
    let dir = assert_fs::TempDir::new().unwrap();
    let decades = dir.child("decades.yaml");
    decades
        .write_str(
            "total_systems: 100000\nship_survival_prob: 0.9\ncolony_found_prob: 0.9\nyears_per_round: 10\nmax_rounds: 200\nn_simulations: 8\n",
        )
        .unwrap();
    let centuries = dir.child("centuries.yaml");
    centuries
        .write_str(
            "total_systems: 100000\nship_survival_prob: 0.6\ncolony_found_prob: 0.6\nyears_per_round: 25\nmax_rounds: 200\nn_simulations: 8\n",
        )
        .unwrap();
    let base = dir.child("cmp");

    let mut cmd = assert_cmd::cargo_bin_cmd!("colonize");
    cmd.args([
        "compare",
        "-a",
        decades.path().to_str().unwrap(),
        "-b",
        centuries.path().to_str().unwrap(),
        "--seed",
        "5",
        "--charts",
        base.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Colonization comparison chart written to"))
        .stdout(predicate::str::contains("Trajectory comparison chart written to"));

    dir.child("cmp.colonization.png").assert(predicate::path::exists());
    dir.child("cmp.trajectories.png").assert(predicate::path::exists());
}
