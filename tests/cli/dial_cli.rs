use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn fixture_path(name: &str) -> PathBuf {
    workspace_root().join("tests").join("testdata").join(name)
}

fn run_part1(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_part1"), args)
}

fn run_part2(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_part2"), args)
}

fn run_dial(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_dial"), args)
}

fn run(exe: &str, args: &[&str]) -> Output {
    Command::new(exe)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {} with args {:?}: {e}", exe, args))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn part1_answers_the_example() {
    let file = fixture_path("example.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn part2_answers_the_example() {
    let file = fixture_path("example.txt");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "6\n");
}

#[test]
fn blank_lines_do_not_change_the_answers() {
    let file = fixture_path("blank_lines.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "3\n");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "6\n");
}

#[test]
fn empty_input_yields_zero_for_both_parts() {
    let file = fixture_path("empty.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn full_lap_crosses_zero_without_landing_on_it() {
    let file = fixture_path("full_lap.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "0\n");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn landing_exactly_on_zero_counts_once_in_both_parts() {
    let file = fixture_path("land_on_zero.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "1\n");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn running_twice_prints_the_same_answer() {
    let file = fixture_path("example.txt");
    let first = run_part2(&[file.to_str().unwrap()]);
    let second = run_part2(&[file.to_str().unwrap()]);
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn malformed_input_reports_every_bad_line_and_fails() {
    let file = fixture_path("malformed.txt");
    let output = run_part1(&[file.to_str().unwrap()]);
    assert!(!output.status.success());
    let text = stderr(&output);
    assert!(text.contains("UNKNOWN DIRECTION"), "stderr:\n{text}");
    assert!(text.contains("MISSING DISTANCE"), "stderr:\n{text}");
    assert!(text.contains("[E003]"), "stderr:\n{text}");
    // Nothing reaches stdout on a failed parse.
    assert_eq!(stdout(&output), "");
}

#[test]
fn missing_input_file_fails_outright() {
    let file = fixture_path("no_such_file.txt");
    let output = run_part2(&[file.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Error reading"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn missing_argument_prints_usage() {
    let output = run_part1(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("usage: part1"));
    let output = run_part2(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("usage: part2"));
}

#[test]
fn dial_reports_both_parts() {
    let file = fixture_path("example.txt");
    let output = run_dial(&[file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "part1: 3\npart2: 6\n");
}

#[test]
fn dial_run_subcommand_matches_the_default_form() {
    let file = fixture_path("example.txt");
    let direct = run_dial(&[file.to_str().unwrap()]);
    let subcommand = run_dial(&["run", file.to_str().unwrap()]);
    assert_eq!(stdout(&direct), stdout(&subcommand));
}

#[test]
fn dial_json_emits_the_simulation_report() {
    let file = fixture_path("example.txt");
    let output = run_dial(&["--json", file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["start_position"], 50);
    assert_eq!(report["final_position"], 32);
    assert_eq!(report["zero_landings"], 3);
    assert_eq!(report["zero_crossings"], 6);
}

#[test]
fn dial_verbose_prints_the_rotation_trace() {
    let file = fixture_path("example.txt");
    let output = run_dial(&["--verbose", file.to_str().unwrap()]);
    let text = stdout(&output);
    assert!(
        text.starts_with("L68: 50 -> 82, zeros: 1, total: 1\n"),
        "stdout:\n{text}"
    );
    assert!(text.ends_with("part1: 3\npart2: 6\n"), "stdout:\n{text}");
}

#[test]
fn dial_check_runs_only_the_self_check() {
    let output = run_dial(&["check"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "self-check passed\n");
}

#[test]
fn dial_caps_parse_errors_at_max_errors() {
    let file = fixture_path("malformed.txt");
    let output = run_dial(&["--max-errors", "1", file.to_str().unwrap()]);
    assert!(!output.status.success());
    let text = stderr(&output);
    assert!(text.contains("UNKNOWN DIRECTION"), "stderr:\n{text}");
    assert!(!text.contains("MISSING DISTANCE"), "stderr:\n{text}");
    assert!(text.contains("2 more error(s) not shown."), "stderr:\n{text}");
}

#[test]
fn dial_rejects_a_bad_max_errors_value() {
    let file = fixture_path("example.txt");
    let output = run_dial(&["--max-errors", "zero", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--max-errors"));
}

#[test]
fn dial_without_arguments_prints_help() {
    let output = run_dial(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Dial CLI"));
    assert!(stdout(&output).contains("--max-errors"));
}
