//! Runs the actual binaries against temporary files.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use assert2::assert;
use assert2::let_assert;

const RANDOM: &str = env!("CARGO_BIN_EXE_random");
const BASIC_RANDOM: &str = env!("CARGO_BIN_EXE_basic-random");

fn scratch(name: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("workload-{}-{name}.in", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn run(program: &str, args: &[&str], stdin: &str) -> Output {
    let_assert!(
        Ok(mut child) = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    );
    let_assert!(Some(mut input) = child.stdin.take());
    let_assert!(Ok(()) = input.write_all(stdin.as_bytes()));
    drop(input);

    let_assert!(Ok(output) = child.wait_with_output());
    output
}

#[test]
fn invalid_flags_produce_no_file() {
    let cases = [
        ("no-clients", ["-c", "0", "-i", "1", "-n", "1"]),
        ("too-many-clients", ["-c", "41", "-i", "1", "-n", "1"]),
        ("no-instruments", ["-c", "2", "-i", "0", "-n", "1"]),
        ("no-orders", ["-c", "2", "-i", "1", "-n", "0"]),
        ("negative-orders", ["-c", "2", "-i", "1", "-n", "-5"]),
    ];

    for (name, flags) in cases {
        let path = scratch(name);
        let_assert!(Some(destination) = path.to_str());

        let mut args = flags.to_vec();
        args.extend(["-o", destination]);
        let output = run(RANDOM, &args, "");

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid input:"), "{name}: {stderr}");
        assert!(!path.exists(), "{name}");
    }
}

#[test]
fn invalid_answer_stops_prompting() {
    let path = scratch("not-a-number");
    let_assert!(Some(destination) = path.to_str());

    let output = run(RANDOM, &["-o", destination], "lots\n1\n1\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout == "Enter number of clients (1-40): ");
    assert!(stderr.contains("must be an integer"));
    assert!(!path.exists());
}

#[test]
fn prompts_for_missing_counts() {
    let path = scratch("prompted");
    let_assert!(Some(destination) = path.to_str());

    let output =
        run(RANDOM, &["-i", "1", "--seed", "5", "-o", destination], "2\n3\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter number of clients (1-40): "));
    assert!(!stdout.contains("Enter number of instruments"));
    assert!(stdout.contains("Enter number of orders: "));
    assert!(stdout.contains("Test case generated: "));

    let_assert!(Ok(script) = fs::read_to_string(&path));
    let lines: Vec<&str> = script.lines().collect();
    assert!(lines.len() == 6);
    assert!(lines[..2] == ["2", "o"]);
    assert!(lines[5] == "x");
    assert!(lines[2..5].iter().all(|line| line.contains(" SYM1 ")));

    let _ = fs::remove_file(&path);
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = scratch("seeded-first");
    let second = scratch("seeded-second");

    for path in [&first, &second] {
        let_assert!(Some(destination) = path.to_str());
        let output =
            run(BASIC_RANDOM, &["--seed", "2024", "-o", destination], "");
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout)
            .starts_with("Test case generated"));
    }

    let_assert!(Ok(first_script) = fs::read_to_string(&first));
    let_assert!(Ok(second_script) = fs::read_to_string(&second));
    assert!(first_script == second_script);
    assert!(first_script.starts_with("# Single-threaded test case\n\n1\no\n"));
    assert!(first_script.ends_with("\nx\n"));

    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);
}
