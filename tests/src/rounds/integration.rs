#![cfg(test)]
use boundcast_common::config::Config;
use boundcast_core::session::Summary;

use crate::util::{self, Transcript};

const FIRST: &str = "Enter the first number: ";
const SECOND: &str = "Enter the second number: ";
const PAUSE: &str = "Press any key to continue...";
const BOUNDS_HINT: &str = "Please enter a value between -2147483648 and 2147483647.\n";

#[test]
fn truncates_and_reports_bigger_value() -> anyhow::Result<()> {
    let Transcript { summary, stdout, stderr, .. } = util::play("42.0\n7.5\n", util::quiet())?;

    assert_eq!(summary, Summary { reported: 1, rejected: 0 });
    assert_eq!(
        stdout,
        format!(
            "{FIRST}{SECOND}Values of safely casted f64 to i32: 42, 7\nBigger value: 42\n{FIRST}\n"
        )
    );
    assert!(stderr.is_empty());
    Ok(())
}

#[test]
fn malformed_input_restarts_round() -> anyhow::Result<()> {
    let transcript = util::play("abc\n1\n2\n", util::quiet())?;

    assert_eq!(transcript.summary, Summary { reported: 1, rejected: 1 });
    assert_eq!(transcript.stderr, "Error: Invalid input for the first number.\n");
    assert!(transcript.stdout.starts_with(&format!("{FIRST}{FIRST}{SECOND}")));
    assert!(transcript.stdout.contains("Values of safely casted f64 to i32: 1, 2\n"));
    assert!(transcript.stdout.contains("Bigger value: 2\n"));
    Ok(())
}

#[test]
fn undecodable_bytes_restart_round() -> anyhow::Result<()> {
    let transcript = util::play_bytes(b"\xff\xfe\n1\n\xc0 2\n3\n4\n", util::quiet())?;

    assert_eq!(transcript.summary, Summary { reported: 1, rejected: 2 });
    assert_eq!(
        transcript.stderr,
        "Error: Invalid input for the first number.\n\
         Error: Invalid input for the second number.\n"
    );
    assert!(transcript.stdout.contains("Values of safely casted f64 to i32: 3, 4\n"));
    Ok(())
}

#[test]
fn huge_values_are_reported_in_exponent_form() -> anyhow::Result<()> {
    let transcript = util::play("1e300
", util::quiet())?;

    assert_eq!(
        transcript.stderr,
        format!("Error: 1e300 is out of bounds for i32\n{BOUNDS_HINT}")
    );
    Ok(())
}

#[test]
fn out_of_range_reports_bound() -> anyhow::Result<()> {
    let transcript = util::play("3000000000\n", util::quiet())?;

    assert_eq!(transcript.summary, Summary { reported: 0, rejected: 1 });
    assert_eq!(
        transcript.stderr,
        format!("Error: 3000000000 is out of bounds for i32\n{BOUNDS_HINT}")
    );
    Ok(())
}

#[test]
fn second_number_out_of_range() -> anyhow::Result<()> {
    let transcript = util::play("5\n-2147483649\n", util::quiet())?;

    assert_eq!(transcript.summary.rejected, 1);
    assert_eq!(
        transcript.stderr,
        format!("Error: -2147483649 is out of bounds for i32\n{BOUNDS_HINT}")
    );
    assert!(!transcript.stdout.contains("Bigger value"));
    Ok(())
}

#[test]
fn equal_negative_values() -> anyhow::Result<()> {
    let transcript = util::play("-1\n-1\n", util::quiet())?;

    assert!(transcript.stdout.contains("Values of safely casted f64 to i32: -1, -1\n"));
    assert!(transcript.stdout.contains("Bigger value: -1\n"));
    Ok(())
}

#[test]
fn exact_bounds_are_accepted() -> anyhow::Result<()> {
    let transcript = util::play("-2147483648\n2147483647\n", util::quiet())?;

    assert_eq!(transcript.summary, Summary { reported: 1, rejected: 0 });
    assert!(transcript.stderr.is_empty());
    assert!(
        transcript
            .stdout
            .contains("Values of safely casted f64 to i32: -2147483648, 2147483647\n")
    );
    assert!(transcript.stdout.contains("Bigger value: 2147483647\n"));
    Ok(())
}

#[test]
fn many_rounds_until_quit() -> anyhow::Result<()> {
    let input = "1\n2\nnope\n9.99\n-9.99\n4e9\nq\n100\n200\n";
    let transcript = util::play(input, util::quiet())?;

    assert_eq!(transcript.summary, Summary { reported: 2, rejected: 2 });
    assert!(transcript.stdout.contains("Values of safely casted f64 to i32: 9, -9\n"));
    assert!(!transcript.stdout.contains("100"));
    Ok(())
}

#[test]
fn terminal_is_cleared_and_paused_each_round() -> anyhow::Result<()> {
    let transcript = util::play("1\n2\nabc\n", Config::default())?;

    assert_eq!(
        transcript.terminal,
        vec![
            // reported round
            "clear", "clear", "key",
            // rejected round
            "clear", "clear", "key",
            // end of input
            "clear",
        ]
    );
    assert_eq!(transcript.stdout.matches(PAUSE).count(), 2);
    Ok(())
}
