// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution specs
//!
//! Verify ordering, parallel blocks, exit statuses and fail-fast.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn sequential_commands_run_in_order() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "* echo one >> log\n* echo two >> log\n* echo three >> log\n",
    );

    temp.ciak().passes();

    assert_eq!(temp.read("log"), "one\ntwo\nthree\n");
}

#[test]
fn commands_inherit_stdout() {
    let temp = Project::empty();
    temp.file("ciakfile", "* echo\n** hello from the outline\n");

    temp.ciak()
        .passes()
        .stdout_has("hello from the outline");
}

#[test]
fn parallel_block_finishes_before_next_block() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "\
* # BEGIN_PARALLEL
* sleep 0.2 && touch slow
* touch fast
* # END_PARALLEL
* test -f slow && test -f fast && touch joined
",
    );

    temp.ciak().passes();

    assert!(temp.exists("slow"));
    assert!(temp.exists("fast"));
    assert!(temp.exists("joined"));
}

#[test]
fn parallel_commands_overlap() {
    let temp = Project::empty();
    // Each side waits for the other's marker, so this only passes if both run at once
    temp.file(
        "ciakfile",
        "\
* # BEGIN_PARALLEL
* touch left && for i in $(seq 50); do test -f right && exit 0; sleep 0.1; done; exit 1
* touch right && for i in $(seq 50); do test -f left && exit 0; sleep 0.1; done; exit 1
* # END_PARALLEL
",
    );

    temp.ciak().passes();
}

#[test]
fn failure_exit_status_is_propagated() {
    let temp = Project::empty();
    temp.file("ciakfile", "* exit 3\n* touch after\n");

    temp.ciak().exits_with(3).stderr_has("exit 3");

    // Without fail-fast the rest still runs
    assert!(temp.exists("after"));
}

#[test]
fn first_failure_in_plan_order_decides_status() {
    let temp = Project::empty();
    temp.file("ciakfile", "* exit 4\n* exit 5\n");

    temp.ciak().exits_with(4);
}

#[test]
fn fail_fast_stops_after_first_failure() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch before\n* exit 7\n* touch after\n");

    temp.ciak()
        .args(&["--fail-fast"])
        .exits_with(7)
        .stderr_has("skipped")
        .stderr_has("stopped by fail-fast");

    assert!(temp.exists("before"));
    assert!(!temp.exists("after"));
}

#[test]
fn fail_fast_waits_for_parallel_siblings() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "\
* # BEGIN_PARALLEL
* exit 9
* sleep 0.2 && touch sibling
* # END_PARALLEL
* touch after
",
    );

    temp.ciak().args(&["--fail-fast"]).exits_with(9);

    assert!(temp.exists("sibling"));
    assert!(!temp.exists("after"));
}

#[test]
fn summary_goes_to_stderr() {
    let temp = Project::empty();
    temp.file("ciakfile", "* true\n* true\n");

    let out = temp
        .ciak()
        .passes()
        .stderr_has("2 commands: 2 succeeded, 0 failed");

    assert!(predicate::str::is_empty().eval(out.stdout()));
}

#[test]
fn json_summary_goes_to_stdout() {
    let temp = Project::empty();
    temp.file("ciakfile", "* true\n* exit 6\n");

    let out = temp.ciak().args(&["--format", "json"]).exits_with(6);
    let report: serde_json::Value = serde_json::from_str(out.stdout()).expect("valid JSON");

    assert_eq!(report["aborted"], false);
    assert_eq!(report["outcomes"][0]["status"], "exited");
    assert_eq!(report["outcomes"][0]["code"], 0);
    assert_eq!(report["outcomes"][1]["code"], 6);
    assert_eq!(report["outcomes"][1]["line"], 2);
}

#[test]
fn signal_killed_command_exits_one() {
    let temp = Project::empty();
    // A shell killed by a signal reports no exit code
    temp.file("ciakfile", "* kill -9 $$\n");

    temp.ciak().exits_with(1);
}
