// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outline error specs
//!
//! Verify that broken outlines are rejected before any command runs.

use crate::prelude::*;

#[test]
fn unterminated_parallel_block_runs_nothing() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "* touch before\n* # BEGIN_PARALLEL\n* touch inside\n",
    );

    temp.ciak()
        .exits_with(FATAL_EXIT)
        .stderr_has("error: invalid outline")
        .stderr_has("line 2")
        .stderr_has("never closed");

    assert!(!temp.exists("before"));
    assert!(!temp.exists("inside"));
}

#[test]
fn lone_end_marker_runs_nothing() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch before\n* # END_PARALLEL\n");

    temp.ciak()
        .exits_with(FATAL_EXIT)
        .stderr_has("line 2")
        .stderr_has("without a matching");

    assert!(!temp.exists("before"));
}

#[test]
fn nested_begin_marker_is_rejected() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "* # BEGIN_PARALLEL\n* touch a\n* # BEGIN_PARALLEL\n* touch b\n* # END_PARALLEL\n",
    );

    temp.ciak()
        .exits_with(FATAL_EXIT)
        .stderr_has("line 3")
        .stderr_has("opened on line 1");

    assert!(!temp.exists("a"));
}

#[test]
fn missing_placeholder_value_runs_nothing() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch first\n* touch {{name}}\n");

    temp.ciak()
        .exits_with(FATAL_EXIT)
        .stderr_has("line 2")
        .stderr_has("missing value for `{{name}}`")
        .stderr_has("ciak -s name=<value>");

    assert!(!temp.exists("first"));
}

#[test]
fn empty_parallel_block_warns_and_continues() {
    let temp = Project::empty();
    temp.file(
        "ciakfile",
        "* # BEGIN_PARALLEL\n* # END_PARALLEL\n* touch after\n",
    );

    temp.ciak()
        .passes()
        .stderr_has("warning:")
        .stderr_has("lines 1-2: empty parallel block");

    assert!(temp.exists("after"));
}
