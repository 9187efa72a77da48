// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder value specs
//!
//! Verify --set, --vars and defaults reach the commands.

use crate::prelude::*;

#[test]
fn set_flag_fills_placeholder() {
    let temp = Project::empty();
    temp.file("ciakfile", "* echo {{greeting}} > out\n");

    temp.ciak().args(&["-s", "greeting=hello"]).passes();

    assert_eq!(temp.read("out"), "hello\n");
}

#[test]
fn default_used_when_no_value_given() {
    let temp = Project::empty();
    temp.file("ciakfile", "* echo {{ greeting ::hi there}} > out\n");

    temp.ciak().passes();

    assert_eq!(temp.read("out"), "hi there\n");
}

#[test]
fn vars_file_fills_placeholders() {
    let temp = Project::empty();
    temp.file("vars.toml", "name = \"release\"\njobs = 8\n");
    temp.file("ciakfile", "* echo {{name}} {{jobs}} > out\n");

    temp.ciak().args(&["--vars", "vars.toml"]).passes();

    assert_eq!(temp.read("out"), "release 8\n");
}

#[test]
fn set_flag_wins_over_vars_file() {
    let temp = Project::empty();
    temp.file("vars.toml", "name = \"release\"\n");
    temp.file("ciakfile", "* echo {{name}} > out\n");

    temp.ciak()
        .args(&["--vars", "vars.toml", "--set", "name=debug"])
        .passes();

    assert_eq!(temp.read("out"), "debug\n");
}

#[test]
fn value_is_inserted_verbatim() {
    let temp = Project::empty();
    temp.file("ciakfile", "* echo '{{msg}}' > out\n");

    temp.ciak().args(&["-s", "msg=a=b {{other}}"]).passes();

    // Substituted text is never scanned again
    assert_eq!(temp.read("out"), "a=b {{other}}\n");
}

#[test]
fn malformed_set_flag_is_a_usage_error() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch ran\n");

    temp.ciak()
        .args(&["-s", "novalue"])
        .exits_with(FATAL_EXIT)
        .stderr_has("no `=` found");

    assert!(!temp.exists("ran"));
}

#[test]
fn missing_vars_file_exits_fatal() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch ran\n");

    temp.ciak()
        .args(&["--vars", "absent.toml"])
        .exits_with(FATAL_EXIT)
        .stderr_has("cannot read vars file");

    assert!(!temp.exists("ran"));
}
