// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outline lookup specs
//!
//! Verify how the outline file is found from a path, a name, --dir and
//! CIAKFILES_DIR.

use crate::prelude::*;

#[test]
fn default_name_in_current_directory() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch ran\n");

    temp.ciak().passes();

    assert!(temp.exists("ran"));
}

#[test]
fn explicit_relative_path() {
    let temp = Project::empty();
    temp.file("outlines/deploy.ciak", "* touch deployed\n");

    temp.ciak().args(&["outlines/deploy.ciak"]).passes();

    assert!(temp.exists("deployed"));
}

#[test]
fn name_found_in_search_dir_from_env() {
    let temp = Project::empty();
    temp.file("library/release", "* touch released\n");

    temp.ciak()
        .args(&["release"])
        .env("CIAKFILES_DIR", temp.join("library"))
        .passes();

    // Commands run in the invoking directory, not the outline's
    assert!(temp.exists("released"));
}

#[test]
fn dir_flag_overrides_env() {
    let temp = Project::empty();
    temp.file("env-dir/release", "* touch from-env\n");
    temp.file("flag-dir/release", "* touch from-flag\n");

    temp.ciak()
        .args(&["--dir", "flag-dir", "release"])
        .env("CIAKFILES_DIR", temp.join("env-dir"))
        .passes();

    assert!(temp.exists("from-flag"));
    assert!(!temp.exists("from-env"));
}

#[test]
fn search_dir_wins_over_current_directory_for_names() {
    let temp = Project::empty();
    temp.file("ciakfile", "* touch local\n");
    temp.file("library/ciakfile", "* touch shared\n");

    temp.ciak().args(&["--dir", "library"]).passes();

    assert!(temp.exists("shared"));
    assert!(!temp.exists("local"));
}

#[test]
fn missing_outline_lists_tried_paths() {
    let temp = Project::empty();

    temp.ciak()
        .args(&["--dir", "library", "nope"])
        .exits_with(FATAL_EXIT)
        .stderr_has("cannot find outline 'nope'")
        .stderr_has("not found:")
        .stderr_has("library")
        .stderr_has("CIAKFILES_DIR");
}

#[test]
fn missing_default_outline_exits_fatal() {
    let temp = Project::empty();

    temp.ciak()
        .exits_with(FATAL_EXIT)
        .stderr_has("cannot find outline 'ciakfile'");
}
