// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for file-level requires annotation.

use doxyreq::rewrite::{preview_file, rewrite_file, REQUIRES_PREFIX};
use doxyreq::rewrite_source;
use std::fs;
use tempfile::TempDir;

const CONCEPT_HEADER: &str = "\
#pragma once
#include <concepts>

/// Enumerable over any container
template <typename TSource>
requires std::ranges::range<TSource>
class cinq_enumerable {
public:
    template <typename TFunc>
    requires std::predicate<TFunc, TSource> // filter predicate
    cinq_enumerable& where(TFunc predicate);

    template <typename TFunc>
    requires std::invocable<TFunc>
    auto select(TFunc selector);
};
";

#[test]
fn test_header_annotation() {
    let rewrite = rewrite_source(CONCEPT_HEADER);
    let out: Vec<&str> = rewrite.text.lines().collect();
    let input: Vec<&str> = CONCEPT_HEADER.lines().collect();

    assert_eq!(out.len(), input.len());
    assert_eq!(rewrite.annotated, 2);
    assert_eq!(out[5], "///@requires requires std::ranges::range<TSource>");
    assert_eq!(out[9], input[9], "trailing comment keeps the line as is");
    assert_eq!(out[13], "///@requires     requires std::invocable<TFunc>");
}

#[test]
fn test_unannotated_lines_identical() {
    let rewrite = rewrite_source(CONCEPT_HEADER);
    for (before, after) in CONCEPT_HEADER.lines().zip(rewrite.text.lines()) {
        if after != before {
            assert_eq!(after, format!("{REQUIRES_PREFIX}{before}"));
        }
    }
}

#[test]
fn test_rewrite_file_writes_base_name() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = src.path().join("cinq_enumerable.hpp");
    fs::write(&path, CONCEPT_HEADER).unwrap();

    let outcome = rewrite_file(&path, out.path()).unwrap();

    assert_eq!(outcome.destination, out.path().join("cinq_enumerable.hpp"));
    let written = fs::read_to_string(&outcome.destination).unwrap();
    assert_eq!(written, outcome.rewrite.text);
    assert_eq!(written.lines().count(), CONCEPT_HEADER.lines().count());
    // Source is untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), CONCEPT_HEADER);
}

#[test]
fn test_empty_file_produces_empty_copy() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = src.path().join("empty.cpp");
    fs::write(&path, "").unwrap();

    let outcome = rewrite_file(&path, out.path()).unwrap();

    assert!(outcome.destination.is_file());
    assert_eq!(fs::read_to_string(&outcome.destination).unwrap(), "");
    assert_eq!(outcome.rewrite.lines, 0);
}

#[test]
fn test_existing_copy_overwritten() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = src.path().join("a.cpp");
    fs::write(&path, "requires x\n").unwrap();
    fs::write(out.path().join("a.cpp"), "stale contents that are longer\n").unwrap();

    rewrite_file(&path, out.path()).unwrap();

    assert_eq!(
        fs::read_to_string(out.path().join("a.cpp")).unwrap(),
        "///@requires requires x\n"
    );
}

#[test]
fn test_preview_writes_nothing() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = src.path().join("a.cpp");
    fs::write(&path, "requires x\n").unwrap();

    let outcome = preview_file(&path, out.path()).unwrap();

    assert_eq!(outcome.rewrite.annotated, 1);
    assert!(!outcome.destination.exists());
}

#[test]
fn test_missing_source_is_error() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("nope.cpp");

    let err = rewrite_file(&missing, out.path()).unwrap_err();
    assert!(err.to_string().contains("nope.cpp"), "got: {err}");
}

#[test]
fn test_missing_output_dir_is_error() {
    let src = TempDir::new().unwrap();
    let path = src.path().join("a.cpp");
    fs::write(&path, "int x;\n").unwrap();

    let result = rewrite_file(&path, &src.path().join("no/such/dir"));
    assert!(result.is_err());
}
