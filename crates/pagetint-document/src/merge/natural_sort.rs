// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Natural (alphanumeric-aware) ordering of file names, so that `page2`
// sorts before `page10`.

use std::cmp::Ordering;
use std::path::PathBuf;

/// Sort key splitting a name into alternating text and digit runs.
///
/// The run list always starts and ends with a text run (possibly empty), so
/// two keys line up position by position: even positions hold text, odd
/// positions hold numbers. Text compares lowercased, numbers compare by value
/// with no upper bound on length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalSortKey(Vec<Run>);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Run {
    Text(String),
    Number(Digits),
}

/// ASCII digit run with leading zeros removed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits(String);

impl Digits {
    fn new(raw: &str) -> Self {
        Self(raw.trim_start_matches('0').to_owned())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl NaturalSortKey {
    pub fn new(name: &str) -> Self {
        let mut runs = Vec::new();
        let mut rest = name;

        loop {
            let text_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
            runs.push(Run::Text(rest[..text_end].to_lowercase()));
            rest = &rest[text_end..];
            if rest.is_empty() {
                break;
            }

            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            runs.push(Run::Number(Digits::new(&rest[..digits_end])));
            rest = &rest[digits_end..];
        }

        Self(runs)
    }
}

/// Stable natural sort by file name. Entries with equal keys (`a01` and
/// `a1`) keep their relative order.
pub fn sort_by_file_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|path| {
        NaturalSortKey::new(&path.file_name().unwrap_or_default().to_string_lossy())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut paths: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        sort_by_file_name(&mut paths);
        paths
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            sorted(&["img2.png", "img10.png", "img1.png"]),
            ["img1.png", "img2.png", "img10.png"]
        );
    }

    #[test]
    fn text_compares_case_insensitively() {
        assert_eq!(
            sorted(&["b.png", "A.png", "a2.png", "B1.png"]),
            ["a2.png", "A.png", "B1.png", "b.png"]
        );
    }

    #[test]
    fn prefix_sorts_first() {
        assert!(NaturalSortKey::new("page") < NaturalSortKey::new("page1"));
        assert!(NaturalSortKey::new("page1") < NaturalSortKey::new("page1a"));
    }

    #[test]
    fn leading_digits_and_multiple_runs() {
        assert_eq!(
            sorted(&["10-b.png", "9-z.png", "2-a10.png", "2-a9.png"]),
            ["2-a9.png", "2-a10.png", "9-z.png", "10-b.png"]
        );
    }

    #[test]
    fn leading_zeros_tie_and_keep_input_order() {
        assert_eq!(NaturalSortKey::new("a01"), NaturalSortKey::new("a1"));
        assert_eq!(sorted(&["a01.png", "a1.png"]), ["a01.png", "a1.png"]);
        assert_eq!(sorted(&["a1.png", "a01.png"]), ["a1.png", "a01.png"]);
    }

    #[test]
    fn very_long_numbers_do_not_overflow() {
        assert!(
            NaturalSortKey::new("x99999999999999999999999")
                < NaturalSortKey::new("x100000000000000000000000")
        );
    }

    #[test]
    fn only_file_name_is_considered() {
        assert_eq!(
            sorted(&["z/p10.png", "a/p9.png", "m/p1.png"]),
            ["m/p1.png", "a/p9.png", "z/p10.png"]
        );
    }
}
