//! Runs every checkable catalog entry through the sandbox and compares
//! the captured output against the documented expected output.

use jslab::catalog::Section;
use jslab::engine::{execute, ExecutionOutcome};

const CHANNEL_MARKERS: [&str; 5] = ["> ", "❌ Error: ", "⚠️ Warning: ", "ℹ️ Info: ", "Return: "];

fn logical_line(line: &str) -> &str {
    for marker in CHANNEL_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest;
        }
    }
    line
}

#[test]
fn every_checkable_entry_produces_its_documented_output() {
    for section in Section::ALL {
        for entry in section.entries() {
            if !entry.checkable() {
                continue;
            }
            let lines = match execute(entry.code) {
                ExecutionOutcome::Success(lines) => lines,
                ExecutionOutcome::Failure(message) => {
                    panic!("entry '{}' failed: {}", entry.id, message)
                }
            };
            let actual: Vec<String> = lines
                .iter()
                .flat_map(|l| logical_line(l).split('\n'))
                .map(str::to_string)
                .collect();
            let expected = entry.expected_lines();
            assert_eq!(
                actual, expected,
                "entry '{}' output did not match",
                entry.id
            );
        }
    }
}

#[test]
fn templates_are_not_checkable() {
    for entry in Section::Templates.entries() {
        assert!(!entry.checkable(), "template '{}' should not carry expected output", entry.id);
    }
}

#[test]
fn checkable_entries_exist_in_every_study_section() {
    for section in [Section::Polyfills, Section::Hooks, Section::Questions] {
        assert!(
            section.entries().iter().any(|e| e.checkable()),
            "section {:?} has nothing to check",
            section
        );
    }
}
