//! Catalog handlers: list, show, and check study entries and theory
//! topics.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::catalog::{self, CatalogEntry, Section, Track};
use crate::engine::{self, ExecutionLimits, ExecutionOutcome};
use crate::printer::{print_output_line, MarkdownPrinter, TextPrinter};

const CHANNEL_MARKERS: [&str; 5] = ["> ", "❌ Error: ", "⚠️ Warning: ", "ℹ️ Info: ", "Return: "];

/// Strip the channel marker so captured lines compare against the
/// logical output an entry documents.
fn logical_line(line: &str) -> &str {
    for marker in CHANNEL_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest;
        }
    }
    line
}

fn sections_for(arg: &str) -> Result<Vec<Section>> {
    match arg {
        "all" => Ok(Section::ALL.to_vec()),
        "polyfills" => Ok(vec![Section::Polyfills]),
        "hooks" => Ok(vec![Section::Hooks]),
        "questions" => Ok(vec![Section::Questions]),
        "templates" => Ok(vec![Section::Templates]),
        other => bail!("unknown section '{}': expected polyfills|hooks|questions|templates|all", other),
    }
}

pub fn list(section_arg: &str, json: bool) -> Result<()> {
    let sections = sections_for(section_arg)?;

    if json {
        let value: Vec<_> = sections
            .iter()
            .map(|section| {
                json!({
                    "section": section.label(),
                    "entries": section.entries(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for section in sections {
        println!("{}", section.label().magenta().bold());
        for entry in section.entries() {
            println!(
                "  {:<18} {} [{} / {}]",
                entry.id.cyan(),
                entry.title,
                entry.category,
                entry.difficulty
            );
        }
        println!();
    }
    Ok(())
}

pub fn topics(track_arg: &str, json: bool) -> Result<()> {
    let filter: Option<Track> = match track_arg {
        "all" => None,
        "javascript" | "js" => Some(Track::JavaScript),
        "react" => Some(Track::React),
        other => bail!("unknown track '{}': expected javascript|react|all", other),
    };

    let topics: Vec<_> = catalog::theory::TOPICS
        .iter()
        .filter(|t| filter.map_or(true, |f| t.track == f))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&topics)?);
        return Ok(());
    }

    for topic in topics {
        println!(
            "{:<18} {} ({}, {} / {})",
            topic.id.cyan(),
            topic.title,
            topic.track.label(),
            topic.category,
            topic.difficulty
        );
        println!("  {}", topic.summary);
    }
    Ok(())
}

pub fn show(id: &str, markdown: bool, json: bool, color: Option<&'static str>) -> Result<()> {
    if let Some((section, entry)) = catalog::find_entry(id) {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "section": section.label(),
                    "entry": entry,
                }))?
            );
            return Ok(());
        }
        println!("{} ({})", entry.title.magenta().bold(), section.label());
        println!("{}\n", entry.description);
        println!("{}", entry.code);
        if entry.checkable() {
            println!("\n{}", "Expected output:".green());
            for line in entry.expected_lines() {
                println!("  {}", line);
            }
        }
        return Ok(());
    }

    if let Some(topic) = catalog::find_topic(id) {
        if json {
            println!("{}", serde_json::to_string_pretty(topic)?);
        } else if markdown {
            MarkdownPrinter::default().print(topic.body);
        } else {
            TextPrinter { color }.print(topic.body);
        }
        return Ok(());
    }

    bail!("no catalog entry or theory topic with id '{}'", id);
}

pub async fn check(id: &str, limits: ExecutionLimits, json: bool) -> Result<()> {
    let Some((_, entry)) = catalog::find_entry(id) else {
        bail!("no catalog entry with id '{}'", id);
    };
    if !entry.checkable() {
        bail!("entry '{}' has no expected output to check against", id);
    }

    let source = entry.code.to_string();
    let outcome =
        tokio::task::spawn_blocking(move || engine::execute_with_limits(&source, &limits)).await?;

    // Pretty-printed values span several lines inside one captured entry,
    // split them so the comparison is line by line.
    let (actual, failure): (Vec<String>, Option<String>) = match &outcome {
        ExecutionOutcome::Success(lines) => (
            lines
                .iter()
                .flat_map(|l| logical_line(l).split('\n'))
                .map(str::to_string)
                .collect(),
            None,
        ),
        ExecutionOutcome::Failure(message) => (Vec::new(), Some(message.clone())),
    };
    let expected: Vec<&str> = entry.expected_lines();
    let matches = failure.is_none() && actual.iter().map(String::as_str).eq(expected.iter().copied());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "id": entry.id,
                "pass": matches,
                "expected": expected,
                "actual": actual,
                "error": failure,
            }))?
        );
    } else {
        report_check(entry, &outcome, &actual, &expected, matches);
    }

    if !matches {
        std::process::exit(1);
    }
    Ok(())
}

fn report_check(
    entry: &CatalogEntry,
    outcome: &ExecutionOutcome,
    actual: &[String],
    expected: &[&str],
    matches: bool,
) {
    println!("{} ({})", entry.title.bold(), entry.id);
    for (i, line) in outcome.display_lines().iter().enumerate() {
        print_output_line(i + 1, line);
    }
    println!();
    if matches {
        println!("{}", "PASS".green().bold());
    } else {
        println!("{}", "MISMATCH".red().bold());
        println!("{}", "expected:".yellow());
        for line in expected {
            println!("  {}", line);
        }
        println!("{}", "actual:".yellow());
        for line in actual {
            println!("  {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_line_strips_each_marker() {
        assert_eq!(logical_line("> hi"), "hi");
        assert_eq!(logical_line("❌ Error: boom"), "boom");
        assert_eq!(logical_line("⚠️ Warning: careful"), "careful");
        assert_eq!(logical_line("ℹ️ Info: note"), "note");
        assert_eq!(logical_line("Return: 2"), "2");
        assert_eq!(logical_line("plain"), "plain");
    }

    #[test]
    fn sections_for_rejects_unknown() {
        assert!(sections_for("all").is_ok());
        assert!(sections_for("nope").is_err());
    }
}
