//! Run handler: executes one snippet in the sandbox and prints the
//! captured output.

use anyhow::Result;
use serde_json::json;

use crate::engine::{self, ExecutionLimits, ExecutionOutcome};
use crate::printer::print_output_line;

pub async fn run(source: String, limits: ExecutionLimits, json: bool) -> Result<()> {
    // Evaluation is synchronous and can spin on user code, keep it off
    // the async runtime thread.
    let outcome =
        tokio::task::spawn_blocking(move || engine::execute_with_limits(&source, &limits)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
    } else {
        for (i, line) in outcome.display_lines().iter().enumerate() {
            print_output_line(i + 1, line);
        }
    }

    if outcome.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}

pub fn outcome_json(outcome: &ExecutionOutcome) -> serde_json::Value {
    match outcome {
        ExecutionOutcome::Success(lines) => json!({
            "status": "success",
            "output": lines,
        }),
        ExecutionOutcome::Failure(message) => json!({
            "status": "failure",
            "error": message,
        }),
    }
}
