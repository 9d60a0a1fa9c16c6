//! Execution engine: sandboxed JavaScript evaluation with output capture.
//!
//! `execute` maps one source string to exactly one [`ExecutionOutcome`].
//! Exceptions never cross this boundary: syntax errors, runtime throws,
//! rejected awaited values, and exhausted budgets all normalize into
//! `Failure(message)`.

mod format;
mod sandbox;

pub use sandbox::NO_OUTPUT_MARKER;

/// Ordered display lines captured from one run. Channel call order is
/// preserved; the synthesized summary line (if any) is last.
pub type CapturedOutput = Vec<String>;

/// Two-variant result of one execution. A failure carries only the
/// extracted message; partial output is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success(CapturedOutput),
    Failure(String),
}

impl ExecutionOutcome {
    /// Lines the way the output pane shows them: success lines verbatim,
    /// or a single highlighted failure line in the same channel.
    pub fn display_lines(&self) -> CapturedOutput {
        match self {
            ExecutionOutcome::Success(lines) => lines.clone(),
            ExecutionOutcome::Failure(message) => {
                vec![format!("❌ Execution Error: {message}")]
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionOutcome::Failure(_))
    }
}

/// Budgets applied to each run. The original design had none; these close
/// the loop/recursion forms of unbounded execution and keep timer chains
/// finite. Exceeding any budget is an ordinary `Failure`.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionLimits {
    /// Total loop iterations before the interpreter aborts the run.
    pub loop_iterations: u64,
    /// Call depth before the interpreter aborts the run.
    pub recursion_depth: usize,
    /// Timer callbacks fired in one run before the drain gives up.
    pub timer_cascade: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            loop_iterations: 5_000_000,
            recursion_depth: 512,
            timer_cascade: 1_000,
        }
    }
}

/// Execute one snippet with default budgets.
pub fn execute(source: &str) -> ExecutionOutcome {
    execute_with_limits(source, &ExecutionLimits::default())
}

/// Execute one snippet. The allow-list is rebuilt fresh for this call and
/// discarded with the run; nothing persists between executions.
pub fn execute_with_limits(source: &str, limits: &ExecutionLimits) -> ExecutionOutcome {
    sandbox::run_snippet(source, limits)
}

/// Textual async heuristic, preserved from the original design: the raw
/// source mentioning `async`, `await`, or `Promise` routes the run through
/// the asynchronous path. This matches on substrings, not syntax, so
/// `console.log("Promise")` is (knowingly) routed async too.
pub fn needs_async_evaluation(source: &str) -> bool {
    source.contains("async") || source.contains("await") || source.contains("Promise")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(source: &str) -> CapturedOutput {
        match execute(source) {
            ExecutionOutcome::Success(lines) => lines,
            ExecutionOutcome::Failure(message) => panic!("unexpected failure: {message}"),
        }
    }

    fn failure(source: &str) -> String {
        match execute(source) {
            ExecutionOutcome::Failure(message) => message,
            ExecutionOutcome::Success(lines) => panic!("unexpected success: {lines:?}"),
        }
    }

    #[test]
    fn log_line_gets_channel_marker() {
        assert_eq!(success(r#"console.log("hi")"#), vec!["> hi"]);
    }

    #[test]
    fn completion_value_becomes_return_line() {
        assert_eq!(success("1 + 1"), vec!["Return: 2"]);
    }

    #[test]
    fn thrown_error_reports_its_message() {
        assert_eq!(failure(r#"throw new Error("boom")"#), "boom");
    }

    #[test]
    fn awaited_value_is_reported() {
        assert_eq!(success("await Promise.resolve(5)"), vec!["Return: 5"]);
    }

    #[test]
    fn silent_snippet_gets_success_marker() {
        assert_eq!(success("let x = 1;"), vec![NO_OUTPUT_MARKER]);
    }

    #[test]
    fn channel_order_and_markers_are_preserved() {
        let lines = success(
            r#"console.log("a");
console.warn("b");
console.info("c");
console.error("d");"#,
        );
        assert_eq!(
            lines,
            vec!["> a", "⚠️ Warning: b", "ℹ️ Info: c", "❌ Error: d"]
        );
    }

    #[test]
    fn return_line_is_suppressed_when_output_exists() {
        // Completion value is 2, but a log line was captured.
        assert_eq!(success(r#"console.log("x"); 1 + 1"#), vec!["> x"]);
    }

    #[test]
    fn failure_discards_earlier_output() {
        assert_eq!(
            failure(r#"console.log("before"); throw new Error("boom")"#),
            "boom"
        );
    }

    #[test]
    fn async_heuristic_matches_substrings_only() {
        assert!(needs_async_evaluation(r#"console.log("Promise")"#));
        assert!(needs_async_evaluation("await f()"));
        assert!(!needs_async_evaluation("console.log(1)"));
    }

    #[test]
    fn promise_in_string_literal_still_runs() {
        // Routed through the async path, same observable output.
        assert_eq!(success(r#"console.log("Promise")"#), vec!["> Promise"]);
    }

    #[test]
    fn identical_sources_reproduce_identical_output() {
        let source = r#"const xs = [1, 2, 3]; console.log(xs.map(x => x * 2).join(","));"#;
        assert_eq!(success(source), success(source));
    }

    #[test]
    fn top_level_return_is_accepted() {
        assert_eq!(success("return 42"), vec!["Return: 42"]);
    }

    #[test]
    fn syntax_error_reports_diagnostic() {
        assert!(execute("const = ;").is_failure());
    }

    #[test]
    fn rejected_awaited_promise_fails_with_message() {
        assert_eq!(failure(r#"await Promise.reject(new Error("nope"))"#), "nope");
    }

    #[test]
    fn composite_arguments_render_as_indented_json() {
        assert_eq!(
            success("console.log({ a: 1 })"),
            vec!["> {\n  \"a\": 1\n}"]
        );
    }

    #[test]
    fn timers_fire_in_delay_order_after_evaluation() {
        let lines = success(
            r#"setTimeout(() => console.log("late"), 200);
setTimeout(() => console.log("early"), 50);
console.log("first");"#,
        );
        assert_eq!(lines, vec!["> first", "> early", "> late"]);
    }

    #[test]
    fn cleared_timers_never_fire() {
        let lines = success(
            r#"const id = setTimeout(() => console.log("cancelled"), 100);
clearTimeout(id);
setTimeout(() => console.log("kept"), 100);"#,
        );
        assert_eq!(lines, vec!["> kept"]);
    }

    #[test]
    fn loop_budget_turns_infinite_loop_into_failure() {
        let limits = ExecutionLimits {
            loop_iterations: 10_000,
            ..ExecutionLimits::default()
        };
        assert!(execute_with_limits("while (true) {}", &limits).is_failure());
    }

    #[test]
    fn loop_budget_failure_carries_the_limit_diagnostic() {
        let limits = ExecutionLimits {
            loop_iterations: 10_000,
            ..ExecutionLimits::default()
        };
        match execute_with_limits("while (true) {}", &limits) {
            ExecutionOutcome::Failure(message) => assert!(
                message.contains("loop iteration limit"),
                "unexpected message: {message}"
            ),
            ExecutionOutcome::Success(lines) => panic!("unexpected success: {lines:?}"),
        }
    }

    #[test]
    fn recursion_budget_turns_runaway_recursion_into_failure() {
        let limits = ExecutionLimits {
            recursion_depth: 64,
            ..ExecutionLimits::default()
        };
        assert!(execute_with_limits("function f() { return f(); } f()", &limits).is_failure());
    }

    #[test]
    fn failure_renders_as_single_highlighted_line() {
        let outcome = execute(r#"throw new Error("boom")"#);
        assert_eq!(outcome.display_lines(), vec!["❌ Execution Error: boom"]);
    }
}
