//! End-to-end sandbox tests exercising the public engine API.

use jslab::engine::{execute, execute_with_limits, ExecutionLimits, ExecutionOutcome, NO_OUTPUT_MARKER};

fn success_lines(source: &str) -> Vec<String> {
    match execute(source) {
        ExecutionOutcome::Success(lines) => lines,
        ExecutionOutcome::Failure(message) => panic!("unexpected failure: {message}"),
    }
}

fn failure_message(source: &str) -> String {
    match execute(source) {
        ExecutionOutcome::Failure(message) => message,
        ExecutionOutcome::Success(lines) => panic!("unexpected success: {lines:?}"),
    }
}

#[test]
fn console_channels_carry_their_markers() {
    let lines = success_lines(
        "console.log('plain');\nconsole.error('bad');\nconsole.warn('careful');\nconsole.info('fyi');",
    );
    assert_eq!(
        lines,
        vec![
            "> plain",
            "❌ Error: bad",
            "⚠️ Warning: careful",
            "ℹ️ Info: fyi",
        ]
    );
}

#[test]
fn expression_completion_value_is_reported() {
    assert_eq!(success_lines("1 + 1"), vec!["Return: 2"]);
}

#[test]
fn top_level_return_is_supported() {
    assert_eq!(success_lines("return 40 + 2;"), vec!["Return: 42"]);
}

#[test]
fn silent_snippet_reports_the_no_output_marker() {
    assert_eq!(success_lines("let x = 1;"), vec![NO_OUTPUT_MARKER]);
}

#[test]
fn thrown_errors_become_failures() {
    assert_eq!(failure_message("throw new Error('boom');"), "boom");
}

#[test]
fn failure_discards_output_captured_before_the_throw() {
    let outcome = execute("console.log('before'); throw new Error('after');");
    assert!(outcome.is_failure());
    assert_eq!(outcome.display_lines(), vec!["❌ Execution Error: after"]);
}

#[test]
fn awaited_promise_value_is_reported() {
    assert_eq!(success_lines("await Promise.resolve(5)"), vec!["Return: 5"]);
}

#[test]
fn rejected_await_becomes_a_failure() {
    assert_eq!(
        failure_message("await Promise.reject(new Error('nope'))"),
        "nope"
    );
}

#[test]
fn async_bodies_with_statements_run_to_completion() {
    let lines = success_lines(
        "const value = await Promise.resolve('done');\nconsole.log(value);",
    );
    assert_eq!(lines, vec!["> done"]);
}

#[test]
fn timers_fire_in_delay_order_after_evaluation() {
    let lines = success_lines(
        "setTimeout(() => console.log('late'), 200);\n\
         setTimeout(() => console.log('early'), 50);\n\
         console.log('first');",
    );
    assert_eq!(lines, vec!["> first", "> early", "> late"]);
}

#[test]
fn cleared_timers_never_fire() {
    let lines = success_lines(
        "const id = setTimeout(() => console.log('never'), 100);\nclearTimeout(id);\nconsole.log('only');",
    );
    assert_eq!(lines, vec!["> only"]);
}

#[test]
fn debounce_pattern_settles_deterministically() {
    let lines = success_lines(
        "function debounce(fn, delay) {\n\
           let pending;\n\
           return function (...args) {\n\
             clearTimeout(pending);\n\
             pending = setTimeout(() => fn(...args), delay);\n\
           };\n\
         }\n\
         const save = debounce((v) => console.log('saved:', v), 300);\n\
         save('a');\n\
         save('ab');\n\
         save('abc');",
    );
    assert_eq!(lines, vec!["> saved: abc"]);
}

#[test]
fn runaway_loop_is_cut_off_by_the_iteration_budget() {
    let limits = ExecutionLimits {
        loop_iterations: 10_000,
        ..ExecutionLimits::default()
    };
    match execute_with_limits("while (true) {}", &limits) {
        ExecutionOutcome::Failure(message) => {
            assert!(message.contains("loop iteration limit"), "unexpected message: {message}")
        }
        ExecutionOutcome::Success(lines) => panic!("unexpected success: {lines:?}"),
    }
}

#[test]
fn runaway_recursion_is_cut_off_by_the_depth_budget() {
    let limits = ExecutionLimits {
        recursion_depth: 64,
        ..ExecutionLimits::default()
    };
    let outcome = execute_with_limits("function f() { return f(); } f();", &limits);
    assert!(outcome.is_failure());
}

#[test]
fn timer_cascades_are_cut_off_by_the_cascade_budget() {
    let limits = ExecutionLimits {
        timer_cascade: 10,
        ..ExecutionLimits::default()
    };
    let outcome = execute_with_limits(
        "function again() { setTimeout(again, 1); }\nagain();",
        &limits,
    );
    assert!(outcome.is_failure());
}

#[test]
fn objects_print_as_pretty_json() {
    let lines = success_lines("console.log({ a: 1 });");
    assert_eq!(lines, vec!["> {\n  \"a\": 1\n}"]);
}

#[test]
fn repeated_runs_of_the_same_source_agree() {
    let source = "console.log('stable'); 1 + 2";
    assert_eq!(execute(source), execute(source));
}
