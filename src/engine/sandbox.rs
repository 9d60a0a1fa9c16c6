//! Sandbox assembly and evaluation paths.
//!
//! Every run gets a fresh realm whose reachable surface is exactly the
//! standard intrinsics plus the console channels and timer functions
//! registered here. No host state is folded in.

use boa_engine::object::{FunctionObjectBuilder, ObjectInitializer};
use boa_engine::property::Attribute;
use boa_engine::{
    js_string, Context, JsError, JsNativeError, JsObject, JsResult, JsValue, NativeFunction,
    Source,
};
use boa_gc::{Finalize, Gc, GcRefCell, Trace};

use super::format::{error_message, format_arguments, format_value};
use super::{ExecutionLimits, ExecutionOutcome};

const LOG_MARKER: &str = "> ";
const ERROR_MARKER: &str = "❌ Error: ";
const WARN_MARKER: &str = "⚠️ Warning: ";
const INFO_MARKER: &str = "ℹ️ Info: ";
pub const NO_OUTPUT_MARKER: &str = "✅ Code executed successfully (no output)";

/// One scheduled timer. Timers fire after the main evaluation, ordered by
/// (delay, registration id), not by wall clock.
#[derive(Trace, Finalize)]
struct TimerEntry {
    id: u32,
    delay: f64,
    callback: JsObject,
    arguments: Vec<JsValue>,
}

#[derive(Clone, Trace, Finalize)]
enum Settled {
    Fulfilled(JsValue),
    Rejected(JsValue),
}

/// Mutable state shared between the registered globals and the driver:
/// captured output lines, the pending timer queue, and the settlement slot
/// the async path writes into.
#[derive(Default, Trace, Finalize)]
struct RunState {
    lines: Vec<String>,
    timers: Vec<TimerEntry>,
    next_timer_id: u32,
    settled: Option<Settled>,
}

type SharedState = Gc<GcRefCell<RunState>>;

/// Run one snippet to completion inside a fresh sandbox.
pub(super) fn run_snippet(source: &str, limits: &ExecutionLimits) -> ExecutionOutcome {
    let mut context = Context::default();
    context
        .runtime_limits_mut()
        .set_loop_iteration_limit(limits.loop_iterations);
    context
        .runtime_limits_mut()
        .set_recursion_limit(limits.recursion_depth);

    let state: SharedState = Gc::new(GcRefCell::new(RunState::default()));
    if let Err(err) = install_globals(&mut context, &state) {
        return ExecutionOutcome::Failure(error_message(err, &mut context));
    }

    let asynchronous = super::needs_async_evaluation(source);
    log::debug!(
        "executing snippet ({} bytes, {} path)",
        source.len(),
        if asynchronous { "async" } else { "sync" }
    );

    let completion = if asynchronous {
        eval_async(&mut context, &state, source, limits)
    } else {
        eval_sync(&mut context, &state, source, limits)
    };

    match completion {
        Ok(value) => finish(&mut context, &state, value),
        Err(err) => ExecutionOutcome::Failure(error_message(err, &mut context)),
    }
}

/// Post-processing shared by both paths: synthesize the `Return:` line when
/// the snippet produced a value but no output, then the no-output marker
/// when nothing else exists. The synthesized line is always last.
fn finish(context: &mut Context, state: &SharedState, value: JsValue) -> ExecutionOutcome {
    let mut lines = std::mem::take(&mut state.borrow_mut().lines);
    if !value.is_undefined() && lines.is_empty() {
        match format_value(&value, context) {
            Ok(text) => lines.push(format!("Return: {text}")),
            Err(err) => return ExecutionOutcome::Failure(error_message(err, context)),
        }
    }
    if lines.is_empty() {
        lines.push(NO_OUTPUT_MARKER.to_string());
    }
    ExecutionOutcome::Success(lines)
}

// ---------------------------------------------------------------------------
// Globals
// ---------------------------------------------------------------------------

fn install_globals(context: &mut Context, state: &SharedState) -> JsResult<()> {
    let console = ObjectInitializer::new(context)
        .function(channel_fn(state, Channel::Log), js_string!("log"), 0)
        .function(channel_fn(state, Channel::Error), js_string!("error"), 0)
        .function(channel_fn(state, Channel::Warn), js_string!("warn"), 0)
        .function(channel_fn(state, Channel::Info), js_string!("info"), 0)
        .build();
    context.register_global_property(js_string!("console"), console, Attribute::all())?;

    context.register_global_callable(
        js_string!("setTimeout"),
        2,
        NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| schedule_timer(args, state, ctx),
            state.clone(),
        ),
    )?;
    // Single-shot rendition: there is no event loop alive between runs, so
    // an interval fires exactly once during the drain.
    context.register_global_callable(
        js_string!("setInterval"),
        2,
        NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| schedule_timer(args, state, ctx),
            state.clone(),
        ),
    )?;
    context.register_global_callable(
        js_string!("clearTimeout"),
        1,
        NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| cancel_timer(args, state, ctx),
            state.clone(),
        ),
    )?;
    context.register_global_callable(
        js_string!("clearInterval"),
        1,
        NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| cancel_timer(args, state, ctx),
            state.clone(),
        ),
    )?;
    Ok(())
}

#[derive(Clone, Copy)]
enum Channel {
    Log,
    Error,
    Warn,
    Info,
}

impl Channel {
    fn marker(self) -> &'static str {
        match self {
            Channel::Log => LOG_MARKER,
            Channel::Error => ERROR_MARKER,
            Channel::Warn => WARN_MARKER,
            Channel::Info => INFO_MARKER,
        }
    }
}

fn channel_fn(state: &SharedState, channel: Channel) -> NativeFunction {
    match channel {
        Channel::Log => NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| capture(Channel::Log, args, state, ctx),
            state.clone(),
        ),
        Channel::Error => NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| capture(Channel::Error, args, state, ctx),
            state.clone(),
        ),
        Channel::Warn => NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| capture(Channel::Warn, args, state, ctx),
            state.clone(),
        ),
        Channel::Info => NativeFunction::from_copy_closure_with_captures(
            |_this, args, state, ctx| capture(Channel::Info, args, state, ctx),
            state.clone(),
        ),
    }
}

fn capture(
    channel: Channel,
    args: &[JsValue],
    state: &SharedState,
    context: &mut Context,
) -> JsResult<JsValue> {
    let message = format_arguments(args, context)?;
    state
        .borrow_mut()
        .lines
        .push(format!("{}{}", channel.marker(), message));
    Ok(JsValue::undefined())
}

fn schedule_timer(
    args: &[JsValue],
    state: &SharedState,
    context: &mut Context,
) -> JsResult<JsValue> {
    let callback = args
        .first()
        .and_then(JsValue::as_object)
        .filter(|obj| obj.is_callable())
        .cloned()
        .ok_or_else(|| {
            JsError::from(JsNativeError::typ().with_message("timer callback must be a function"))
        })?;
    let delay = match args.get(1) {
        Some(value) => value.to_number(context)?,
        None => 0.0,
    };
    let arguments = args.get(2..).map(<[JsValue]>::to_vec).unwrap_or_default();

    let mut run = state.borrow_mut();
    run.next_timer_id += 1;
    let id = run.next_timer_id;
    run.timers.push(TimerEntry {
        id,
        delay,
        callback,
        arguments,
    });
    Ok(JsValue::from(id))
}

fn cancel_timer(
    args: &[JsValue],
    state: &SharedState,
    context: &mut Context,
) -> JsResult<JsValue> {
    let id = match args.first() {
        Some(value) => value.to_number(context)? as u32,
        None => return Ok(JsValue::undefined()),
    };
    state.borrow_mut().timers.retain(|timer| timer.id != id);
    Ok(JsValue::undefined())
}

/// Fire pending timers in (delay, registration) order, draining microtasks
/// after each callback. Callbacks may schedule or cancel further timers;
/// the cascade cap keeps self-rescheduling chains finite.
fn drain_timers(
    context: &mut Context,
    state: &SharedState,
    limits: &ExecutionLimits,
) -> JsResult<()> {
    let mut fired = 0usize;
    loop {
        let next = {
            let mut run = state.borrow_mut();
            if run.timers.is_empty() {
                break;
            }
            let mut best = 0;
            for (i, timer) in run.timers.iter().enumerate() {
                let earlier = timer.delay < run.timers[best].delay
                    || (timer.delay == run.timers[best].delay && timer.id < run.timers[best].id);
                if earlier {
                    best = i;
                }
            }
            run.timers.remove(best)
        };
        if fired >= limits.timer_cascade {
            return Err(JsNativeError::error()
                .with_message("timer cascade limit exceeded")
                .into());
        }
        fired += 1;
        next.callback
            .call(&JsValue::undefined(), &next.arguments, context)?;
        context.run_jobs();
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Evaluation paths
// ---------------------------------------------------------------------------

/// Synchronous path: evaluate the snippet as a script and keep its
/// completion value. A parse failure gets one retry as the body of an
/// immediately-invoked function, which accepts top-level `return`; if the
/// retry fails too the original diagnostic wins.
fn eval_sync(
    context: &mut Context,
    state: &SharedState,
    source: &str,
    limits: &ExecutionLimits,
) -> JsResult<JsValue> {
    let value = match context.eval(Source::from_bytes(source)) {
        Ok(value) => value,
        Err(first) if is_syntax_error(&first) => {
            let wrapped = format!("(function() {{\n{source}\n}})()");
            match context.eval(Source::from_bytes(&wrapped)) {
                Ok(value) => value,
                Err(_) => return Err(first),
            }
        }
        Err(err) => return Err(err),
    };
    context.run_jobs();
    drain_timers(context, state, limits)?;
    context.run_jobs();
    Ok(value)
}

/// Asynchronous path: wrap the snippet in an async IIFE, attach settlement
/// handlers to the resulting promise, drain jobs and timers, then read the
/// settled value. Scripts cannot contain top-level `await`, so the wrapper
/// is where suspension becomes legal.
fn eval_async(
    context: &mut Context,
    state: &SharedState,
    source: &str,
    limits: &ExecutionLimits,
) -> JsResult<JsValue> {
    let expression_form = looks_like_expression(source);
    let wrapped = if expression_form {
        // Expression body keeps the snippet's own value as the resolution,
        // so `await Promise.resolve(5)` reports `Return: 5`.
        format!("(async () => (\n{source}\n))()")
    } else {
        format!("(async () => {{\n{source}\n}})()")
    };

    let promise = match context.eval(Source::from_bytes(&wrapped)) {
        Ok(value) => value,
        Err(first) if expression_form && is_syntax_error(&first) => {
            let statement = format!("(async () => {{\n{source}\n}})()");
            context.eval(Source::from_bytes(&statement))?
        }
        Err(err) => return Err(err),
    };

    attach_settlement_handlers(context, state, &promise)?;
    context.run_jobs();
    drain_timers(context, state, limits)?;
    context.run_jobs();

    let settled = state.borrow().settled.clone();
    match &settled {
        Some(Settled::Fulfilled(value)) => Ok(value.clone()),
        Some(Settled::Rejected(value)) => Err(JsError::from_opaque(value.clone())),
        None => Err(JsNativeError::error()
            .with_message("asynchronous code did not settle (still awaiting a pending value)")
            .into()),
    }
}

/// Wire the wrapper promise's fulfillment and rejection into the shared
/// settlement slot. Non-thenable values settle immediately.
fn attach_settlement_handlers(
    context: &mut Context,
    state: &SharedState,
    value: &JsValue,
) -> JsResult<()> {
    let then = match value.as_object() {
        Some(obj) => obj.get(js_string!("then"), context)?,
        None => JsValue::undefined(),
    };
    let then_fn = match then.as_object().filter(|obj| obj.is_callable()).cloned() {
        Some(function) => function,
        None => {
            state.borrow_mut().settled = Some(Settled::Fulfilled(value.clone()));
            return Ok(());
        }
    };

    let on_fulfilled = FunctionObjectBuilder::new(
        context.realm(),
        NativeFunction::from_copy_closure_with_captures(
            |_this, args: &[JsValue], state: &SharedState, _ctx: &mut Context| {
                state.borrow_mut().settled =
                    Some(Settled::Fulfilled(args.first().cloned().unwrap_or_default()));
                Ok(JsValue::undefined())
            },
            state.clone(),
        ),
    )
    .name(js_string!("onFulfilled"))
    .length(1)
    .build();

    let on_rejected = FunctionObjectBuilder::new(
        context.realm(),
        NativeFunction::from_copy_closure_with_captures(
            |_this, args: &[JsValue], state: &SharedState, _ctx: &mut Context| {
                state.borrow_mut().settled =
                    Some(Settled::Rejected(args.first().cloned().unwrap_or_default()));
                Ok(JsValue::undefined())
            },
            state.clone(),
        ),
    )
    .name(js_string!("onRejected"))
    .length(1)
    .build();

    then_fn.call(
        value,
        &[JsValue::from(on_fulfilled), JsValue::from(on_rejected)],
        context,
    )?;
    Ok(())
}

fn is_syntax_error(error: &JsError) -> bool {
    error.to_string().starts_with("SyntaxError")
}

/// Textual guess at whether a snippet is a single expression, used to pick
/// the async wrapper form. Deliberately in the same spirit as the async
/// detection itself: cheap, conservative, string-based.
fn looks_like_expression(source: &str) -> bool {
    let trimmed = source.trim();
    if trimmed.is_empty() || trimmed.contains(';') || trimmed.contains('\n') {
        return false;
    }
    const STATEMENT_STARTERS: &[&str] = &[
        "const", "let", "var", "function", "class", "if", "for", "while", "do", "return", "throw",
        "switch", "try", "{", "//",
    ];
    let first_word = trimmed
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");
    !STATEMENT_STARTERS.contains(&first_word) && !trimmed.starts_with('{')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_guess_accepts_awaited_calls() {
        assert!(looks_like_expression("await Promise.resolve(5)"));
        assert!(looks_like_expression("Promise.resolve(1)"));
        assert!(looks_like_expression("1 + 1"));
    }

    #[test]
    fn expression_guess_rejects_statement_snippets() {
        assert!(!looks_like_expression("const x = await f();"));
        assert!(!looks_like_expression("let p = Promise.resolve(1)"));
        assert!(!looks_like_expression("async function f() {}\nf()"));
        assert!(!looks_like_expression("// Promise in a comment"));
    }
}
