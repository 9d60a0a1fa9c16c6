//! Display formatting for sandbox values and thrown errors.

use boa_engine::error::JsNativeErrorKind;
use boa_engine::{js_string, Context, JsError, JsResult, JsValue};

/// Format a single value the way the output pane shows it: composite
/// values (objects, arrays) become 2-space-indented JSON, everything else
/// uses its JavaScript string conversion. Functions count as non-composite
/// and render via their string form.
pub fn format_value(value: &JsValue, context: &mut Context) -> JsResult<String> {
    let callable = value
        .as_object()
        .map(|obj| obj.is_callable())
        .unwrap_or(false);
    if value.is_object() && !callable {
        // Mirrors JSON.stringify(value, null, 2); values JSON cannot
        // express (cycles, symbols) fall through to the string form.
        if let Ok(json) = value.to_json(context) {
            if let Ok(pretty) = serde_json::to_string_pretty(&json) {
                return Ok(pretty);
            }
        }
    }
    Ok(value.to_string(context)?.to_std_string_escaped())
}

/// Format a whole argument list: each argument formatted on its own, then
/// joined with a single space.
pub fn format_arguments(args: &[JsValue], context: &mut Context) -> JsResult<String> {
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        parts.push(format_value(arg, context)?);
    }
    Ok(parts.join(" "))
}

/// Extract the message carried by a thrown value: the `message` property
/// when the value is error-like, otherwise its string conversion.
pub fn error_message(error: JsError, context: &mut Context) -> String {
    let fallback = error.to_string();
    // Budget errors refuse conversion to an opaque value (the interpreter
    // panics on the attempt), so report their string form directly.
    if let Some(native) = error.as_native() {
        if matches!(native.kind, JsNativeErrorKind::RuntimeLimit) {
            return fallback;
        }
    }
    let thrown = error.to_opaque(context);
    if let Some(obj) = thrown.as_object() {
        if let Ok(message) = obj.get(js_string!("message"), context) {
            if !message.is_undefined() {
                if let Ok(text) = message.to_string(context) {
                    return text.to_std_string_escaped();
                }
            }
        }
    }
    match thrown.to_string(context) {
        Ok(text) => text.to_std_string_escaped(),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boa_engine::Source;

    fn eval(context: &mut Context, src: &str) -> JsValue {
        context.eval(Source::from_bytes(src)).expect("eval failed")
    }

    #[test]
    fn primitives_use_string_conversion() {
        let mut context = Context::default();
        let value = eval(&mut context, "42");
        assert_eq!(format_value(&value, &mut context).unwrap(), "42");
        let value = eval(&mut context, "'hi'");
        assert_eq!(format_value(&value, &mut context).unwrap(), "hi");
        let value = eval(&mut context, "null");
        assert_eq!(format_value(&value, &mut context).unwrap(), "null");
    }

    #[test]
    fn objects_render_as_indented_json() {
        let mut context = Context::default();
        let value = eval(&mut context, "({ a: 1 })");
        assert_eq!(
            format_value(&value, &mut context).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn arguments_join_with_single_space() {
        let mut context = Context::default();
        let args = vec![
            eval(&mut context, "'total:'"),
            eval(&mut context, "3"),
            eval(&mut context, "true"),
        ];
        assert_eq!(
            format_arguments(&args, &mut context).unwrap(),
            "total: 3 true"
        );
    }

    #[test]
    fn error_message_prefers_message_property() {
        let mut context = Context::default();
        let err = context
            .eval(Source::from_bytes("throw new TypeError('bad input')"))
            .unwrap_err();
        assert_eq!(error_message(err, &mut context), "bad input");
    }

    #[test]
    fn thrown_non_error_uses_string_form() {
        let mut context = Context::default();
        let err = context
            .eval(Source::from_bytes("throw 'plain string'"))
            .unwrap_err();
        assert_eq!(error_message(err, &mut context), "plain string");
    }
}
