//! Default builtin bindings
//!
//! The fixed set of native functions handed to the engine's global-object
//! installer. Every function here is a placeholder establishing the calling
//! convention and binding name: it accepts any receiver and any arguments,
//! performs no observable effect, and returns undefined. Embedders
//! substitute real implementations through [`FunctionTable::set`].
//!
//! `load` is the one exception: it consults the context's host callback
//! slot and forwards the call unchanged when a callback is installed.

use crate::context::Context;
use crate::table::{FunctionTable, NativeFn};
use crate::value::Value;

/// Build the default builtin table.
///
/// Pure and deterministic; call it once per engine instance. Tables built
/// for different contexts never interfere, since the only mutable state
/// (the host callback slot) lives on the `Context`.
pub fn register_default_functions() -> FunctionTable {
    FunctionTable::from_entries(vec![
        ("print", js_print as NativeFn),
        ("gc", js_gc),
        ("date_now", js_date_now),
        ("performance_now", js_performance_now),
        ("load", js_load),
        ("set_timeout", js_set_timeout),
        ("clear_timeout", js_clear_timeout),
    ])
}

/// `print(...)` placeholder. A real embedder substitutes console output.
pub fn js_print(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}

/// `gc()` placeholder. A real embedder substitutes a collector trigger.
pub fn js_gc(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}

/// `date_now()` placeholder. A real embedder substitutes wall-clock time.
pub fn js_date_now(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}

/// `performance_now()` placeholder. A real embedder substitutes a
/// monotonic clock.
pub fn js_performance_now(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}

/// `load(...)`: forward to the installed host callback.
///
/// If a callback is installed on the context, the receiver and arguments
/// are passed through unchanged and its result is returned as-is. With no
/// callback the call is a no-op returning undefined.
pub fn js_load(ctx: &mut Context, this: &Value, args: &[Value]) -> Value {
    match ctx.host_callback() {
        Some(callback) => callback(ctx, this, args),
        None => Value::Undefined,
    }
}

/// `set_timeout(...)` placeholder. Timer scheduling belongs to the
/// embedder's event loop.
pub fn js_set_timeout(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}

/// `clear_timeout(...)` placeholder.
pub fn js_clear_timeout(_ctx: &mut Context, _this: &Value, _args: &[Value]) -> Value {
    Value::Undefined
}
