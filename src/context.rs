//! Host execution context
//!
//! The `Context` carries all per-instance host state handed to native
//! functions: the single overridable host callback slot consulted by the
//! `load` builtin, a registry multiplexing many Rust callbacks over that one
//! slot, and the pending exception raised by a failing callback.
//!
//! The slot lives on the context rather than in process-wide storage, so two
//! engine instances in one process never observe each other's callbacks.
//! `Context` holds `Rc`s and is single-threaded by construction.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use crate::error::HostError;
use crate::value::Value;

/// Host callback signature: (context, receiver, arguments) -> value.
///
/// This is the same calling convention as a table entry, but boxed so
/// embedders can install capturing closures.
pub type HostCallback = dyn Fn(&mut Context, &Value, &[Value]) -> Value;

/// Callback registered through [`Context::register_fn`]. Receives only the
/// forwarded arguments; failures propagate as [`HostError`].
pub type RegisteredFn = dyn Fn(&[Value]) -> Result<Value, HostError>;

/// Per-instance host state threaded through every native function call.
pub struct Context {
    /// The single mutable override slot consulted by the `load` builtin.
    host_callback: Option<Rc<HostCallback>>,

    /// Registered callbacks, keyed by dispatch id.
    callbacks: HashMap<u32, Rc<RegisteredFn>>,

    /// Next id handed out by `register_fn`.
    next_callback_id: u32,

    /// Error raised by the most recent failing callback, if any.
    pending_exception: Option<HostError>,
}

impl Context {
    /// Create an empty context: no callback installed, no registered
    /// functions, no pending exception.
    pub fn new() -> Self {
        Context {
            host_callback: None,
            callbacks: HashMap::new(),
            next_callback_id: 1,
            pending_exception: None,
        }
    }

    // Host callback slot

    /// Install or clear the host callback consulted by the `load` builtin.
    ///
    /// Installing replaces the previous callback; there is no chaining.
    /// Passing `None` restores the default behavior (`load` returns
    /// undefined). The slot is never cleared implicitly.
    pub fn set_host_callback(&mut self, callback: Option<Rc<HostCallback>>) {
        self.host_callback = callback;
    }

    /// Convenience wrapper installing a closure as the host callback.
    pub fn set_host_fn<F>(&mut self, f: F)
    where
        F: Fn(&mut Context, &Value, &[Value]) -> Value + 'static,
    {
        self.set_host_callback(Some(Rc::new(f)));
    }

    /// Clear the host callback, restoring default `load` behavior.
    pub fn clear_host_callback(&mut self) {
        self.set_host_callback(None);
    }

    /// Check whether a host callback is currently installed.
    pub fn has_host_callback(&self) -> bool {
        self.host_callback.is_some()
    }

    /// Get the currently installed callback. The `Rc` clone lets the caller
    /// invoke it while still holding `&mut Context`.
    pub(crate) fn host_callback(&self) -> Option<Rc<HostCallback>> {
        self.host_callback.clone()
    }

    // Callback registry

    /// Register a Rust callback, returning its dispatch id.
    ///
    /// Registered callbacks share the single host slot: the first
    /// registration installs a dispatching callback that routes on the
    /// leading integer argument. Scripts (or the embedder) invoke a
    /// registered callback as `load(id, args...)`.
    ///
    /// Installing a custom callback via [`set_host_callback`] afterwards
    /// replaces the dispatcher, making registered callbacks unreachable
    /// until it is installed again.
    ///
    /// [`set_host_callback`]: Context::set_host_callback
    pub fn register_fn<F>(&mut self, f: F) -> u32
    where
        F: Fn(&[Value]) -> Result<Value, HostError> + 'static,
    {
        if self.host_callback.is_none() {
            let dispatcher: Rc<HostCallback> = Rc::new(dispatch_registered);
            self.host_callback = Some(dispatcher);
        }

        let id = self.next_callback_id;
        self.next_callback_id = self.next_callback_id.wrapping_add(1);
        let _ = self.callbacks.insert(id, Rc::new(f));
        id
    }

    /// Remove a registered callback. Returns false if the id was unknown.
    pub fn unregister_fn(&mut self, id: u32) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    fn registered(&self, id: u32) -> Option<Rc<RegisteredFn>> {
        self.callbacks.get(&id).cloned()
    }

    // Pending exception

    /// Record an error and return the exception marker the raising function
    /// should pass back to the engine.
    pub fn throw(&mut self, err: HostError) -> Value {
        self.pending_exception = Some(err);
        Value::Exception
    }

    /// Get the pending exception (if any) without clearing it.
    pub fn exception(&self) -> Option<&HostError> {
        self.pending_exception.as_ref()
    }

    /// Take and clear the pending exception.
    pub fn take_exception(&mut self) -> Option<HostError> {
        self.pending_exception.take()
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

/// The host callback installed by `register_fn`: routes on the leading
/// integer argument and forwards the rest to the matching registry entry.
fn dispatch_registered(ctx: &mut Context, _this: &Value, args: &[Value]) -> Value {
    let Some(id) = args.first().and_then(Value::to_i32) else {
        return ctx.throw(HostError::BadCallbackId);
    };
    if id < 0 {
        return ctx.throw(HostError::BadCallbackId);
    }
    let id = id as u32;

    let Some(callback) = ctx.registered(id) else {
        return ctx.throw(HostError::UnknownCallback { id });
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| callback(&args[1..])));
    match outcome {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => ctx.throw(err),
        Err(_) => ctx.throw(HostError::Callback {
            message: "callback panicked".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke_slot(ctx: &mut Context, args: &[Value]) -> Value {
        let cb = ctx.host_callback().expect("callback installed");
        cb(ctx, &Value::Undefined, args)
    }

    #[test]
    fn test_empty_context() {
        let ctx = Context::new();
        assert!(!ctx.has_host_callback());
        assert!(ctx.exception().is_none());
    }

    #[test]
    fn test_install_and_clear() {
        let mut ctx = Context::new();

        ctx.set_host_fn(|_, _, _| Value::Int(1));
        assert!(ctx.has_host_callback());

        ctx.clear_host_callback();
        assert!(!ctx.has_host_callback());
    }

    #[test]
    fn test_register_installs_dispatcher() {
        let mut ctx = Context::new();
        assert!(!ctx.has_host_callback());

        let id = ctx.register_fn(|_| Ok(Value::Int(10)));
        assert_eq!(id, 1);
        assert!(ctx.has_host_callback());

        let result = invoke_slot(&mut ctx, &[Value::Int(id as i32)]);
        assert_eq!(result, Value::Int(10));
    }

    #[test]
    fn test_dispatch_forwards_args() {
        let mut ctx = Context::new();
        let id = ctx.register_fn(|args| {
            assert_eq!(args.len(), 2);
            let a = args[0].to_i32().unwrap();
            let b = args[1].to_i32().unwrap();
            Ok(Value::Int(a + b))
        });

        let result = invoke_slot(
            &mut ctx,
            &[Value::Int(id as i32), Value::Int(2), Value::Int(3)],
        );
        assert_eq!(result, Value::Int(5));
    }

    #[test]
    fn test_dispatch_bad_id() {
        let mut ctx = Context::new();
        let _ = ctx.register_fn(|_| Ok(Value::Undefined));

        // No id argument at all
        let result = invoke_slot(&mut ctx, &[]);
        assert!(result.is_exception());
        assert!(matches!(
            ctx.take_exception(),
            Some(HostError::BadCallbackId)
        ));

        // Non-integer id
        let result = invoke_slot(&mut ctx, &[Value::string("one")]);
        assert!(result.is_exception());
        assert!(matches!(
            ctx.take_exception(),
            Some(HostError::BadCallbackId)
        ));
    }

    #[test]
    fn test_dispatch_unknown_id() {
        let mut ctx = Context::new();
        let _ = ctx.register_fn(|_| Ok(Value::Undefined));

        let result = invoke_slot(&mut ctx, &[Value::Int(77)]);
        assert!(result.is_exception());
        assert!(matches!(
            ctx.take_exception(),
            Some(HostError::UnknownCallback { id: 77 })
        ));
    }

    #[test]
    fn test_dispatch_callback_error() {
        let mut ctx = Context::new();
        let id = ctx.register_fn(|_| {
            Err(HostError::Callback {
                message: "boom".to_string(),
            })
        });

        let result = invoke_slot(&mut ctx, &[Value::Int(id as i32)]);
        assert!(result.is_exception());

        let err = ctx.take_exception().unwrap();
        assert_eq!(err.to_string(), "callback error: boom");
        assert!(ctx.exception().is_none());
    }

    #[test]
    fn test_dispatch_callback_panic() {
        let mut ctx = Context::new();
        let id = ctx.register_fn(|_| panic!("bug in embedder code"));

        let result = invoke_slot(&mut ctx, &[Value::Int(id as i32)]);
        assert!(result.is_exception());
        assert!(matches!(
            ctx.take_exception(),
            Some(HostError::Callback { .. })
        ));
    }

    #[test]
    fn test_unregister() {
        let mut ctx = Context::new();
        let id = ctx.register_fn(|_| Ok(Value::Int(1)));

        assert!(ctx.unregister_fn(id));
        assert!(!ctx.unregister_fn(id));

        let result = invoke_slot(&mut ctx, &[Value::Int(id as i32)]);
        assert!(result.is_exception());
    }

    #[test]
    fn test_register_assigns_fresh_ids() {
        let mut ctx = Context::new();
        let a = ctx.register_fn(|_| Ok(Value::Int(1)));
        let b = ctx.register_fn(|_| Ok(Value::Int(2)));
        assert_ne!(a, b);

        assert_eq!(invoke_slot(&mut ctx, &[Value::Int(a as i32)]), Value::Int(1));
        assert_eq!(invoke_slot(&mut ctx, &[Value::Int(b as i32)]), Value::Int(2));
    }
}
