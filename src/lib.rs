//! MQJS Host - host-function shim for embedded JavaScript engines
//!
//! This crate bridges calls originating inside an embedded script
//! interpreter to native Rust code. It owns the builtin function table the
//! engine installs into its global object, the uniform calling convention
//! (context, receiver, arguments) -> value, and a single per-context
//! override point (the host callback) consulted by the `load` builtin.
//!
//! The engine itself (parser, bytecode compiler, garbage collector) is out
//! of scope; this is the glue layer between it and the embedding
//! application.
//!
//! # Example
//! ```
//! use mqjs_host::{register_default_functions, Context, Value};
//!
//! let table = register_default_functions();
//! let mut ctx = Context::new();
//! ctx.set_host_fn(|_ctx, _this, args| args.first().cloned().unwrap_or_default());
//!
//! let result = table
//!     .call(&mut ctx, "load", &Value::Undefined, &[Value::Int(42)])
//!     .unwrap();
//! assert_eq!(result, Value::Int(42));
//! ```

// Core modules
pub mod value;
pub mod context;

// Builtin table and calling convention
pub mod table;

// Default builtin bindings
pub mod builtins;

// Errors
pub mod error;

// Re-export main types
pub use builtins::register_default_functions;
pub use context::{Context, HostCallback, RegisteredFn};
pub use error::HostError;
pub use table::{FunctionTable, GlobalInstaller, NativeFn};
pub use value::Value;
