//! Builtin function table
//!
//! The table is the hand-off point between this shim and the embedding
//! engine: an ordered mapping from builtin name to native function, built
//! once at engine-initialization time and consumed by the engine's own
//! global-object installer. This crate supplies the table and the calling
//! convention; installation itself belongs to the engine.

use crate::context::Context;
use crate::error::HostError;
use crate::value::Value;

/// Native function signature: (context, receiver, arguments) -> value.
///
/// The argument count of the C convention is the slice length. Every native
/// function must accept any receiver and any argument count.
pub type NativeFn = fn(&mut Context, &Value, &[Value]) -> Value;

/// Engine-side seam consuming the table.
///
/// The embedding engine's registration path implements this and installs
/// each entry under its given name into the global namespace before any
/// script executes.
pub trait GlobalInstaller {
    /// Install one builtin under `name`.
    fn install(&mut self, name: &str, func: NativeFn);
}

/// Ordered mapping from builtin name to native function.
///
/// Entries iterate in insertion order. After construction the shape is
/// fixed: embedders substitute implementations for existing names via
/// [`set`](FunctionTable::set) but cannot add or remove entries.
pub struct FunctionTable {
    entries: Vec<(&'static str, NativeFn)>,
}

impl FunctionTable {
    /// Create a table from a fixed entry list.
    pub(crate) fn from_entries(entries: Vec<(&'static str, NativeFn)>) -> Self {
        FunctionTable { entries }
    }

    /// Look up a native function by name.
    pub fn get(&self, name: &str) -> Option<NativeFn> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, func)| *func)
    }

    /// Replace the implementation bound to an existing name.
    ///
    /// This is how an embedder swaps a placeholder for a real implementation
    /// (console output for `print`, wall-clock time for `date_now`, ...).
    pub fn set(&mut self, name: &str, func: NativeFn) -> Result<(), HostError> {
        match self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| *entry_name == name)
        {
            Some(entry) => {
                entry.1 = func;
                Ok(())
            }
            None => Err(HostError::UnknownBuiltin {
                name: name.to_string(),
            }),
        }
    }

    /// Resolve a builtin by name and invoke it.
    pub fn call(
        &self,
        ctx: &mut Context,
        name: &str,
        this: &Value,
        args: &[Value],
    ) -> Result<Value, HostError> {
        let func = self.get(name).ok_or_else(|| HostError::UnknownBuiltin {
            name: name.to_string(),
        })?;
        Ok(func(ctx, this, args))
    }

    /// Iterate over entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Iterate over (name, function) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, NativeFn)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feed every entry, in order, to an engine-side installer.
    pub fn install_into(&self, installer: &mut dyn GlobalInstaller) {
        for (name, func) in &self.entries {
            installer.install(name, *func);
        }
    }
}
