//! Object instances.
//!
//! An [`Object`] owns its fields and holds a `&'static` reference to its
//! type's shared table. The reference is bound at construction, so an
//! instance without a table cannot exist.

use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::table::{ObjectType, TypeMeta};
use crate::value::Value;

pub struct Object<T: ObjectType> {
    state: T,
    funcs: &'static T::Funcs,
}

impl<T: ObjectType + Default> Object<T> {
    /// Construct with default-zeroed fields.
    pub fn new() -> Self {
        Self::with_state(T::default())
    }
}

impl<T: ObjectType> Object<T> {
    /// Construct with caller-supplied fields.
    pub fn with_state(state: T) -> Self {
        trace!(type_name = T::NAME, "construct object");
        Self {
            state,
            funcs: T::funcs(),
        }
    }

    #[inline]
    pub fn funcs(&self) -> &'static T::Funcs {
        self.funcs
    }

    #[inline]
    pub fn state(&self) -> &T {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    pub fn into_state(self) -> T {
        self.state
    }

    /// True if both instances dispatch through the same table.
    pub fn shares_table_with(&self, other: &Object<T>) -> bool {
        std::ptr::eq(self.funcs, other.funcs)
    }
}

impl<T: ObjectType + Default> Default for Object<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ObjectType + Clone> Clone for Object<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            funcs: self.funcs,
        }
    }
}

impl<T: ObjectType + fmt::Debug> fmt::Debug for Object<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(T::NAME).field(&self.state).finish()
    }
}

// =============================================================================
// Dynamic dispatch
// =============================================================================

/// Name-based invocation for callers that only know types at runtime.
pub trait DynObject {
    fn meta(&self) -> &'static TypeMeta;

    /// Invoke `op` with positional `args`.
    ///
    /// Fails with `UnknownOperation`, `Arity` or `TypeMismatch` before the
    /// routine runs when the call does not match the declared signature.
    fn invoke(&mut self, op: &str, args: &[Value]) -> Result<Value>;
}

impl<T: ObjectType> DynObject for Object<T> {
    fn meta(&self) -> &'static TypeMeta {
        T::meta()
    }

    fn invoke(&mut self, op: &str, args: &[Value]) -> Result<Value> {
        debug!(type_name = T::NAME, op, argc = args.len(), "dynamic invoke");
        self.state.dispatch(self.funcs, op, args)
    }
}
