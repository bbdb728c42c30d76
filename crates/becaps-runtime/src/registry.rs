//! Process-wide registry of object types.
//!
//! Object types register a [`TypeEntry`] into [`OBJECT_TYPES`] via linkme:
//!
//! ```ignore
//! #[distributed_slice(OBJECT_TYPES)]
//! static VECTOR2: TypeEntry = TypeEntry::of::<Vector2>();
//! ```
//!
//! The name index is built once, on first lookup.

use hashbrown::HashMap;
use linkme::distributed_slice;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{ObjectError, Result};
use crate::object::{DynObject, Object};
use crate::table::{ObjectType, TypeMeta};

pub struct TypeEntry {
    pub meta: fn() -> &'static TypeMeta,
    /// Construct a default-zeroed instance bound to the type's table
    pub construct: fn() -> Box<dyn DynObject>,
}

impl TypeEntry {
    pub const fn of<T: ObjectType + Default>() -> Self {
        Self {
            meta: T::meta,
            construct: construct_boxed::<T>,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.meta)().name
    }
}

fn construct_boxed<T: ObjectType + Default>() -> Box<dyn DynObject> {
    Box::new(Object::<T>::new())
}

#[distributed_slice]
pub static OBJECT_TYPES: [TypeEntry];

static INDEX: Lazy<HashMap<&'static str, &'static TypeEntry>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(OBJECT_TYPES.len());
    for entry in OBJECT_TYPES.iter() {
        if index.insert(entry.name(), entry).is_some() {
            panic!("object type `{}` registered twice", entry.name());
        }
    }
    debug!(count = index.len(), "indexed object types");
    index
});

pub fn lookup(name: &str) -> Result<&'static TypeEntry> {
    INDEX
        .get(name)
        .copied()
        .ok_or_else(|| ObjectError::UnknownType(name.to_string()))
}

/// Construct a fresh instance of the named type.
pub fn construct(name: &str) -> Result<Box<dyn DynObject>> {
    lookup(name).map(|entry| (entry.construct)())
}

/// All registered types, sorted by name.
pub fn entries() -> Vec<&'static TypeEntry> {
    let mut entries: Vec<_> = INDEX.values().copied().collect();
    entries.sort_by_key(|entry| entry.name());
    entries
}
