//! Capability-table runtime.
//!
//! An object type is a plain struct holding its fields plus one shared,
//! immutable table of routine pointers declared with [`object_table!`].
//! Instances ([`Object`]) own their fields and borrow the table for the
//! whole process lifetime.
//!
//! Two dispatch paths share the same table:
//! - static: [`invoke!`] resolves the operation and bundle fields at compile time
//! - dynamic: [`DynObject::invoke`] resolves by name and checks arguments at runtime
//!
//! # Example
//!
//! ```ignore
//! let mut v = Object::<Vector2>::new();
//! invoke!(v.init(3.0, 4.0));
//! invoke!(v.set_x { x: 6.0 });
//! let len = invoke!(v.magnitude());
//! ```

pub mod error;
pub mod object;
pub mod registry;
pub mod sink;
pub mod table;
pub mod value;

pub use error::{ObjectError, Result};
pub use object::{DynObject, Object};
pub use registry::{TypeEntry, OBJECT_TYPES};
pub use sink::{Capture, Sink};
pub use table::{ObjectType, OpMeta, ParamMeta, Params, TypeMeta};
pub use value::{FromValue, IntoReturn, Value, ValueKind};
