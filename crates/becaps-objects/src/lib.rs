//! Example object types.
//!
//! Both types register themselves with the runtime's type registry, so they
//! can also be constructed and invoked by name.

pub mod stream;
pub mod vector;

pub use stream::{Stream, StreamFuncs, StreamInit, StreamSetFile, StreamWrite};
pub use vector::{
    Vector2, Vector2Funcs, Vector2GetX, Vector2GetY, Vector2Init, Vector2Magnitude, Vector2SetX,
    Vector2SetY,
};
