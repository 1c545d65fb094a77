//! # Residue
//!
//! Residual heap inspection for ahead-of-time JavaScript partial evaluation.
//!
//! After a partial evaluator has run a program as far as it can, the heap it
//! leaves behind has to be turned back into code. Residue is the oracle the
//! serializer consults while it walks that heap: it says which values are
//! leaves (emitted as literals or identifier references) and which own
//! properties of an object the target runtime will recreate by itself, so
//! emitting them again would be redundant.
//!
//! ## Architecture
//!
//! - **Value model**: an append-only [`Heap`] of objects addressed by
//!   [`ObjectId`] handles, with descriptors, functions, symbols and abstract
//!   values
//! - **Realm**: target profile and intrinsic objects
//! - **Diagnostics**: non-fatal reports of unsupported heap shapes
//! - **Inspector**: leaf classification, property omissibility, default
//!   prototype detection
//!
//! The inspector never mutates the heap, never walks it on its own, and
//! never emits code.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod inspector;
pub mod value;

// Re-export main types
pub use context::{Intrinsics, Realm, RealmOptions, TargetProfile};
pub use diagnostics::{CollectingSink, Diagnostic, Diagnostics, LogSink};
pub use error::{InspectorError, ProfileParseError, Result};
pub use inspector::{InspectorStats, ResidualHeapInspector, LENGTH_ACCESSOR_UNSUPPORTED};
pub use value::{
    AbstractValue, Descriptor, FunctionData, FunctionKind, FunctionOrigin, Heap, IntrinsicPrimitive,
    ObjectId, ObjectKind, ObjectRecord, PropertyBinding, SymbolId, SymbolRecord, TypedArrayKind,
    Value, ValueCategory,
};

/// Residue version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
