//! Value representation for the captured heap snapshot

mod callable;
mod display;
mod heap;
mod impls;
mod object;
mod symbolic;

pub use callable::{FunctionData, FunctionKind, FunctionOrigin};
pub use heap::Heap;
pub use object::{
    Descriptor, ObjectId, ObjectKind, ObjectRecord, PropertyBinding, TypedArrayKind,
};
pub use symbolic::{AbstractValue, IntrinsicPrimitive, SymbolId, SymbolRecord};

use std::fmt;
use std::sync::Arc;

/// A value reachable from the residual heap.
///
/// Values are organized into three tiers:
/// - Tier 1: Primitives (emitted as literals)
/// - Tier 2: Identity-bearing handles into the [`Heap`] (symbols, objects, functions)
/// - Tier 3: Symbolic values produced by partial evaluation
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// `undefined`
    Undefined,

    /// `null`
    Null,

    /// `true` or `false`
    Boolean(bool),

    /// IEEE-754 double
    Number(f64),

    /// String primitive
    String(Arc<String>),

    /// BigInt primitive, stored as its decimal digits
    BigInt(Arc<String>),

    /// Primitive the target runtime provides under a well-known name
    Intrinsic(Arc<IntrinsicPrimitive>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap Handles
    // ═══════════════════════════════════════════════════════════════════
    /// Symbol (compared by identity)
    Symbol(SymbolId),

    /// Object or function (compared by identity)
    Object(ObjectId),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 3: Symbolic Values
    // ═══════════════════════════════════════════════════════════════════
    /// Unresolved computation whose concrete value is not known at build time
    Abstract(Arc<AbstractValue>),
}

/// The category of a value, as seen by classification rules.
///
/// Objects whose kind is [`ObjectKind::Function`] report
/// [`ValueCategory::Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// Boolean primitive
    Boolean,
    /// Number primitive
    Number,
    /// String primitive
    String,
    /// BigInt primitive
    BigInt,
    /// Symbol
    Symbol,
    /// Non-callable object
    Object,
    /// Function object
    Function,
    /// Abstract value
    Abstract,
}

impl ValueCategory {
    /// Whether values of this category are emitted as literals.
    ///
    /// Symbols are excluded: their identity must be preserved.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            ValueCategory::Undefined
                | ValueCategory::Null
                | ValueCategory::Boolean
                | ValueCategory::Number
                | ValueCategory::String
                | ValueCategory::BigInt
        )
    }

    /// Human-readable category name
    pub fn name(self) -> &'static str {
        match self {
            ValueCategory::Undefined => "undefined",
            ValueCategory::Null => "null",
            ValueCategory::Boolean => "boolean",
            ValueCategory::Number => "number",
            ValueCategory::String => "string",
            ValueCategory::BigInt => "bigint",
            ValueCategory::Symbol => "symbol",
            ValueCategory::Object => "object",
            ValueCategory::Function => "function",
            ValueCategory::Abstract => "abstract",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
