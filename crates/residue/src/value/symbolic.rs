//! Symbols and abstract values

use std::fmt;

use super::Value;

/// Stable handle to a symbol in a [`Heap`](super::Heap) snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Build a handle from a dense arena index
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in 32 bits.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("symbol arena exceeds u32::MAX entries"))
    }

    /// The dense arena index behind this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A symbol captured in the heap snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolRecord {
    /// `Symbol.prototype.description`
    pub description: Option<String>,

    /// Well-known symbol name (e.g. `Symbol.iterator`)
    pub intrinsic_name: Option<String>,
}

impl SymbolRecord {
    /// Create a fresh symbol
    pub fn new(description: Option<String>) -> Self {
        Self {
            description,
            intrinsic_name: None,
        }
    }

    /// Create a well-known symbol
    pub fn well_known(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: Some(name.clone()),
            intrinsic_name: Some(name),
        }
    }

    /// Check if this symbol pre-exists in the target runtime
    pub fn is_intrinsic(&self) -> bool {
        self.intrinsic_name.is_some()
    }
}

/// A value standing for a computation that partial evaluation could not
/// resolve.
///
/// Once the serializer has hoisted the computation into a named
/// declaration, `identifier` holds that name and the value is referenced
/// rather than rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractValue {
    /// Stable identifier the generator emits references to
    pub identifier: Option<String>,

    /// Intrinsic name, for abstract values modeling runtime-provided state
    pub intrinsic_name: Option<String>,
}

impl AbstractValue {
    /// Create an anonymous abstract value
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an abstract value with a stable identifier
    pub fn named(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            intrinsic_name: None,
        }
    }

    /// Mark as an intrinsic (builder pattern)
    pub fn with_intrinsic_name(mut self, name: impl Into<String>) -> Self {
        self.intrinsic_name = Some(name.into());
        self
    }

    /// Check if a stable identifier is attached
    pub fn has_identifier(&self) -> bool {
        self.identifier.is_some()
    }

    /// Check if this value models runtime-provided state
    pub fn is_intrinsic(&self) -> bool {
        self.intrinsic_name.is_some()
    }
}

/// A primitive the target runtime already provides under a well-known name,
/// such as `Number.MAX_SAFE_INTEGER` or `process.platform`.
///
/// The value is known at build time but is referenced through its name
/// rather than emitted as a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrinsicPrimitive {
    /// Intrinsic name the generator references
    pub name: String,

    /// The concrete primitive behind the name
    pub value: Value,
}

impl IntrinsicPrimitive {
    /// Name a primitive
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
