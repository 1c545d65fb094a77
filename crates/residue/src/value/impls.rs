//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a bigint value from its decimal digits
    pub fn bigint(digits: impl Into<String>) -> Self {
        Value::BigInt(Arc::new(digits.into()))
    }

    /// Create a primitive the target runtime provides as `name`
    pub fn intrinsic(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Intrinsic(Arc::new(IntrinsicPrimitive::new(name, value)))
    }

    /// Wrap an abstract value
    pub fn abstract_value(value: AbstractValue) -> Self {
        Value::Abstract(Arc::new(value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is the number zero (either sign)
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Number(n) if *n == 0.0)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract object handle
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Value::Object(id) => Some(*id),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Heap-Aware Queries
    // ═══════════════════════════════════════════════════════════════════
    /// Classify this value.
    ///
    /// Object handles missing from `heap` are reported as plain objects.
    pub fn category(&self, heap: &Heap) -> ValueCategory {
        match self {
            Value::Undefined => ValueCategory::Undefined,
            Value::Null => ValueCategory::Null,
            Value::Boolean(_) => ValueCategory::Boolean,
            Value::Number(_) => ValueCategory::Number,
            Value::String(_) => ValueCategory::String,
            Value::BigInt(_) => ValueCategory::BigInt,
            Value::Intrinsic(p) => p.value.category(heap),
            Value::Symbol(_) => ValueCategory::Symbol,
            Value::Object(id) => match heap.get(*id) {
                Some(record) if record.is_function() => ValueCategory::Function,
                _ => ValueCategory::Object,
            },
            Value::Abstract(_) => ValueCategory::Abstract,
        }
    }

    /// Whether this value pre-exists in the target runtime.
    pub fn is_intrinsic(&self, heap: &Heap) -> bool {
        match self {
            Value::Symbol(id) => heap.symbol(*id).is_some_and(|s| s.is_intrinsic()),
            Value::Object(id) => heap.get(*id).is_some_and(|o| o.is_intrinsic()),
            Value::Abstract(a) => a.is_intrinsic(),
            Value::Intrinsic(_) => true,
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::BigInt(_) => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,

            // Strict equality: +0 == -0, NaN != NaN
            (Value::Number(a), Value::Number(b)) => a == b,

            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Intrinsic(a), Value::Intrinsic(b)) => a == b,

            // Handles compare by identity
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,

            // Abstract values are equal only if they are the same Arc
            (Value::Abstract(a), Value::Abstract(b)) => Arc::ptr_eq(a, b),

            // Different types are never equal
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Object(id)
    }
}

impl From<SymbolId> for Value {
    fn from(id: SymbolId) -> Self {
        Value::Symbol(id)
    }
}

impl From<AbstractValue> for Value {
    fn from(value: AbstractValue) -> Self {
        Value::abstract_value(value)
    }
}
