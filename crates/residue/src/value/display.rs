//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::BigInt(digits) => write!(f, "{}n", digits),
            Value::Intrinsic(p) => write!(f, "<intrinsic {} = {:?}>", p.name, p.value),

            Value::Symbol(id) => write!(f, "<symbol {}>", id),
            Value::Object(id) => write!(f, "<object {}>", id),

            Value::Abstract(a) => match (&a.identifier, &a.intrinsic_name) {
                (Some(name), _) => write!(f, "<abstract {}>", name),
                (None, Some(name)) => write!(f, "<abstract intrinsic {}>", name),
                (None, None) => write!(f, "<abstract>"),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is more user-friendly, Debug is more detailed
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}
