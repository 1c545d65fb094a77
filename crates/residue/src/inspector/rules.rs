//! Per-property omission rules
//!
//! Each rule recognizes the exact descriptor shape and value the target
//! runtime produces on its own when the generator emits the construct that
//! owns the property (array literal, function declaration, constructor and
//! prototype linkage). Anything that deviates from that shape was customized
//! by the program and must be kept.

use crate::context::Realm;
use crate::diagnostics::Diagnostics;
use crate::error::{InspectorError, Result};
use crate::value::{
    Descriptor, FunctionData, FunctionKind, FunctionOrigin, Heap, ObjectId, ObjectKind,
    ObjectRecord, Value,
};

/// Reported when a function's `length` has been redefined as an accessor.
pub const LENGTH_ACCESSOR_UNSUPPORTED: &str =
    "Functions with length accessor properties are not supported in residual heap.";

/// Collaborators the rules consult.
pub(super) struct RuleContext<'a> {
    pub realm: &'a Realm,
    pub heap: &'a Heap,
    pub diagnostics: &'a dyn Diagnostics,
}

/// Outcome of a category rule: a final verdict, or defer to the
/// `constructor` fallback.
type Verdict = Option<bool>;

/// Decide whether the present own property `key` of `object` can be omitted.
pub(super) fn can_ignore_property(
    cx: &RuleContext<'_>,
    id: ObjectId,
    object: &ObjectRecord,
    key: &str,
    desc: &Descriptor,
) -> Result<bool> {
    let verdict = match &object.kind {
        ObjectKind::Array => array_rule(key, desc),
        ObjectKind::Function(data) => function_rule(cx, id, data, object, key, desc)?,
        ObjectKind::RegExp => regexp_rule(key, desc),
        ObjectKind::Ordinary
        | ObjectKind::Date
        | ObjectKind::Error
        | ObjectKind::Boolean
        | ObjectKind::Number
        | ObjectKind::String
        | ObjectKind::Symbol
        | ObjectKind::Map
        | ObjectKind::Set
        | ObjectKind::WeakMap
        | ObjectKind::WeakSet
        | ObjectKind::Promise
        | ObjectKind::ArrayBuffer
        | ObjectKind::DataView
        | ObjectKind::TypedArray(_)
        | ObjectKind::Arguments => None,
    };

    match verdict {
        Some(verdict) => Ok(verdict),
        None => Ok(constructor_rule(object, key, desc)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Category Rules
// ═══════════════════════════════════════════════════════════════════════

fn array_rule(key: &str, desc: &Descriptor) -> Verdict {
    (key == "length" && desc.has_flags(true, false, false)).then_some(true)
}

fn regexp_rule(key: &str, desc: &Descriptor) -> Verdict {
    if key == "lastIndex" && desc.has_flags(true, false, false) {
        return Some(desc.value.as_ref().is_some_and(Value::is_zero));
    }
    None
}

fn function_rule(
    cx: &RuleContext<'_>,
    id: ObjectId,
    data: &FunctionData,
    object: &ObjectRecord,
    key: &str,
    desc: &Descriptor,
) -> Result<Verdict> {
    match key {
        "length" => {
            if desc.is_accessor() {
                // Re-creating it would mean invoking the accessor at bind time.
                cx.diagnostics
                    .log_error(&Value::Object(id), LENGTH_ACCESSOR_UNSUPPORTED);
            }
            // has_default_length fails for accessors, so they are retained
            Ok(Some(
                desc.has_flags(false, false, true) && object.has_default_length(),
            ))
        }

        "name" => Ok(Some(!name_is_customized(cx.realm, id, data, desc))),

        "arguments" | "caller" => match data.origin {
            FunctionOrigin::Source { strict, kind } => Ok((!strict
                && kind == FunctionKind::Normal
                && desc.has_flags(true, false, true)
                && desc.value.as_ref().is_some_and(Value::is_undefined))
            .then_some(true)),
            FunctionOrigin::Native | FunctionOrigin::Bound => {
                Err(InspectorError::NotSourceFunction {
                    function: id,
                    key: key.to_string(),
                })
            }
        },

        "prototype" => {
            if !desc.has_flags(true, false, false) {
                return Ok(None);
            }
            let Some(prototype) = desc.value.as_ref().and_then(Value::as_object) else {
                return Ok(None);
            };
            let prototype = cx.heap.object(prototype)?;
            Ok((prototype.original_constructor == Some(id)).then_some(true))
        }

        _ => Ok(None),
    }
}

/// Whether the program gave the function a `name` the runtime will not
/// reproduce by itself.
///
/// Targets with non-configurable names cannot have the name restored
/// anyway, so it is never treated as customized there.
fn name_is_customized(
    realm: &Realm,
    id: ObjectId,
    data: &FunctionData,
    desc: &Descriptor,
) -> bool {
    let Some(value) = &desc.value else {
        return false;
    };
    if !realm.compatibility().function_names_configurable() {
        return false;
    }

    let customized = match value {
        Value::Abstract(_) => true,
        _ => data
            .recorded_name()
            .is_some_and(|original| value.as_str() != Some(original)),
    };
    if customized {
        log::debug!("retaining customized name {:?} of function {}", value, id);
    }
    customized
}

// ═══════════════════════════════════════════════════════════════════════
// Fallback
// ═══════════════════════════════════════════════════════════════════════

fn constructor_rule(object: &ObjectRecord, key: &str, desc: &Descriptor) -> bool {
    if key != "constructor" || !desc.has_flags(true, false, true) {
        return false;
    }
    match (&desc.value, object.original_constructor) {
        (Some(Value::Object(value)), Some(constructor)) => *value == constructor,
        _ => false,
    }
}
