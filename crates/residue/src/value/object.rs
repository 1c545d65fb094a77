//! Object records, property bindings and descriptors

use std::fmt;

use indexmap::IndexMap;

use super::{FunctionData, SymbolId, Value};

/// Stable handle to an object in a [`Heap`](super::Heap) snapshot.
///
/// Handles are assigned at capture time and never reused, so they double
/// as object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Build a handle from a dense arena index
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in 32 bits.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("object arena exceeds u32::MAX entries"))
    }

    /// The dense arena index behind this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A property descriptor.
///
/// An absent `value` marks an accessor property; its getter and setter are
/// not modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// The stored value, `None` for accessors
    pub value: Option<Value>,

    /// `[[Writable]]`
    pub writable: bool,

    /// `[[Enumerable]]`
    pub enumerable: bool,

    /// `[[Configurable]]`
    pub configurable: bool,
}

impl Descriptor {
    /// Create a data descriptor
    pub fn data(
        value: impl Into<Value>,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            value: Some(value.into()),
            writable,
            enumerable,
            configurable,
        }
    }

    /// Create a data descriptor with every flag set, as plain assignment does
    pub fn data_default(value: impl Into<Value>) -> Self {
        Self::data(value, true, true, true)
    }

    /// Create an accessor descriptor
    pub fn accessor(enumerable: bool, configurable: bool) -> Self {
        Self {
            value: None,
            writable: false,
            enumerable,
            configurable,
        }
    }

    /// Check if this is an accessor descriptor
    pub fn is_accessor(&self) -> bool {
        self.value.is_none()
    }

    /// Check the three attribute flags at once
    pub fn has_flags(&self, writable: bool, enumerable: bool, configurable: bool) -> bool {
        self.writable == writable
            && self.enumerable == enumerable
            && self.configurable == configurable
    }
}

/// The slot holding a property's descriptor.
///
/// A binding without a descriptor records a property that was deleted after
/// it was first observed; it must be treated as nonexistent.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBinding {
    /// The current descriptor, `None` once deleted
    pub descriptor: Option<Descriptor>,
}

impl PropertyBinding {
    /// A live binding
    pub fn present(descriptor: Descriptor) -> Self {
        Self {
            descriptor: Some(descriptor),
        }
    }

    /// A binding whose property has been deleted
    pub fn deleted() -> Self {
        Self { descriptor: None }
    }

    /// Check if the property was deleted
    pub fn is_deleted(&self) -> bool {
        self.descriptor.is_none()
    }
}

/// Element type of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    /// `Int8Array`
    Int8,
    /// `Uint8Array`
    Uint8,
    /// `Uint8ClampedArray`
    Uint8Clamped,
    /// `Int16Array`
    Int16,
    /// `Uint16Array`
    Uint16,
    /// `Int32Array`
    Int32,
    /// `Uint32Array`
    Uint32,
    /// `Float32Array`
    Float32,
    /// `Float64Array`
    Float64,
}

/// The kind tag of an object, selecting category-specific rules.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// Plain object
    Ordinary,
    /// Array exotic object
    Array,
    /// Regular expression
    RegExp,
    /// `Date` instance
    Date,
    /// `Error` instance
    Error,
    /// `Boolean` wrapper
    Boolean,
    /// `Number` wrapper
    Number,
    /// `String` wrapper
    String,
    /// `Symbol` wrapper
    Symbol,
    /// `Map`
    Map,
    /// `Set`
    Set,
    /// `WeakMap`
    WeakMap,
    /// `WeakSet`
    WeakSet,
    /// `Promise`
    Promise,
    /// `ArrayBuffer`
    ArrayBuffer,
    /// `DataView`
    DataView,
    /// Typed array view
    TypedArray(TypedArrayKind),
    /// Arguments exotic object
    Arguments,
    /// Callable object
    Function(FunctionData),
}

impl ObjectKind {
    /// The runtime's name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Object",
            ObjectKind::Array => "Array",
            ObjectKind::RegExp => "RegExp",
            ObjectKind::Date => "Date",
            ObjectKind::Error => "Error",
            ObjectKind::Boolean => "Boolean",
            ObjectKind::Number => "Number",
            ObjectKind::String => "String",
            ObjectKind::Symbol => "Symbol",
            ObjectKind::Map => "Map",
            ObjectKind::Set => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::Promise => "Promise",
            ObjectKind::ArrayBuffer => "ArrayBuffer",
            ObjectKind::DataView => "DataView",
            ObjectKind::TypedArray(kind) => match kind {
                TypedArrayKind::Int8 => "Int8Array",
                TypedArrayKind::Uint8 => "Uint8Array",
                TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
                TypedArrayKind::Int16 => "Int16Array",
                TypedArrayKind::Uint16 => "Uint16Array",
                TypedArrayKind::Int32 => "Int32Array",
                TypedArrayKind::Uint32 => "Uint32Array",
                TypedArrayKind::Float32 => "Float32Array",
                TypedArrayKind::Float64 => "Float64Array",
            },
            ObjectKind::Arguments => "Arguments",
            ObjectKind::Function(_) => "Function",
        }
    }
}

/// An object captured in the heap snapshot.
///
/// Uses IndexMap so own properties keep their insertion order, which the
/// generator relies on when it re-creates them.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    /// Kind tag
    pub kind: ObjectKind,

    /// String-keyed own properties in insertion order
    pub properties: IndexMap<String, PropertyBinding>,

    /// Symbol-keyed own properties
    pub symbols: IndexMap<SymbolId, PropertyBinding>,

    /// `[[Prototype]]`, `None` for a null prototype
    pub prototype: Option<ObjectId>,

    /// `[[Extensible]]`
    pub extensible: bool,

    /// The constructor that canonically produced this object, if recorded
    pub original_constructor: Option<ObjectId>,

    /// Name of the intrinsic this object stands for, if it pre-exists in the runtime
    pub intrinsic_name: Option<String>,
}

impl ObjectRecord {
    /// Create an extensible object of the given kind with no own properties
    pub fn new(kind: ObjectKind, prototype: Option<ObjectId>) -> Self {
        Self {
            kind,
            properties: IndexMap::new(),
            symbols: IndexMap::new(),
            prototype,
            extensible: true,
            original_constructor: None,
            intrinsic_name: None,
        }
    }

    /// Create a plain object
    pub fn ordinary(prototype: Option<ObjectId>) -> Self {
        Self::new(ObjectKind::Ordinary, prototype)
    }

    /// Create an array object
    pub fn array(prototype: Option<ObjectId>) -> Self {
        Self::new(ObjectKind::Array, prototype)
    }

    /// Create a function object
    pub fn function(prototype: Option<ObjectId>, data: FunctionData) -> Self {
        Self::new(ObjectKind::Function(data), prototype)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Builders
    // ═══════════════════════════════════════════════════════════════════

    /// Add a string-keyed property (builder pattern)
    pub fn with_property(mut self, name: impl Into<String>, descriptor: Descriptor) -> Self {
        self.define_property(name, descriptor);
        self
    }

    /// Add a symbol-keyed property (builder pattern)
    pub fn with_symbol_property(mut self, symbol: SymbolId, descriptor: Descriptor) -> Self {
        self.symbols.insert(symbol, PropertyBinding::present(descriptor));
        self
    }

    /// Record the constructor that produced this object (builder pattern)
    pub fn with_original_constructor(mut self, constructor: ObjectId) -> Self {
        self.original_constructor = Some(constructor);
        self
    }

    /// Mark this object as an intrinsic (builder pattern)
    pub fn with_intrinsic_name(mut self, name: impl Into<String>) -> Self {
        self.intrinsic_name = Some(name.into());
        self
    }

    /// Clear the extensible flag (builder pattern)
    pub fn non_extensible(mut self) -> Self {
        self.extensible = false;
        self
    }

    /// Define or replace a string-keyed property.
    ///
    /// Replacing keeps the property's original position.
    pub fn define_property(&mut self, name: impl Into<String>, descriptor: Descriptor) {
        self.properties
            .insert(name.into(), PropertyBinding::present(descriptor));
    }

    /// Delete a string-keyed property, keeping its binding as a tombstone.
    ///
    /// Returns false if no such property was present.
    pub fn delete_property(&mut self, name: &str) -> bool {
        match self.properties.get_mut(name) {
            Some(binding) if !binding.is_deleted() => {
                binding.descriptor = None;
                true
            }
            _ => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this object is callable
    pub fn is_function(&self) -> bool {
        matches!(self.kind, ObjectKind::Function(_))
    }

    /// Function data, if this object is callable
    pub fn function_data(&self) -> Option<&FunctionData> {
        match &self.kind {
            ObjectKind::Function(data) => Some(data),
            _ => None,
        }
    }

    /// Check if this object pre-exists in the target runtime
    pub fn is_intrinsic(&self) -> bool {
        self.intrinsic_name.is_some()
    }

    /// Descriptor of a present own property
    pub fn descriptor(&self, name: &str) -> Option<&Descriptor> {
        self.properties.get(name)?.descriptor.as_ref()
    }

    /// Value of a present own data property
    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.descriptor(name)?.value.as_ref()
    }

    /// Present (non-deleted) own properties in insertion order
    pub fn present_properties(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.properties
            .iter()
            .filter_map(|(name, binding)| Some((name.as_str(), binding.descriptor.as_ref()?)))
    }

    /// Check if any symbol-keyed binding exists, deleted ones included
    pub fn has_symbol_bindings(&self) -> bool {
        !self.symbols.is_empty()
    }

    /// Whether the `length` property still holds the function's expected
    /// argument count. Always false for non-functions.
    pub fn has_default_length(&self) -> bool {
        match (self.function_data(), self.property_value("length")) {
            (Some(data), Some(Value::Number(length))) => {
                *length == data.expected_argument_count as f64
            }
            _ => false,
        }
    }
}
