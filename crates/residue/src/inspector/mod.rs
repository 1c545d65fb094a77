//! The residual heap inspector
//!
//! Answers the questions the serializer asks while walking the heap left
//! over after partial evaluation:
//!
//! - can this value be emitted as a literal or identifier reference?
//! - which own properties of this object will the runtime recreate by
//!   itself, so the generator can skip them?
//! - is this object the prototype the runtime creates alongside its
//!   constructor?
//!
//! # Example
//!
//! ```
//! use residue::{
//!     CollectingSink, Descriptor, Heap, ObjectRecord, Realm, RealmOptions,
//!     ResidualHeapInspector,
//! };
//!
//! let mut heap = Heap::new();
//! let realm = Realm::bootstrap(&mut heap, RealmOptions::default());
//! let array = heap.alloc(
//!     ObjectRecord::array(Some(realm.intrinsics().array_prototype))
//!         .with_property("0", Descriptor::data_default("a"))
//!         .with_property("length", Descriptor::data(1, true, false, false)),
//! );
//!
//! let sink = CollectingSink::new();
//! let mut inspector = ResidualHeapInspector::new(&realm, &heap, &sink);
//!
//! assert!(inspector.can_ignore_property(array, "length").unwrap());
//! assert!(!inspector.can_ignore_property(array, "0").unwrap());
//! assert_eq!(inspector.retained_properties(array).unwrap(), vec!["0"]);
//! ```

mod rules;

pub use rules::LENGTH_ACCESSOR_UNSUPPORTED;

use indexmap::IndexSet;

use crate::context::Realm;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::value::{Heap, ObjectId, Value};

use rules::RuleContext;

/// Counters describing the work an inspector has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectorStats {
    /// Objects whose omissible property set was computed
    pub objects_scanned: usize,

    /// Omissible-set lookups answered from the memo table
    pub cache_hits: usize,
}

/// Decision oracle over a frozen heap snapshot.
///
/// The inspector never mutates the heap. Its only state is a memo table of
/// omissible property names per object, which grows for the lifetime of
/// the inspector and is never invalidated; build a new inspector for each
/// pass over a new snapshot.
pub struct ResidualHeapInspector<'a> {
    realm: &'a Realm,
    heap: &'a Heap,
    diagnostics: &'a dyn Diagnostics,

    /// Omissible property names, indexed by object handle
    ignored_properties: Vec<Option<IndexSet<String>>>,

    stats: InspectorStats,
}

impl<'a> ResidualHeapInspector<'a> {
    /// Create an inspector for one pass over `heap`.
    pub fn new(realm: &'a Realm, heap: &'a Heap, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            realm,
            heap,
            diagnostics,
            ignored_properties: Vec::new(),
            stats: InspectorStats::default(),
        }
    }

    /// The realm the snapshot was captured in.
    pub fn realm(&self) -> &'a Realm {
        self.realm
    }

    /// The inspected snapshot.
    pub fn heap(&self) -> &'a Heap {
        self.heap
    }

    /// Work done so far.
    pub fn stats(&self) -> InspectorStats {
        self.stats
    }

    // ═══════════════════════════════════════════════════════════════════
    // Leaf Classification
    // ═══════════════════════════════════════════════════════════════════

    /// Check if `value` needs no structural traversal.
    ///
    /// Leaves are primitives emitted as literals and abstract values that
    /// already have an identifier to reference. Intrinsics are reported as
    /// non-leaves because the caller references them through the realm.
    pub fn is_leaf(&self, value: &Value) -> bool {
        match value {
            Value::Symbol(_) => false,
            // Must win over the intrinsic check below
            Value::Abstract(a) if a.has_identifier() => true,
            _ if value.is_intrinsic(self.heap) => false,
            _ => value.category(self.heap).is_primitive(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Property Omissibility
    // ═══════════════════════════════════════════════════════════════════

    /// Check if the own property `key` of `object` can be left out of the
    /// generated code.
    ///
    /// The first query for an object decides every own property at once;
    /// later queries are answered from the memo table.
    ///
    /// # Errors
    ///
    /// - `UnknownObject` if a handle is not in the snapshot
    /// - `NotSourceFunction` if a native or bound function carries
    ///   `arguments` or `caller`
    pub fn can_ignore_property(&mut self, object: ObjectId, key: &str) -> Result<bool> {
        Ok(self.ignored_properties(object)?.contains(key))
    }

    /// The omissible own property names of `object`, in property order.
    pub fn ignored_properties(&mut self, object: ObjectId) -> Result<&IndexSet<String>> {
        self.heap.object(object)?;

        let index = object.index();
        if index >= self.ignored_properties.len() {
            self.ignored_properties.resize_with(index + 1, || None);
        }

        let set = match self.ignored_properties[index].take() {
            Some(set) => {
                self.stats.cache_hits += 1;
                set
            }
            None => {
                let set = self.compute_ignored_properties(object)?;
                self.stats.objects_scanned += 1;
                set
            }
        };
        let cached: &IndexSet<String> = self.ignored_properties[index].insert(set);
        Ok(cached)
    }

    /// The present own property names of `object` the generator must emit,
    /// in insertion order.
    pub fn retained_properties(&mut self, object: ObjectId) -> Result<Vec<&'a str>> {
        let heap = self.heap;
        let ignored = self.ignored_properties(object)?;
        Ok(heap
            .object(object)?
            .present_properties()
            .map(|(name, _)| name)
            .filter(|name| !ignored.contains(*name))
            .collect())
    }

    fn compute_ignored_properties(&self, object: ObjectId) -> Result<IndexSet<String>> {
        let record = self.heap.object(object)?;
        let cx = RuleContext {
            realm: self.realm,
            heap: self.heap,
            diagnostics: self.diagnostics,
        };

        let mut set = IndexSet::new();
        for (key, desc) in record.present_properties() {
            if rules::can_ignore_property(&cx, object, record, key, desc)? {
                set.insert(key.to_string());
            }
        }

        log::trace!(
            "object {} ({}): {} of {} properties omissible",
            object,
            record.kind.name(),
            set.len(),
            record.properties.len()
        );
        Ok(set)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Default Prototypes
    // ═══════════════════════════════════════════════════════════════════

    /// Check if `object` is exactly the prototype the runtime creates
    /// together with its constructor.
    ///
    /// Such a prototype has no symbol properties, inherits directly from
    /// `Object.prototype`, is extensible, and has a single own property,
    /// `constructor`, pointing back at its original constructor.
    pub fn is_default_prototype(&self, object: ObjectId) -> Result<bool> {
        let record = self.heap.object(object)?;
        if record.has_symbol_bindings()
            || record.prototype != Some(self.realm.object_prototype())
            || !record.extensible
        {
            return Ok(false);
        }

        let mut found_constructor = false;
        for (name, _) in record.present_properties() {
            let points_back = name == "constructor"
                && match (self.get_property_value(object, name)?, record.original_constructor) {
                    (Some(Value::Object(value)), Some(constructor)) => *value == constructor,
                    _ => false,
                };
            if !points_back {
                return Ok(false);
            }
            found_constructor = true;
        }
        Ok(found_constructor)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Property Access
    // ═══════════════════════════════════════════════════════════════════

    /// The value of the present own data property `name`, if any.
    pub fn get_property_value(&self, object: ObjectId, name: &str) -> Result<Option<&'a Value>> {
        Ok(self.heap.object(object)?.property_value(name))
    }
}
