//! Arena holding the captured heap snapshot

use crate::error::{InspectorError, Result};

use super::{Descriptor, ObjectId, ObjectRecord, SymbolId, SymbolRecord};

/// An append-only arena of objects and symbols.
///
/// Objects are addressed by [`ObjectId`], which is their index in the arena.
/// Nothing is ever removed, so handles stay valid for the lifetime of the
/// heap. The snapshot is built once after partial execution and is treated
/// as frozen while it is inspected.
#[derive(Debug, Clone, Default)]
pub struct Heap {
    objects: Vec<ObjectRecord>,
    symbols: Vec<SymbolRecord>,
}

impl Heap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Allocation
    // ═══════════════════════════════════════════════════════════════════

    /// Add an object and return its handle.
    pub fn alloc(&mut self, record: ObjectRecord) -> ObjectId {
        let id = ObjectId::from_index(self.objects.len());
        self.objects.push(record);
        id
    }

    /// Add a symbol and return its handle.
    pub fn alloc_symbol(&mut self, record: SymbolRecord) -> SymbolId {
        let id = SymbolId::from_index(self.symbols.len());
        self.symbols.push(record);
        id
    }

    /// Wire a constructor to its prototype object the way function creation does.
    ///
    /// Defines `function.prototype` and `prototype.constructor` with their
    /// canonical descriptors and records `function` as the prototype's
    /// original constructor.
    pub fn link_constructor(&mut self, function: ObjectId, prototype: ObjectId) -> Result<()> {
        self.object(function)?;
        self.object(prototype)?;

        let proto = &mut self.objects[prototype.index()];
        proto.original_constructor = Some(function);
        proto.define_property("constructor", Descriptor::data(function, true, false, true));

        self.objects[function.index()]
            .define_property("prototype", Descriptor::data(prototype, true, false, false));
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up an object.
    pub fn get(&self, id: ObjectId) -> Option<&ObjectRecord> {
        self.objects.get(id.index())
    }

    /// Look up an object for mutation while the snapshot is being captured.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut ObjectRecord> {
        self.objects.get_mut(id.index())
    }

    /// Look up an object, failing on an unknown handle.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectRecord> {
        self.get(id).ok_or(InspectorError::UnknownObject(id))
    }

    /// Look up a symbol.
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolRecord> {
        self.symbols.get(id.index())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the heap holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
