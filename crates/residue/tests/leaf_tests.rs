//! Leaf classification tests

use residue::*;

fn setup() -> (Heap, Realm) {
    let mut heap = Heap::new();
    let realm = Realm::bootstrap(&mut heap, RealmOptions::default());
    (heap, realm)
}

// ═══════════════════════════════════════════════════════════════════════
// Primitives
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_primitives_are_leaves() {
    let (heap, realm) = setup();
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    assert!(inspector.is_leaf(&Value::Undefined));
    assert!(inspector.is_leaf(&Value::Null));
    assert!(inspector.is_leaf(&Value::Boolean(false)));
    assert!(inspector.is_leaf(&Value::Number(f64::NAN)));
    assert!(inspector.is_leaf(&Value::string("hello")));
    assert!(inspector.is_leaf(&Value::bigint("900719925474099312")));
}

#[test]
fn test_symbols_are_never_leaves() {
    let (mut heap, realm) = setup();
    let fresh = heap.alloc_symbol(SymbolRecord::new(Some("tag".to_string())));
    let well_known = heap.alloc_symbol(SymbolRecord::well_known("Symbol.iterator"));
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    assert!(!inspector.is_leaf(&Value::Symbol(fresh)));
    assert!(!inspector.is_leaf(&Value::Symbol(well_known)));
}

// ═══════════════════════════════════════════════════════════════════════
// Objects and Intrinsics
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_objects_and_functions_are_not_leaves() {
    let (mut heap, realm) = setup();
    let object = heap.alloc(ObjectRecord::ordinary(Some(realm.object_prototype())));
    let function = heap.alloc(ObjectRecord::function(
        Some(realm.intrinsics().function_prototype),
        FunctionData::sloppy("f", 0),
    ));
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    assert!(!inspector.is_leaf(&Value::Object(object)));
    assert!(!inspector.is_leaf(&Value::Object(function)));
}

#[test]
fn test_intrinsic_objects_are_not_leaves() {
    let (heap, realm) = setup();
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    assert!(!inspector.is_leaf(&Value::Object(realm.object_prototype())));
}

#[test]
fn test_intrinsic_primitives_are_not_leaves() {
    let (heap, realm) = setup();
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    let platform = Value::intrinsic("process.platform", "linux");
    let max_safe = Value::intrinsic("Number.MAX_SAFE_INTEGER", 9007199254740991.0);

    // Still primitives by category, but referenced through the realm
    assert!(platform.category(&heap).is_primitive());
    assert!(max_safe.category(&heap).is_primitive());
    assert!(!inspector.is_leaf(&platform));
    assert!(!inspector.is_leaf(&max_safe));

    assert!(inspector.is_leaf(&Value::string("linux")));
    assert!(inspector.is_leaf(&Value::Number(9007199254740991.0)));
}

// ═══════════════════════════════════════════════════════════════════════
// Abstract Values
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_abstract_with_identifier_is_leaf() {
    let (heap, realm) = setup();
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    assert!(inspector.is_leaf(&Value::abstract_value(AbstractValue::named("_$1"))));
    assert!(!inspector.is_leaf(&Value::abstract_value(AbstractValue::new())));
}

#[test]
fn test_identifier_wins_over_intrinsic() {
    let (heap, realm) = setup();
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    let named_intrinsic =
        Value::abstract_value(AbstractValue::named("_$2").with_intrinsic_name("global.process"));
    let anonymous_intrinsic =
        Value::abstract_value(AbstractValue::new().with_intrinsic_name("global.process"));

    assert!(named_intrinsic.is_intrinsic(&heap));
    assert!(inspector.is_leaf(&named_intrinsic));
    assert!(!inspector.is_leaf(&anonymous_intrinsic));
}

// ═══════════════════════════════════════════════════════════════════════
// Purity
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_is_leaf_is_pure() {
    let (mut heap, realm) = setup();
    let object = heap.alloc(ObjectRecord::ordinary(Some(realm.object_prototype())));
    let symbol = heap.alloc_symbol(SymbolRecord::default());
    let sink = CollectingSink::new();
    let inspector = ResidualHeapInspector::new(&realm, &heap, &sink);

    let values = [
        Value::Undefined,
        Value::Null,
        Value::Boolean(true),
        Value::Number(1.0),
        Value::string("s"),
        Value::bigint("1"),
        Value::intrinsic("Math.PI", std::f64::consts::PI),
        Value::Symbol(symbol),
        Value::Object(object),
        Value::abstract_value(AbstractValue::new()),
        Value::abstract_value(AbstractValue::named("x")),
    ];
    for value in &values {
        assert_eq!(inspector.is_leaf(value), inspector.is_leaf(value));
    }

    assert_eq!(inspector.stats(), InspectorStats::default());
    assert!(sink.is_empty());
}
