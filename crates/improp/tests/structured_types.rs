//! Field mapping checkers: record_of, shape, contains and map_contains

use improp::scalar::{number, string};
use improp::value::{RecordType, Value, from_plain};
use improp::{Checker, Fields, PropTypes, Props};

const REQUIRED_MESSAGE: &str = "Required prop `testProp` was not specified in `testComponent`.";

fn type_check_pass(checker: &Checker, value: impl Into<Value>) {
    let props = Props::single("testProp", value);
    assert_eq!(checker.check(&props, "testProp", "testComponent", "prop"), Ok(()));
}

fn type_check_fail(checker: &Checker, value: impl Into<Value>, message: &str) {
    let props = Props::single("testProp", value);
    let err = checker
        .check(&props, "testProp", "testComponent", "prop")
        .expect_err("check should fail");
    assert_eq!(err.message(), message);
}

fn type_check_absent(checker: &Checker) -> Result<(), String> {
    checker
        .check(&Props::new(), "testProp", "testComponent", "prop")
        .map_err(|e| e.message())
}

fn fields_key() -> Fields {
    Fields::new().field("key", number())
}

fn fields_required() -> Fields {
    Fields::new()
        .field("key", number().required())
        .field("secondKey", number().required())
}

fn plain(entries: Vec<(&str, Value)>) -> Value {
    from_plain(Value::object(entries))
}

fn rejects(kind: &str, actual: &str) -> String {
    format!(
        "Invalid prop `testProp` of type `{actual}` supplied to `testComponent`, expected an Immutable.js {kind}."
    )
}

// ============================================================================
// RecordOf
// ============================================================================

#[test]
fn test_record_of_non_records() {
    let types = PropTypes::default();
    let checker = types.record_of(Fields::new());
    type_check_fail(&checker, "some string", &rejects("Record", "string"));
    type_check_fail(&checker, Value::array(["array"]), &rejects("Record", "array"));
    type_check_fail(&checker, Value::object([("a", Value::from(1))]), &rejects("Record", "object"));
    type_check_fail(&checker, Value::map([("a", 1)]), &rejects("Record", "Collection.Map"));
}

#[test]
fn test_record_of_valid() {
    let types = PropTypes::default();
    let empty = RecordType::new().instance();
    let with_key = RecordType::new().field("key", 1).instance();

    type_check_pass(&types.record_of(Fields::new()), Value::Null);
    assert_eq!(type_check_absent(&types.record_of(Fields::new())), Ok(()));
    type_check_pass(&types.record_of(Fields::new()).required(), empty);
    type_check_pass(&types.record_of(Fields::new()), with_key.clone());
    type_check_pass(&types.record_of(fields_key()), with_key.clone());
    type_check_pass(&types.record_of(Fields::new().unconstrained("key")), with_key);
}

#[test]
fn test_record_of_required_fields() {
    let types = PropTypes::default();
    let empty = RecordType::new().instance();
    type_check_fail(
        &types.record_of(Fields::new().field("key", number().required())),
        empty.clone(),
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
    type_check_fail(
        &types.record_of(fields_required()),
        empty,
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
}

#[test]
fn test_record_of_invalid_field() {
    let types = PropTypes::default();
    type_check_fail(
        &types.record_of(fields_key()),
        RecordType::new().field("key", "abc").instance(),
        "Invalid prop `testProp.key` of type `string` supplied to `testComponent`, expected `number`.",
    );
}

#[test]
fn test_record_of_set_field() {
    let types = PropTypes::default();
    let record = RecordType::new().field("key", 1).instance();
    let updated = record.set("key", "abc").unwrap();
    type_check_pass(&types.record_of(fields_key()), record);
    type_check_fail(
        &types.record_of(fields_key()),
        updated,
        "Invalid prop `testProp.key` of type `string` supplied to `testComponent`, expected `number`.",
    );
}

#[test]
fn test_record_of_presence() {
    let types = PropTypes::default();
    type_check_pass(&types.record_of(fields_key()), Value::Null);
    type_check_fail(&types.record_of(fields_key()).required(), Value::Null, REQUIRED_MESSAGE);
    assert_eq!(
        type_check_absent(&types.record_of(fields_key()).required()),
        Err(REQUIRED_MESSAGE.to_string())
    );
}

// ============================================================================
// Shape / Contains
// ============================================================================

#[test]
fn test_shape_and_contains_behave_alike() {
    let types = PropTypes::default();
    for checker in [types.shape(Fields::new()), types.contains(Fields::new())] {
        type_check_fail(&checker, "some string", &rejects("Collection", "string"));
        type_check_fail(&checker, Value::array(["array"]), &rejects("Collection", "array"));
        type_check_fail(
            &checker,
            Value::object([("a", Value::from(1))]),
            &rejects("Collection", "object"),
        );
        type_check_pass(&checker, Value::Null);
        type_check_pass(&checker, plain(vec![]));
        type_check_pass(&checker.required(), plain(vec![]));
        type_check_pass(&checker, plain(vec![("key", Value::from(1))]));
    }
}

#[test]
fn test_contains_fields() {
    let types = PropTypes::default();
    type_check_pass(&types.contains(fields_key()), plain(vec![("key", Value::from(1))]));
    type_check_pass(
        &types.contains(Fields::new().unconstrained("key")),
        plain(vec![("key", Value::from(1))]),
    );
    type_check_fail(
        &types.contains(Fields::new().field("key", number().required())),
        plain(vec![]),
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
    type_check_fail(
        &types.contains(fields_required()),
        plain(vec![]),
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
    type_check_fail(
        &types.contains(fields_key()),
        plain(vec![("key", Value::from("abc"))]),
        "Invalid prop `testProp.key` of type `string` supplied to `testComponent`, expected `number`.",
    );
    type_check_fail(&types.contains(fields_key()).required(), Value::Null, REQUIRED_MESSAGE);
}

#[test]
fn test_shape_accepts_lists_by_position() {
    let types = PropTypes::default();
    let fields = Fields::new()
        .field("0", number().required())
        .field("1", string().required())
        .field("2", string());
    type_check_pass(&types.shape(fields.clone()), Value::list([Value::from(1), Value::from("2")]));
    type_check_pass(&types.contains(fields), Value::list([Value::from(1), Value::from("2")]));
}

#[test]
fn test_nested_shape_is_optional() {
    let types = PropTypes::default();
    let nested = types.shape(Fields::new().field("nested", types.shape(fields_key())));
    type_check_pass(&nested, Value::Null);
    assert_eq!(type_check_absent(&nested), Ok(()));
}

// ============================================================================
// MapContains
// ============================================================================

#[test]
fn test_map_contains_non_maps() {
    let types = PropTypes::default();
    let checker = types.map_contains(Fields::new());
    type_check_fail(&checker, "some string", &rejects("Map", "string"));
    type_check_fail(&checker, Value::array(["array"]), &rejects("Map", "array"));
    type_check_fail(&checker, Value::object([("a", Value::from(1))]), &rejects("Map", "object"));
}

#[test]
fn test_map_contains_valid() {
    let types = PropTypes::default();
    type_check_pass(&types.map_contains(Fields::new()), Value::Null);
    type_check_pass(&types.map_contains(Fields::new()), plain(vec![]));
    type_check_pass(&types.map_contains(Fields::new()).required(), plain(vec![]));
    type_check_pass(&types.map_contains(Fields::new()), plain(vec![("key", Value::from(1))]));
    type_check_pass(&types.map_contains(fields_key()), plain(vec![("key", Value::from(1))]));
    type_check_pass(
        &types.map_contains(Fields::new().unconstrained("key")),
        plain(vec![("key", Value::from(1))]),
    );
    type_check_pass(
        &types.map_contains(fields_key()),
        Value::ordered_map([("key", 1)]),
    );
}

#[test]
fn test_map_contains_nested() {
    let types = PropTypes::default();
    let checker = types.map_contains(Fields::new().field(
        "data",
        types
            .list_of(types.map_contains(Fields::new().field("id", number().required())))
            .required(),
    ));
    let ids = |second: Value| {
        plain(vec![(
            "data",
            Value::array([Value::object([("id", Value::from(1))]), second]),
        )])
    };

    type_check_pass(&checker, ids(Value::object([("id", Value::from(2))])));
    type_check_fail(
        &checker,
        ids(Value::object(Vec::<(String, Value)>::new())),
        "Required prop `testProp.data[1].id` was not specified in `testComponent`.",
    );
    type_check_fail(
        &checker,
        plain(vec![]),
        "Required prop `testProp.data` was not specified in `testComponent`.",
    );
}

#[test]
fn test_map_contains_invalid_fields() {
    let types = PropTypes::default();
    type_check_fail(
        &types.map_contains(Fields::new().field("key", number().required())),
        plain(vec![]),
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
    type_check_fail(
        &types.map_contains(fields_required()),
        plain(vec![]),
        "Required prop `testProp.key` was not specified in `testComponent`.",
    );
    type_check_fail(
        &types.map_contains(fields_key()),
        plain(vec![("key", Value::from("abc"))]),
        "Invalid prop `testProp.key` of type `string` supplied to `testComponent`, expected `number`.",
    );
    type_check_fail(&types.map_contains(fields_key()).required(), Value::Null, REQUIRED_MESSAGE);
}

#[test]
fn test_map_contains_rejects_lists() {
    let types = PropTypes::default();
    let fields = Fields::new()
        .field("0", number().required())
        .field("1", string().required());
    type_check_fail(
        &types.map_contains(fields),
        Value::list([Value::from(1), Value::from("2")]),
        &rejects("Map", "Collection.List"),
    );
}
