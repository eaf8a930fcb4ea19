#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Shapes produced by `#[derive(Inspect)]`.

use std::mem::size_of;

use memprobe::native::{CHAR_UNIT, EMPTY_INTERFACE};
use memprobe::{measure, measure_with, Entry, Inspect, Kind, Options, Shape};
use pretty_assertions::assert_eq;

fn struct_fields(value: &dyn Inspect) -> (String, Vec<&'static str>) {
    match value.shape() {
        Shape::Struct(aggregate) => (
            aggregate.name().to_string(),
            aggregate.fields().iter().map(|field| field.name).collect(),
        ),
        other => panic!("expected a struct shape, found {other:?}"),
    }
}

// ── Structs ─────────────────────────────────────────────────────

#[derive(Inspect)]
struct Point(i32, i32);

#[derive(Inspect)]
struct Marker;

#[derive(Inspect)]
struct Labelled<T> {
    label: String,
    value: T,
}

#[test]
fn tuple_struct_fields_are_numbered() {
    assert_eq!(
        struct_fields(&Point(1, 2)),
        ("Point".to_string(), vec!["0", "1"])
    );
    assert_eq!(measure(&Point(1, 2)).total(), size_of::<Point>() + 8);
}

#[test]
fn unit_struct_has_no_fields() {
    assert_eq!(struct_fields(&Marker), ("Marker".to_string(), vec![]));
    assert_eq!(measure(&Marker).total(), 0);
}

#[test]
fn generic_struct_measures_its_parameter() {
    let labelled = Labelled {
        label: "id".to_string(),
        value: 7u16,
    };
    assert_eq!(
        measure(&labelled).total(),
        size_of::<Labelled<u16>>() + 2 * CHAR_UNIT + 2
    );

    let nested = Labelled {
        label: String::new(),
        value: vec![1u8, 2, 3],
    };
    assert_eq!(
        measure(&nested).total(),
        size_of::<Labelled<Vec<u8>>>() + memprobe::native::SEQUENCE + 3
    );
}

#[test]
fn module_path_is_recorded() {
    match Marker.shape() {
        Shape::Struct(aggregate) => {
            assert_eq!(aggregate.module_path(), "derive_tests");
            assert_eq!(aggregate.namespace(), "derive_tests");
            assert_eq!(aggregate.size(), 0);
        }
        other => panic!("expected a struct shape, found {other:?}"),
    }
}

// ── Attributes ──────────────────────────────────────────────────

/// Stands in for a value with no `Inspect` impl.
struct Opaque {
    _bytes: [u8; 32],
}

#[derive(Inspect)]
struct Session {
    #[inspect(rename = "user")]
    r#type: String,
    #[inspect(skip)]
    _scratch: Opaque,
    active: bool,
}

#[test]
fn skipped_and_renamed_fields() {
    let session = Session {
        r#type: "ada".to_string(),
        _scratch: Opaque { _bytes: [0; 32] },
        active: true,
    };

    assert_eq!(
        struct_fields(&session),
        ("Session".to_string(), vec!["user", "active"])
    );
    // The skipped member is still charged through the aggregate's own size.
    assert_eq!(
        measure(&session).total(),
        size_of::<Session>() + 3 * CHAR_UNIT + 1
    );

    let measurement = measure_with(&session, Options::new().verbose(true)).unwrap();
    let breakdown = measurement.breakdown().unwrap();
    assert_eq!(breakdown.lookup(&["user"]), Some(&Entry::Leaf(3 * CHAR_UNIT)));
    assert_eq!(breakdown.lookup(&["_scratch"]), None);
}

// ── Enums ───────────────────────────────────────────────────────

#[derive(Inspect)]
enum Message {
    Quit,
    Write(String),
    Move { x: i32, y: i32 },
    Pair(u8, u8),
}

#[test]
fn unit_variant_is_an_empty_union() {
    assert_eq!(Message::Quit.shape().kind(), Kind::Interface);
    assert_eq!(measure(&Message::Quit).total(), EMPTY_INTERFACE);
}

#[test]
fn single_payload_variant_unwraps() {
    let message = Message::Write("hello".to_string());
    assert_eq!(message.shape().kind(), Kind::Interface);
    assert_eq!(measure(&message).total(), 5 * CHAR_UNIT);
}

#[test]
fn multi_field_variants_are_aggregates() {
    let moved = Message::Move { x: 1, y: 2 };
    assert_eq!(
        struct_fields(&moved),
        ("Message::Move".to_string(), vec!["x", "y"])
    );
    assert_eq!(measure(&moved).total(), size_of::<Message>() + 8);

    assert_eq!(
        struct_fields(&Message::Pair(1, 2)),
        ("Message::Pair".to_string(), vec!["0", "1"])
    );
}

#[derive(Inspect)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[test]
fn generic_enum_holds_either_side() {
    let left: Either<u64, String> = Either::Left(5);
    let right: Either<u64, String> = Either::Right("abc".to_string());
    assert_eq!(measure(&left).total(), 8);
    assert_eq!(measure(&right).total(), 3 * CHAR_UNIT);
}
