use pretty_assertions::assert_eq;
use syn::{parse_quote, DeriveInput};

use crate::inspect::derive_inspect_impl;

fn expand(input: &DeriveInput) -> String {
    match derive_inspect_impl(input) {
        Ok(tokens) => tokens.to_string(),
        Err(err) => panic!("expected an expansion, found error: {err}"),
    }
}

fn expand_err(input: &DeriveInput) -> String {
    match derive_inspect_impl(input) {
        Ok(tokens) => panic!("expected an error, found expansion: {tokens}"),
        Err(err) => err.to_string(),
    }
}

// ── Structs ─────────────────────────────────────────────────────

#[test]
fn struct_fields_in_declaration_order() {
    let input: DeriveInput = parse_quote! {
        struct Flat {
            name: String,
            #[inspect(skip)]
            handle: RawHandle,
            #[inspect(rename = "nested")]
            inner: Inner,
        }
    };

    let expanded = expand(&input);
    assert!(expanded.contains("\"Flat\""));
    let name = expanded.find("\"name\"").unwrap_or(usize::MAX);
    let nested = expanded.find("\"nested\"").unwrap_or(usize::MAX);
    assert!(name < nested, "{expanded}");
    assert!(!expanded.contains("handle"), "{expanded}");
    assert!(!expanded.contains("\"inner\""), "{expanded}");
}

#[test]
fn duplicate_report_names_are_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Session {
            user: String,
            #[inspect(rename = "user")]
            login: String,
        }
    };
    assert_eq!(expand_err(&input), "duplicate report name `user`");
}

#[test]
fn renamed_tuple_field_cannot_shadow_an_index() {
    let input: DeriveInput = parse_quote! {
        struct Pair(u8, #[inspect(rename = "0")] u8);
    };
    assert_eq!(expand_err(&input), "duplicate report name `0`");
}

#[test]
fn unknown_attribute_is_rejected() {
    let input: DeriveInput = parse_quote! {
        struct Flat {
            #[inspect(flatten)]
            name: String,
        }
    };
    assert_eq!(expand_err(&input), "expected `skip` or `rename = \"...\"`");
}

#[test]
fn unions_are_rejected() {
    let input: DeriveInput = parse_quote! {
        union Bits {
            word: u32,
            bytes: [u8; 4],
        }
    };
    assert_eq!(expand_err(&input), "Inspect derive does not support unions");
}

// ── Enums ───────────────────────────────────────────────────────

#[test]
fn enum_variants_expand() {
    let input: DeriveInput = parse_quote! {
        enum Message {
            Quit,
            Write(String),
            Move { x: i32, y: i32 },
        }
    };

    let expanded = expand(&input);
    assert!(expanded.contains("\"Message::Move\""), "{expanded}");
    assert!(!expanded.contains("\"Message::Write\""), "{expanded}");
    assert!(!expanded.contains("\"Message::Quit\""), "{expanded}");
}

#[test]
fn rename_on_unwrapped_payload_is_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Message {
            Write(#[inspect(rename = "text")] String),
        }
    };
    assert_eq!(
        expand_err(&input),
        "`rename` has no effect on a variant that unwraps to its payload"
    );
}

#[test]
fn duplicate_names_within_a_variant_are_rejected() {
    let input: DeriveInput = parse_quote! {
        enum Shape {
            Rect {
                width: u32,
                #[inspect(rename = "width")]
                height: u32,
            },
        }
    };
    assert_eq!(expand_err(&input), "duplicate report name `width`");
}

#[test]
fn skipped_payload_becomes_an_empty_aggregate() {
    let input: DeriveInput = parse_quote! {
        enum Slot {
            Raw(#[inspect(skip)] RawHandle),
        }
    };
    let expanded = expand(&input);
    assert!(expanded.contains("\"Slot::Raw\""), "{expanded}");
}
