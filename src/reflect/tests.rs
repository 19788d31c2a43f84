//! Declarative type system tests

use super::*;
use crate::error::Error;
use crate::types::{Capability, PrimitiveKind, RawKind, TypeHandle};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use test_case::test_case;

fn parse(input: &str) -> TypeExpr {
    parse_type_expr(input, &[]).unwrap()
}

// ============================================================================
// Parser Tests
// ============================================================================

#[test_case("i64", TypeExpr::Primitive(PrimitiveKind::Int64))]
#[test_case("Int64", TypeExpr::Boxed(PrimitiveKind::Int64))]
#[test_case("Decimal", TypeExpr::Boxed(PrimitiveKind::Decimal))]
#[test_case("bool", TypeExpr::Primitive(PrimitiveKind::Boolean))]
#[test_case("String", TypeExpr::named("String"))]
#[test_case("com.acme.Order", TypeExpr::named("com.acme.Order"))]
fn test_parse_simple(input: &str, expected: TypeExpr) {
    assert_eq!(parse(input), expected);
}

#[test]
fn test_parse_generics_and_arrays() {
    assert_eq!(
        parse(" Map< String ,List<i32[]> > "),
        TypeExpr::generic(
            "Map",
            vec![
                TypeExpr::named("String"),
                TypeExpr::generic("List", vec![TypeExpr::Primitive(PrimitiveKind::Int32).array_of()]),
            ]
        )
    );
    assert_eq!(
        parse("i8[][]"),
        TypeExpr::Primitive(PrimitiveKind::Byte).array_of().array_of()
    );
}

#[test]
fn test_parse_type_variables() {
    let scope = vec!["K".to_string(), "V".to_string()];
    assert_eq!(
        parse_type_expr("Map<K, V>", &scope).unwrap(),
        TypeExpr::generic(
            "Map",
            vec![
                TypeExpr::Variable("K".to_string()),
                TypeExpr::Variable("V".to_string()),
            ]
        )
    );
}

#[test_case("", "expected a type name")]
#[test_case("List<", "expected a type name")]
#[test_case("List<String", "expected ',' or '>'")]
#[test_case("i32[", "expected ']'")]
#[test_case("String>", "unexpected trailing input")]
#[test_case("i32<String>", "does not take type arguments")]
fn test_parse_errors(input: &str, message: &str) {
    let err = parse_type_expr(input, &[]).unwrap_err();
    assert!(matches!(err, Error::TypeParse { .. }));
    assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn test_display_round_trip() {
    for input in ["Map<String, List<i32[]>>", "Int8[]", "Decimal", "f64"] {
        assert_eq!(parse(input).to_string(), input);
    }
}

#[test]
fn test_substitute() {
    let expr = parse_type_expr("Map<K, T[]>", &["K".to_string(), "T".to_string()]).unwrap();
    let bindings: HashMap<String, TypeExpr> =
        [("T".to_string(), TypeExpr::named("String"))].into_iter().collect();

    assert_eq!(
        expr.substitute(&bindings).to_string(),
        "Map<K, String[]>"
    );
    assert_eq!(expr.referenced_names(), vec!["Map"]);
}

#[test]
fn test_reserved_names() {
    assert!(is_reserved_name("i32"));
    assert!(is_reserved_name("Float64"));
    assert!(!is_reserved_name("String"));
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_builtins() {
    let registry = TypeRegistry::with_builtins().unwrap();
    for name in BUILTIN_TYPES {
        assert!(registry.contains(name), "missing {name}");
    }
    assert!(registry.declared_types().is_empty());
    assert!(registry.has_capability("String", Capability::CharSequence));
    assert!(registry.has_capability("HashMap", Capability::Map));
    assert!(registry.has_capability("Set", Capability::Collection));
    assert!(!registry.has_capability("Map", Capability::Collection));
}

#[test]
fn test_capabilities_are_inherited() {
    let registry = TypeRegistry::builder()
        .define(TypeDef::interface("Named").with_capability(Capability::CharSequence))
        .define(TypeDef::class("Label").extends(TypeExpr::named("Named")))
        .define(TypeDef::class("Tags").extends(TypeExpr::generic(
            "List",
            vec![TypeExpr::named("Label")],
        )))
        .build()
        .unwrap();

    assert!(registry.has_capability("Label", Capability::CharSequence));
    assert_eq!(
        registry.capabilities("Tags").unwrap().iter().copied().collect::<Vec<_>>(),
        vec![Capability::Collection]
    );
    assert_eq!(registry.declared_types(), ["Named", "Label", "Tags"]);
}

#[test]
fn test_duplicate_type() {
    let err = TypeRegistry::builder()
        .define(TypeDef::class("Order"))
        .define(TypeDef::class("Order"))
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: Duplicate type 'Order'");
}

#[test]
fn test_cannot_redefine_builtin_or_primitive() {
    assert!(TypeRegistry::builder()
        .define(TypeDef::class("String"))
        .build()
        .is_err());

    let err = TypeRegistry::builder()
        .define(TypeDef::class("Int64"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn test_unknown_reference() {
    let err = TypeRegistry::builder()
        .define(TypeDef::class("Order").field(FieldDef::new("customer", TypeExpr::named("Customer"))))
        .build()
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Unknown type 'Customer' referenced by 'Order.customer'"));
}

#[test]
fn test_inheritance_cycle() {
    let err = TypeRegistry::builder()
        .define(TypeDef::class("A").extends(TypeExpr::named("B")))
        .define(TypeDef::class("B").extends(TypeExpr::named("A")))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("Inheritance cycle"));
}

#[test]
fn test_member_type_arity() {
    let err = TypeRegistry::builder()
        .define(TypeDef::class("Order").field(FieldDef::new(
            "tags",
            parse("List<String, i32>"),
        )))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeArity {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_supertype_arity() {
    let err = TypeRegistry::builder()
        .define(TypeDef::class("Index").extends(parse("HashMap<String>")))
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type 'HashMap' expects 2 type parameter(s), found 1"
    );
}

#[test_case("Map<String>", "Map", 2, 1)]
#[test_case("List<Map<String, i32, bool>>", "Map", 2, 3)]
#[test_case("String<i32>[]", "String", 0, 1)]
fn test_parse_handle_arity(text: &str, name: &str, expected: usize, actual: usize) {
    let registry = TypeRegistry::with_builtins().unwrap();
    match registry.parse_handle(text).unwrap_err() {
        Error::TypeArity {
            type_name,
            expected: e,
            actual: a,
        } => {
            assert_eq!(type_name, name);
            assert_eq!((e, a), (expected, actual));
        }
        other => panic!("expected arity error, got {other:?}"),
    }
}

#[test]
fn test_raw_use_of_generic_is_not_an_arity_error() {
    let registry = TypeRegistry::with_builtins().unwrap();
    assert!(registry.parse_handle("List").is_ok());
    assert!(registry.parse_handle("Map[]").is_ok());
}

#[test]
fn test_parse_handle_unknown_name() {
    let registry = TypeRegistry::with_builtins().unwrap();
    let err = registry.parse_handle("List<Missing>").unwrap_err();
    assert!(err.to_string().contains("Unknown type 'Missing'"));
}

// ============================================================================
// Handle Tests
// ============================================================================

#[test]
fn test_handle_shapes() {
    let registry = TypeRegistry::with_builtins().unwrap();

    let array = registry.parse_handle("String[]").unwrap();
    assert!(array.is_array());
    assert_eq!(
        array.raw_kind(),
        RawKind::Array(Box::new(RawKind::Declared("String".to_string())))
    );
    assert_eq!(array.component_type().unwrap().to_string(), "String");

    let list = registry.parse_handle("List<i32>").unwrap();
    assert!(!list.is_array());
    assert!(list.is_subtype_of(Capability::Collection));
    assert_eq!(
        list.type_parameters().unwrap(),
        vec![registry.handle(TypeExpr::Primitive(PrimitiveKind::Int32))]
    );
    assert_eq!(list.erased().to_string(), "List");
    assert!(list.erased().type_parameters().is_none());
}

#[test]
fn test_type_parameters_through_supertypes() {
    let registry = TypeRegistry::builder()
        .define(
            TypeDef::class("Index")
                .with_params(&["V"])
                .extends(TypeExpr::generic(
                    "HashMap",
                    vec![TypeExpr::named("String"), TypeExpr::Variable("V".to_string())],
                )),
        )
        .build()
        .unwrap();

    let index = registry.parse_handle("Index<i64>").unwrap();
    let params: Vec<String> = index
        .type_parameters_for(Capability::Map)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(params, vec!["String", "i64"]);

    let raw = registry.parse_handle("Index").unwrap();
    assert!(raw.type_parameters_for(Capability::Map).is_none());
}

#[test]
fn test_abstract_handles() {
    let registry = TypeRegistry::builder()
        .define(TypeDef::class("Base").with_kind(TypeDefKind::Abstract))
        .define(TypeDef::class("Concrete"))
        .build()
        .unwrap();

    assert!(registry.parse_handle("Base").unwrap().is_abstract());
    assert!(registry.parse_handle("CharSequence").unwrap().is_abstract());
    assert!(!registry.parse_handle("Concrete").unwrap().is_abstract());
    assert!(!registry.parse_handle("i32[]").unwrap().is_abstract());
    assert!(registry
        .handle(TypeExpr::Variable("T".to_string()))
        .is_abstract());
}

#[test]
fn test_member_type_substitution() {
    let registry = TypeRegistry::builder()
        .define(
            TypeDef::class("Page")
                .with_params(&["T"])
                .field(FieldDef::new(
                    "items",
                    TypeExpr::Variable("T".to_string()).array_of(),
                )),
        )
        .build()
        .unwrap();

    let page = registry.parse_handle("Page<String>").unwrap();
    let field = &page.definition().unwrap().fields[0];
    assert_eq!(page.member_type(&field.ty).to_string(), "String[]");
}

#[test]
fn test_annotation_helpers() {
    let annotations = vec![
        Annotation::Nullable,
        Annotation::SchemaField {
            name: Some("alias".to_string()),
        },
    ];
    assert!(is_nullable(&annotations));
    assert!(!is_ignored(&annotations));
    assert_eq!(schema_field(&annotations), Some(Some("alias")));
    assert_eq!(schema_field(&[Annotation::SchemaIgnore]), None);
}
