//! Integration tests
//!
//! Tests the full end-to-end flow: YAML catalog → type registry → inferred
//! schema → Arrow/JSON output

use arrow::datatypes::DataType;
use pretty_assertions::assert_eq;
use rowschema::extract::{Accessors, FieldDescriptor};
use rowschema::output::{render_pretty, schema_to_json, to_arrow_schema};
use rowschema::{
    infer_schema, load_catalog, load_catalog_from_str, Error, ExtractionStrategy, FieldType,
    MemberExtractor, Schema, SchemaInferrer, TypeDescriptor,
};
use std::io::Write;

const SHOP_CATALOG: &str = r#"
version: "1.0"
inference:
  max_depth: 16
types:
  - name: Address
    fields:
      - { name: street, type: String }
      - { name: zip, type: Int32, nullable: true }

  - name: Customer
    fields:
      - { name: id, type: i64 }
      - { name: name, type: String }
      - { name: address, type: Address }
      - { name: avatar, type: "i8[]" }
      - { name: joined, type: DateTime }

  - name: LineItem
    fields:
      - { name: sku, type: String }
      - { name: quantity, type: i32 }
      - { name: price, type: Decimal }

  - name: Order
    fields:
      - { name: id, type: i64 }
      - { name: customer, type: Customer }
      - { name: items, type: "List<LineItem>" }
      - { name: attributes, type: "HashMap<String, List<String>>" }
      - { name: flags, type: "Int8[]" }
      - { name: payload, type: ByteBuffer }
      - { name: internal, type: String, ignore: true }
"#;

fn address_schema() -> Schema {
    Schema::builder()
        .add_string_field("street")
        .add_nullable_field("zip", FieldType::Int32)
        .build()
}

fn customer_schema() -> Schema {
    Schema::builder()
        .add_int64_field("id")
        .add_string_field("name")
        .add_row_field("address", address_schema())
        .add_bytes_field("avatar")
        .add_datetime_field("joined")
        .build()
}

// ============================================================================
// End-to-End Inference
// ============================================================================

#[test]
fn test_infer_order_schema() {
    let catalog = load_catalog_from_str(SHOP_CATALOG).unwrap();
    let order = catalog.handle("Order").unwrap();

    let schema = SchemaInferrer::with_config(catalog.config)
        .infer(&order, &ExtractionStrategy::Fields)
        .unwrap();

    let line_item = Schema::builder()
        .add_string_field("sku")
        .add_int32_field("quantity")
        .add_decimal_field("price")
        .build();
    let expected = Schema::builder()
        .add_int64_field("id")
        .add_row_field("customer", customer_schema())
        .add_array_field("items", FieldType::row(line_item))
        .add_map_field(
            "attributes",
            FieldType::String,
            FieldType::array(FieldType::String),
        )
        .add_array_field("flags", FieldType::Byte)
        .add_bytes_field("payload")
        .build();

    assert_eq!(schema, expected);
}

#[test]
fn test_catalog_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOP_CATALOG.as_bytes()).unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(
        catalog.type_names(),
        ["Address", "Customer", "LineItem", "Order"]
    );

    let schema = infer_schema(
        &catalog.handle("Customer").unwrap(),
        &ExtractionStrategy::Fields,
    )
    .unwrap();
    assert_eq!(schema, customer_schema());
}

#[test]
fn test_root_collection_expression() {
    let catalog = load_catalog_from_str(SHOP_CATALOG).unwrap();
    let inferrer = SchemaInferrer::new();

    let field_type = inferrer
        .classify(
            &catalog.handle("List<Address>").unwrap(),
            &ExtractionStrategy::Fields,
        )
        .unwrap();
    assert_eq!(field_type, FieldType::array(FieldType::row(address_schema())));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_order_to_arrow() {
    let catalog = load_catalog_from_str(SHOP_CATALOG).unwrap();
    let schema = infer_schema(
        &catalog.handle("Order").unwrap(),
        &ExtractionStrategy::Fields,
    )
    .unwrap();

    let arrow_schema = to_arrow_schema(&schema);
    assert_eq!(arrow_schema.fields().len(), schema.len());
    assert!(matches!(
        arrow_schema.field_with_name("customer").unwrap().data_type(),
        DataType::Struct(_)
    ));
    assert!(matches!(
        arrow_schema.field_with_name("attributes").unwrap().data_type(),
        DataType::Map(_, false)
    ));
    assert_eq!(
        arrow_schema.field_with_name("payload").unwrap().data_type(),
        &DataType::Binary
    );
}

#[test]
fn test_customer_outputs() {
    let catalog = load_catalog_from_str(SHOP_CATALOG).unwrap();
    let schema = infer_schema(
        &catalog.handle("Customer").unwrap(),
        &ExtractionStrategy::Fields,
    )
    .unwrap();

    assert_eq!(
        render_pretty(&schema),
        "id: INT64\nname: STRING\naddress: ROW\n  street: STRING\n  zip: INT32 (nullable)\navatar: BYTES\njoined: DATETIME\n"
    );

    let json = schema_to_json(&schema);
    assert_eq!(json["fields"][2]["type"]["type"], "ROW");
    assert_eq!(json["fields"][2]["type"]["fields"][1]["nullable"], true);
}

// ============================================================================
// Accessor Beans
// ============================================================================

#[test]
fn test_bean_accessors() {
    let yaml = r#"
types:
  - name: Account
    fields:
      - { name: owner, type: String, public: false }
      - { name: balance, type: Decimal, public: false }
    methods:
      - { name: getOwner, accessor: getter, returns: String }
      - { name: getBalance, accessor: getter, returns: Decimal }
      - { name: isFrozen, accessor: getter, returns: bool }
      - { name: setOwner, accessor: setter, params: [{ type: String }] }
      - { name: setBalance, accessor: setter, params: [{ type: Decimal }] }
"#;
    let catalog = load_catalog_from_str(yaml).unwrap();
    let account = catalog.handle("Account").unwrap();

    let getters = infer_schema(&account, &Accessors::getters()).unwrap();
    assert_eq!(getters.field_names(), vec!["owner", "balance", "frozen"]);

    let setters = infer_schema(&account, &Accessors::setters()).unwrap();
    assert_eq!(setters.field_names(), vec!["owner", "balance"]);

    assert!(infer_schema(&account, &ExtractionStrategy::Fields)
        .unwrap()
        .is_empty());
}

#[test]
fn test_inherited_members() {
    let yaml = r#"
types:
  - name: Base
    fields:
      - { name: id, type: i64 }
    methods:
      - { name: getId, accessor: getter, returns: i64 }
  - name: Child
    extends: [Base]
    fields:
      - { name: name, type: String }
    methods:
      - { name: getName, accessor: getter, returns: String }
"#;
    let catalog = load_catalog_from_str(yaml).unwrap();
    let child = catalog.handle("Child").unwrap();
    let expected = Schema::builder()
        .add_int64_field("id")
        .add_string_field("name")
        .build();

    assert_eq!(infer_schema(&child, &ExtractionStrategy::Fields).unwrap(), expected);
    assert_eq!(infer_schema(&child, &Accessors::getters()).unwrap(), expected);
}

#[test]
fn test_custom_extractor() {
    let catalog = load_catalog_from_str(SHOP_CATALOG).unwrap();
    let order = catalog.handle("Order").unwrap();

    // only top-level scalars of the root
    let scalars = |ty: &TypeDescriptor| -> rowschema::Result<Vec<FieldDescriptor<TypeDescriptor>>> {
        let members = ExtractionStrategy::Fields.extract(ty)?;
        Ok(members
            .into_iter()
            .filter(|m| m.name == "id" || m.name == "payload")
            .collect())
    };

    let schema = infer_schema(&order, &scalars).unwrap();
    assert_eq!(
        schema,
        Schema::builder()
            .add_int64_field("id")
            .add_bytes_field("payload")
            .build()
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_failures_are_reported_not_skipped() {
    let yaml = r#"
types:
  - name: RawList
    fields:
      - { name: values, type: List }
  - name: BadKey
    fields:
      - { name: index, type: "Map<Point, String>" }
  - name: Point
    fields:
      - { name: x, type: i32 }
  - name: Chain
    fields:
      - { name: next, type: Chain }
  - name: Shape
    kind: interface
  - name: Drawing
    fields:
      - { name: shape, type: Shape }
"#;
    let catalog = load_catalog_from_str(yaml).unwrap();
    let infer = |name: &str| {
        infer_schema(&catalog.handle(name).unwrap(), &ExtractionStrategy::Fields)
    };

    assert!(matches!(
        infer("RawList"),
        Err(Error::UnparameterizedGeneric { .. })
    ));
    assert!(matches!(infer("BadKey"), Err(Error::InvalidMapKey { .. })));
    assert!(matches!(infer("Chain"), Err(Error::CyclicType { .. })));
    assert!(matches!(infer("Drawing"), Err(Error::UnsupportedShape { .. })));
    assert!(infer("Point").is_ok());
}

#[test]
fn test_catalog_depth_limit() {
    let yaml = r#"
inference:
  max_depth: 2
types:
  - name: A
    fields:
      - { name: b, type: B }
  - name: B
    fields:
      - { name: c, type: C }
  - name: C
    fields:
      - { name: x, type: i32 }
"#;
    let catalog = load_catalog_from_str(yaml).unwrap();
    let err = SchemaInferrer::with_config(catalog.config)
        .infer(&catalog.handle("A").unwrap(), &ExtractionStrategy::Fields)
        .unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { max_depth: 2 }));
}
