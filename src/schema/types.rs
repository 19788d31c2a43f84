//! Schema types

use std::fmt;

/// Payload-free tag of a `FieldType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Byte,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Boolean,
    Decimal,
    String,
    DateTime,
    Bytes,
    Array,
    Map,
    Row,
}

impl TypeName {
    /// Scalar types; the only types allowed as map keys
    pub fn is_primitive_type(self) -> bool {
        !self.is_composite_type() && !self.is_collection_type() && !self.is_map_type()
    }

    /// Integer, floating point and decimal types
    pub fn is_numeric_type(self) -> bool {
        matches!(
            self,
            TypeName::Byte
                | TypeName::Int16
                | TypeName::Int32
                | TypeName::Int64
                | TypeName::Float
                | TypeName::Double
                | TypeName::Decimal
        )
    }

    pub fn is_string_type(self) -> bool {
        self == TypeName::String
    }

    pub fn is_date_type(self) -> bool {
        self == TypeName::DateTime
    }

    pub fn is_collection_type(self) -> bool {
        self == TypeName::Array
    }

    pub fn is_map_type(self) -> bool {
        self == TypeName::Map
    }

    pub fn is_composite_type(self) -> bool {
        self == TypeName::Row
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeName::Byte => "BYTE",
            TypeName::Int16 => "INT16",
            TypeName::Int32 => "INT32",
            TypeName::Int64 => "INT64",
            TypeName::Float => "FLOAT",
            TypeName::Double => "DOUBLE",
            TypeName::Boolean => "BOOLEAN",
            TypeName::Decimal => "DECIMAL",
            TypeName::String => "STRING",
            TypeName::DateTime => "DATETIME",
            TypeName::Bytes => "BYTES",
            TypeName::Array => "ARRAY",
            TypeName::Map => "MAP",
            TypeName::Row => "ROW",
        };
        write!(f, "{name}")
    }
}

/// Schema-level classification of a field
///
/// Nullability is not part of the type; it lives on `Field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Byte,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Boolean,
    Decimal,
    String,
    DateTime,
    Bytes,
    Array(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
    Row(Schema),
}

impl FieldType {
    /// Create an array type
    pub fn array(element: FieldType) -> Self {
        FieldType::Array(Box::new(element))
    }

    /// Create a map type
    ///
    /// Keys must be primitive. The inference engine reports other keys as
    /// `InvalidMapKey`; here the check is a debug assertion only.
    pub fn map(key: FieldType, value: FieldType) -> Self {
        debug_assert!(
            key.type_name().is_primitive_type(),
            "map key must be primitive, found {key}"
        );
        FieldType::Map(Box::new(key), Box::new(value))
    }

    /// Create a row type
    pub fn row(schema: Schema) -> Self {
        FieldType::Row(schema)
    }

    /// The tag of this type
    pub fn type_name(&self) -> TypeName {
        match self {
            FieldType::Byte => TypeName::Byte,
            FieldType::Int16 => TypeName::Int16,
            FieldType::Int32 => TypeName::Int32,
            FieldType::Int64 => TypeName::Int64,
            FieldType::Float => TypeName::Float,
            FieldType::Double => TypeName::Double,
            FieldType::Boolean => TypeName::Boolean,
            FieldType::Decimal => TypeName::Decimal,
            FieldType::String => TypeName::String,
            FieldType::DateTime => TypeName::DateTime,
            FieldType::Bytes => TypeName::Bytes,
            FieldType::Array(_) => TypeName::Array,
            FieldType::Map(_, _) => TypeName::Map,
            FieldType::Row(_) => TypeName::Row,
        }
    }

    /// Element type of an array
    pub fn element_type(&self) -> Option<&FieldType> {
        match self {
            FieldType::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Key type of a map
    pub fn map_key_type(&self) -> Option<&FieldType> {
        match self {
            FieldType::Map(key, _) => Some(key),
            _ => None,
        }
    }

    /// Value type of a map
    pub fn map_value_type(&self) -> Option<&FieldType> {
        match self {
            FieldType::Map(_, value) => Some(value),
            _ => None,
        }
    }

    /// Nested schema of a row
    pub fn row_schema(&self) -> Option<&Schema> {
        match self {
            FieldType::Row(schema) => Some(schema),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Array(element) => write!(f, "ARRAY<{element}>"),
            FieldType::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
            FieldType::Row(schema) => write!(f, "ROW<{schema}>"),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

/// A named, typed field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl Field {
    /// Create a non-nullable field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: false,
        }
    }

    /// Create a nullable field
    pub fn nullable(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.field_type)?;
        if self.nullable {
            write!(f, " NULL")?;
        }
        Ok(())
    }
}

/// Ordered list of fields describing one record shape
///
/// Field order is significant: two schemas with the same fields in a
/// different order are different schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from fields
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by name (first match)
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Field names in order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<Field> for Schema {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Builder for `Schema`
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Append a field
    #[must_use]
    pub fn add_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field::new(name, field_type));
        self
    }

    /// Append a nullable field
    #[must_use]
    pub fn add_nullable_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field::nullable(name, field_type));
        self
    }

    /// Append a prebuilt field
    #[must_use]
    pub fn push(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn add_byte_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Byte)
    }

    #[must_use]
    pub fn add_int16_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Int16)
    }

    #[must_use]
    pub fn add_int32_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Int32)
    }

    #[must_use]
    pub fn add_int64_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Int64)
    }

    #[must_use]
    pub fn add_float_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Float)
    }

    #[must_use]
    pub fn add_double_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Double)
    }

    #[must_use]
    pub fn add_boolean_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Boolean)
    }

    #[must_use]
    pub fn add_decimal_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Decimal)
    }

    #[must_use]
    pub fn add_string_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::String)
    }

    #[must_use]
    pub fn add_datetime_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::DateTime)
    }

    #[must_use]
    pub fn add_bytes_field(self, name: impl Into<String>) -> Self {
        self.add_field(name, FieldType::Bytes)
    }

    #[must_use]
    pub fn add_array_field(self, name: impl Into<String>, element: FieldType) -> Self {
        self.add_field(name, FieldType::array(element))
    }

    #[must_use]
    pub fn add_map_field(self, name: impl Into<String>, key: FieldType, value: FieldType) -> Self {
        self.add_field(name, FieldType::map(key, value))
    }

    #[must_use]
    pub fn add_row_field(self, name: impl Into<String>, schema: Schema) -> Self {
        self.add_field(name, FieldType::row(schema))
    }

    /// Finish the schema
    pub fn build(self) -> Schema {
        Schema::new(self.fields)
    }
}
