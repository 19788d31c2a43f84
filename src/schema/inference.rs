//! Schema inference from static type handles

use super::primitives::classify_primitive;
use super::types::{Field, FieldType, Schema};
use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use crate::extract::MemberExtractor;
use crate::types::{Capability, PrimitiveKind, RawKind, TypeHandle};
use tracing::{debug, trace};

/// Schema inferrer with configuration options
///
/// Inference is a pure function of the root handle and the extraction
/// strategy. The inferrer holds no state between calls and can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

/// Rows currently being inferred, root first
#[derive(Debug, Default)]
struct RowPath {
    kinds: Vec<RawKind>,
}

impl RowPath {
    fn enter(&mut self, kind: RawKind, max_depth: usize) -> Result<()> {
        if self.kinds.contains(&kind) {
            let mut path: Vec<String> = self.kinds.iter().map(ToString::to_string).collect();
            path.push(kind.to_string());
            return Err(Error::CyclicType {
                path: path.join(" -> "),
            });
        }
        if self.kinds.len() >= max_depth {
            return Err(Error::DepthExceeded { max_depth });
        }
        self.kinds.push(kind);
        Ok(())
    }

    fn leave(&mut self) {
        self.kinds.pop();
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferrer from a configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Set maximum depth for nested rows
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the schema of a composite type
    ///
    /// Any member that cannot be classified aborts the whole call. An invalid
    /// configuration (e.g. `max_depth` of zero) fails before any member is
    /// extracted.
    pub fn infer<H, E>(&self, root: &H, extractor: &E) -> Result<Schema>
    where
        H: TypeHandle,
        E: MemberExtractor<H> + ?Sized,
    {
        self.config.validate()?;
        let mut path = RowPath::default();
        let schema = self.schema_from_type(root, extractor, &mut path)?;
        debug!("Inferred schema for {}: {} field(s)", root.raw_kind(), schema.len());
        Ok(schema)
    }

    /// Classify a single type handle
    pub fn classify<H, E>(&self, type_handle: &H, extractor: &E) -> Result<FieldType>
    where
        H: TypeHandle,
        E: MemberExtractor<H> + ?Sized,
    {
        self.config.validate()?;
        let mut path = RowPath::default();
        self.field_from_type(type_handle, extractor, &mut path)
    }

    fn schema_from_type<H, E>(&self, root: &H, extractor: &E, path: &mut RowPath) -> Result<Schema>
    where
        H: TypeHandle,
        E: MemberExtractor<H> + ?Sized,
    {
        let kind = root.raw_kind();
        if root.is_abstract() {
            return Err(Error::unsupported(
                kind.to_string(),
                "type has no concrete member layout",
            ));
        }

        path.enter(kind, self.config.max_depth)?;
        let result = self.fields_from_members(root, extractor, path);
        path.leave();
        result
    }

    fn fields_from_members<H, E>(
        &self,
        root: &H,
        extractor: &E,
        path: &mut RowPath,
    ) -> Result<Schema>
    where
        H: TypeHandle,
        E: MemberExtractor<H> + ?Sized,
    {
        let mut fields = Vec::new();
        for member in extractor.extract(root)? {
            let field_type = self.field_from_type(&member.type_handle, extractor, path)?;
            trace!("Field {} classified as {}", member.name, field_type);
            fields.push(Field {
                name: member.name,
                field_type,
                nullable: member.nullable,
            });
        }
        Ok(Schema::new(fields))
    }

    // Order matters: a type can match several rules, first match wins.
    fn field_from_type<H, E>(&self, ty: &H, extractor: &E, path: &mut RowPath) -> Result<FieldType>
    where
        H: TypeHandle,
        E: MemberExtractor<H> + ?Sized,
    {
        if let Some(primitive) = classify_primitive(ty) {
            return Ok(primitive);
        }

        if ty.is_array() {
            let component = ty.component_type().ok_or_else(|| {
                Error::unsupported(ty.raw_kind().to_string(), "array has no component type")
            })?;
            // i8[] is an opaque blob, not ARRAY<BYTE>
            if component.raw_kind() == RawKind::Primitive(PrimitiveKind::Byte) {
                return Ok(FieldType::Bytes);
            }
            return Ok(FieldType::array(
                self.field_from_type(&component, extractor, path)?,
            ));
        }

        if ty.is_subtype_of(Capability::Collection) {
            let params = generic_arguments(ty, Capability::Collection, 1)?;
            return Ok(FieldType::array(
                self.field_from_type(&params[0], extractor, path)?,
            ));
        }

        if ty.is_subtype_of(Capability::Map) {
            let params = generic_arguments(ty, Capability::Map, 2)?;
            let key_type = self.field_from_type(&params[0], extractor, path)?;
            let value_type = self.field_from_type(&params[1], extractor, path)?;
            if !key_type.type_name().is_primitive_type() {
                return Err(Error::InvalidMapKey {
                    key_type: key_type.to_string(),
                });
            }
            return Ok(FieldType::map(key_type, value_type));
        }

        if ty.is_subtype_of(Capability::CharSequence) {
            return Ok(FieldType::String);
        }
        if ty.is_subtype_of(Capability::Instant) {
            return Ok(FieldType::DateTime);
        }
        if ty.is_subtype_of(Capability::ByteBuffer) {
            return Ok(FieldType::Bytes);
        }

        let schema = self.schema_from_type(&ty.erased(), extractor, path)?;
        Ok(FieldType::row(schema))
    }
}

fn generic_arguments<H: TypeHandle>(
    ty: &H,
    capability: Capability,
    expected: usize,
) -> Result<Vec<H>> {
    let shape = match capability {
        Capability::Map => "map",
        _ => "collection",
    };
    let params = ty
        .type_parameters_for(capability)
        .ok_or_else(|| Error::unparameterized(shape, ty.raw_kind().to_string()))?;
    if params.len() != expected {
        return Err(Error::TypeArity {
            type_name: ty.raw_kind().to_string(),
            expected,
            actual: params.len(),
        });
    }
    Ok(params)
}

/// Infer a schema with default settings (convenience function)
pub fn infer_schema<H, E>(root: &H, extractor: &E) -> Result<Schema>
where
    H: TypeHandle,
    E: MemberExtractor<H> + ?Sized,
{
    SchemaInferrer::new().infer(root, extractor)
}
