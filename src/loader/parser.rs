//! YAML parser for type catalogs
//!
//! Parses and validates catalog files and turns them into a `TypeRegistry`.

use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use crate::loader::types::{
    CatalogDefinition, FieldDefinition, KindDefinition, MethodDefinition, TypeDefinition,
};
use crate::reflect::{
    parse_type_expr, Annotation, FieldDef, MethodDef, ParamDef, TypeDef, TypeDefKind,
    TypeDescriptor, TypeRegistry,
};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::debug;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*$").unwrap());

fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// A loaded catalog: declared types plus inference settings
#[derive(Debug, Clone)]
pub struct Catalog {
    pub registry: Arc<TypeRegistry>,
    pub config: InferenceConfig,
}

impl Catalog {
    /// Handle for a type written as text
    pub fn handle(&self, type_expr: &str) -> Result<TypeDescriptor> {
        self.registry.parse_handle(type_expr)
    }

    /// Names of declared types, in declaration order
    pub fn type_names(&self) -> &[String] {
        self.registry.declared_types()
    }
}

/// Load a catalog from a YAML file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    debug!("Loading catalog from {}", path.display());
    load_catalog_from_str(&content)
}

/// Load a catalog from a YAML string
pub fn load_catalog_from_str(yaml: &str) -> Result<Catalog> {
    let def: CatalogDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse catalog YAML: {e}")))?;

    validate_catalog(&def)?;

    let mut builder = TypeRegistry::builder();
    for type_def in &def.types {
        builder = builder.define(convert_type(type_def)?);
    }
    let registry = builder.build()?;

    debug!("Loaded catalog with {} type(s)", def.types.len());
    Ok(Catalog {
        registry,
        config: def.inference,
    })
}

/// Validate a catalog definition
fn validate_catalog(def: &CatalogDefinition) -> Result<()> {
    def.inference.validate()?;

    if def.types.is_empty() {
        return Err(Error::config("Catalog must declare at least one type"));
    }

    let mut names = HashSet::new();
    for type_def in &def.types {
        if !names.insert(type_def.name.as_str()) {
            return Err(Error::config(format!(
                "Duplicate type name '{}'",
                type_def.name
            )));
        }
        validate_type(type_def)?;
    }

    Ok(())
}

/// Validate a type definition
fn validate_type(def: &TypeDefinition) -> Result<()> {
    if def.name.is_empty() {
        return Err(Error::config("Type name cannot be empty"));
    }
    if !is_identifier(&def.name) {
        return Err(Error::config(format!(
            "Type name '{}' is not a valid identifier",
            def.name
        )));
    }

    for param in &def.params {
        if !is_identifier(param) {
            return Err(Error::config(format!(
                "Type '{}' has invalid type parameter '{}'",
                def.name, param
            )));
        }
    }

    let mut field_names = HashSet::new();
    for field in &def.fields {
        if field.name.is_empty() {
            return Err(Error::config(format!(
                "Type '{}' has a field with an empty name",
                def.name
            )));
        }
        if !field_names.insert(field.name.as_str()) {
            return Err(Error::config(format!(
                "Type '{}' declares field '{}' twice",
                def.name, field.name
            )));
        }
    }

    for method in &def.methods {
        if method.name.is_empty() {
            return Err(Error::config(format!(
                "Type '{}' has a method with an empty name",
                def.name
            )));
        }
    }

    Ok(())
}

fn convert_type(def: &TypeDefinition) -> Result<TypeDef> {
    let scope = &def.params;

    let supertypes = def
        .extends
        .iter()
        .map(|s| parse_type_expr(s, scope))
        .collect::<Result<Vec<_>>>()?;
    let fields = def
        .fields
        .iter()
        .map(|f| convert_field(f, scope))
        .collect::<Result<Vec<_>>>()?;
    let methods = def
        .methods
        .iter()
        .map(|m| convert_method(m, scope))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeDef {
        name: def.name.clone(),
        kind: match def.kind {
            KindDefinition::Class => TypeDefKind::Class,
            KindDefinition::Interface => TypeDefKind::Interface,
            KindDefinition::Abstract => TypeDefKind::Abstract,
        },
        params: def.params.clone(),
        supertypes,
        capabilities: def.capabilities.clone(),
        fields,
        methods,
    })
}

fn annotations(
    nullable: bool,
    schema_field: bool,
    schema_name: Option<&String>,
    ignore: bool,
) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    if nullable {
        annotations.push(Annotation::Nullable);
    }
    if schema_field || schema_name.is_some() {
        annotations.push(Annotation::SchemaField {
            name: schema_name.cloned(),
        });
    }
    if ignore {
        annotations.push(Annotation::SchemaIgnore);
    }
    annotations
}

fn convert_field(def: &FieldDefinition, scope: &[String]) -> Result<FieldDef> {
    Ok(FieldDef {
        name: def.name.clone(),
        ty: parse_type_expr(&def.type_expr, scope)?,
        public: def.public,
        annotations: annotations(
            def.nullable,
            def.schema_field,
            def.schema_name.as_ref(),
            def.ignore,
        ),
    })
}

fn convert_method(def: &MethodDefinition, scope: &[String]) -> Result<MethodDef> {
    let params = def
        .params
        .iter()
        .map(|p| {
            Ok(ParamDef {
                name: p.name.clone(),
                ty: parse_type_expr(&p.type_expr, scope)?,
                annotations: annotations(p.nullable, false, None, false),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MethodDef {
        name: def.name.clone(),
        params,
        returns: def
            .returns
            .as_deref()
            .map(|r| parse_type_expr(r, scope))
            .transpose()?,
        public: def.public,
        accessor: def.accessor,
        annotations: annotations(
            def.nullable,
            def.schema_field,
            def.schema_name.as_ref(),
            def.ignore,
        ),
    })
}
