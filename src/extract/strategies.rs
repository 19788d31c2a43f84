//! Extraction strategies over registry declarations

use super::accessor::{accessor_field_name, check_arity};
use super::types::{FieldDescriptor, MemberExtractor};
use crate::error::{Error, Result};
use crate::reflect::{is_ignored, is_nullable, schema_field, MethodDef, TypeDef, TypeDescriptor};
use crate::types::{AccessorKind, TypeHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

fn definition(type_handle: &TypeDescriptor) -> Result<&TypeDef> {
    type_handle.definition().ok_or_else(|| {
        Error::unsupported(
            type_handle.raw_kind().to_string(),
            "type has no declaration to extract members from",
        )
    })
}

/// The type and its declared ancestors, most distant first
///
/// Supertypes are bound through `member_type`, so an ancestor's members see
/// the arguments the subtype passed it. A type reached twice (diamond) is
/// visited once.
fn lineage(type_handle: &TypeDescriptor) -> Result<Vec<TypeDescriptor>> {
    definition(type_handle)?;
    let mut seen = HashSet::new();
    let mut types = Vec::new();
    collect_lineage(type_handle, &mut seen, &mut types);
    Ok(types)
}

fn collect_lineage(
    type_handle: &TypeDescriptor,
    seen: &mut HashSet<String>,
    types: &mut Vec<TypeDescriptor>,
) {
    let Some(def) = type_handle.definition() else {
        return;
    };
    if !seen.insert(def.name.clone()) {
        return;
    }
    for supertype in &def.supertypes {
        collect_lineage(&type_handle.member_type(supertype), seen, types);
    }
    types.push(type_handle.clone());
}

/// Methods visible on the last type of `lineage`
///
/// A method redeclared lower in the hierarchy replaces the inherited one in
/// its original position.
fn visible_methods(lineage: &[TypeDescriptor]) -> Vec<(&TypeDescriptor, &MethodDef)> {
    let mut methods: Vec<(&TypeDescriptor, &MethodDef)> = Vec::new();
    for owner in lineage {
        let Some(def) = owner.definition() else {
            continue;
        };
        for method in &def.methods {
            match methods.iter_mut().find(|(_, m)| m.name == method.name) {
                Some(slot) => *slot = (owner, method),
                None => methods.push((owner, method)),
            }
        }
    }
    methods
}

fn check_unique_names(
    type_handle: &TypeDescriptor,
    members: Vec<FieldDescriptor<TypeDescriptor>>,
) -> Result<Vec<FieldDescriptor<TypeDescriptor>>> {
    let mut names = HashSet::new();
    for member in &members {
        if !names.insert(member.name.as_str()) {
            return Err(Error::config(format!(
                "Type '{}' has more than one member named '{}'",
                type_handle.expr(),
                member.name
            )));
        }
    }
    Ok(members)
}

/// Build the descriptor for an accessor method
fn accessor_descriptor(
    type_handle: &TypeDescriptor,
    method: &MethodDef,
    kind: AccessorKind,
) -> Result<FieldDescriptor<TypeDescriptor>> {
    check_arity(&method.name, kind, method.params.len(), method.returns.is_some())?;
    let name = accessor_field_name(&method.name, kind)?;

    let (ty, nullable) = match kind {
        AccessorKind::Getter => {
            let ty = method.returns.as_ref().ok_or_else(|| {
                Error::malformed_accessor(&method.name, "getter methods should return a value")
            })?;
            (ty, is_nullable(&method.annotations))
        }
        AccessorKind::Setter => {
            let param = method.params.first().ok_or_else(|| {
                Error::malformed_accessor(&method.name, "setter methods should take a single argument")
            })?;
            (&param.ty, is_nullable(&param.annotations))
        }
    };

    Ok(FieldDescriptor::new(
        name,
        type_handle.member_type(ty),
        nullable,
    ))
}

/// Public fields, inherited ones first, in declaration order
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicFields;

impl MemberExtractor<TypeDescriptor> for PublicFields {
    fn extract(&self, type_handle: &TypeDescriptor) -> Result<Vec<FieldDescriptor<TypeDescriptor>>> {
        let mut members = Vec::new();
        for owner in lineage(type_handle)? {
            let Some(def) = owner.definition() else {
                continue;
            };
            members.extend(
                def.fields
                    .iter()
                    .filter(|f| f.public && !is_ignored(&f.annotations))
                    .map(|f| {
                        FieldDescriptor::new(
                            f.name.clone(),
                            owner.member_type(&f.ty),
                            is_nullable(&f.annotations),
                        )
                    }),
            );
        }
        check_unique_names(type_handle, members)
    }
}

/// Public methods declared as accessors of one kind
#[derive(Debug, Clone, Copy)]
pub struct Accessors {
    kind: AccessorKind,
}

impl Accessors {
    /// Getter methods (`getX`, `isX`)
    pub fn getters() -> Self {
        Self {
            kind: AccessorKind::Getter,
        }
    }

    /// Setter methods (`setX`)
    pub fn setters() -> Self {
        Self {
            kind: AccessorKind::Setter,
        }
    }
}

impl MemberExtractor<TypeDescriptor> for Accessors {
    fn extract(&self, type_handle: &TypeDescriptor) -> Result<Vec<FieldDescriptor<TypeDescriptor>>> {
        let lineage = lineage(type_handle)?;
        let members = visible_methods(&lineage)
            .into_iter()
            .filter(|(_, m)| m.public && m.accessor == Some(self.kind) && !is_ignored(&m.annotations))
            .map(|(owner, m)| accessor_descriptor(owner, m, self.kind))
            .collect::<Result<Vec<_>>>()?;
        check_unique_names(type_handle, members)
    }
}

/// Members carrying the schema-field annotation, fields first
///
/// Visibility does not matter. Inherited members come before the type's own. A renamed annotation wins over the member's
/// own name; annotated methods must be getters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotated;

impl MemberExtractor<TypeDescriptor> for Annotated {
    fn extract(&self, type_handle: &TypeDescriptor) -> Result<Vec<FieldDescriptor<TypeDescriptor>>> {
        let lineage = lineage(type_handle)?;
        let mut members = Vec::new();

        for owner in &lineage {
            let Some(def) = owner.definition() else {
                continue;
            };
            for field in &def.fields {
                if let Some(rename) = schema_field(&field.annotations) {
                    members.push(FieldDescriptor::new(
                        rename.unwrap_or(&field.name),
                        owner.member_type(&field.ty),
                        is_nullable(&field.annotations),
                    ));
                }
            }
        }

        for (owner, method) in visible_methods(&lineage) {
            let Some(rename) = schema_field(&method.annotations) else {
                continue;
            };
            if method.accessor == Some(AccessorKind::Setter) {
                return Err(Error::malformed_accessor(
                    &method.name,
                    "schema field annotation is only allowed on getters",
                ));
            }
            let mut descriptor = accessor_descriptor(owner, method, AccessorKind::Getter)?;
            if let Some(rename) = rename {
                descriptor.name = rename.to_string();
            }
            members.push(descriptor);
        }

        check_unique_names(type_handle, members)
    }
}

/// Named extraction strategies, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Public fields
    #[default]
    Fields,
    /// Getter methods
    Getters,
    /// Setter methods
    Setters,
    /// Annotated members
    Annotated,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::Fields => write!(f, "fields"),
            ExtractionStrategy::Getters => write!(f, "getters"),
            ExtractionStrategy::Setters => write!(f, "setters"),
            ExtractionStrategy::Annotated => write!(f, "annotated"),
        }
    }
}

impl MemberExtractor<TypeDescriptor> for ExtractionStrategy {
    fn extract(&self, type_handle: &TypeDescriptor) -> Result<Vec<FieldDescriptor<TypeDescriptor>>> {
        match self {
            ExtractionStrategy::Fields => PublicFields.extract(type_handle),
            ExtractionStrategy::Getters => Accessors::getters().extract(type_handle),
            ExtractionStrategy::Setters => Accessors::setters().extract(type_handle),
            ExtractionStrategy::Annotated => Annotated.extract(type_handle),
        }
    }
}
