//! Member extraction types

use crate::error::Result;
use crate::types::TypeHandle;

/// One member of a composite type as reported by an extraction strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor<H> {
    /// Canonical field name (accessor prefixes already stripped)
    pub name: String,
    /// Declared type of the member
    pub type_handle: H,
    /// Whether the host marks the member nullable
    pub nullable: bool,
}

impl<H> FieldDescriptor<H> {
    pub fn new(name: impl Into<String>, type_handle: H, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_handle,
            nullable,
        }
    }
}

/// Source of ordered member descriptors for a type
///
/// The engine trusts the returned list to be complete. A strategy that meets
/// a member it cannot describe must return an error instead of skipping it.
pub trait MemberExtractor<H: TypeHandle> {
    /// List the members of `type_handle` in declaration order
    fn extract(&self, type_handle: &H) -> Result<Vec<FieldDescriptor<H>>>;
}

impl<H, F> MemberExtractor<H> for F
where
    H: TypeHandle,
    F: Fn(&H) -> Result<Vec<FieldDescriptor<H>>>,
{
    fn extract(&self, type_handle: &H) -> Result<Vec<FieldDescriptor<H>>> {
        self(type_handle)
    }
}
