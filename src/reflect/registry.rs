//! Type registry
//!
//! Holds every declared type and the capability set of each, resolved once
//! when the registry is built.

use super::handle::TypeDescriptor;
use super::parser::{is_reserved_name, parse_type_expr};
use super::types::{TypeDef, TypeExpr};
use crate::error::{Error, Result};
use crate::types::Capability;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Names of the built-in declarations
pub const BUILTIN_TYPES: [&str; 10] = [
    "CharSequence",
    "String",
    "Instant",
    "DateTime",
    "ByteBuffer",
    "Collection",
    "List",
    "Set",
    "Map",
    "HashMap",
];

fn builtin_defs() -> Vec<TypeDef> {
    let var = |v: &str| TypeExpr::Variable(v.to_string());
    vec![
        TypeDef::interface("CharSequence").with_capability(Capability::CharSequence),
        TypeDef::class("String").extends(TypeExpr::named("CharSequence")),
        TypeDef::interface("Instant").with_capability(Capability::Instant),
        TypeDef::class("DateTime").extends(TypeExpr::named("Instant")),
        TypeDef::class("ByteBuffer").with_capability(Capability::ByteBuffer),
        TypeDef::interface("Collection")
            .with_params(&["E"])
            .with_capability(Capability::Collection),
        TypeDef::interface("List")
            .with_params(&["E"])
            .extends(TypeExpr::generic("Collection", vec![var("E")])),
        TypeDef::interface("Set")
            .with_params(&["E"])
            .extends(TypeExpr::generic("Collection", vec![var("E")])),
        TypeDef::interface("Map")
            .with_params(&["K", "V"])
            .with_capability(Capability::Map),
        TypeDef::class("HashMap")
            .with_params(&["K", "V"])
            .extends(TypeExpr::generic("Map", vec![var("K"), var("V")])),
    ]
}

#[derive(Debug)]
struct ResolvedType {
    def: TypeDef,
    capabilities: BTreeSet<Capability>,
}

/// A closed set of type declarations
#[derive(Debug)]
pub struct TypeRegistry {
    types: HashMap<String, ResolvedType>,
    /// User declarations, in declaration order
    declared: Vec<String>,
}

impl TypeRegistry {
    /// Start building a registry (built-ins included)
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// A registry holding only the built-ins
    pub fn with_builtins() -> Result<Arc<Self>> {
        Self::builder().build()
    }

    /// Get a declaration by name
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name).map(|t| &t.def)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Whether `name` has `capability`, directly or through a supertype
    pub fn has_capability(&self, name: &str, capability: Capability) -> bool {
        self.types
            .get(name)
            .is_some_and(|t| t.capabilities.contains(&capability))
    }

    /// All capabilities of `name`
    pub fn capabilities(&self, name: &str) -> Option<&BTreeSet<Capability>> {
        self.types.get(name).map(|t| &t.capabilities)
    }

    /// Names of user declarations, in declaration order
    pub fn declared_types(&self) -> &[String] {
        &self.declared
    }

    /// Handle for a type expression
    pub fn handle(self: &Arc<Self>, expr: TypeExpr) -> TypeDescriptor {
        TypeDescriptor::new(Arc::clone(self), expr)
    }

    /// Handle for a type written as text, e.g. `List<Order>`
    pub fn parse_handle(self: &Arc<Self>, text: &str) -> Result<TypeDescriptor> {
        let expr = parse_type_expr(text, &[])?;
        for name in expr.referenced_names() {
            if !self.contains(name) {
                return Err(Error::config(format!("Unknown type '{name}'")));
            }
        }
        check_type_arity(&expr, &|name| self.get(name))?;
        Ok(self.handle(expr))
    }
}

/// Builder for `TypeRegistry`
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    defs: Vec<TypeDef>,
}

impl TypeRegistryBuilder {
    /// Add a declaration
    #[must_use]
    pub fn define(mut self, def: TypeDef) -> Self {
        self.defs.push(def);
        self
    }

    /// Validate declarations and resolve capabilities
    pub fn build(self) -> Result<Arc<TypeRegistry>> {
        let mut defs: HashMap<String, TypeDef> = HashMap::new();
        let mut declared = Vec::new();

        for def in builtin_defs() {
            defs.insert(def.name.clone(), def);
        }
        for def in self.defs {
            if def.name.is_empty() {
                return Err(Error::config("Type name cannot be empty"));
            }
            if is_reserved_name(&def.name) {
                return Err(Error::config(format!(
                    "Type name '{}' is reserved for a primitive",
                    def.name
                )));
            }
            if defs.contains_key(&def.name) {
                return Err(Error::config(format!("Duplicate type '{}'", def.name)));
            }
            declared.push(def.name.clone());
            defs.insert(def.name.clone(), def);
        }

        for def in defs.values() {
            validate_references(def, &defs)?;
        }

        let mut resolved: HashMap<String, BTreeSet<Capability>> = HashMap::new();
        for name in defs.keys() {
            let mut visiting = Vec::new();
            resolve_capabilities(name, &defs, &mut resolved, &mut visiting)?;
        }

        debug!(
            "Built type registry: {} declared, {} total",
            declared.len(),
            defs.len()
        );

        let types = defs
            .into_iter()
            .map(|(name, def)| {
                let capabilities = resolved.remove(&name).unwrap_or_default();
                (name, ResolvedType { def, capabilities })
            })
            .collect();

        Ok(Arc::new(TypeRegistry { types, declared }))
    }
}

fn validate_references(def: &TypeDef, defs: &HashMap<String, TypeDef>) -> Result<()> {
    let unknown =
        |name: &str, site: String| Error::config(format!("Unknown type '{name}' referenced by {site}"));

    for supertype in &def.supertypes {
        match supertype {
            TypeExpr::Named { name, .. } if defs.contains_key(name) => {
                check_type_arity(supertype, &|n| defs.get(n))?;
            }
            TypeExpr::Named { name, .. } => {
                return Err(unknown(name, format!("supertype of '{}'", def.name)));
            }
            other => {
                return Err(Error::config(format!(
                    "Supertype '{other}' of '{}' is not a declared type",
                    def.name
                )));
            }
        }
    }

    let member_types = def
        .fields
        .iter()
        .map(|f| (&f.name, &f.ty))
        .chain(def.methods.iter().flat_map(|m| {
            m.returns
                .iter()
                .map(move |r| (&m.name, r))
                .chain(m.params.iter().map(move |p| (&m.name, &p.ty)))
        }));

    for (member, ty) in member_types {
        for name in ty.referenced_names() {
            if !defs.contains_key(name) {
                return Err(unknown(name, format!("'{}.{member}'", def.name)));
            }
        }
        check_type_arity(ty, &|n| defs.get(n))?;
    }
    Ok(())
}

/// Check that every parameterized use of a declared type supplies one
/// argument per type parameter. Raw uses (no `<...>`) are allowed.
fn check_type_arity<'a>(
    expr: &TypeExpr,
    lookup: &dyn Fn(&str) -> Option<&'a TypeDef>,
) -> Result<()> {
    match expr {
        TypeExpr::Array(component) => check_type_arity(component, lookup),
        TypeExpr::Named {
            name,
            args: Some(args),
        } => {
            if let Some(def) = lookup(name) {
                if args.len() != def.params.len() {
                    return Err(Error::TypeArity {
                        type_name: name.clone(),
                        expected: def.params.len(),
                        actual: args.len(),
                    });
                }
            }
            args.iter().try_for_each(|arg| check_type_arity(arg, lookup))
        }
        _ => Ok(()),
    }
}

fn resolve_capabilities(
    name: &str,
    defs: &HashMap<String, TypeDef>,
    resolved: &mut HashMap<String, BTreeSet<Capability>>,
    visiting: &mut Vec<String>,
) -> Result<BTreeSet<Capability>> {
    if let Some(caps) = resolved.get(name) {
        return Ok(caps.clone());
    }
    if visiting.iter().any(|v| v == name) {
        visiting.push(name.to_string());
        return Err(Error::config(format!(
            "Inheritance cycle: {}",
            visiting.join(" -> ")
        )));
    }
    let Some(def) = defs.get(name) else {
        return Ok(BTreeSet::new());
    };

    visiting.push(name.to_string());
    let mut caps: BTreeSet<Capability> = def.capabilities.iter().copied().collect();
    for supertype in &def.supertypes {
        if let TypeExpr::Named { name: parent, .. } = supertype {
            caps.extend(resolve_capabilities(parent, defs, resolved, visiting)?);
        }
    }
    visiting.pop();

    resolved.insert(name.to_string(), caps.clone());
    Ok(caps)
}
