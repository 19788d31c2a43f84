//! `TypeHandle` over registry declarations

use super::registry::TypeRegistry;
use super::types::{TypeDef, TypeDefKind, TypeExpr};
use crate::types::{Capability, RawKind, TypeHandle};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A type expression bound to the registry that declares its names
#[derive(Clone)]
pub struct TypeDescriptor {
    registry: Arc<TypeRegistry>,
    expr: TypeExpr,
}

impl TypeDescriptor {
    pub fn new(registry: Arc<TypeRegistry>, expr: TypeExpr) -> Self {
        Self { registry, expr }
    }

    pub fn expr(&self) -> &TypeExpr {
        &self.expr
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Declaration of a named type
    pub fn definition(&self) -> Option<&TypeDef> {
        match &self.expr {
            TypeExpr::Named { name, .. } => self.registry.get(name),
            _ => None,
        }
    }

    /// Handle for a member type declared inside this type, with this
    /// handle's generic arguments substituted
    pub fn member_type(&self, ty: &TypeExpr) -> TypeDescriptor {
        let bindings = self.bindings();
        self.with_expr(ty.substitute(&bindings))
    }

    fn bindings(&self) -> HashMap<String, TypeExpr> {
        match (&self.expr, self.definition()) {
            (
                TypeExpr::Named {
                    args: Some(args), ..
                },
                Some(def),
            ) => def.bindings(args),
            _ => HashMap::new(),
        }
    }

    fn with_expr(&self, expr: TypeExpr) -> TypeDescriptor {
        TypeDescriptor {
            registry: Arc::clone(&self.registry),
            expr,
        }
    }

    /// Walk supertypes from `expr` to the declaration that provides
    /// `capability`, returning the arguments it is instantiated with there
    fn capability_arguments(&self, expr: &TypeExpr, capability: Capability) -> Option<Vec<TypeExpr>> {
        let TypeExpr::Named { name, args } = expr else {
            return None;
        };
        let def = self.registry.get(name)?;
        if def.capabilities.contains(&capability) {
            return args.clone();
        }

        let bindings = if def.params.is_empty() {
            HashMap::new()
        } else {
            // used raw: the arguments are erased
            let args = args.as_ref()?;
            if args.len() != def.params.len() {
                // reported by the engine as an arity error
                return Some(args.clone());
            }
            def.bindings(args)
        };

        def.supertypes
            .iter()
            .find(|s| match s {
                TypeExpr::Named { name, .. } => self.registry.has_capability(name, capability),
                _ => false,
            })
            .and_then(|s| self.capability_arguments(&s.substitute(&bindings), capability))
    }
}

impl TypeHandle for TypeDescriptor {
    fn raw_kind(&self) -> RawKind {
        raw_kind_of(&self.expr)
    }

    fn is_array(&self) -> bool {
        matches!(self.expr, TypeExpr::Array(_))
    }

    fn component_type(&self) -> Option<Self> {
        match &self.expr {
            TypeExpr::Array(component) => Some(self.with_expr((**component).clone())),
            _ => None,
        }
    }

    fn is_subtype_of(&self, capability: Capability) -> bool {
        match &self.expr {
            TypeExpr::Named { name, .. } => self.registry.has_capability(name, capability),
            _ => false,
        }
    }

    fn type_parameters(&self) -> Option<Vec<Self>> {
        match &self.expr {
            TypeExpr::Named { args, .. } => args
                .as_ref()
                .map(|args| args.iter().map(|a| self.with_expr(a.clone())).collect()),
            _ => None,
        }
    }

    fn type_parameters_for(&self, capability: Capability) -> Option<Vec<Self>> {
        self.capability_arguments(&self.expr, capability)
            .map(|args| args.into_iter().map(|a| self.with_expr(a)).collect())
    }

    fn erased(&self) -> Self {
        self.with_expr(erase(&self.expr))
    }

    fn is_abstract(&self) -> bool {
        match &self.expr {
            TypeExpr::Variable(_) => true,
            TypeExpr::Named { .. } => self
                .definition()
                .map_or(true, |def| def.kind != TypeDefKind::Class),
            _ => false,
        }
    }
}

fn raw_kind_of(expr: &TypeExpr) -> RawKind {
    match expr {
        TypeExpr::Primitive(k) => RawKind::Primitive(*k),
        TypeExpr::Boxed(k) => RawKind::Boxed(*k),
        TypeExpr::Array(component) => RawKind::Array(Box::new(raw_kind_of(component))),
        TypeExpr::Named { name, .. } => RawKind::Declared(name.clone()),
        TypeExpr::Variable(v) => RawKind::Variable(v.clone()),
    }
}

fn erase(expr: &TypeExpr) -> TypeExpr {
    match expr {
        TypeExpr::Named { name, .. } => TypeExpr::named(name.clone()),
        TypeExpr::Array(component) => TypeExpr::Array(Box::new(erase(component))),
        other => other.clone(),
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.expr).finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

// Handles from different registries compare by expression only.
impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expr.hash(state);
    }
}
