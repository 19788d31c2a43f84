//! Declarative type model

use crate::types::{AccessorKind, Capability, PrimitiveKind};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Expressions
// ============================================================================

/// A reference to a type, as written in a member declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Unboxed primitive, e.g. `i64`
    Primitive(PrimitiveKind),
    /// Boxed primitive, e.g. `Int64` or `Decimal`
    Boxed(PrimitiveKind),
    /// Array, e.g. `i8[]`
    Array(Box<TypeExpr>),
    /// Declared type; `args` is `None` when used without `<...>`
    Named {
        name: String,
        args: Option<Vec<TypeExpr>>,
    },
    /// Type variable of the enclosing declaration
    Variable(String),
}

impl TypeExpr {
    /// A named type without generic arguments
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: None,
        }
    }

    /// A named type with generic arguments
    pub fn generic(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Some(args),
        }
    }

    /// An array of this type
    #[must_use]
    pub fn array_of(self) -> Self {
        TypeExpr::Array(Box::new(self))
    }

    /// Replace bound type variables
    #[must_use]
    pub fn substitute(&self, bindings: &HashMap<String, TypeExpr>) -> TypeExpr {
        match self {
            TypeExpr::Variable(v) => bindings.get(v).cloned().unwrap_or_else(|| self.clone()),
            TypeExpr::Array(component) => TypeExpr::Array(Box::new(component.substitute(bindings))),
            TypeExpr::Named { name, args } => TypeExpr::Named {
                name: name.clone(),
                args: args
                    .as_ref()
                    .map(|args| args.iter().map(|a| a.substitute(bindings)).collect()),
            },
            other => other.clone(),
        }
    }

    /// Every declared type name referenced by this expression
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeExpr::Array(component) => component.collect_names(names),
            TypeExpr::Named { name, args } => {
                names.push(name);
                for arg in args.iter().flatten() {
                    arg.collect_names(names);
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(k) => match k.unboxed_name() {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "{}", k.boxed_name()),
            },
            TypeExpr::Boxed(k) => write!(f, "{}", k.boxed_name()),
            TypeExpr::Array(component) => write!(f, "{component}[]"),
            TypeExpr::Named { name, args: None } => write!(f, "{name}"),
            TypeExpr::Named {
                name,
                args: Some(args),
            } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeExpr::Variable(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// What kind of declaration a type is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeDefKind {
    /// Concrete type with a member layout
    #[default]
    Class,
    /// Interface; no member layout
    Interface,
    /// Abstract type; cannot be inferred as a row
    Abstract,
}

/// Member annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The member may hold no value
    Nullable,
    /// The member is part of the schema, optionally under another name
    SchemaField { name: Option<String> },
    /// The member is never part of the schema
    SchemaIgnore,
}

/// Whether any annotation marks a member nullable
pub fn is_nullable(annotations: &[Annotation]) -> bool {
    annotations.contains(&Annotation::Nullable)
}

/// Whether any annotation excludes a member
pub fn is_ignored(annotations: &[Annotation]) -> bool {
    annotations.contains(&Annotation::SchemaIgnore)
}

/// The `SchemaField` annotation of a member, if any
pub fn schema_field(annotations: &[Annotation]) -> Option<Option<&str>> {
    annotations.iter().find_map(|a| match a {
        Annotation::SchemaField { name } => Some(name.as_deref()),
        _ => None,
    })
}

/// A field declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeExpr,
    pub public: bool,
    pub annotations: Vec<Annotation>,
}

impl FieldDef {
    /// A public field without annotations
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            public: true,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    pub name: String,
    pub ty: TypeExpr,
    pub annotations: Vec<Annotation>,
}

/// A method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<ParamDef>,
    pub returns: Option<TypeExpr>,
    pub public: bool,
    /// Accessor role declared for this method, if any
    pub accessor: Option<AccessorKind>,
    pub annotations: Vec<Annotation>,
}

impl MethodDef {
    /// A public getter returning `ty`
    pub fn getter(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: Some(ty),
            public: true,
            accessor: Some(AccessorKind::Getter),
            annotations: Vec::new(),
        }
    }

    /// A public setter taking `ty`
    pub fn setter(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            params: vec![ParamDef {
                name: "value".to_string(),
                ty,
                annotations: Vec::new(),
            }],
            returns: None,
            public: true,
            accessor: Some(AccessorKind::Setter),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: String,
    pub kind: TypeDefKind,
    /// Names of generic type variables
    pub params: Vec<String>,
    /// Direct supertypes, possibly parameterized with `params`
    pub supertypes: Vec<TypeExpr>,
    /// Capabilities declared directly on this type
    pub capabilities: Vec<Capability>,
    pub fields: Vec<FieldDef>,
    pub methods: Vec<MethodDef>,
}

impl TypeDef {
    /// A concrete, non-generic type with no members
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Class,
            params: Vec::new(),
            supertypes: Vec::new(),
            capabilities: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// An interface with no members
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: TypeDefKind::Interface,
            ..Self::class(name)
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TypeDefKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn extends(mut self, supertype: TypeExpr) -> Self {
        self.supertypes.push(supertype);
        self
    }

    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Bind this declaration's type variables to `args`
    pub fn bindings(&self, args: &[TypeExpr]) -> HashMap<String, TypeExpr> {
        self.params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect()
    }
}
