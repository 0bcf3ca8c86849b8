//! Core type descriptions

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::member::{ConstructorInfo, FieldInfo, MethodInfo, PropertyInfo};
use crate::reflect::Reflect;

/// Assembly that hosts the built-in primitive types
pub const CORE_ASSEMBLY: &str = "core";

/// Structural identity of a type
///
/// Two references are equal when they name the same type in the same
/// assembly. Member handles store `TypeRef`s rather than full
/// [`TypeInfo`]s so they stay small and comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeRef {
    /// Name of the assembly declaring the type
    pub assembly: String,
    /// Type name
    pub name: String,
}

impl TypeRef {
    /// Create a type reference
    pub fn new(assembly: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            assembly: assembly.into(),
            name: name.into(),
        }
    }

    /// Reference to a primitive type in the core assembly
    pub fn primitive(name: &str) -> Self {
        Self::new(CORE_ASSEMBLY, name)
    }

    /// Reference to a reflected Rust type
    pub fn of<T: Reflect>() -> Self {
        T::type_info().type_ref
    }

    /// The `void` type, used as the return type of methods returning nothing
    pub fn void() -> Self {
        Self::primitive("void")
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.assembly == CORE_ASSEMBLY {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}::{}", self.assembly, self.name)
        }
    }
}

/// Kind of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Built-in primitive (numbers, strings, booleans)
    Primitive,
    /// Reference type with optional base class
    Class,
    /// Value type
    Struct,
    /// Interface (members only, no state)
    Interface,
    /// Enumeration
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Primitive => write!(f, "primitive"),
            TypeKind::Class => write!(f, "class"),
            TypeKind::Struct => write!(f, "struct"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

/// Full description of a type and the members it declares
///
/// Only members declared by this type are stored here; inherited members
/// are reached through [`TypeInfo::base`]. Equality and hashing follow
/// [`TypeInfo::type_ref`] only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Identity of this type
    pub type_ref: TypeRef,
    /// Type kind
    pub kind: TypeKind,
    /// Direct ancestor (if any)
    pub base: Option<Box<TypeInfo>>,
    /// Declared fields, in declaration order
    pub fields: Vec<FieldInfo>,
    /// Declared properties, in declaration order
    pub properties: Vec<PropertyInfo>,
    /// Declared methods, in declaration order
    pub methods: Vec<MethodInfo>,
    /// Declared constructors, in declaration order
    pub constructors: Vec<ConstructorInfo>,
}

impl TypeInfo {
    /// Create a type description without members
    pub fn new(type_ref: TypeRef, kind: TypeKind) -> Self {
        Self {
            type_ref,
            kind,
            base: None,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.type_ref.name
    }

    /// Name of the declaring assembly
    pub fn assembly(&self) -> &str {
        &self.type_ref.assembly
    }

    /// Direct ancestor, if any
    pub fn base(&self) -> Option<&TypeInfo> {
        self.base.as_deref()
    }

    /// Check if this is a primitive type
    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_ref == other.type_ref
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_ref.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_ref)
    }
}
