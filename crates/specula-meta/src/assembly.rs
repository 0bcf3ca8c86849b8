//! Assemblies
//!
//! An assembly is a named set of type descriptions, the unit a host
//! application ships its reflected types in.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::reflect::Reflect;
use crate::ty::TypeInfo;

/// A named collection of types
///
/// Equality and hashing follow the assembly name only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "AssemblyRepr")]
pub struct AssemblyInfo {
    /// Assembly name
    name: String,
    /// Types in registration order
    types: Vec<TypeInfo>,
    /// Type name to index mapping
    #[serde(skip)]
    type_indices: FxHashMap<String, usize>,
}

/// Serialized form; the name index is rebuilt on load
#[derive(Deserialize)]
struct AssemblyRepr {
    name: String,
    types: Vec<TypeInfo>,
}

impl TryFrom<AssemblyRepr> for AssemblyInfo {
    type Error = MetaError;

    fn try_from(repr: AssemblyRepr) -> Result<Self, Self::Error> {
        let mut assembly = AssemblyInfo::new(repr.name);
        for ty in repr.types {
            assembly.add_type(ty)?;
        }
        Ok(assembly)
    }
}

impl AssemblyInfo {
    /// Create a new empty assembly
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            type_indices: FxHashMap::default(),
        }
    }

    /// Assembly name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a type description
    ///
    /// Returns the index of the type within the assembly.
    pub fn add_type(&mut self, ty: TypeInfo) -> Result<usize, MetaError> {
        let name = ty.name().to_string();
        if self.type_indices.contains_key(&name) {
            return Err(MetaError::DuplicateType {
                assembly: self.name.clone(),
                name,
            });
        }

        let index = self.types.len();
        self.types.push(ty);
        self.type_indices.insert(name, index);
        Ok(index)
    }

    /// Register a reflected type, builder style
    pub fn with_type<T: Reflect>(mut self) -> Result<Self, MetaError> {
        self.add_type(T::type_info())?;
        Ok(self)
    }

    /// Get a type by name
    pub fn get_type(&self, name: &str) -> Option<&TypeInfo> {
        self.type_indices
            .get(name)
            .and_then(|&index| self.types.get(index))
    }

    /// Check if a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }

    /// Types in registration order
    pub fn types(&self) -> &[TypeInfo] {
        &self.types
    }

    /// Get number of types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the assembly is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl PartialEq for AssemblyInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for AssemblyInfo {}

impl Hash for AssemblyInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for AssemblyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
