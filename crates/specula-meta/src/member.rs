//! Member handles
//!
//! Every handle records the type that declares the member. Handles compare
//! structurally, so resolving the same member twice yields equal values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ty::TypeRef;

/// Name used for constructors in parameter owners and diagnostics
pub const CONSTRUCTOR_NAME: &str = "new";

/// Kind of a member handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Stored field
    Field,
    /// Property (accessor pair)
    Property,
    /// Method
    Method,
    /// Constructor
    Constructor,
    /// Method or constructor parameter
    Parameter,
}

impl MemberKind {
    /// Whether the kind denotes a readable data member (field or property)
    pub fn is_data(self) -> bool {
        matches!(self, MemberKind::Field | MemberKind::Property)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Property => write!(f, "property"),
            MemberKind::Method => write!(f, "method"),
            MemberKind::Constructor => write!(f, "constructor"),
            MemberKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// Field information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Type declaring the field
    pub declaring_type: TypeRef,
    /// Field name
    pub name: String,
    /// Field value type
    pub field_type: TypeRef,
    /// Whether the field is static
    pub is_static: bool,
    /// Whether the field is readonly
    pub is_readonly: bool,
}

/// Property information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Type declaring the property
    pub declaring_type: TypeRef,
    /// Property name
    pub name: String,
    /// Property value type
    pub property_type: TypeRef,
    /// Whether the property is static
    pub is_static: bool,
    /// Whether the property has a getter
    pub can_read: bool,
    /// Whether the property has a setter
    pub can_write: bool,
}

/// Method information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodInfo {
    /// Type declaring the method
    pub declaring_type: TypeRef,
    /// Method name
    pub name: String,
    /// Return type
    pub return_type: TypeRef,
    /// Parameters in positional order
    pub parameters: Vec<ParameterInfo>,
    /// Whether the method is static
    pub is_static: bool,
}

impl MethodInfo {
    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Constructor information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorInfo {
    /// Type the constructor creates
    pub declaring_type: TypeRef,
    /// Parameters in positional order
    pub parameters: Vec<ParameterInfo>,
}

impl ConstructorInfo {
    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Parameter information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Type declaring the owning method or constructor
    pub declaring_type: TypeRef,
    /// Owning member name (`new` for constructors)
    pub member: String,
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub parameter_type: TypeRef,
    /// Zero-based position
    pub position: usize,
    /// Whether the parameter may be omitted
    pub is_optional: bool,
}

/// A resolved member of any kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberInfo {
    /// Field handle
    Field(FieldInfo),
    /// Property handle
    Property(PropertyInfo),
    /// Method handle
    Method(MethodInfo),
    /// Constructor handle
    Constructor(ConstructorInfo),
    /// Parameter handle
    Parameter(ParameterInfo),
}

impl MemberInfo {
    /// Member kind
    pub fn kind(&self) -> MemberKind {
        match self {
            MemberInfo::Field(_) => MemberKind::Field,
            MemberInfo::Property(_) => MemberKind::Property,
            MemberInfo::Method(_) => MemberKind::Method,
            MemberInfo::Constructor(_) => MemberKind::Constructor,
            MemberInfo::Parameter(_) => MemberKind::Parameter,
        }
    }

    /// Member name (`new` for constructors)
    pub fn name(&self) -> &str {
        match self {
            MemberInfo::Field(f) => &f.name,
            MemberInfo::Property(p) => &p.name,
            MemberInfo::Method(m) => &m.name,
            MemberInfo::Constructor(_) => CONSTRUCTOR_NAME,
            MemberInfo::Parameter(p) => &p.name,
        }
    }

    /// Type declaring the member
    pub fn declaring_type(&self) -> &TypeRef {
        match self {
            MemberInfo::Field(f) => &f.declaring_type,
            MemberInfo::Property(p) => &p.declaring_type,
            MemberInfo::Method(m) => &m.declaring_type,
            MemberInfo::Constructor(c) => &c.declaring_type,
            MemberInfo::Parameter(p) => &p.declaring_type,
        }
    }

    /// Whether the member is static (constructors and parameters never are)
    pub fn is_static(&self) -> bool {
        match self {
            MemberInfo::Field(f) => f.is_static,
            MemberInfo::Property(p) => p.is_static,
            MemberInfo::Method(m) => m.is_static,
            MemberInfo::Constructor(_) | MemberInfo::Parameter(_) => false,
        }
    }

    /// Value type of a data member
    pub fn value_type(&self) -> Option<&TypeRef> {
        match self {
            MemberInfo::Field(f) => Some(&f.field_type),
            MemberInfo::Property(p) => Some(&p.property_type),
            _ => None,
        }
    }

    /// Unwrap a field handle
    pub fn into_field(self) -> Option<FieldInfo> {
        match self {
            MemberInfo::Field(f) => Some(f),
            _ => None,
        }
    }

    /// Unwrap a property handle
    pub fn into_property(self) -> Option<PropertyInfo> {
        match self {
            MemberInfo::Property(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}", self.kind(), self.declaring_type(), self.name())
    }
}

impl From<FieldInfo> for MemberInfo {
    fn from(info: FieldInfo) -> Self {
        MemberInfo::Field(info)
    }
}

impl From<PropertyInfo> for MemberInfo {
    fn from(info: PropertyInfo) -> Self {
        MemberInfo::Property(info)
    }
}

impl From<MethodInfo> for MemberInfo {
    fn from(info: MethodInfo) -> Self {
        MemberInfo::Method(info)
    }
}

impl From<ConstructorInfo> for MemberInfo {
    fn from(info: ConstructorInfo) -> Self {
        MemberInfo::Constructor(info)
    }
}

impl From<ParameterInfo> for MemberInfo {
    fn from(info: ParameterInfo) -> Self {
        MemberInfo::Parameter(info)
    }
}
