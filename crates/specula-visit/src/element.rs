//! Reflection elements
//!
//! One variant per metadata kind. The payload type of each variant is the
//! handle of that kind, so a Field element can only ever hold a field.

use std::fmt;
use std::hash::{Hash, Hasher};

use specula_meta::{
    AssemblyInfo, ConstructorInfo, FieldInfo, MemberInfo, MethodInfo, ParameterInfo,
    PropertyInfo, TypeInfo,
};

use crate::visitor::ReflectionVisitor;

/// Hash value shared by every [`NullReflectionElement`]
pub const NULL_ELEMENT_HASH: u64 = 64_506_597;

/// Element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// Type element
    Type,
    /// Field element
    Field,
    /// Property element
    Property,
    /// Constructor element
    Constructor,
    /// Method element
    Method,
    /// Parameter element
    Parameter,
    /// Assembly element
    Assembly,
    /// Null element
    Null,
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementTag::Type => write!(f, "type"),
            ElementTag::Field => write!(f, "field"),
            ElementTag::Property => write!(f, "property"),
            ElementTag::Constructor => write!(f, "constructor"),
            ElementTag::Method => write!(f, "method"),
            ElementTag::Parameter => write!(f, "parameter"),
            ElementTag::Assembly => write!(f, "assembly"),
            ElementTag::Null => write!(f, "null"),
        }
    }
}

/// Element standing for "no metadata here"
///
/// Accepting a visitor does nothing and hands the visitor back, so
/// placeholders can sit in a traversal without special cases. All
/// instances are equal and hash to [`NULL_ELEMENT_HASH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReflectionElement;

impl NullReflectionElement {
    /// Return `visitor` unchanged
    pub fn accept<V: ReflectionVisitor>(&self, visitor: V) -> V {
        visitor
    }
}

impl PartialEq for NullReflectionElement {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for NullReflectionElement {}

impl Hash for NullReflectionElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(NULL_ELEMENT_HASH);
    }
}

/// A metadata handle tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReflectionElement {
    /// Type
    Type(TypeInfo),
    /// Field
    Field(FieldInfo),
    /// Property
    Property(PropertyInfo),
    /// Constructor
    Constructor(ConstructorInfo),
    /// Method
    Method(MethodInfo),
    /// Parameter
    Parameter(ParameterInfo),
    /// Assembly
    Assembly(AssemblyInfo),
    /// No metadata
    Null(NullReflectionElement),
}

impl ReflectionElement {
    /// The null element
    pub const NULL: ReflectionElement = ReflectionElement::Null(NullReflectionElement);

    /// Element kind
    pub fn tag(&self) -> ElementTag {
        match self {
            ReflectionElement::Type(_) => ElementTag::Type,
            ReflectionElement::Field(_) => ElementTag::Field,
            ReflectionElement::Property(_) => ElementTag::Property,
            ReflectionElement::Constructor(_) => ElementTag::Constructor,
            ReflectionElement::Method(_) => ElementTag::Method,
            ReflectionElement::Parameter(_) => ElementTag::Parameter,
            ReflectionElement::Assembly(_) => ElementTag::Assembly,
            ReflectionElement::Null(_) => ElementTag::Null,
        }
    }

    /// Check if this is the null element
    pub fn is_null(&self) -> bool {
        matches!(self, ReflectionElement::Null(_))
    }

    /// Invoke the visitor operation matching this element's kind
    pub fn accept<V: ReflectionVisitor>(&self, visitor: V) -> V {
        match self {
            ReflectionElement::Type(ty) => visitor.visit_type(ty),
            ReflectionElement::Field(field) => visitor.visit_field(field),
            ReflectionElement::Property(property) => visitor.visit_property(property),
            ReflectionElement::Constructor(ctor) => visitor.visit_constructor(ctor),
            ReflectionElement::Method(method) => visitor.visit_method(method),
            ReflectionElement::Parameter(param) => visitor.visit_parameter(param),
            ReflectionElement::Assembly(assembly) => visitor.visit_assembly(assembly),
            ReflectionElement::Null(null) => null.accept(visitor),
        }
    }
}

impl Default for ReflectionElement {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for ReflectionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionElement::Type(ty) => write!(f, "type {}", ty),
            ReflectionElement::Field(field) => {
                write!(f, "field {}::{}", field.declaring_type, field.name)
            }
            ReflectionElement::Property(property) => {
                write!(f, "property {}::{}", property.declaring_type, property.name)
            }
            ReflectionElement::Constructor(ctor) => {
                write!(f, "constructor {}({})", ctor.declaring_type, ctor.arity())
            }
            ReflectionElement::Method(method) => {
                write!(f, "method {}::{}({})", method.declaring_type, method.name, method.arity())
            }
            ReflectionElement::Parameter(param) => {
                write!(f, "parameter {}::{}#{}", param.declaring_type, param.member, param.name)
            }
            ReflectionElement::Assembly(assembly) => write!(f, "assembly {}", assembly),
            ReflectionElement::Null(_) => write!(f, "null"),
        }
    }
}

impl From<NullReflectionElement> for ReflectionElement {
    fn from(null: NullReflectionElement) -> Self {
        ReflectionElement::Null(null)
    }
}

impl From<TypeInfo> for ReflectionElement {
    fn from(ty: TypeInfo) -> Self {
        ReflectionElement::Type(ty)
    }
}

impl From<FieldInfo> for ReflectionElement {
    fn from(field: FieldInfo) -> Self {
        ReflectionElement::Field(field)
    }
}

impl From<PropertyInfo> for ReflectionElement {
    fn from(property: PropertyInfo) -> Self {
        ReflectionElement::Property(property)
    }
}

impl From<ConstructorInfo> for ReflectionElement {
    fn from(ctor: ConstructorInfo) -> Self {
        ReflectionElement::Constructor(ctor)
    }
}

impl From<MethodInfo> for ReflectionElement {
    fn from(method: MethodInfo) -> Self {
        ReflectionElement::Method(method)
    }
}

impl From<ParameterInfo> for ReflectionElement {
    fn from(param: ParameterInfo) -> Self {
        ReflectionElement::Parameter(param)
    }
}

impl From<AssemblyInfo> for ReflectionElement {
    fn from(assembly: AssemblyInfo) -> Self {
        ReflectionElement::Assembly(assembly)
    }
}

impl From<MemberInfo> for ReflectionElement {
    fn from(member: MemberInfo) -> Self {
        match member {
            MemberInfo::Field(field) => field.into(),
            MemberInfo::Property(property) => property.into(),
            MemberInfo::Method(method) => method.into(),
            MemberInfo::Constructor(ctor) => ctor.into(),
            MemberInfo::Parameter(param) => param.into(),
        }
    }
}

/// Absent metadata becomes the null element
impl<T: Into<ReflectionElement>> From<Option<T>> for ReflectionElement {
    fn from(value: Option<T>) -> Self {
        value.map_or(ReflectionElement::NULL, Into::into)
    }
}
