//! Type Builder
//!
//! Fluent construction of [`TypeInfo`] values. Member definitions are
//! collected without a declaring type; [`TypeBuilder::build`] stamps the
//! type being built onto every member and parameter.

use crate::member::{
    ConstructorInfo, FieldInfo, MethodInfo, ParameterInfo, PropertyInfo, CONSTRUCTOR_NAME,
};
use crate::reflect::Reflect;
use crate::ty::{TypeInfo, TypeKind, TypeRef};

/// Assembly used when a builder is not given one
pub const DEFAULT_ASSEMBLY: &str = "main";

/// Definition for a field
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Field value type
    pub field_type: TypeRef,
    /// Whether this is a static field
    pub is_static: bool,
    /// Whether this field is readonly
    pub is_readonly: bool,
}

impl FieldDefinition {
    /// Create a new instance field definition
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_static: false,
            is_readonly: false,
        }
    }

    /// Mark as static field
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as readonly
    pub fn as_readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    fn declare(self, declaring_type: &TypeRef) -> FieldInfo {
        FieldInfo {
            declaring_type: declaring_type.clone(),
            name: self.name,
            field_type: self.field_type,
            is_static: self.is_static,
            is_readonly: self.is_readonly,
        }
    }
}

/// Definition for a property
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    /// Property name
    pub name: String,
    /// Property value type
    pub property_type: TypeRef,
    /// Whether this is a static property
    pub is_static: bool,
    /// Whether the property has a getter
    pub can_read: bool,
    /// Whether the property has a setter
    pub can_write: bool,
}

impl PropertyDefinition {
    /// Create a read-write instance property definition
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            is_static: false,
            can_read: true,
            can_write: true,
        }
    }

    /// Mark as static property
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Remove the setter
    pub fn read_only(mut self) -> Self {
        self.can_read = true;
        self.can_write = false;
        self
    }

    /// Remove the getter
    pub fn write_only(mut self) -> Self {
        self.can_read = false;
        self.can_write = true;
        self
    }

    fn declare(self, declaring_type: &TypeRef) -> PropertyInfo {
        PropertyInfo {
            declaring_type: declaring_type.clone(),
            name: self.name,
            property_type: self.property_type,
            is_static: self.is_static,
            can_read: self.can_read,
            can_write: self.can_write,
        }
    }
}

/// Parameter definition for method and constructor signatures
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub parameter_type: TypeRef,
    /// Whether this parameter is optional
    pub is_optional: bool,
}

impl ParameterDefinition {
    /// Create a required parameter definition
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            is_optional: false,
        }
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }
}

fn declare_parameters(
    parameters: Vec<ParameterDefinition>,
    declaring_type: &TypeRef,
    member: &str,
) -> Vec<ParameterInfo> {
    parameters
        .into_iter()
        .enumerate()
        .map(|(position, param)| ParameterInfo {
            declaring_type: declaring_type.clone(),
            member: member.to_string(),
            name: param.name,
            parameter_type: param.parameter_type,
            position,
            is_optional: param.is_optional,
        })
        .collect()
}

/// Definition for a method
#[derive(Debug, Clone)]
pub struct MethodDefinition {
    /// Method name
    pub name: String,
    /// Return type
    pub return_type: TypeRef,
    /// Parameters in order
    pub parameters: Vec<ParameterDefinition>,
    /// Whether this is a static method
    pub is_static: bool,
}

impl MethodDefinition {
    /// Create a new instance method returning `void`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: TypeRef::void(),
            parameters: Vec::new(),
            is_static: false,
        }
    }

    /// Mark as static method
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set return type
    pub fn returns(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    /// Add a required parameter
    pub fn param(mut self, name: impl Into<String>, parameter_type: TypeRef) -> Self {
        self.parameters
            .push(ParameterDefinition::new(name, parameter_type));
        self
    }

    /// Add an optional parameter
    pub fn optional_param(mut self, name: impl Into<String>, parameter_type: TypeRef) -> Self {
        self.parameters
            .push(ParameterDefinition::new(name, parameter_type).optional());
        self
    }

    fn declare(self, declaring_type: &TypeRef) -> MethodInfo {
        let parameters = declare_parameters(self.parameters, declaring_type, &self.name);
        MethodInfo {
            declaring_type: declaring_type.clone(),
            name: self.name,
            return_type: self.return_type,
            parameters,
            is_static: self.is_static,
        }
    }
}

/// Definition for a constructor
#[derive(Debug, Clone, Default)]
pub struct ConstructorDefinition {
    /// Parameters in order
    pub parameters: Vec<ParameterDefinition>,
}

impl ConstructorDefinition {
    /// Create a parameterless constructor definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter
    pub fn param(mut self, name: impl Into<String>, parameter_type: TypeRef) -> Self {
        self.parameters
            .push(ParameterDefinition::new(name, parameter_type));
        self
    }

    /// Add an optional parameter
    pub fn optional_param(mut self, name: impl Into<String>, parameter_type: TypeRef) -> Self {
        self.parameters
            .push(ParameterDefinition::new(name, parameter_type).optional());
        self
    }

    fn declare(self, declaring_type: &TypeRef) -> ConstructorInfo {
        ConstructorInfo {
            declaring_type: declaring_type.clone(),
            parameters: declare_parameters(self.parameters, declaring_type, CONSTRUCTOR_NAME),
        }
    }
}

/// Builder for [`TypeInfo`]
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    name: String,
    assembly: String,
    kind: TypeKind,
    base: Option<TypeInfo>,
    fields: Vec<FieldDefinition>,
    properties: Vec<PropertyDefinition>,
    methods: Vec<MethodDefinition>,
    constructors: Vec<ConstructorDefinition>,
}

impl TypeBuilder {
    /// Start a type of the given kind
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            assembly: DEFAULT_ASSEMBLY.to_string(),
            kind,
            base: None,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Start a class
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Start a struct
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    /// Start an interface
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Start an enum
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    /// Start a primitive in the core assembly
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Primitive).assembly(crate::ty::CORE_ASSEMBLY)
    }

    /// Set the declaring assembly
    pub fn assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    /// Set the direct ancestor from a reflected type
    pub fn base<B: Reflect>(self) -> Self {
        self.base_info(B::type_info())
    }

    /// Set the direct ancestor from an existing description
    pub fn base_info(mut self, base: TypeInfo) -> Self {
        self.base = Some(base);
        self
    }

    /// Add a field
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a property
    pub fn property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a method
    pub fn method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a constructor
    pub fn constructor(mut self, constructor: ConstructorDefinition) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Reference to the type under construction
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.assembly.clone(), self.name.clone())
    }

    /// Finish the type
    pub fn build(self) -> TypeInfo {
        let type_ref = self.type_ref();
        let mut info = TypeInfo::new(type_ref.clone(), self.kind);
        info.base = self.base.map(Box::new);
        info.fields = self
            .fields
            .into_iter()
            .map(|f| f.declare(&type_ref))
            .collect();
        info.properties = self
            .properties
            .into_iter()
            .map(|p| p.declare(&type_ref))
            .collect();
        info.methods = self
            .methods
            .into_iter()
            .map(|m| m.declare(&type_ref))
            .collect();
        info.constructors = self
            .constructors
            .into_iter()
            .map(|c| c.declare(&type_ref))
            .collect();
        info
    }
}
