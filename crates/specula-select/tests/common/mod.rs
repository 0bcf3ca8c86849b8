//! Reflected types shared by the integration tests

#![allow(dead_code)]

use specula_meta::{
    ConstructorDefinition, FieldDefinition, MethodDefinition, PropertyDefinition, Reflect,
    TypeBuilder, TypeInfo, TypeRef,
};

pub struct ClassWithFields;
pub struct SubClassWithFields;
pub struct SubClassShadowingField;
pub struct ClassWithProperties;
pub struct Uri;
pub struct TypeWithProperties;
pub struct Calculator;

impl Reflect for ClassWithFields {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("ClassWithFields")
            .assembly("fixtures")
            .field(FieldDefinition::new("read_only_text", TypeRef::of::<String>()).as_readonly())
            .method(MethodDefinition::new("to_string").returns(TypeRef::of::<String>()))
            .build()
    }
}

impl Reflect for SubClassWithFields {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("SubClassWithFields")
            .assembly("fixtures")
            .base::<ClassWithFields>()
            .build()
    }
}

impl Reflect for SubClassShadowingField {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("SubClassShadowingField")
            .assembly("fixtures")
            .base::<ClassWithFields>()
            .property(
                PropertyDefinition::new("read_only_text", TypeRef::of::<String>()).read_only(),
            )
            .build()
    }
}

impl Reflect for ClassWithProperties {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("ClassWithProperties")
            .assembly("fixtures")
            .property(
                PropertyDefinition::new("read_only_text", TypeRef::of::<String>()).read_only(),
            )
            .build()
    }
}

impl Reflect for Uri {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("Uri")
            .assembly("net")
            .field(
                FieldDefinition::new("SCHEME_DELIMITER", TypeRef::of::<String>())
                    .as_static()
                    .as_readonly(),
            )
            .property(PropertyDefinition::new("host", TypeRef::of::<String>()).read_only())
            .constructor(ConstructorDefinition::new().param("text", TypeRef::of::<String>()))
            .constructor(
                ConstructorDefinition::new()
                    .param("base", TypeRef::new("net", "Uri"))
                    .param("relative", TypeRef::of::<String>()),
            )
            .method(
                MethodDefinition::new("parse")
                    .as_static()
                    .param("text", TypeRef::of::<String>())
                    .optional_param("strict", TypeRef::of::<bool>())
                    .returns(TypeRef::new("net", "Uri")),
            )
            .build()
    }
}

impl Reflect for TypeWithProperties {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("TypeWithProperties")
            .assembly("fixtures")
            .property(PropertyDefinition::new("PROPERTY", TypeRef::of::<String>()).as_static())
            .build()
    }
}

impl Reflect for Calculator {
    fn type_info() -> TypeInfo {
        TypeBuilder::class("Calculator")
            .assembly("fixtures")
            .field(FieldDefinition::new("memory", TypeRef::of::<f64>()))
            .method(
                MethodDefinition::new("add")
                    .param("lhs", TypeRef::of::<f64>())
                    .param("rhs", TypeRef::of::<f64>())
                    .returns(TypeRef::of::<f64>()),
            )
            .method(
                MethodDefinition::new("add")
                    .param("lhs", TypeRef::of::<i64>())
                    .param("rhs", TypeRef::of::<i64>())
                    .returns(TypeRef::of::<i64>()),
            )
            .method(MethodDefinition::new("clear"))
            .constructor(ConstructorDefinition::new())
            .build()
    }
}
