//! Specula Metadata Model
//!
//! Describes types and their members so that selector expressions can be
//! resolved to member handles without runtime reflection.
//!
//! Types describe themselves through [`Reflect`], usually with a
//! [`TypeBuilder`]:
//!
//! ```ignore
//! use specula_meta::{FieldDefinition, Reflect, TypeBuilder, TypeInfo, TypeRef};
//!
//! struct Person;
//!
//! impl Reflect for Person {
//!     fn type_info() -> TypeInfo {
//!         TypeBuilder::class("Person")
//!             .assembly("people")
//!             .field(FieldDefinition::new("name", TypeRef::of::<String>()).as_readonly())
//!             .build()
//!     }
//! }
//!
//! let field = Person::type_info().get_field("name");
//! ```

#![warn(missing_docs)]

pub mod assembly;
pub mod builder;
pub mod error;
pub mod lookup;
pub mod member;
pub mod reflect;
pub mod ty;

pub use assembly::AssemblyInfo;
pub use builder::{
    ConstructorDefinition, FieldDefinition, MethodDefinition, ParameterDefinition,
    PropertyDefinition, TypeBuilder,
};
pub use error::MetaError;
pub use lookup::Ancestors;
pub use member::{
    ConstructorInfo, FieldInfo, MemberInfo, MemberKind, MethodInfo, ParameterInfo, PropertyInfo,
};
pub use reflect::Reflect;
pub use ty::{TypeInfo, TypeKind, TypeRef};
