//! The `Reflect` trait
//!
//! Rust has no runtime reflection, so types opt in by describing
//! themselves. Descriptions are built on demand and never cached.

use crate::builder::TypeBuilder;
use crate::ty::TypeInfo;

/// A type that can describe its own metadata
pub trait Reflect: 'static {
    /// Build the description of this type
    fn type_info() -> TypeInfo;
}

macro_rules! reflect_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeBuilder::primitive($name).build()
                }
            }
        )*
    };
}

reflect_primitive! {
    () => "void",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
}
