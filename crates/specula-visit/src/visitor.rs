//! Reflection Visitor
//!
//! Every operation consumes the visitor and returns the next one. A
//! visitor that collects observations does so by returning a new value
//! rather than mutating shared state.
//!
//! There are no default operations: a visitor states what it does for
//! every kind.

use specula_meta::{
    AssemblyInfo, ConstructorInfo, FieldInfo, MethodInfo, ParameterInfo, PropertyInfo, TypeInfo,
};

use crate::element::ReflectionElement;

/// Visitor over the reflection element kinds
pub trait ReflectionVisitor: Sized {
    /// Observation(s) the visitor collects
    type Output;

    /// Observations collected so far
    fn value(&self) -> Self::Output;

    /// Visit a type
    fn visit_type(self, ty: &TypeInfo) -> Self;

    /// Visit a field
    fn visit_field(self, field: &FieldInfo) -> Self;

    /// Visit a property
    fn visit_property(self, property: &PropertyInfo) -> Self;

    /// Visit a constructor
    fn visit_constructor(self, ctor: &ConstructorInfo) -> Self;

    /// Visit a method
    fn visit_method(self, method: &MethodInfo) -> Self;

    /// Visit a parameter
    fn visit_parameter(self, param: &ParameterInfo) -> Self;

    /// Visit an assembly
    fn visit_assembly(self, assembly: &AssemblyInfo) -> Self;
}

/// Let every element accept the visitor in turn, threading it through
///
/// Equivalent to `en.accept(... e2.accept(e1.accept(visitor)))`.
pub fn accept_all<'a, V, I>(elements: I, visitor: V) -> V
where
    V: ReflectionVisitor,
    I: IntoIterator<Item = &'a ReflectionElement>,
{
    elements
        .into_iter()
        .fold(visitor, |visitor, element| element.accept(visitor))
}
