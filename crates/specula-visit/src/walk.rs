//! Recursive traversal
//!
//! The `*_elements` functions list the direct children of a handle as
//! elements. The `walk_*` functions visit a handle and then everything
//! beneath it, depth first:
//!
//! - assembly: the assembly, then each type in registration order
//! - type: the type, then fields, constructors, properties, methods
//! - method / constructor: the member, then its parameters by position
//!
//! Base types are not walked; a type's base belongs to whichever
//! assembly declares it.

use specula_meta::{AssemblyInfo, ConstructorInfo, MethodInfo, TypeInfo};

use crate::element::ReflectionElement;
use crate::visitor::ReflectionVisitor;

/// Members declared directly on `ty`
pub fn type_elements(ty: &TypeInfo) -> Vec<ReflectionElement> {
    let mut elements = Vec::with_capacity(
        ty.fields.len() + ty.constructors.len() + ty.properties.len() + ty.methods.len(),
    );
    elements.extend(ty.fields.iter().cloned().map(ReflectionElement::Field));
    elements.extend(ty.constructors.iter().cloned().map(ReflectionElement::Constructor));
    elements.extend(ty.properties.iter().cloned().map(ReflectionElement::Property));
    elements.extend(ty.methods.iter().cloned().map(ReflectionElement::Method));
    elements
}

/// Parameters of `method`
pub fn method_elements(method: &MethodInfo) -> Vec<ReflectionElement> {
    method
        .parameters
        .iter()
        .cloned()
        .map(ReflectionElement::Parameter)
        .collect()
}

/// Parameters of `ctor`
pub fn constructor_elements(ctor: &ConstructorInfo) -> Vec<ReflectionElement> {
    ctor.parameters
        .iter()
        .cloned()
        .map(ReflectionElement::Parameter)
        .collect()
}

/// Types registered in `assembly`
pub fn assembly_elements(assembly: &AssemblyInfo) -> Vec<ReflectionElement> {
    assembly
        .types()
        .iter()
        .cloned()
        .map(ReflectionElement::Type)
        .collect()
}

/// Visit `method` and its parameters
pub fn walk_method<V: ReflectionVisitor>(visitor: V, method: &MethodInfo) -> V {
    let visitor = visitor.visit_method(method);
    method
        .parameters
        .iter()
        .fold(visitor, |visitor, param| visitor.visit_parameter(param))
}

/// Visit `ctor` and its parameters
pub fn walk_constructor<V: ReflectionVisitor>(visitor: V, ctor: &ConstructorInfo) -> V {
    let visitor = visitor.visit_constructor(ctor);
    ctor.parameters
        .iter()
        .fold(visitor, |visitor, param| visitor.visit_parameter(param))
}

/// Visit `ty`, its members and their parameters
pub fn walk_type<V: ReflectionVisitor>(visitor: V, ty: &TypeInfo) -> V {
    let visitor = visitor.visit_type(ty);
    let visitor = ty
        .fields
        .iter()
        .fold(visitor, |visitor, field| visitor.visit_field(field));
    let visitor = ty
        .constructors
        .iter()
        .fold(visitor, |visitor, ctor| walk_constructor(visitor, ctor));
    let visitor = ty
        .properties
        .iter()
        .fold(visitor, |visitor, property| visitor.visit_property(property));
    ty.methods
        .iter()
        .fold(visitor, |visitor, method| walk_method(visitor, method))
}

/// Visit `assembly` and everything in it
pub fn walk_assembly<V: ReflectionVisitor>(visitor: V, assembly: &AssemblyInfo) -> V {
    let visitor = visitor.visit_assembly(assembly);
    assembly
        .types()
        .iter()
        .fold(visitor, |visitor, ty| walk_type(visitor, ty))
}

/// Fold a visitor over elements, walking into each one
pub fn walk_all<'a, V, I>(elements: I, visitor: V) -> V
where
    V: ReflectionVisitor,
    I: IntoIterator<Item = &'a ReflectionElement>,
{
    elements.into_iter().fold(visitor, |visitor, element| match element {
        ReflectionElement::Assembly(assembly) => walk_assembly(visitor, assembly),
        ReflectionElement::Type(ty) => walk_type(visitor, ty),
        ReflectionElement::Method(method) => walk_method(visitor, method),
        ReflectionElement::Constructor(ctor) => walk_constructor(visitor, ctor),
        other => other.accept(visitor),
    })
}
