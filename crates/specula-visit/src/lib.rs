//! Specula Reflection Elements
//!
//! A closed set of element kinds wrapping metadata handles, and a visitor
//! trait with one operation per kind. Adding a kind means adding a
//! visitor operation; the compiler then points at every visitor that
//! needs it.
//!
//! Visitors are values: each operation takes the visitor and returns the
//! next one, so traversals are folds.
//!
//! ```ignore
//! let elements: Vec<ReflectionElement> = vec![field.into(), method.into(), NullReflectionElement.into()];
//! let names = accept_all(&elements, NameCollector::default()).value();
//! ```

#![warn(missing_docs)]

pub mod element;
pub mod visitor;
pub mod walk;

pub use element::{ElementTag, NullReflectionElement, ReflectionElement};
pub use visitor::{accept_all, ReflectionVisitor};
pub use walk::{
    assembly_elements, constructor_elements, method_elements, type_elements, walk_all,
    walk_assembly, walk_constructor, walk_method, walk_type,
};
