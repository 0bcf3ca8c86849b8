//! Specula Member Selection
//!
//! Resolves member handles from typed selector expressions, so that code
//! naming a member does it through a checked expression instead of a
//! string lookup.
//!
//! ```ignore
//! use specula_select::{Fields, Selector};
//!
//! let field = Fields::<Person>::new().select(&Selector::new(|x| x.member("name")))?;
//! assert_eq!(&field, Person::type_info().get_field("name").unwrap());
//! ```
//!
//! A selector body must be exactly one member access, method call, or
//! constructor call on the expected target. Resolution is pure: the same
//! selector always yields an equal handle or the same error.

#![warn(missing_docs)]

pub mod constructors;
pub mod error;
pub mod expr;
pub mod fields;
pub mod methods;
pub mod options;
pub mod parameters;
pub mod properties;
pub mod resolver;
pub mod selector;

pub use constructors::{Constructors, StaticConstructors};
pub use error::{Binding, SelectError, SelectResult, ShapeError};
pub use expr::{BinaryOp, Constant, Expr, Lambda, ParameterExpr};
pub use fields::{Fields, StaticFields};
pub use methods::{Methods, StaticMethods};
pub use options::{MemberLookup, SelectOptions};
pub use parameters::{Parameters, StaticParameters};
pub use properties::{Properties, StaticProperties};
pub use resolver::MemberResolver;
pub use selector::{Selector, StaticSelector, DEFAULT_PARAMETER};
