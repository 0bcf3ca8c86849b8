//! Selector resolution errors

use std::fmt;

use specula_meta::{MemberKind, TypeRef};
use thiserror::Error;

/// Result type for selector resolution
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors raised when a selector cannot be resolved
///
/// Both kinds are caller-input errors: resolution is deterministic, so the
/// same selector always fails the same way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectError {
    /// The selector reference was absent
    #[error("Argument `{parameter}` must not be null")]
    NullArgument {
        /// Name of the absent argument
        parameter: &'static str,
    },

    /// The selector does not have the expected shape
    #[error("Invalid selector expression: {0}")]
    InvalidExpressionShape(#[from] ShapeError),
}

impl SelectError {
    /// Check if this is a null-argument error
    pub fn is_null_argument(&self) -> bool {
        matches!(self, SelectError::NullArgument { .. })
    }

    /// Check if this is a shape error of any kind
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, SelectError::InvalidExpressionShape(_))
    }

    /// Check if the selector was well formed but named the wrong kind of member
    pub fn is_wrong_kind(&self) -> bool {
        matches!(
            self,
            SelectError::InvalidExpressionShape(ShapeError::WrongMemberKind { .. })
        )
    }

    /// The shape error, if any
    pub fn shape(&self) -> Option<&ShapeError> {
        match self {
            SelectError::InvalidExpressionShape(shape) => Some(shape),
            SelectError::NullArgument { .. } => None,
        }
    }
}

/// How a member is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Read off an instance
    Instance,
    /// Read off a type
    Static,
}

impl Binding {
    /// Binding of a member with the given static flag
    pub fn of(is_static: bool) -> Self {
        if is_static {
            Binding::Static
        } else {
            Binding::Instance
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Instance => write!(f, "an instance member"),
            Binding::Static => write!(f, "a static member"),
        }
    }
}

/// Why a selector expression was rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    /// The body is not the kind of node the resolver accepts
    #[error("expected {expected}, found {node} `{found}`")]
    NotMemberAccess {
        /// Description of the accepted shape
        expected: &'static str,
        /// Rendered body
        found: String,
        /// Node kind of the body
        node: &'static str,
    },

    /// The member is read off something other than the carrier
    #[error("expected {expected}, found `{found}`")]
    NotOnCarrier {
        /// Description of the accepted target
        expected: String,
        /// Rendered target
        found: String,
    },

    /// The member exists but is of another kind
    #[error("`{member}` is a {found}, expected a {expected}")]
    WrongMemberKind {
        /// Member name
        member: String,
        /// Accepted kind(s)
        expected: String,
        /// Actual kind
        found: MemberKind,
    },

    /// No member of that name exists
    #[error("`{member}` is not declared on `{ty}` or its ancestors")]
    UnknownMember {
        /// Type searched
        ty: TypeRef,
        /// Member name
        member: String,
    },

    /// Static member read off an instance, or the reverse
    #[error("`{member}` is {found}, expected {expected}")]
    StaticMismatch {
        /// Member name
        member: String,
        /// Binding the selector form requires
        expected: Binding,
        /// Binding of the declared member
        found: Binding,
    },

    /// Wrong number of lambda parameters for the selector form
    #[error("expected a lambda with {expected} parameter(s), found {found}")]
    ParameterCountMismatch {
        /// Required parameter count
        expected: usize,
        /// Declared parameter count
        found: usize,
    },

    /// No overload accepts the call's arguments
    #[error("no `{member}` on `{ty}` accepts {arity} argument(s) of the given types")]
    NoMatchingOverload {
        /// Type searched
        ty: TypeRef,
        /// Method name (`new` for constructors)
        member: String,
        /// Argument count
        arity: usize,
    },

    /// Parameter position past the end of the signature
    #[error("`{member}` has {count} parameter(s), no parameter at position {position}")]
    ParameterOutOfRange {
        /// Method name (`new` for constructors)
        member: String,
        /// Requested position
        position: usize,
        /// Parameter count
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SelectError::NullArgument {
            parameter: "selector",
        };
        assert_eq!(err.to_string(), "Argument `selector` must not be null");
        assert!(err.is_null_argument());
        assert!(!err.is_invalid_shape());

        let err = SelectError::from(ShapeError::WrongMemberKind {
            member: "text".to_string(),
            expected: MemberKind::Field.to_string(),
            found: MemberKind::Property,
        });
        assert_eq!(
            err.to_string(),
            "Invalid selector expression: `text` is a property, expected a field"
        );
        assert!(err.is_wrong_kind());
        assert!(err.is_invalid_shape());
    }

    #[test]
    fn test_static_mismatch_message() {
        let shape = ShapeError::StaticMismatch {
            member: "COUNT".to_string(),
            expected: Binding::of(false),
            found: Binding::of(true),
        };
        assert_eq!(
            shape.to_string(),
            "`COUNT` is a static member, expected an instance member"
        );
    }
}
