//! Typed selectors
//!
//! [`Selector`] is the instance form `T -> value`; its single parameter is
//! typed by the carrier `T`. [`StaticSelector`] is the zero-argument form
//! `() -> value`, reading members off a type reference.

use std::fmt;
use std::marker::PhantomData;

use specula_meta::Reflect;

use crate::expr::{Expr, Lambda, ParameterExpr};

/// Parameter name used by [`Selector::new`]
pub const DEFAULT_PARAMETER: &str = "x";

/// Instance-form selector over carrier `T`
pub struct Selector<T> {
    lambda: Lambda,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Selector<T> {
    /// Build a selector; `body` receives the carrier parameter
    ///
    /// ```ignore
    /// let name = Selector::<Person>::new(|x| x.member("name"));
    /// ```
    pub fn new(body: impl FnOnce(Expr) -> Expr) -> Self {
        Self::with_parameter(DEFAULT_PARAMETER, body)
    }

    /// Build a selector with a named carrier parameter
    pub fn with_parameter(name: &str, body: impl FnOnce(Expr) -> Expr) -> Self {
        let param = ParameterExpr::new(name, T::type_info());
        let body = body(Expr::Parameter(param.clone()));
        Self {
            lambda: Lambda::new(vec![param], body),
            _carrier: PhantomData,
        }
    }

    /// Wrap an existing lambda
    ///
    /// The lambda is not checked here; the resolver rejects lambdas whose
    /// parameters do not match the carrier.
    pub fn from_lambda(lambda: Lambda) -> Self {
        Self {
            lambda,
            _carrier: PhantomData,
        }
    }
}

impl<T> Selector<T> {
    /// The underlying lambda
    pub fn lambda(&self) -> &Lambda {
        &self.lambda
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self {
            lambda: self.lambda.clone(),
            _carrier: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.lambda).finish()
    }
}

impl<T> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lambda)
    }
}

/// Zero-argument selector
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSelector {
    lambda: Lambda,
}

impl StaticSelector {
    /// Build a selector from its body
    ///
    /// ```ignore
    /// let delimiter = StaticSelector::new(Expr::type_of::<Uri>().member("SCHEME_DELIMITER"));
    /// ```
    pub fn new(body: Expr) -> Self {
        Self {
            lambda: Lambda::new(Vec::new(), body),
        }
    }

    /// Wrap an existing lambda (checked by the resolver)
    pub fn from_lambda(lambda: Lambda) -> Self {
        Self { lambda }
    }

    /// The underlying lambda
    pub fn lambda(&self) -> &Lambda {
        &self.lambda
    }
}

impl fmt::Display for StaticSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specula_meta::{TypeBuilder, TypeInfo};

    struct Gauge;

    impl Reflect for Gauge {
        fn type_info() -> TypeInfo {
            TypeBuilder::class("Gauge").build()
        }
    }

    #[test]
    fn test_selector_parameter_is_carrier() {
        let selector = Selector::<Gauge>::new(|x| x.member("level"));
        let lambda = selector.lambda();
        assert_eq!(lambda.parameters.len(), 1);
        assert_eq!(lambda.parameters[0].name, DEFAULT_PARAMETER);
        assert_eq!(lambda.parameters[0].ty, Gauge::type_info());
        assert_eq!(selector.to_string(), "|x| x.level");
    }

    #[test]
    fn test_named_parameter() {
        let selector = Selector::<Gauge>::with_parameter("g", |g| g.call("reset", vec![]));
        assert_eq!(selector.clone().to_string(), "|g| g.reset()");
    }

    #[test]
    fn test_static_selector() {
        let selector = StaticSelector::new(Expr::type_of::<Gauge>().member("MAX"));
        assert!(selector.lambda().parameters.is_empty());
        assert_eq!(selector.to_string(), "|| Gauge.MAX");
    }
}
