//! Parameter selection
//!
//! Parameters are selected through the call that passes them: the
//! selector calls a method or constructor and a position picks the
//! parameter.
//!
//! ```ignore
//! // `amount` in `Account::deposit(amount)`
//! let amount = Parameters::<Account>::new()
//!     .select(&Selector::new(|x| x.call("deposit", vec![Expr::constant(0.0)])), 0)?;
//! ```

use std::marker::PhantomData;

use specula_meta::{ParameterInfo, Reflect};

use crate::error::SelectResult;
use crate::options::SelectOptions;
use crate::resolver::{require, Form, MemberResolver};
use crate::selector::{Selector, StaticSelector};

/// Selects parameters of methods and constructors called on `T`
pub struct Parameters<T> {
    resolver: MemberResolver,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Parameters<T> {
    /// Create with default options
    pub fn new() -> Self {
        Self::with_options(SelectOptions::default())
    }

    /// Create with the given options
    pub fn with_options(options: SelectOptions) -> Self {
        Self {
            resolver: MemberResolver::with_options(options),
            _carrier: PhantomData,
        }
    }

    /// Resolve parameter `position` of the call the selector makes
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
        position: usize,
    ) -> SelectResult<ParameterInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            let carrier = this.carrier::<T>(lambda)?;
            this.call_parameter(lambda, Form::Instance(carrier), position)
        })
    }
}

impl<T: Reflect> Default for Parameters<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects parameters of static methods and constructors
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticParameters {
    resolver: MemberResolver,
}

impl StaticParameters {
    /// Create with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the given options
    pub fn with_options(options: SelectOptions) -> Self {
        Self {
            resolver: MemberResolver::with_options(options),
        }
    }

    /// Resolve parameter `position` of the call the selector makes
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
        position: usize,
    ) -> SelectResult<ParameterInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            this.check_static(lambda)?;
            this.call_parameter(lambda, Form::Static, position)
        })
    }
}
