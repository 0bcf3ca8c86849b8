//! Method selection
//!
//! The selector body is a single call; overloads are told apart by
//! argument count and by the statically known argument types.
//!
//! ```ignore
//! let method = Methods::<Account>::new()
//!     .select(&Selector::new(|x| x.call("deposit", vec![Expr::constant(10.0)])))?;
//! ```

use std::marker::PhantomData;

use specula_meta::{MethodInfo, Reflect};

use crate::error::SelectResult;
use crate::options::SelectOptions;
use crate::resolver::{require, Form, MemberResolver};
use crate::selector::{Selector, StaticSelector};

/// Selects instance methods of `T`
pub struct Methods<T> {
    resolver: MemberResolver,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Methods<T> {
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

    /// Resolve the method the selector calls
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
    ) -> SelectResult<MethodInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            let carrier = this.carrier::<T>(lambda)?;
            this.method_call(lambda, Form::Instance(carrier))
        })
    }
}

impl<T: Reflect> Default for Methods<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects static methods
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMethods {
    resolver: MemberResolver,
}

impl StaticMethods {
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

    /// Resolve the static method the selector calls
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
    ) -> SelectResult<MethodInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            this.check_static(lambda)?;
            this.method_call(lambda, Form::Static)
        })
    }
}
