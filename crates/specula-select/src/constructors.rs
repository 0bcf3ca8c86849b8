//! Constructor selection
//!
//! The selector body is a single `new` expression. Only the constructed
//! type's own constructors are considered.

use std::marker::PhantomData;

use specula_meta::{ConstructorInfo, Reflect};

use crate::error::SelectResult;
use crate::options::SelectOptions;
use crate::resolver::{require, MemberResolver};
use crate::selector::{Selector, StaticSelector};

/// Selects constructors from selectors over carrier `T`
///
/// The carrier only types the lambda parameter, which constructor
/// arguments may read from; the constructed type can be any type.
pub struct Constructors<T> {
    resolver: MemberResolver,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Constructors<T> {
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

    /// Resolve the constructor the selector calls
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
    ) -> SelectResult<ConstructorInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            this.carrier::<T>(lambda)?;
            this.constructor_call(lambda)
        })
    }
}

impl<T: Reflect> Default for Constructors<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects constructors from zero-argument selectors
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConstructors {
    resolver: MemberResolver,
}

impl StaticConstructors {
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

    /// Resolve the constructor the selector calls
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
    ) -> SelectResult<ConstructorInfo> {
        let lambda = require(selector.into())?.lambda();
        self.resolver.logged(lambda, |this| {
            this.check_static(lambda)?;
            this.constructor_call(lambda)
        })
    }
}
