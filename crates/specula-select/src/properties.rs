//! Property selection

use std::marker::PhantomData;

use specula_meta::{MemberInfo, MemberKind, PropertyInfo, Reflect};

use crate::error::{SelectResult, ShapeError};
use crate::options::SelectOptions;
use crate::resolver::MemberResolver;
use crate::selector::{Selector, StaticSelector};

fn into_property(member: MemberInfo) -> SelectResult<PropertyInfo> {
    let found = member.kind();
    let name = member.name().to_string();
    member.into_property().ok_or_else(|| {
        ShapeError::WrongMemberKind {
            member: name,
            expected: MemberKind::Property.to_string(),
            found,
        }
        .into()
    })
}

/// Selects instance properties of `T`
pub struct Properties<T> {
    resolver: MemberResolver,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Properties<T> {
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

    /// Resolve the property the selector reads
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
    ) -> SelectResult<PropertyInfo> {
        self.resolver.resolve(selector).and_then(into_property)
    }
}

impl<T: Reflect> Default for Properties<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects static properties
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProperties {
    resolver: MemberResolver,
}

impl StaticProperties {
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

    /// Resolve the static property the selector reads
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
    ) -> SelectResult<PropertyInfo> {
        self.resolver.resolve_static(selector).and_then(into_property)
    }
}
