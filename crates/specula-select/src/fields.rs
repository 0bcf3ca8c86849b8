//! Field selection
//!
//! ```ignore
//! let field = Fields::<Person>::new().select(&Selector::new(|x| x.member("name")))?;
//! let field = StaticFields::new().select(&StaticSelector::new(
//!     Expr::type_of::<Uri>().member("SCHEME_DELIMITER"),
//! ))?;
//! ```

use std::marker::PhantomData;

use specula_meta::{FieldInfo, MemberInfo, MemberKind, Reflect};

use crate::error::{SelectResult, ShapeError};
use crate::options::SelectOptions;
use crate::resolver::MemberResolver;
use crate::selector::{Selector, StaticSelector};

fn into_field(member: MemberInfo) -> SelectResult<FieldInfo> {
    let found = member.kind();
    let name = member.name().to_string();
    member.into_field().ok_or_else(|| {
        ShapeError::WrongMemberKind {
            member: name,
            expected: MemberKind::Field.to_string(),
            found,
        }
        .into()
    })
}

/// Selects instance fields of `T`
pub struct Fields<T> {
    resolver: MemberResolver,
    _carrier: PhantomData<fn(&T)>,
}

impl<T: Reflect> Fields<T> {
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

    /// Resolve the field the selector reads
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
    ) -> SelectResult<FieldInfo> {
        self.resolver.resolve(selector).and_then(into_field)
    }
}

impl<T: Reflect> Default for Fields<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects static fields
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFields {
    resolver: MemberResolver,
}

impl StaticFields {
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

    /// Resolve the static field the selector reads
    pub fn select<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
    ) -> SelectResult<FieldInfo> {
        self.resolver.resolve_static(selector).and_then(into_field)
    }
}
