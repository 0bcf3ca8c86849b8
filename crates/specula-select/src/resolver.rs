//! Expression Member Resolver
//!
//! Walks a selector lambda and extracts the single member it reads. The
//! body must be exactly one member access, call, or constructor call on
//! the expected target once conversion nodes are stripped; anything
//! composite is rejected, because it has no single member to answer with.
//!
//! Lookup starts on the type the member is read off and walks up its
//! ancestors; the nearest declaration wins.

use specula_meta::{
    ConstructorInfo, MemberInfo, MemberKind, MethodInfo, ParameterInfo, Reflect, TypeInfo,
};
use tracing::{debug, trace};

use crate::error::{Binding, SelectError, SelectResult, ShapeError};
use crate::expr::{Expr, Lambda, ParameterExpr};
use crate::options::{MemberLookup, SelectOptions};
use crate::selector::{Selector, StaticSelector};

/// Selector form a lambda is resolved in
#[derive(Debug, Clone, Copy)]
pub(crate) enum Form<'a> {
    /// `|x| ...`, members are read off the carrier parameter
    Instance(&'a ParameterExpr),
    /// `|| ...`, members are read off a type reference
    Static,
}

impl Form<'_> {
    fn binding(self) -> Binding {
        match self {
            Form::Instance(_) => Binding::Instance,
            Form::Static => Binding::Static,
        }
    }
}

/// Reject an absent selector
pub(crate) fn require<S>(selector: Option<&S>) -> SelectResult<&S> {
    selector.ok_or(SelectError::NullArgument {
        parameter: "selector",
    })
}

fn not_member_access(expected: &'static str, found: &Expr) -> SelectError {
    ShapeError::NotMemberAccess {
        expected,
        found: found.to_string(),
        node: found.node_kind(),
    }
    .into()
}

fn signature_matches(parameters: &[ParameterInfo], args: &[Expr]) -> bool {
    parameters.len() == args.len()
        && parameters.iter().zip(args).all(|(param, arg)| {
            arg.value_type()
                .is_none_or(|ty| ty == param.parameter_type)
        })
}

/// Resolves selector expressions to member handles
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberResolver {
    options: SelectOptions,
}

impl MemberResolver {
    /// Create a resolver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the given options
    pub fn with_options(options: SelectOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    // ========================================================================
    // Public entry points
    // ========================================================================

    /// Resolve the field or property an instance selector reads
    pub fn resolve<'a, T: Reflect>(
        &self,
        selector: impl Into<Option<&'a Selector<T>>>,
    ) -> SelectResult<MemberInfo> {
        let selector = require(selector.into())?;
        let lambda = selector.lambda();
        self.logged(lambda, |this| {
            let carrier = this.carrier::<T>(lambda)?;
            this.data_member(lambda, Form::Instance(carrier))
        })
    }

    /// Resolve the static field or property a zero-argument selector reads
    pub fn resolve_static<'a>(
        &self,
        selector: impl Into<Option<&'a StaticSelector>>,
    ) -> SelectResult<MemberInfo> {
        let selector = require(selector.into())?;
        let lambda = selector.lambda();
        self.logged(lambda, |this| {
            this.check_static(lambda)?;
            this.data_member(lambda, Form::Static)
        })
    }

    /// Resolve an untyped lambda
    ///
    /// A one-parameter lambda is resolved in instance form with the
    /// parameter's own type as carrier; a parameterless lambda in static
    /// form. The body may be a member access, method call, or constructor
    /// call.
    pub fn resolve_lambda(&self, lambda: Option<&Lambda>) -> SelectResult<MemberInfo> {
        let lambda = require(lambda)?;
        self.logged(lambda, |this| {
            let form = match lambda.parameters.as_slice() {
                [] => Form::Static,
                [param] => Form::Instance(param),
                params => {
                    return Err(ShapeError::ParameterCountMismatch {
                        expected: 1,
                        found: params.len(),
                    }
                    .into())
                }
            };
            match this.body(lambda) {
                Expr::Call { .. } => this.method_call(lambda, form).map(MemberInfo::from),
                Expr::New { .. } => this.constructor_call(lambda).map(MemberInfo::from),
                _ => this.data_member(lambda, form),
            }
        })
    }

    // ========================================================================
    // Form checks
    // ========================================================================

    /// Check that the lambda has exactly one parameter typed by `T`
    pub(crate) fn carrier<'l, T: Reflect>(
        &self,
        lambda: &'l Lambda,
    ) -> SelectResult<&'l ParameterExpr> {
        match lambda.parameters.as_slice() {
            [param] => {
                let expected = T::type_info();
                if param.ty == expected {
                    Ok(param)
                } else {
                    Err(ShapeError::NotOnCarrier {
                        expected: format!("a parameter of type `{}`", expected),
                        found: param.to_string(),
                    }
                    .into())
                }
            }
            params => Err(ShapeError::ParameterCountMismatch {
                expected: 1,
                found: params.len(),
            }
            .into()),
        }
    }

    /// Check that the lambda takes no parameters
    pub(crate) fn check_static(&self, lambda: &Lambda) -> SelectResult<()> {
        if lambda.parameters.is_empty() {
            Ok(())
        } else {
            Err(ShapeError::ParameterCountMismatch {
                expected: 0,
                found: lambda.parameters.len(),
            }
            .into())
        }
    }

    fn body<'l>(&self, lambda: &'l Lambda) -> &'l Expr {
        if self.options.strip_conversions {
            lambda.body.strip_conversions()
        } else {
            &lambda.body
        }
    }

    /// Type the member is read off, checking the target matches the form
    fn owner<'e>(&self, target: &'e Expr, form: Form<'_>) -> SelectResult<&'e TypeInfo> {
        match (form, target) {
            (Form::Instance(carrier), Expr::Parameter(param)) if param == carrier => Ok(&param.ty),
            (Form::Static, Expr::Type(ty)) => Ok(ty),
            (Form::Instance(carrier), other) => Err(ShapeError::NotOnCarrier {
                expected: format!("a member of `{}`", carrier.name),
                found: other.to_string(),
            }
            .into()),
            (Form::Static, other) => Err(ShapeError::NotOnCarrier {
                expected: "a member of a type".to_string(),
                found: other.to_string(),
            }
            .into()),
        }
    }

    fn check_binding(&self, member: &str, is_static: bool, form: Form<'_>) -> SelectResult<()> {
        let found = Binding::of(is_static);
        let expected = form.binding();
        if found == expected {
            Ok(())
        } else {
            Err(ShapeError::StaticMismatch {
                member: member.to_string(),
                expected,
                found,
            }
            .into())
        }
    }

    fn methods<'t>(&self, owner: &'t TypeInfo, name: &'t str) -> Vec<&'t MethodInfo> {
        match self.options.lookup {
            MemberLookup::Hierarchy => owner.get_methods(name),
            MemberLookup::DeclaredOnly => owner.declared_methods(name).collect(),
        }
    }

    fn find_data_member(&self, owner: &TypeInfo, name: &str) -> Option<MemberInfo> {
        match self.options.lookup {
            MemberLookup::Hierarchy => owner.get_data_member(name),
            MemberLookup::DeclaredOnly => owner.declared_data_member(name),
        }
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// `x.member` or `Type.member`
    pub(crate) fn data_member(&self, lambda: &Lambda, form: Form<'_>) -> SelectResult<MemberInfo> {
        let body = self.body(lambda);
        let Expr::Member { target, member } = body else {
            return Err(not_member_access("a plain member access", body));
        };
        let owner = self.owner(target, form)?;

        let Some(found) = self.find_data_member(owner, member) else {
            if !self.methods(owner, member).is_empty() {
                return Err(ShapeError::WrongMemberKind {
                    member: member.clone(),
                    expected: "field or property".to_string(),
                    found: MemberKind::Method,
                }
                .into());
            }
            return Err(ShapeError::UnknownMember {
                ty: owner.type_ref.clone(),
                member: member.clone(),
            }
            .into());
        };

        self.check_binding(member, found.is_static(), form)?;
        Ok(found)
    }

    /// `x.method(args)` or `Type.method(args)`
    pub(crate) fn method_call(&self, lambda: &Lambda, form: Form<'_>) -> SelectResult<MethodInfo> {
        let body = self.body(lambda);
        let Expr::Call {
            target,
            method,
            args,
        } = body
        else {
            return Err(not_member_access("a method call", body));
        };
        let owner = self.owner(target, form)?;

        let candidates = self.methods(owner, method);
        if candidates.is_empty() {
            if let Some(data) = self.find_data_member(owner, method) {
                return Err(ShapeError::WrongMemberKind {
                    member: method.clone(),
                    expected: MemberKind::Method.to_string(),
                    found: data.kind(),
                }
                .into());
            }
            return Err(ShapeError::UnknownMember {
                ty: owner.type_ref.clone(),
                member: method.clone(),
            }
            .into());
        }

        let Some(found) = candidates
            .into_iter()
            .find(|m| signature_matches(&m.parameters, args))
        else {
            return Err(ShapeError::NoMatchingOverload {
                ty: owner.type_ref.clone(),
                member: method.clone(),
                arity: args.len(),
            }
            .into());
        };

        self.check_binding(method, found.is_static, form)?;
        Ok(found.clone())
    }

    /// `new Type(args)`; constructors are never inherited
    pub(crate) fn constructor_call(&self, lambda: &Lambda) -> SelectResult<ConstructorInfo> {
        let body = self.body(lambda);
        let Expr::New { ty, args } = body else {
            return Err(not_member_access("a constructor call", body));
        };

        ty.constructors()
            .iter()
            .find(|c| signature_matches(&c.parameters, args))
            .cloned()
            .ok_or_else(|| {
                ShapeError::NoMatchingOverload {
                    ty: ty.type_ref.clone(),
                    member: specula_meta::member::CONSTRUCTOR_NAME.to_string(),
                    arity: args.len(),
                }
                .into()
            })
    }

    /// Parameter `position` of the method or constructor the body calls
    pub(crate) fn call_parameter(
        &self,
        lambda: &Lambda,
        form: Form<'_>,
        position: usize,
    ) -> SelectResult<ParameterInfo> {
        let (member, parameters) = match self.body(lambda) {
            Expr::Call { .. } => {
                let method = self.method_call(lambda, form)?;
                (method.name, method.parameters)
            }
            Expr::New { .. } => {
                let ctor = self.constructor_call(lambda)?;
                (
                    specula_meta::member::CONSTRUCTOR_NAME.to_string(),
                    ctor.parameters,
                )
            }
            other => return Err(not_member_access("a method or constructor call", other)),
        };

        let count = parameters.len();
        parameters
            .into_iter()
            .nth(position)
            .ok_or_else(|| {
                ShapeError::ParameterOutOfRange {
                    member,
                    position,
                    count,
                }
                .into()
            })
    }

    /// Run a resolution, tracing the outcome
    pub(crate) fn logged<R>(
        &self,
        lambda: &Lambda,
        resolve: impl FnOnce(&Self) -> SelectResult<R>,
    ) -> SelectResult<R> {
        let result = resolve(self);
        match &result {
            Ok(_) => trace!(selector = %lambda, "resolved selector"),
            Err(err) => debug!(selector = %lambda, error = %err, "rejected selector"),
        }
        result
    }
}
