//! Selector expression trees
//!
//! A small, unevaluated expression language. Selectors are built once by
//! the caller and only ever inspected, never evaluated.
//!
//! ```ignore
//! // |x| x.name
//! Expr::parameter("x", Person::type_info()).member("name")
//!
//! // || Uri::SCHEME_DELIMITER
//! Expr::type_of::<Uri>().member("SCHEME_DELIMITER")
//! ```

use std::fmt;

use specula_meta::{Reflect, TypeInfo, TypeRef};

/// Lambda parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterExpr {
    /// Parameter name
    pub name: String,
    /// Parameter type
    pub ty: TypeInfo,
}

impl ParameterExpr {
    /// Create a parameter
    pub fn new(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for ParameterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// `()`
    Unit,
    /// Boolean literal
    Bool(bool),
    /// Integer literal (typed `i64`)
    Int(i64),
    /// Float literal (typed `f64`)
    Float(f64),
    /// String literal
    Str(String),
}

impl Constant {
    /// Static type of the literal
    pub fn type_ref(&self) -> TypeRef {
        match self {
            Constant::Unit => TypeRef::of::<()>(),
            Constant::Bool(_) => TypeRef::of::<bool>(),
            Constant::Int(_) => TypeRef::of::<i64>(),
            Constant::Float(_) => TypeRef::of::<f64>(),
            Constant::Str(_) => TypeRef::of::<String>(),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Unit => write!(f, "()"),
            Constant::Bool(b) => write!(f, "{}", b),
            Constant::Int(i) => write!(f, "{}", i),
            Constant::Float(x) => write!(f, "{:?}", x),
            Constant::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<()> for Constant {
    fn from(_: ()) -> Self {
        Constant::Unit
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Bool(value)
    }
}

impl From<i32> for Constant {
    fn from(value: i32) -> Self {
        Constant::Int(value.into())
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Constant::Int(value)
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant::Float(value)
    }
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::Str(value.to_string())
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::Str(value)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a lambda parameter
    Parameter(ParameterExpr),
    /// Reference to a type, the target of static member access
    Type(TypeInfo),
    /// Literal value
    Constant(Constant),
    /// Field or property read
    Member {
        /// Object (or type) the member is read from
        target: Box<Expr>,
        /// Member name
        member: String,
    },
    /// Method call
    Call {
        /// Object (or type) the method is called on
        target: Box<Expr>,
        /// Method name
        method: String,
        /// Arguments
        args: Vec<Expr>,
    },
    /// Constructor call
    New {
        /// Type being constructed
        ty: TypeInfo,
        /// Arguments
        args: Vec<Expr>,
    },
    /// Implicit conversion (boxing or widening)
    Convert {
        /// Converted expression
        operand: Box<Expr>,
        /// Target type
        to: TypeRef,
    },
    /// Binary operation
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        lhs: Box<Expr>,
        /// Right operand
        rhs: Box<Expr>,
    },
    /// Indexing
    Index {
        /// Indexed expression
        target: Box<Expr>,
        /// Index
        index: Box<Expr>,
    },
}

impl Expr {
    // ========================================================================
    // Leaf constructors
    // ========================================================================

    /// Reference a lambda parameter
    pub fn parameter(name: impl Into<String>, ty: TypeInfo) -> Self {
        Expr::Parameter(ParameterExpr::new(name, ty))
    }

    /// Reference a reflected type
    pub fn type_of<T: Reflect>() -> Self {
        Expr::Type(T::type_info())
    }

    /// Literal value
    pub fn constant(value: impl Into<Constant>) -> Self {
        Expr::Constant(value.into())
    }

    /// Constructor call on a reflected type
    pub fn new_object<T: Reflect>(args: Vec<Expr>) -> Self {
        Expr::New {
            ty: T::type_info(),
            args,
        }
    }

    // ========================================================================
    // Chaining
    // ========================================================================

    /// Read a field or property
    pub fn member(self, member: impl Into<String>) -> Self {
        Expr::Member {
            target: Box::new(self),
            member: member.into(),
        }
    }

    /// Call a method
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: Box::new(self),
            method: method.into(),
            args,
        }
    }

    /// Convert to another type
    pub fn convert(self, to: TypeRef) -> Self {
        Expr::Convert {
            operand: Box::new(self),
            to,
        }
    }

    /// Convert to a reflected type
    pub fn convert_to<T: Reflect>(self) -> Self {
        self.convert(TypeRef::of::<T>())
    }

    /// Combine with another expression
    pub fn binary(self, op: BinaryOp, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    /// Index into the expression
    pub fn index(self, index: Expr) -> Self {
        Expr::Index {
            target: Box::new(self),
            index: Box::new(index),
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Human-readable name of the node kind
    pub fn node_kind(&self) -> &'static str {
        match self {
            Expr::Parameter(_) => "parameter",
            Expr::Type(_) => "type reference",
            Expr::Constant(_) => "constant",
            Expr::Member { .. } => "member access",
            Expr::Call { .. } => "method call",
            Expr::New { .. } => "constructor call",
            Expr::Convert { .. } => "conversion",
            Expr::Binary { .. } => "binary expression",
            Expr::Index { .. } => "index expression",
        }
    }

    /// Skip any conversion nodes wrapping this expression
    pub fn strip_conversions(&self) -> &Expr {
        let mut current = self;
        while let Expr::Convert { operand, .. } = current {
            current = operand;
        }
        current
    }

    /// Statically known type of the expression, when it needs no lookup
    pub fn value_type(&self) -> Option<TypeRef> {
        match self {
            Expr::Parameter(p) => Some(p.ty.type_ref.clone()),
            Expr::Constant(c) => Some(c.type_ref()),
            Expr::New { ty, .. } => Some(ty.type_ref.clone()),
            Expr::Convert { to, .. } => Some(to.clone()),
            _ => None,
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Parameter(p) => write!(f, "{}", p.name),
            Expr::Type(ty) => write!(f, "{}", ty.name()),
            Expr::Constant(c) => write!(f, "{}", c),
            Expr::Member { target, member } => write!(f, "{}.{}", target, member),
            Expr::Call {
                target,
                method,
                args,
            } => {
                write!(f, "{}.{}(", target, method)?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Expr::New { ty, args } => {
                write!(f, "new {}(", ty.name())?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Expr::Convert { operand, to } => write!(f, "({} as {})", operand, to),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::Index { target, index } => write!(f, "{}[{}]", target, index),
        }
    }
}

/// Lambda expression: parameters and a body
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    /// Declared parameters
    pub parameters: Vec<ParameterExpr>,
    /// Body
    pub body: Expr,
}

impl Lambda {
    /// Create a lambda
    pub fn new(parameters: Vec<ParameterExpr>, body: Expr) -> Self {
        Self { parameters, body }
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name)?;
        }
        write!(f, "| {}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specula_meta::TypeBuilder;

    fn widget() -> TypeInfo {
        TypeBuilder::class("Widget").assembly("ui").build()
    }

    #[test]
    fn test_display() {
        let x = Expr::parameter("x", widget());
        assert_eq!(x.clone().member("size").to_string(), "x.size");
        assert_eq!(
            x.clone()
                .call("resize", vec![Expr::constant(2), Expr::constant("wide")])
                .to_string(),
            "x.resize(2, \"wide\")"
        );
        assert_eq!(
            x.clone()
                .member("size")
                .binary(BinaryOp::Add, Expr::constant(1))
                .to_string(),
            "(x.size + 1)"
        );
        assert_eq!(
            x.clone().member("items").index(Expr::constant(0)).to_string(),
            "x.items[0]"
        );
        assert_eq!(
            x.member("size").convert_to::<f64>().to_string(),
            "(x.size as f64)"
        );
        assert_eq!(
            Expr::New {
                ty: widget(),
                args: vec![Expr::constant(true)]
            }
            .to_string(),
            "new Widget(true)"
        );
    }

    #[test]
    fn test_strip_conversions() {
        let read = Expr::parameter("x", widget()).member("size");
        let boxed = read
            .clone()
            .convert_to::<i64>()
            .convert(TypeRef::primitive("object"));

        assert_eq!(boxed.strip_conversions(), &read);
        assert_eq!(read.strip_conversions(), &read);
    }

    #[test]
    fn test_node_kind_and_value_type() {
        let x = Expr::parameter("x", widget());
        assert_eq!(x.node_kind(), "parameter");
        assert_eq!(x.value_type(), Some(TypeRef::new("ui", "Widget")));
        assert_eq!(Expr::constant(1.5).value_type(), Some(TypeRef::of::<f64>()));
        assert_eq!(x.clone().member("size").value_type(), None);
        assert_eq!(x.call("show", vec![]).node_kind(), "method call");
    }

    #[test]
    fn test_lambda_display() {
        let x = ParameterExpr::new("x", widget());
        let lambda = Lambda::new(vec![x.clone()], Expr::Parameter(x).member("size"));
        assert_eq!(lambda.to_string(), "|x| x.size");

        let unit = Lambda::new(Vec::new(), Expr::constant(()));
        assert_eq!(unit.to_string(), "|| ()");
    }
}
