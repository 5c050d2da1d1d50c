use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
    fn to_sexpr(&self) -> String {
        self.value.to_string()
    }
}

/// Error Expression
/// Placeholder produced when no valid expression could be parsed. Carries
/// no data beyond its span; the parser records the diagnostic separately.
#[derive(Debug, Clone)]
pub struct ErrorExpr {
    pub span: Span,
}

impl Expr for ErrorExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Error
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
    fn to_sexpr(&self) -> String {
        String::from("<error>")
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(PrefixExpr {
            operator: self.operator.clone(),
            right_expr: self.right_expr.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
    fn to_sexpr(&self) -> String {
        format!("({} {})", self.operator.value, self.right_expr.to_sexpr())
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
    fn to_sexpr(&self) -> String {
        format!(
            "({} {} {})",
            self.operator.value,
            self.left.to_sexpr(),
            self.right.to_sexpr()
        )
    }
}

/// Ternary Expression
/// Represents a conditional `condition ? then : else` in the AST.
#[derive(Debug)]
pub struct TernaryExpr {
    pub condition: ExprWrapper,
    pub then_branch: ExprWrapper,
    pub else_branch: ExprWrapper,
    pub span: Span,
}

impl Expr for TernaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Ternary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(TernaryExpr {
            condition: self.condition.clone_wrapper(),
            then_branch: self.then_branch.clone_wrapper(),
            else_branch: self.else_branch.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
    fn to_sexpr(&self) -> String {
        format!(
            "(? {} {} {})",
            self.condition.to_sexpr(),
            self.then_branch.to_sexpr(),
            self.else_branch.to_sexpr()
        )
    }
}
