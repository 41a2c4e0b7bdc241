//! # Symbolic Engine Module
//!
//! A deliberately small symbolic layer: one-variable real expressions that the
//! numerical routines evaluate point by point.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "x"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, etc. - elementary functions
//!
//! ### Key Methods
//! - `parse_expression(input)` - text to expression (see `parse_expr`)
//! - `eval_at(var, value)` - checked evaluation (see `symbolic_eval`)
//! - `all_arguments_are_variables()` - sorted, deduplicated variable names
//!
//! `Display` prints every binary node in brackets, so the printed form parses back
//! into an equal tree. Trigonometric names follow the mathematical notation
//! (tg, ctg, arctg, arcctg).

#![allow(non_camel_case_types)]

use std::fmt;

/// The variable every one-dimensional method is written in.
pub const DEFAULT_VARIABLE: &str = "x";

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedNumCalc::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    /// Tangent
    tg(Box<Expr>),
    /// Cotangent
    ctg(Box<Expr>),
    arcsin(Box<Expr>),
    arccos(Box<Expr>),
    /// Arctangent
    arctg(Box<Expr>),
    /// Arccotangent
    arcctg(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
            Expr::arcctg(expr) => write!(f, "arcctg({})", expr),
        }
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Builds a one-argument function node from its textual name.
    ///
    /// Both the mathematical (tg, arctg) and the programming (tan, atan) spellings
    /// are accepted; `sqrt` becomes a power of one half. Returns `None` for an
    /// unknown name.
    pub fn function_from_name(name: &str, arg: Expr) -> Option<Expr> {
        let arg = arg.boxed();
        let expr = match name {
            "exp" => Expr::Exp(arg),
            "ln" | "log" => Expr::Ln(arg),
            "sqrt" => Expr::Pow(arg, Box::new(Expr::Const(0.5))),
            "sin" => Expr::sin(arg),
            "cos" => Expr::cos(arg),
            "tg" | "tan" => Expr::tg(arg),
            "ctg" | "cot" => Expr::ctg(arg),
            "arcsin" | "asin" => Expr::arcsin(arg),
            "arccos" | "acos" => Expr::arccos(arg),
            "arctg" | "arctan" | "atan" => Expr::arctg(arg),
            "arcctg" | "acot" => Expr::arcctg(arg),
            _ => return None,
        };
        Some(expr)
    }

    /// Extracts all unique variable names, sorted alphabetically.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + y*z + x").unwrap();
    /// assert_eq!(expr.all_arguments_are_variables(), vec!["x", "y", "z"]);
    /// ```
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => vars.push(name.clone()),
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctg(expr)
            | Expr::arcctg(expr) => expr.collect_variables(vars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg_is_multiplication_by_minus_one() {
        let x = Expr::Var("x".to_string());
        assert_eq!(
            -x.clone(),
            Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(x))
        );
    }

    #[test]
    fn test_all_arguments_are_variables_sorted_and_unique() {
        let x = Expr::Var("x".to_string());
        let z = Expr::Var("z".to_string());
        let y = Expr::Var("y".to_string());
        // z*x + cos(y) - x
        let product = Expr::Mul(z.boxed(), x.clone().boxed());
        let sum = Expr::Add(product.boxed(), Expr::cos(y.boxed()).boxed());
        let expr = Expr::Sub(sum.boxed(), x.boxed());
        assert_eq!(expr.all_arguments_are_variables(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_function_from_name() {
        let x = Expr::Var("x".to_string());
        assert_eq!(
            Expr::function_from_name("tan", x.clone()),
            Some(Expr::tg(x.clone().boxed()))
        );
        assert_eq!(
            Expr::function_from_name("sqrt", x.clone()),
            Some(x.clone().pow(Expr::Const(0.5)))
        );
        assert_eq!(Expr::function_from_name("sinh", x), None);
    }
}
