#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Symbolic engine
/// the expression tree every numerical method evaluates
///# Example
/// ```
/// use RustedNumCalc::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let f = Expr::Sub(x.pow(Expr::Const(2.0)).boxed(), Expr::Const(2.0).boxed());
/// println!("f = {}", f);
/// assert_eq!(f.all_arguments_are_variables(), vec!["x"]);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedNumCalc::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 - 4").unwrap();
/// println!("parsed_expression {}", parsed_expression);
/// ```
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// checked evaluation of an expression at a point
///# Example
/// ```
/// use RustedNumCalc::symbolic::symbolic_engine::Expr;
/// use RustedNumCalc::symbolic::symbolic_eval::EvaluationError;
/// let f = Expr::parse_expression("1/x").unwrap();
/// assert_eq!(f.eval_at("x", 4.0), Ok(0.25));
/// assert_eq!(f.eval_at("x", 0.0), Err(EvaluationError::DivisionByZero));
/// ```
pub mod symbolic_eval;
