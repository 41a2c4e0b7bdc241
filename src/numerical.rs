/// the function abstraction every method is written against: symbolic expressions
/// parsed from text or plain Rust closures
pub mod evaluator;
/// FailureReason, per-method answers and the tagged MethodResult
pub mod method_result;
/// linspace, string_to_list, absolute
pub mod sampling;
///  Example#1
/// ```
/// use RustedNumCalc::numerical::evaluator::SymbolicFunction;
/// use RustedNumCalc::numerical::root_finding::bisection_method;
/// // root of x - 2 bracketed by [0, 5]
/// let f = SymbolicFunction::from_string("x - 2").unwrap();
/// let root = bisection_method(&f, 0.0, 5.0, 1e-6, 100).unwrap();
/// println!("{}", root);
/// assert!((root.value - 2.0).abs() < 1e-6);
/// ```
/// Example#2
/// ```
/// use RustedNumCalc::numerical::evaluator::SymbolicFunction;
/// use RustedNumCalc::numerical::root_finding::fixed_point_iteration;
/// // cos(p) = p
/// let g = SymbolicFunction::from_string("cos(x)").unwrap();
/// let fixed_point = fixed_point_iteration(&g, 0.5, 1e-6, 100).unwrap();
/// assert!((fixed_point.value - 0.739085).abs() < 1e-5);
/// ```
pub mod root_finding;
/// ```
/// use RustedNumCalc::numerical::interpolation::lagrange_polynomial;
/// let poly = lagrange_polynomial(&[1.0, 4.0, 9.0], &[1.0, 2.0, 3.0]).unwrap();
/// println!("P(x) = {}", poly);
/// assert!((poly.evaluate_at(2.0).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub mod interpolation;
/// three point midpoint and endpoint formulas
/// ```
/// use RustedNumCalc::numerical::differentiation::three_point_midpoint_derivative;
/// let d = three_point_midpoint_derivative(&[1.0, 4.0, 9.0], &[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(d.estimate, 4.0);
/// ```
pub mod differentiation;
/// composite Simpson's and trapezoidal rules
/// ```
/// use RustedNumCalc::numerical::evaluator::ClosureFunction;
/// use RustedNumCalc::numerical::quadrature::composite_trapezoidal_rule;
/// let f = ClosureFunction::new(|x| x, "x".to_string());
/// let integral = composite_trapezoidal_rule(&f, 0.0, 1.0, 10).unwrap();
/// assert!((integral.value - 0.5).abs() < 1e-9);
/// ```
pub mod quadrature;
