//! examples of usage of RustedNumCalc
/// root finding, interpolation, differentiation, integration, method table and task examples
pub mod numerical_examples;
