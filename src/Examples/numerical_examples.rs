use crate::Utils::method_table::NumericalMethod;
use crate::Utils::task_parser::Task;
use crate::numerical::differentiation::{
    three_point_endpoint_derivative, three_point_midpoint_derivative,
};
use crate::numerical::evaluator::{ClosureFunction, SymbolicFunction};
use crate::numerical::interpolation::{lagrange_interpolate, lagrange_polynomial};
use crate::numerical::method_result::MethodResult;
use crate::numerical::quadrature::{composite_simpsons_rule, composite_trapezoidal_rule};
use crate::numerical::root_finding::{bisection_method, fixed_point_iteration};
use crate::numerical::sampling::{linspace, string_to_list};
use crate::symbolic::symbolic_engine::Expr;

/// number of examples `numerical_examples` knows
pub const NUMBER_OF_EXAMPLES: usize = 9;

#[allow(dead_code)]
pub fn numerical_examples(example: usize) {
    match example {
        0 => {
            // ROOT FINDING
            // bisection needs a sign change on [a, b]
            let input = "sin(x) + 3*x**2 + 13 / (x - 2)";
            let f = match SymbolicFunction::from_string(input) {
                Ok(f) => f,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            // f(0) = -6.5 and f(1) = -9.16 have the same sign
            let result: MethodResult = bisection_method(&f, 0.0, 1.0, 1e-6, 100).into();
            println!("{} on [0, 1]: {}", input, result);
            // x - 2 has its root at 2
            let g = ClosureFunction::new(|x| x - 2.0, "x - 2".to_string());
            match bisection_method(&g, 0.0, 5.0, 1e-6, 100) {
                Ok(root) => println!(
                    "{} ({} iterations, f = {:e})",
                    root, root.iterations, root.function_value
                ),
                Err(e) => println!("{}", e),
            }
        }
        1 => {
            // FIXED POINT ITERATION
            // cos(p) = p near 0.739085
            let g = match SymbolicFunction::from_string("cos(x)") {
                Ok(g) => g,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            let result: MethodResult = fixed_point_iteration(&g, 0.5, 1e-6, 100).into();
            println!("{}", result);
            // 2x moves away from its fixed point 0, the iteration runs out of steps
            let h = ClosureFunction::new(|x| 2.0 * x, "2x".to_string());
            let result: MethodResult = fixed_point_iteration(&h, 1.0, 1e-6, 20).into();
            println!("{}", result);
        }
        2 => {
            // LAGRANGE POLYNOMIAL
            let f_values = vec![1.0, 4.0, 9.0];
            let x_values = vec![1.0, 2.0, 3.0];
            match lagrange_polynomial(&f_values, &x_values) {
                Ok(poly) => {
                    println!("P(x) = {}", poly);
                    // the text is an expression and can be evaluated again
                    for x in linspace(1.0, 3.0, 4) {
                        println!(
                            "P({}) = {:?}, numeric interpolant = {:?}",
                            x,
                            poly.evaluate_at(x),
                            lagrange_interpolate(&f_values, &x_values, x)
                        );
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        3 => {
            // THREE POINT DERIVATIVES from tabulated values
            let f_values = string_to_list("1 4 9");
            let x_values = string_to_list("0 1 2");
            if let (Ok(f_values), Ok(x_values)) = (f_values, x_values) {
                let midpoint: MethodResult =
                    three_point_midpoint_derivative(&f_values, &x_values).into();
                let endpoint: MethodResult =
                    three_point_endpoint_derivative(&f_values, &x_values).into();
                println!("midpoint: {}\nendpoint: {}", midpoint, endpoint);
            }
            // spacing is checked exactly
            let result: MethodResult =
                three_point_midpoint_derivative(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3]).into();
            println!("{}", result);
        }
        4 => {
            // COMPOSITE SIMPSON'S RULE
            let f = ClosureFunction::new(|x: f64| x.sin(), "sin(x)".to_string());
            for n in [2, 4, 8, 16] {
                let result: MethodResult =
                    composite_simpsons_rule(&f, 0.0, std::f64::consts::PI, n).into();
                println!("n = {}: {}", n, result);
            }
            let odd: MethodResult = composite_simpsons_rule(&f, 0.0, 1.0, 3).into();
            println!("n = 3: {}", odd);
        }
        5 => {
            // COMPOSITE TRAPEZOIDAL RULE, the sign follows the direction of the interval
            let f = match SymbolicFunction::from_string("x") {
                Ok(f) => f,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            let forward: MethodResult = composite_trapezoidal_rule(&f, 0.0, 1.0, 10).into();
            let backward: MethodResult = composite_trapezoidal_rule(&f, 1.0, 0.0, 10).into();
            println!("from 0 to 1: {}\nfrom 1 to 0: {}", forward, backward);
        }
        6 => {
            // METHOD TABLE: text inputs in, tagged result out
            for method in [NumericalMethod::Bisection, NumericalMethod::Simpson] {
                println!("{}", method.usage());
            }
            let inputs: Vec<String> = ["exp(-x^2)", "-1", "1", "10"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            println!("{}", NumericalMethod::Simpson.run(&inputs));
        }
        7 => {
            // SYMBOLIC LAYER
            let expr = match Expr::parse_expression("3*x**2 - ln(x) + tg(x)") {
                Ok(expr) => expr,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            println!("parsed expression {}", expr);
            println!("variables {:?}", expr.all_arguments_are_variables());
            println!("value at 1: {:?}", expr.eval_at("x", 1.0));
            println!("value at -1: {:?}", expr.eval_at("x", -1.0));
        }
        8 => {
            // TASK DOCUMENT
            let document = r#"
            // composite trapezoidal rule for exp(x) on [0, 1]
            task
            method: trapezoidal
            function: exp(x)
            a: 0
            b: 1
            n: 100
            settings
            loglevel: info
            "#;
            match Task::from_document(document).and_then(|task| task.run()) {
                Ok(result) => println!("{}", result),
                Err(e) => println!("{}", e),
            }
        }
        _ => {
            println!("no example {}, choose 0..{}", example, NUMBER_OF_EXAMPLES - 1);
        }
    }
}
