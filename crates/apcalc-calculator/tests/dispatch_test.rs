use apcalc_calculator::{CalcError, Calculator, Functions, Number, Representation, fixed_function};

fn int(n: i64) -> Number {
    Number::from(n)
}

fn ratio(n: i64, d: i64) -> Number {
    Number::ratio(n, d).unwrap()
}

fn assert_close(value: &Number, expected: f64) {
    let actual = value.to_f64().unwrap();
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn adds_two_integers() {
    let calculator = Calculator::new();
    assert_eq!(calculator.function("add", &[int(1), int(2)]), Ok(int(3)));
}

#[test]
fn unknown_function_names_the_missing_function() {
    let calculator = Calculator::new();
    let error = calculator.function("doesNotExist", &[]).unwrap_err();
    assert!(matches!(error, CalcError::UnknownFunction { .. }));
    assert!(error.to_string().contains("doesNotExist"));
}

#[test]
fn function_names_are_case_sensitive() {
    let calculator = Calculator::new();
    let error = calculator.function("Add", &[int(1), int(2)]).unwrap_err();
    assert_eq!(error.category(), "unknown_function");
}

#[test]
fn every_fixed_arity_function_rejects_other_counts() {
    let calculator = Calculator::new();
    for (name, arity) in calculator.signatures().into_iter().filter(|(_, a)| a.is_fixed()) {
        for count in (0..=arity.max() + 1).filter(|c| *c != arity.min()) {
            let arguments = vec![int(1); count];
            let error = calculator.function(name, &arguments).unwrap_err();
            assert!(
                matches!(error, CalcError::ArityMismatch { actual, .. } if actual == count),
                "{name} with {count} arguments: {error}"
            );
        }
    }
}

#[test]
fn ranged_functions_reject_counts_outside_their_window() {
    let calculator = Calculator::new();
    for (name, arity) in calculator.signatures().into_iter().filter(|(_, a)| !a.is_fixed()) {
        let window = format!("{} to {} arguments", arity.min(), arity.max());
        for count in [arity.min() - 1, arity.max() + 1] {
            let message = calculator.function(name, &vec![int(1); count]).unwrap_err().to_string();
            assert!(message.contains(&window), "{name}: {message}");
        }
    }
}

#[test]
fn gamma_accepts_one_to_three_arguments() {
    let calculator = Calculator::new();
    assert_eq!(calculator.function("gamma", &[int(5)]), Ok(int(24)));

    let upper = calculator.function("gamma", &[int(2), int(0)]).unwrap();
    assert_close(&upper, 1.0);

    // Γ(2, 0) - Γ(2, 1) = 1 - 2/e
    let generalized = calculator.function("gamma", &[int(2), int(0), int(1)]).unwrap();
    assert_close(&generalized, 1.0 - 2.0 / std::f64::consts::E);

    let error = calculator.function("gamma", &[int(1), int(2), int(3), int(4)]).unwrap_err();
    assert_eq!(error.to_string(), "Function gamma takes 1 to 3 arguments, not 4");
    let error = calculator.function("gamma", &[]).unwrap_err();
    assert!(error.to_string().contains("1 to 3 arguments"));
}

#[test]
fn log_with_and_without_a_base() {
    let calculator = Calculator::new();
    let natural = calculator.function("log", &[Number::Float(std::f64::consts::E)]).unwrap();
    assert_close(&natural, 1.0);
    let binary = calculator.function("log", &[int(8), int(2)]).unwrap();
    assert_close(&binary, 3.0);
    assert_eq!(binary.representation(), Representation::Float);
}

#[test]
fn precision_is_called_as_n_and_reports_its_own_name() {
    let calculator = Calculator::new();
    let value = calculator.function("n", &[ratio(1, 3), int(3)]).unwrap();
    assert_eq!(value, Number::Float(0.333));

    let error = calculator.function("n", &[int(1)]).unwrap_err();
    assert_eq!(error.to_string(), "Function precision takes 2 arguments, not 1");
    assert!(calculator.function("precision", &[int(1), int(2)]).is_err());
}

#[test]
fn mixed_arguments_use_the_widest_family() {
    let calculator = Calculator::new();
    assert_eq!(calculator.function("add", &[int(1), Number::Float(0.5)]), Ok(Number::Float(1.5)));
    assert_eq!(
        calculator.function("add", &[ratio(1, 2), Number::complex(0.0, 1.0)]),
        Ok(Number::complex(0.5, 1.0))
    );
    assert_eq!(calculator.function("divide", &[int(1), int(3)]), Ok(ratio(1, 3)));
}

#[test]
fn results_are_promoted_to_the_narrowest_representation() {
    let calculator = Calculator::new();
    let i = Number::complex(0.0, 1.0);
    assert_eq!(calculator.function("multiply", &[i.clone(), i]), Ok(Number::Float(-1.0)));
    assert_eq!(calculator.function("add", &[ratio(1, 2), ratio(1, 2)]), Ok(int(1)));
    assert_eq!(calculator.function("sqrt", &[int(4)]), Ok(int(2)));
}

#[test]
fn real_functions_escape_to_complex_results() {
    let calculator = Calculator::new();
    let root = calculator.function("sqrt", &[int(-4)]).unwrap();
    let Number::Complex(c) = root else { panic!("expected a complex root, got {root}") };
    assert!(c.re.abs() < 1e-12);
    assert!((c.im - 2.0).abs() < 1e-12);
}

#[test]
fn evaluation_errors_reach_the_caller_unchanged() {
    let calculator = Calculator::new();
    assert_eq!(
        calculator.function("divide", &[int(1), int(0)]),
        Err(CalcError::division_by_zero("divide"))
    );
    let error = calculator.function("floor", &[Number::complex(1.0, 1.0)]).unwrap_err();
    assert!(matches!(error, CalcError::NotSupported { .. }));
    assert!(!error.is_dispatch_error());
}

fn seven(_: &dyn Functions, _: &[Number]) -> Result<Number, CalcError> {
    Ok(int(7))
}

#[test]
fn zero_argument_call_has_no_implementation() {
    let mut calculator = Calculator::new();
    calculator.set_function("seven", Box::new(fixed_function("seven", 0, seven)));
    let error = calculator.function("seven", &[]).unwrap_err();
    assert!(matches!(error, CalcError::NoImplementation { .. }));

    let error = calculator.function("seven", &[int(1)]).unwrap_err();
    assert_eq!(error.to_string(), "Function seven takes 0 arguments, not 1");
}

#[test]
fn arity_is_checked_before_the_handler_runs() {
    let mut calculator = Calculator::new();
    calculator.set_function(
        "strict",
        Box::new(fixed_function("strict", 2, |_, _| panic!("handler must not run"))),
    );
    let error = calculator.function("strict", &[int(1)]).unwrap_err();
    assert_eq!(error.category(), "arity");
}

#[test]
fn calls_can_run_from_several_threads() {
    let calculator = Calculator::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let calculator = &calculator;
                scope.spawn(move || calculator.function("multiply", &[int(n), int(n)]))
            })
            .collect();
        for (n, handle) in handles.into_iter().enumerate() {
            let n = n as i64;
            assert_eq!(handle.join().unwrap(), Ok(int(n * n)));
        }
    });
}
