use apcalc_calculator::{Arity, CalcError, Calculator, CalculatorConfig, Number};
use std::f64::consts::PI;

fn int(n: i64) -> Number {
    Number::from(n)
}

fn ratio(n: i64, d: i64) -> Number {
    Number::ratio(n, d).unwrap()
}

fn call(calculator: &Calculator, name: &str, arguments: &[Number]) -> Number {
    calculator
        .function(name, arguments)
        .unwrap_or_else(|e| panic!("{name} failed: {e}"))
}

fn approx(value: &Number) -> f64 {
    value.to_f64().unwrap()
}

fn seeded(seed: u64) -> Calculator {
    Calculator::with_config(CalculatorConfig { random_seed: Some(seed), ..CalculatorConfig::default() })
}

#[test]
fn registration_table_matches_the_published_signatures() {
    let calculator = Calculator::new();
    let expected = [
        ("add", Arity::exact(2)),
        ("subtract", Arity::exact(2)),
        ("multiply", Arity::exact(2)),
        ("divide", Arity::exact(2)),
        ("mod", Arity::exact(2)),
        ("pow", Arity::exact(2)),
        ("negate", Arity::exact(1)),
        ("abs", Arity::exact(1)),
        ("sqrt", Arity::exact(1)),
        ("cbrt", Arity::exact(1)),
        ("exp", Arity::exact(1)),
        ("log", Arity::range(1, 2)),
        ("gamma", Arity::range(1, 3)),
        ("logGamma", Arity::exact(1)),
        ("factorial", Arity::exact(1)),
        ("binomial", Arity::exact(2)),
        ("zeta", Arity::range(1, 2)),
        ("root", Arity::range(2, 3)),
        ("inverseRoot", Arity::range(2, 3)),
        ("gcd", Arity::exact(2)),
        ("lcm", Arity::exact(2)),
        ("hypot", Arity::exact(2)),
        ("atan2", Arity::exact(2)),
        ("agm", Arity::exact(2)),
        ("w", Arity::range(1, 2)),
        ("hypergeometric0F1", Arity::exact(2)),
        ("hypergeometric1F1", Arity::exact(3)),
        ("hypergeometric2F1", Arity::exact(4)),
        ("round", Arity::exact(2)),
        ("n", Arity::exact(2)),
    ];
    for (name, arity) in expected {
        assert_eq!(calculator.signature(name), Some(arity), "{name}");
    }
    assert_eq!(calculator.signatures().len(), 76);
}

#[test]
fn exact_arithmetic_on_integers_and_fractions() {
    let calculator = Calculator::new();
    assert_eq!(call(&calculator, "subtract", &[ratio(1, 2), ratio(1, 3)]), ratio(1, 6));
    assert_eq!(call(&calculator, "mod", &[int(-7), int(3)]), int(-1));
    assert_eq!(call(&calculator, "pow", &[int(2), int(10)]), int(1024));
    assert_eq!(call(&calculator, "pow", &[int(2), int(-2)]), ratio(1, 4));
    assert_eq!(call(&calculator, "pow", &[int(4), ratio(3, 2)]), int(8));
    assert_eq!(call(&calculator, "negate", &[ratio(2, 5)]), ratio(-2, 5));
    assert_eq!(call(&calculator, "abs", &[int(-9)]), int(9));
}

#[test]
fn roots_are_exact_when_possible() {
    let calculator = Calculator::new();
    assert_eq!(call(&calculator, "cbrt", &[int(-8)]), int(-2));
    assert_eq!(call(&calculator, "root", &[int(81), int(4)]), int(3));
    assert_eq!(call(&calculator, "inverseRoot", &[int(9), int(2)]), ratio(1, 3));
    assert_eq!(call(&calculator, "sqrt", &[ratio(4, 9)]), ratio(2, 3));

    let irrational = call(&calculator, "sqrt", &[int(2)]);
    assert!((approx(&irrational) - std::f64::consts::SQRT_2).abs() < 1e-15);
}

#[test]
fn integer_functions() {
    let calculator = Calculator::new();
    assert_eq!(call(&calculator, "factorial", &[int(10)]), int(3_628_800));
    assert_eq!(call(&calculator, "binomial", &[int(10), int(3)]), int(120));
    assert_eq!(call(&calculator, "gcd", &[int(12), int(18)]), int(6));
    assert_eq!(call(&calculator, "lcm", &[int(12), int(18)]), int(36));
    assert_eq!(call(&calculator, "bernoulli", &[int(2)]), ratio(1, 6));
    assert_eq!(
        calculator.function("factorial", &[int(-1)]),
        Err(CalcError::pole("factorial"))
    );
}

#[test]
fn limits_come_from_the_configuration() {
    let config = CalculatorConfig { max_factorial: 10, ..CalculatorConfig::default() };
    let calculator = Calculator::with_config(config);
    assert_eq!(call(&calculator, "factorial", &[int(10)]), int(3_628_800));
    let error = calculator.function("factorial", &[int(11)]).unwrap_err();
    assert!(matches!(error, CalcError::LimitExceeded { setting: "max_factorial", limit: 10, .. }));
    assert_eq!(calculator.config().max_factorial, 10);
}

#[test]
fn bernoulli_is_bounded_by_its_own_limit() {
    let calculator = Calculator::new();
    assert_eq!(calculator.config().max_bernoulli, 500);
    let b200 = call(&calculator, "bernoulli", &[int(200)]);
    assert!(matches!(b200, Number::Rational(_)));
    assert!(approx(&b200) < 0.0);
    let error = calculator.function("bernoulli", &[int(501)]).unwrap_err();
    assert!(matches!(error, CalcError::LimitExceeded { setting: "max_bernoulli", limit: 500, .. }));
    let error = calculator.function("bernoulli", &[Number::Float(1e6)]).unwrap_err();
    assert!(matches!(error, CalcError::LimitExceeded { setting: "max_bernoulli", .. }));
}

#[test]
fn rounding_family() {
    let calculator = Calculator::new();
    assert_eq!(call(&calculator, "floor", &[ratio(7, 2)]), int(3));
    assert_eq!(call(&calculator, "ceil", &[ratio(7, 2)]), int(4));
    assert_eq!(call(&calculator, "truncate", &[ratio(-7, 2)]), int(-3));
    assert_eq!(call(&calculator, "floor", &[Number::Float(-0.5)]), int(-1));
    assert_eq!(
        call(&calculator, "round", &[ratio(2, 3), int(2)]),
        call(&calculator, "roundToPrecision", &[ratio(2, 3), int(2)])
    );
    assert_eq!(call(&calculator, "roundToPlaces", &[ratio(1234, 1000), int(1)]), ratio(6, 5));
}

#[test]
fn constants_honour_the_requested_digits() {
    let calculator = Calculator::new();
    assert_eq!(call(&calculator, "pi", &[int(5)]), Number::Float(3.1416));
    assert_eq!(call(&calculator, "e", &[int(3)]), Number::Float(2.72));
    let error = calculator.function("pi", &[int(0)]).unwrap_err();
    assert!(matches!(error, CalcError::InvalidArgument { .. }));
}

#[test]
fn special_functions() {
    let calculator = Calculator::new();
    let zeta = call(&calculator, "zeta", &[int(2)]);
    assert!((approx(&zeta) - PI * PI / 6.0).abs() < 1e-10);
    let hurwitz = call(&calculator, "zeta", &[int(2), int(1)]);
    assert!((approx(&hurwitz) - PI * PI / 6.0).abs() < 1e-9);

    let w = call(&calculator, "w", &[Number::Float(std::f64::consts::E)]);
    assert!((approx(&w) - 1.0).abs() < 1e-10);

    let agm = call(&calculator, "agm", &[int(1), int(2)]);
    assert!((approx(&agm) - 1.456_791_031_046_906_9).abs() < 1e-12);

    let kummer = call(&calculator, "hypergeometric1F1", &[int(1), int(1), int(1)]);
    assert!((approx(&kummer) - std::f64::consts::E).abs() < 1e-12);

    let log_gamma = call(&calculator, "logGamma", &[int(10)]);
    assert!((approx(&log_gamma) - 362_880f64.ln()).abs() < 1e-9);
}

#[test]
fn hurwitz_zeta_stays_bounded_at_extreme_arguments() {
    let calculator = Calculator::new();
    let huge_exponent = call(&calculator, "zeta", &[Number::Float(1e12), int(1)]);
    assert!((approx(&huge_exponent) - 1.0).abs() < 1e-15);
    assert_eq!(
        calculator.function("zeta", &[int(2), Number::Float(-1e13 + 0.5)]),
        Err(CalcError::no_convergence("zeta"))
    );
}

#[test]
fn negative_base_powers_agree_across_representations() {
    let calculator = Calculator::new();
    let exact = call(&calculator, "pow", &[int(-8), ratio(1, 3)]);
    let float = call(&calculator, "pow", &[Number::Float(-8.0), ratio(1, 3)]);
    assert_eq!(exact, float);
    let Number::Complex(root) = exact else { panic!("expected a complex power, got {exact}") };
    assert!((root.re - 1.0).abs() < 1e-12);
    assert!((root.im - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn invalid_and_singular_arguments() {
    let calculator = Calculator::new();
    let error = calculator.function("atan2", &[int(0), int(0)]).unwrap_err();
    assert!(matches!(error, CalcError::InvalidArgument { .. }));
    let error = calculator.function("log", &[int(0)]).unwrap_err();
    assert!(matches!(error, CalcError::InvalidArgument { .. }));
    assert_eq!(calculator.function("gamma", &[int(0)]), Err(CalcError::pole("gamma")));
}

#[test]
fn seeded_random_numbers_are_reproducible() {
    let first = seeded(42);
    let second = seeded(42);
    for _ in 0..5 {
        let a = call(&first, "random", &[int(10)]);
        let b = call(&second, "random", &[int(10)]);
        assert_eq!(a, b);
        let value = approx(&a);
        assert!((0.0..1.0).contains(&value), "{value}");
    }
    let gaussian = call(&first, "randomGaussian", &[int(10)]);
    assert!(approx(&gaussian).is_finite());
}
