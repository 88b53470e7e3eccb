//! The built-in function table
//!
//! Registry keys match function names except for `n`, which is registered
//! for the function named `precision`.

use crate::function::{FixedFunction, Function, fixed_function, ranged_function};

fn keyed(function: FixedFunction) -> (String, FixedFunction) {
    (function.name().to_string(), function)
}

pub(crate) fn built_in_functions() -> Vec<(String, FixedFunction)> {
    let mut table: Vec<(String, FixedFunction)> = [
        // Arithmetic
        fixed_function("negate", 1, |f, a| f.negate(&a[0])),
        fixed_function("add", 2, |f, a| f.add(&a[0], &a[1])),
        fixed_function("subtract", 2, |f, a| f.subtract(&a[0], &a[1])),
        fixed_function("multiply", 2, |f, a| f.multiply(&a[0], &a[1])),
        fixed_function("divide", 2, |f, a| f.divide(&a[0], &a[1])),
        fixed_function("mod", 2, |f, a| f.modulo(&a[0], &a[1])),
        fixed_function("pow", 2, |f, a| f.pow(&a[0], &a[1])),
        // Complex parts
        fixed_function("arg", 1, |f, a| f.arg(&a[0])),
        fixed_function("conj", 1, |f, a| f.conj(&a[0])),
        fixed_function("imag", 1, |f, a| f.imag(&a[0])),
        fixed_function("real", 1, |f, a| f.real(&a[0])),
        // Elementary and special functions
        fixed_function("abs", 1, |f, a| f.abs(&a[0])),
        fixed_function("acos", 1, |f, a| f.acos(&a[0])),
        fixed_function("acosh", 1, |f, a| f.acosh(&a[0])),
        fixed_function("asin", 1, |f, a| f.asin(&a[0])),
        fixed_function("asinh", 1, |f, a| f.asinh(&a[0])),
        fixed_function("atan", 1, |f, a| f.atan(&a[0])),
        fixed_function("atanh", 1, |f, a| f.atanh(&a[0])),
        fixed_function("bernoulli", 1, |f, a| f.bernoulli(&a[0])),
        fixed_function("binomial", 2, |f, a| f.binomial(&a[0], &a[1])),
        fixed_function("catalan", 1, |f, a| f.catalan(&a[0])),
        fixed_function("cbrt", 1, |f, a| f.cbrt(&a[0])),
        fixed_function("ceil", 1, |f, a| f.ceil(&a[0])),
        fixed_function("cos", 1, |f, a| f.cos(&a[0])),
        fixed_function("cosh", 1, |f, a| f.cosh(&a[0])),
        fixed_function("digamma", 1, |f, a| f.digamma(&a[0])),
        fixed_function("e", 1, |f, a| f.e(&a[0])),
        fixed_function("euler", 1, |f, a| f.euler(&a[0])),
        fixed_function("exp", 1, |f, a| f.exp(&a[0])),
        fixed_function("factorial", 1, |f, a| f.factorial(&a[0])),
        fixed_function("floor", 1, |f, a| f.floor(&a[0])),
        fixed_function("frac", 1, |f, a| f.frac(&a[0])),
        ranged_function("gamma", 1, 3, |f, a| match a.len() {
            1 => f.gamma(&a[0]),
            2 => f.gamma_incomplete(&a[0], &a[1]),
            _ => f.gamma_generalized(&a[0], &a[1], &a[2]),
        }),
        fixed_function("glaisher", 1, |f, a| f.glaisher(&a[0])),
        fixed_function("hypergeometric0F1", 2, |f, a| f.hypergeometric_0f1(&a[0], &a[1])),
        fixed_function("hypergeometric1F1", 3, |f, a| {
            f.hypergeometric_1f1(&a[0], &a[1], &a[2])
        }),
        fixed_function("hypergeometric2F1", 4, |f, a| {
            f.hypergeometric_2f1(&a[0], &a[1], &a[2], &a[3])
        }),
        fixed_function("khinchin", 1, |f, a| f.khinchin(&a[0])),
        ranged_function("log", 1, 2, |f, a| match a.len() {
            1 => f.log(&a[0]),
            _ => f.log_base(&a[0], &a[1]),
        }),
        fixed_function("logGamma", 1, |f, a| f.log_gamma(&a[0])),
        fixed_function("max", 2, |f, a| f.max(&a[0], &a[1])),
        fixed_function("min", 2, |f, a| f.min(&a[0], &a[1])),
        fixed_function("nextAfter", 2, |f, a| f.next_after(&a[0], &a[1])),
        fixed_function("nextDown", 1, |f, a| f.next_down(&a[0])),
        fixed_function("nextUp", 1, |f, a| f.next_up(&a[0])),
        fixed_function("pi", 1, |f, a| f.pi(&a[0])),
        fixed_function("random", 1, |f, a| f.random(&a[0])),
        fixed_function("randomGaussian", 1, |f, a| f.random_gaussian(&a[0])),
        // Deprecated spelling of roundToPrecision
        fixed_function("round", 2, |f, a| f.round_to_precision(&a[0], &a[1])),
        fixed_function("roundToPrecision", 2, |f, a| f.round_to_precision(&a[0], &a[1])),
        fixed_function("roundToInteger", 1, |f, a| f.round_to_integer(&a[0])),
        fixed_function("roundToPlaces", 2, |f, a| f.round_to_places(&a[0], &a[1])),
        fixed_function("roundToMultiple", 2, |f, a| f.round_to_multiple(&a[0], &a[1])),
        fixed_function("sin", 1, |f, a| f.sin(&a[0])),
        fixed_function("sinh", 1, |f, a| f.sinh(&a[0])),
        fixed_function("sqrt", 1, |f, a| f.sqrt(&a[0])),
        fixed_function("tan", 1, |f, a| f.tan(&a[0])),
        fixed_function("tanh", 1, |f, a| f.tanh(&a[0])),
        fixed_function("truncate", 1, |f, a| f.truncate(&a[0])),
        fixed_function("toDegrees", 1, |f, a| f.to_degrees(&a[0])),
        fixed_function("toRadians", 1, |f, a| f.to_radians(&a[0])),
        fixed_function("ulp", 1, |f, a| f.ulp(&a[0])),
        ranged_function("zeta", 1, 2, |f, a| match a.len() {
            1 => f.zeta(&a[0]),
            _ => f.zeta_hurwitz(&a[0], &a[1]),
        }),
        // Two-argument and branch functions
        fixed_function("agm", 2, |f, a| f.agm(&a[0], &a[1])),
        ranged_function("w", 1, 2, |f, a| match a.len() {
            1 => f.w(&a[0]),
            _ => f.w_branch(&a[0], &a[1]),
        }),
        fixed_function("atan2", 2, |f, a| f.atan2(&a[0], &a[1])),
        fixed_function("copySign", 2, |f, a| f.copy_sign(&a[0], &a[1])),
        fixed_function("fmod", 2, |f, a| f.fmod(&a[0], &a[1])),
        fixed_function("gcd", 2, |f, a| f.gcd(&a[0], &a[1])),
        fixed_function("lcm", 2, |f, a| f.lcm(&a[0], &a[1])),
        fixed_function("hypot", 2, |f, a| f.hypot(&a[0], &a[1])),
        ranged_function("inverseRoot", 2, 3, |f, a| match a.len() {
            2 => f.inverse_root(&a[0], &a[1]),
            _ => f.inverse_root_branch(&a[0], &a[1], &a[2]),
        }),
        ranged_function("root", 2, 3, |f, a| match a.len() {
            2 => f.root(&a[0], &a[1]),
            _ => f.root_branch(&a[0], &a[1], &a[2]),
        }),
        fixed_function("scale", 2, |f, a| f.scale(&a[0], &a[1])),
    ]
    .into_iter()
    .map(keyed)
    .collect();

    table.push(("n".to_string(), fixed_function("precision", 2, |f, a| f.precision(&a[0], &a[1]))));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let table = built_in_functions();
        let keys: HashSet<&str> = table.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys.len(), table.len());
    }

    #[test]
    fn precision_is_keyed_as_n() {
        let table = built_in_functions();
        let (_, precision) = table.iter().find(|(key, _)| key == "n").unwrap();
        assert_eq!(precision.name(), "precision");
        assert!(table.iter().all(|(key, _)| key != "precision"));
    }
}
