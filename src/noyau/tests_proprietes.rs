//! Propriétés (proptest) : pureté, insensibilité aux blancs, pas de panique,
//! accord avec l’arithmétique f64 directe.

use proptest::prelude::*;

use super::{evaluate, EvalError};

/// Chaînes construites sur l’alphabet accepté (+ quelques intrus).
fn entree_quelconque() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec![
            "0", "1", "2", "7", "9", ".", "+", "-", "*", "**", "/", "^", "(", ")", "sqrt", "sin",
            "cot", "x", " ", "%", "A",
        ]),
        0..40,
    )
    .prop_map(|morceaux| morceaux.concat())
}

/// Insère des blancs entre chaque caractère.
fn espace(s: &str) -> String {
    s.chars().flat_map(|c| [c, ' ']).collect()
}

proptest! {
    #[test]
    fn jamais_de_panique_et_valeur_finie(s in entree_quelconque()) {
        if let Ok(v) = evaluate(&s) {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn idempotence(s in entree_quelconque()) {
        prop_assert_eq!(evaluate(&s), evaluate(&s));
    }

    #[test]
    fn blancs_sans_effet(s in entree_quelconque()) {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(evaluate(&s), evaluate(&compact));
        prop_assert_eq!(evaluate(&espace(&compact)), evaluate(&compact));
    }

    #[test]
    fn somme_de_produits(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let attendu = a as f64 + b as f64 * c as f64;
        prop_assert_eq!(evaluate(&format!("{a}+{b}*{c}")), Ok(attendu));
        prop_assert_eq!(evaluate(&format!("({a}+{b})*{c}")), Ok((a as f64 + b as f64) * c as f64));
    }

    #[test]
    fn division_par_zero_toujours_refusee(a in 0u32..100_000) {
        let e = format!("{a}/0");
        prop_assert!(matches!(evaluate(&e), Err(EvalError::DomainError(_))));
    }

    #[test]
    fn negation_prefixe(a in 1u32..1000) {
        prop_assert_eq!(evaluate(&format!("-{a}")), Ok(-(a as f64)));
        prop_assert_eq!(evaluate(&format!("0-{a}")), evaluate(&format!("-{a}")));
    }
}
