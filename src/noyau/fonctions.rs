// src/noyau/fonctions.rs
//
// Fonctions unaires connues.
// Ajouter une fonction = une variante + une ligne dans `depuis_nom` + un bras dans `appliquer`.

use std::fmt;
use std::str::FromStr;

use super::erreur::{DomainKind, EvalError};
use super::trig::{trig_degres, TrigFn, TrigOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionName {
    Sqrt,
    // trig en degrés
    Sin,
    Cos,
    Tan,
    Cot,
}

impl FunctionName {
    pub fn depuis_nom(name: &str) -> Option<Self> {
        let f = match name {
            "sqrt" => FunctionName::Sqrt,
            "sin" => FunctionName::Sin,
            "cos" => FunctionName::Cos,
            "tan" => FunctionName::Tan,
            "cot" => FunctionName::Cot,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(self) -> &'static str {
        match self {
            FunctionName::Sqrt => "sqrt",
            FunctionName::Sin => "sin",
            FunctionName::Cos => "cos",
            FunctionName::Tan => "tan",
            FunctionName::Cot => "cot",
        }
    }

    /// Applique la fonction à un argument.
    /// Le résultat n’est pas contrôlé ici (fini/NaN) : la réduction s’en charge.
    pub fn appliquer(self, x: f64) -> Result<f64, DomainKind> {
        let trig = |f: TrigFn| match trig_degres(x, f) {
            TrigOutcome::Valeur(v) => Ok(v),
            TrigOutcome::Indefini => Err(DomainKind::Undefined(self)),
        };

        match self {
            FunctionName::Sqrt => {
                if x < 0.0 {
                    return Err(DomainKind::NegativeSqrt);
                }
                Ok(x.sqrt())
            }
            FunctionName::Sin => trig(TrigFn::Sin),
            FunctionName::Cos => trig(TrigFn::Cos),
            FunctionName::Tan => trig(TrigFn::Tan),
            FunctionName::Cot => trig(TrigFn::Cot),
        }
    }
}

impl FromStr for FunctionName {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::depuis_nom(s).ok_or_else(|| EvalError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}
