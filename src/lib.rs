//! Calculatrice de base : évaluateur d’expressions arithmétiques.
//!
//! Point d’entrée unique : [`noyau::evaluate`], fonction pure
//! (texte -> valeur finie ou échec classé), sans état partagé.

pub mod noyau;

pub use noyau::{evaluate, evaluate_detailed, DomainKind, EvalError};
