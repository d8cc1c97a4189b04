//! Noyau d’évaluation
//!
//! Organisation interne :
//! - normalise.rs : retrait des blancs + liste blanche de caractères
//! - jetons.rs    : tokenisation (nombres, opérateurs, fonctions, parenthèses)
//! - fonctions.rs : fonctions unaires connues (sqrt, sin/cos/tan/cot en degrés)
//! - trig.rs      : angles remarquables + pôles
//! - reduction.rs : shunting-yard réduit directement en valeur
//! - format.rs    : affichage arrondi d’un résultat
//! - erreur.rs    : échecs classés
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod reduction;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{DomainKind, EvalError};
pub use eval::{evaluate, evaluate_detailed, DemarcheNoyau, Evaluation};
pub use format::format_resultat;
