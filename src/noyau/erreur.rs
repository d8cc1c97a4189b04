// src/noyau/erreur.rs
//
// Échecs classés du noyau.
// Tous terminaux : l’UI n’affiche qu’un message, les tests distinguent le genre.

use thiserror::Error;

use super::fonctions::FunctionName;

/// Opération mathématiquement indéfinie pour les opérandes donnés.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DomainKind {
    #[error("division par zéro")]
    DivisionByZero,

    #[error("racine carrée d’un nombre négatif")]
    NegativeSqrt,

    /// Pôle trig : tan(90°), cot(0°)…
    #[error("{0} indéfini pour cet angle")]
    Undefined(FunctionName),

    /// NaN ou ±∞ (puissance hors domaine réel, dépassement f64).
    #[error("résultat non fini")]
    NonFinite,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("caractère inattendu: '{0}'")]
    InvalidCharacter(char),

    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    #[error("{0}")]
    DomainError(#[from] DomainKind),

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    #[error("expression invalide")]
    MalformedExpression,
}
