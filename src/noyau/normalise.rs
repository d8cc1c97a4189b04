// src/noyau/normalise.rs
//
// Filtre d’entrée : retire les blancs, puis liste blanche de caractères.
// Ce n’est PAS une grammaire, juste un rejet bon marché avant les jetons.

use super::erreur::EvalError;

/// Caractères acceptés hors chiffres et minuscules ASCII.
const SYMBOLES: &str = ".+-*/^()";

fn est_accepte(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase() || SYMBOLES.contains(c)
}

/// Retire tous les blancs et vérifie la liste blanche.
/// Le premier caractère refusé est renvoyé dans l’erreur.
pub fn normalise(s: &str) -> Result<String, EvalError> {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        if !est_accepte(c) {
            return Err(EvalError::InvalidCharacter(c));
        }
        out.push(c);
    }
    Ok(out)
}
