//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> shunting-yard (réduction directe) -> valeur finie
//!
//! Fonction pure : aucun état partagé, chaque appel est indépendant.

use tracing::debug;

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalise;
use super::reduction::reduire;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub etapes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: DemarcheNoyau,
}

/// API publique : valeur finie ou échec classé.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_detailed(expression).map(|e| e.valeur)
}

/// API publique : valeur + démarche (jetons, réductions dans l’ordre).
pub fn evaluate_detailed(expression: &str) -> Result<Evaluation, EvalError> {
    debug!(expression, "évaluation");

    let out = pipeline(expression);
    match &out {
        Ok(e) => debug!(valeur = e.valeur, "ok"),
        Err(err) => debug!(%err, "échec"),
    }
    out
}

fn pipeline(expression: &str) -> Result<Evaluation, EvalError> {
    // 1) Liste blanche
    let s = normalise(expression)?;

    // 2) Jetons
    let jetons = tokenize(&s)?;

    // 3) Réduction
    let (valeur, etapes) = reduire(&jetons)?;

    Ok(Evaluation {
        valeur,
        demarche: DemarcheNoyau {
            jetons: format_tokens(&jetons),
            etapes: etapes.iter().map(ToString::to_string).collect(),
        },
    })
}
