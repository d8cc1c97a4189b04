// src/noyau/reduction.rs
//
// Shunting-yard -> valeur (sans RPN intermédiaire, sans AST)
// Objectif:
// - Consommer les jetons de gauche à droite
// - Appliquer chaque opérateur dès que la précédence le permet
//
// Règles:
// - Function(name): marqueur sur la pile, appliqué à la fermeture de SA parenthèse
//   (doit être suivi immédiatement de '(').
// - Signe préfixe:
//    - si '+'/'-' arrive quand on attend une valeur, c’est un signe
//    - '+' est ignoré, '-' empile une Negation
//    - Negation : plus forte que * /, plus faible que ^ (-2^2 = -4, 2^-2 = 1/4)
// - Tout résultat NaN/±∞ est un échec de domaine.

use std::fmt;
use std::iter::Peekable;

use tracing::trace;

use super::erreur::{DomainKind, EvalError};
use super::fonctions::FunctionName;
use super::jetons::{OperatorKind, Token};

/// Précédence de la négation préfixe : au niveau de Pow, qui est associatif à droite,
/// donc `^` entrant ne la dépile jamais et tout autre opérateur entrant la dépile.
const PRECEDENCE_NEGATION: u8 = 3;

/// Élément de la pile des opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ElementPile {
    Operateur(OperatorKind),
    Negation,
    Fonction(FunctionName),
    ParenGauche,
}

impl ElementPile {
    /// Précédence comparable, ou None si l’élément fait barrière (parenthèse, fonction).
    fn precedence(self) -> Option<u8> {
        match self {
            ElementPile::Operateur(op) => Some(op.precedence()),
            ElementPile::Negation => Some(PRECEDENCE_NEGATION),
            ElementPile::Fonction(_) | ElementPile::ParenGauche => None,
        }
    }
}

/// Une réduction effectuée (pour la démarche).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Etape {
    Binaire {
        op: OperatorKind,
        gauche: f64,
        droite: f64,
        resultat: f64,
    },
    Negation {
        x: f64,
        resultat: f64,
    },
    Fonction {
        f: FunctionName,
        x: f64,
        resultat: f64,
    },
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Etape::Binaire {
                op,
                gauche,
                droite,
                resultat,
            } => write!(f, "{gauche} {op} {droite} = {resultat}"),
            Etape::Negation { x, resultat } => write!(f, "-({x}) = {resultat}"),
            Etape::Fonction { f: func, x, resultat } => write!(f, "{func}({x}) = {resultat}"),
        }
    }
}

/// Les deux piles, possédées séparément, plus le journal des étapes.
#[derive(Default)]
struct Reducteur {
    valeurs: Vec<f64>,
    operateurs: Vec<ElementPile>,
    etapes: Vec<Etape>,
}

/// Réduit une suite de jetons en une valeur finie.
/// Renvoie aussi les étapes dans l’ordre où elles ont été appliquées.
pub fn reduire(tokens: &[Token]) -> Result<(f64, Vec<Etape>), EvalError> {
    let mut r = Reducteur::default();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le signe préfixe et les opérandes collés.
    let mut attend_valeur = true;

    let mut it = tokens.iter().peekable();
    while let Some(tok) = it.next() {
        match tok {
            Token::Number(v) => {
                if !attend_valeur {
                    return Err(EvalError::MalformedExpression);
                }
                r.empiler_valeur(*v)?;
                attend_valeur = false;
            }

            Token::LeftParen => {
                if !attend_valeur {
                    // pas de multiplication implicite : "2(3)"
                    return Err(EvalError::MalformedExpression);
                }
                r.operateurs.push(ElementPile::ParenGauche);
            }

            Token::Function(name) => {
                if !attend_valeur {
                    return Err(EvalError::MalformedExpression);
                }
                let f: FunctionName = name.parse()?;
                exige_paren_ouvrante(&mut it)?;
                r.operateurs.push(ElementPile::Fonction(f));
            }

            Token::RightParen => {
                if attend_valeur {
                    // "()" ou "(2+)" ; une ')' orpheline reste une erreur de parenthèses
                    if !r.operateurs.contains(&ElementPile::ParenGauche) {
                        return Err(EvalError::MismatchedParentheses);
                    }
                    return Err(EvalError::MalformedExpression);
                }
                r.fermer_parenthese()?;
                attend_valeur = false;
            }

            Token::Operator(op) => {
                if attend_valeur {
                    match op {
                        OperatorKind::Add => {}
                        OperatorKind::Sub => r.operateurs.push(ElementPile::Negation),
                        _ => return Err(EvalError::MalformedExpression),
                    }
                    continue;
                }
                r.empiler_operateur(*op)?;
                attend_valeur = true;
            }
        }
    }

    // Parenthèse restée ouverte : prioritaire sur “opérateur final”.
    if r.operateurs.contains(&ElementPile::ParenGauche) {
        return Err(EvalError::MismatchedParentheses);
    }
    if attend_valeur {
        // vide, ou opérateur final
        return Err(EvalError::MalformedExpression);
    }

    while let Some(top) = r.operateurs.pop() {
        r.appliquer(top)?;
    }

    // Forme terminale : exactement une valeur, aucun opérateur.
    if r.valeurs.len() != 1 || !r.operateurs.is_empty() {
        return Err(EvalError::MalformedExpression);
    }
    let v = r.valeurs.pop().ok_or(EvalError::MalformedExpression)?;
    Ok((v, r.etapes))
}

/// Un nom de fonction doit être suivi immédiatement de '(' : "sqrt4" est refusé.
fn exige_paren_ouvrante<'a, I>(it: &mut Peekable<I>) -> Result<(), EvalError>
where
    I: Iterator<Item = &'a Token>,
{
    match it.peek() {
        Some(Token::LeftParen) => Ok(()),
        _ => Err(EvalError::MalformedExpression),
    }
}

impl Reducteur {
    fn empiler_valeur(&mut self, v: f64) -> Result<(), EvalError> {
        self.valeurs.push(fini(v)?);
        Ok(())
    }

    fn empiler_operateur(&mut self, op: OperatorKind) -> Result<(), EvalError> {
        // dépile tant que:
        // - on n'est pas bloqué par '(' ou par une fonction
        // - et la précédence/associativité exige d'appliquer l'élément du haut
        while let Some(top) = self.operateurs.last().copied() {
            let Some(p_top) = top.precedence() else {
                break;
            };
            let p_op = op.precedence();

            let doit_pop = if op.is_right_associative() {
                p_top > p_op
            } else {
                p_top >= p_op
            };

            if !doit_pop {
                break;
            }
            self.operateurs.pop();
            self.appliquer(top)?;
        }

        self.operateurs.push(ElementPile::Operateur(op));
        Ok(())
    }

    fn fermer_parenthese(&mut self) -> Result<(), EvalError> {
        // dépile jusqu’à '('
        loop {
            match self.operateurs.pop() {
                None => return Err(EvalError::MismatchedParentheses),
                Some(ElementPile::ParenGauche) => break,
                Some(top) => self.appliquer(top)?,
            }
        }

        // si une fonction est au sommet, elle consomme la valeur de sa parenthèse
        if let Some(&ElementPile::Fonction(f)) = self.operateurs.last() {
            self.operateurs.pop();
            self.appliquer(ElementPile::Fonction(f))?;
        }

        Ok(())
    }

    fn depiler_valeur(&mut self) -> Result<f64, EvalError> {
        self.valeurs.pop().ok_or(EvalError::MalformedExpression)
    }

    fn appliquer(&mut self, el: ElementPile) -> Result<(), EvalError> {
        let etape = match el {
            ElementPile::Operateur(op) => {
                // ordre important : droite d’abord
                let droite = self.depiler_valeur()?;
                let gauche = self.depiler_valeur()?;
                let resultat = fini(binaire(op, gauche, droite)?)?;
                Etape::Binaire {
                    op,
                    gauche,
                    droite,
                    resultat,
                }
            }
            ElementPile::Negation => {
                let x = self.depiler_valeur()?;
                Etape::Negation { x, resultat: -x }
            }
            ElementPile::Fonction(f) => {
                let x = self.depiler_valeur()?;
                let resultat = fini(f.appliquer(x)?)?;
                Etape::Fonction { f, x, resultat }
            }
            ElementPile::ParenGauche => return Err(EvalError::MismatchedParentheses),
        };

        trace!(%etape, "réduction");

        let v = match etape {
            Etape::Binaire { resultat, .. }
            | Etape::Negation { resultat, .. }
            | Etape::Fonction { resultat, .. } => resultat,
        };
        self.valeurs.push(v);
        self.etapes.push(etape);
        Ok(())
    }
}

fn binaire(op: OperatorKind, a: f64, b: f64) -> Result<f64, DomainKind> {
    let v = match op {
        OperatorKind::Add => a + b,
        OperatorKind::Sub => a - b,
        OperatorKind::Mul => a * b,
        OperatorKind::Div => {
            if b == 0.0 {
                return Err(DomainKind::DivisionByZero);
            }
            a / b
        }
        OperatorKind::Pow => a.powf(b),
    };
    Ok(v)
}

fn fini(v: f64) -> Result<f64, EvalError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DomainKind::NonFinite.into())
    }
}
