//! Tests scientifiques (campagne) : comportements attendus + limites contrôlées.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - Signe préfixe : '-' se lie plus fort que * / et moins fort que ^.
//! - Trig en degrés : angles remarquables exacts, pôles = échec de domaine.
//! - Pas de multiplication implicite : "2(3)" et "2sin(30)" sont refusés.
//! - Tout NaN/±∞ intermédiaire est refusé (jamais renvoyé comme valeur).

use std::time::{Duration, Instant};

use super::fonctions::FunctionName;
use super::{evaluate, DomainKind, EvalError};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendu: EvalError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

fn assert_domaine(expr: &str, genre: DomainKind) {
    assert_err(expr, EvalError::DomainError(genre));
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_val("2+3*4", 14.0);
    assert_val("2*3+4", 10.0);
    assert_val("2+3*4^2", 50.0);
    assert_val("(2+3)*4", 20.0);
    assert_val("((2))", 2.0);
}

#[test]
fn sci_associativite() {
    // gauche
    assert_val("10-4-3", 3.0);
    assert_val("100/10/5", 2.0);
    assert_val("2*3/4", 1.5);
    // droite
    assert_val("2^3^2", 512.0);
    assert_val("2**3^2", 512.0);
    assert_val("4^0.5", 2.0);
    assert_val("2^-1", 0.5);
}

#[test]
fn sci_signes() {
    assert_val("-3", -3.0);
    assert_val("+3", 3.0);
    assert_val("-2^2", -4.0);
    assert_val("(-2)^2", 4.0);
    assert_val("3--2", 5.0);
    assert_val("2++3", 5.0);
    assert_val("-sqrt(9)", -3.0);
    assert_val("sqrt(9)*-1", -3.0);
}

#[test]
fn sci_decimaux() {
    assert_val("0.5+.25", 0.75);
    assert_val("2.5*4", 10.0);
    assert_val("1/4", 0.25);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_racine() {
    assert_val("sqrt(16)", 4.0);
    assert_val("sqrt(2)^2", 2.0);
    assert_val("sqrt(3*3+4*4)", 5.0);
    assert_val("sqrt(0)", 0.0);
    assert_domaine("sqrt(-4)", DomainKind::NegativeSqrt);
    assert_domaine("sqrt(1-2)", DomainKind::NegativeSqrt);
}

#[test]
fn sci_trig_degres() {
    assert_val("sin(30)", 0.5);
    assert_val("cos(60)", 0.5);
    assert_val("sin(90)+cos(0)", 2.0);
    assert_val("tan(45)", 1.0);
    assert_val("cot(45)", 1.0);
    assert_val("2*sin(30)", 1.0);
    assert_val("sin(-30)", -0.5);
    assert_val("cos(360+60)", 0.5);
    assert_val("sin(45)^2", 0.5);
}

#[test]
fn sci_trig_poles() {
    assert_domaine("tan(90)", DomainKind::Undefined(FunctionName::Tan));
    assert_domaine("tan(-90)", DomainKind::Undefined(FunctionName::Tan));
    assert_domaine("tan(180+90)", DomainKind::Undefined(FunctionName::Tan));
    assert_domaine("cot(0)", DomainKind::Undefined(FunctionName::Cot));
    assert_domaine("cot(180)", DomainKind::Undefined(FunctionName::Cot));
}

/* ------------------------ Échecs classés ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_domaine("5/0", DomainKind::DivisionByZero);
    assert_domaine("5/0.0", DomainKind::DivisionByZero);
    assert_domaine("1/(2-2)", DomainKind::DivisionByZero);
    assert_domaine("0/0", DomainKind::DivisionByZero);
    // diviser ZÉRO est permis
    assert_val("0/5", 0.0);
}

#[test]
fn sci_non_fini() {
    assert_domaine("(-8)^(1/3)", DomainKind::NonFinite);
    assert_domaine("10^400", DomainKind::NonFinite);
    assert_domaine("10^200*10^200", DomainKind::NonFinite);
    let grand = "9".repeat(400);
    assert_domaine(&grand, DomainKind::NonFinite);
}

#[test]
fn sci_caracteres() {
    assert_err("2 % 3", EvalError::InvalidCharacter('%'));
    assert_err("2,5+1", EvalError::InvalidCharacter(','));
    assert_err("Sqrt(4)", EvalError::InvalidCharacter('S'));
    assert_err("x=2", EvalError::InvalidCharacter('='));
}

#[test]
fn sci_fonctions_inconnues() {
    assert_err("log(10)", EvalError::UnknownFunction("log".into()));
    assert_err("pi", EvalError::UnknownFunction("pi".into()));
    assert_err("2*x", EvalError::UnknownFunction("x".into()));
}

#[test]
fn sci_parentheses() {
    assert_err("(2+3*4", EvalError::MismatchedParentheses);
    assert_err("2+3)*4", EvalError::MismatchedParentheses);
    assert_err("((1)", EvalError::MismatchedParentheses);
    assert_err(")(", EvalError::MismatchedParentheses);
}

#[test]
fn sci_formes_invalides() {
    for s in ["", "  ", "+", "2+", "2*/3", "(2)3", "3(2)", "sin30", "2sqrt(4)", "()", "."] {
        assert_err(s, EvalError::MalformedExpression);
    }
    // "2 3" devient "23" après retrait des blancs : valide
    assert_val("2 3", 23.0);
}

/* ------------------------ Propriétés simples ------------------------ */

#[test]
fn sci_idempotence() {
    for s in ["2+3*4", "sqrt(2)", "5/0", "(1", "sin(33.3)"] {
        assert_eq!(evaluate(s), evaluate(s), "expr={s:?}");
    }
}

#[test]
fn sci_espaces() {
    assert_eq!(evaluate("2 + 3"), evaluate("2+3"));
    assert_eq!(evaluate(" ( 2 + 3 ) * 4 "), Ok(20.0));
    assert_eq!(evaluate("2 * * 3"), Ok(8.0));
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_longue_chaine_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1+1+...+1 (20 000 termes)
    let expr = vec!["1"; 20_000].join("+");
    assert_val(&expr, 20_000.0);
    budget(t0, max);

    // parenthèses très imbriquées : pas de récursion, donc pas de débordement de pile
    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_val(&expr, 1.0);
    budget(t0, max);

    // 2^1^1^...^1 (chaîne droite profonde)
    let expr = format!("2{}", "^1".repeat(10_000));
    assert_val(&expr, 2.0);
    budget(t0, max);
}
