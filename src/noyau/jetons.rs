// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvalError;

/// Opérateurs binaires, avec précédence et associativité fixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow, // ^ ou **
}

impl OperatorKind {
    pub fn precedence(self) -> u8 {
        match self {
            OperatorKind::Add | OperatorKind::Sub => 1,
            OperatorKind::Mul | OperatorKind::Div => 2,
            OperatorKind::Pow => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, OperatorKind::Pow)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Pow => "^",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(OperatorKind),

    // Nom brut : la réduction décidera s’il est connu (sqrt/sin/…) ou non.
    Function(String),

    LeftParen,
    RightParen,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux: chiffres + au plus un '.' (ex: 12, 2.5, .5, 5.)
/// - opérateurs + - * / ^ et ** (= ^)
/// - parenthèses ( )
/// - noms de fonctions: suite de minuscules ASCII (non vérifiés ici)
///
/// Les blancs sont sautés ; tout autre caractère est refusé.
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Token::LeftParen);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Token::RightParen);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Token::Operator(OperatorKind::Add));
                i += 1;
                continue;
            }
            '-' => {
                out.push(Token::Operator(OperatorKind::Sub));
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance (orthographe alternative de ^)
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Token::Operator(OperatorKind::Pow));
                    i += 2;
                } else {
                    out.push(Token::Operator(OperatorKind::Mul));
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Token::Operator(OperatorKind::Div));
                i += 1;
                continue;
            }
            '^' => {
                out.push(Token::Operator(OperatorKind::Pow));
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants : [a-z]+
        if c.is_ascii_lowercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Token::Function(word));
            continue;
        }

        // Nombre : chiffres et au plus un point.
        // Un second '.' ouvre un nouveau nombre (=> deux opérandes collés, refusés plus tard).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            // seul cas d’échec : "." isolé
            let v = txt
                .parse::<f64>()
                .map_err(|_| EvalError::MalformedExpression)?;
            out.push(Token::Number(v));
            continue;
        }

        return Err(EvalError::InvalidCharacter(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(v) => format!("{v}"),
            Token::Operator(op) => op.symbole().to_string(),
            Token::Function(name) => name.clone(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
