// src/noyau/format.rs
//
// Affichage d’un résultat : arrondi à `decimales` chiffres, sans zéros inutiles.

/// 14 -> "14" ; 0.1+0.2 -> "0.3" (5 décimales) ; -0 -> "0".
pub fn format_resultat(v: f64, decimales: usize) -> String {
    let mut s = format!("{v:.decimales$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // arrondi d’un petit négatif (ou -0.0) => "-0"
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
