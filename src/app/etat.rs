//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : du noyau, on n’emprunte que le formatage.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision d’affichage.

use calculatrice_base::noyau::format_resultat;

/// Décimales affichées par défaut.
pub const DECIMALES_DEFAUT: usize = 5;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub etapes: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<f64>, // dernier résultat brut (ré-affiché si les décimales changent)
    pub resultat: String,    // résultat formaté
    pub erreur: String,      // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute ;
    /// la démarche, elle, ne vaut plus rien.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.resultat = format_resultat(valeur, self.decimales);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Borne les décimales et ré-affiche le dernier résultat.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        if let Some(v) = self.valeur {
            self.resultat = format_resultat(v, self.decimales);
        }
        self.focus_entree = true;
    }
}
