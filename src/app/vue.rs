// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Enter ou "=" évalue (quand le champ est focus)
// - Focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::{AppCalc, Demarche, DECIMALES_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de base");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 2^3^2, sqrt(16), sin(30)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // TextEdit singleline perd le focus sur Enter : on teste lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }

            // Contrat: C = entrée seulement ; AC = tout
            if ui
                .add_sized([48.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement l’entrée")
                .clicked()
            {
                self.clear_entree();
            }
            if ui
                .add_sized([48.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }

            ui.separator();

            ui.label("Affichage :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.resultat.is_empty() {
            ui.monospace("—");
        } else {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                Self::champ_monospace(ui, "demarche_jetons", &self.demarche.jetons, 1);
                ui.add_space(4.0);
                ui.label("Réductions :");
                Self::champ_monospace(ui, "demarche_etapes", &self.demarche.etapes, 3);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/erreur/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match calculatrice_base::noyau::evaluate_detailed(&self.entree) {
            Ok(e) => {
                let d_ui = Demarche {
                    jetons: e.demarche.jetons,
                    etapes: e.demarche.etapes.join("\n"),
                };
                self.set_resultat(e.valeur, d_ui);
            }
            Err(err) => self.set_erreur(err.to_string()),
        }
    }
}
