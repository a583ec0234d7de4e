// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé + opérateurs, focus redonné après clic (focus_entree)
// - Aperçu postfixe pendant la frappe, rapport complet après "="
//
// Les erreurs s’affichent en rouge sous l’entrée : jamais de fenêtre modale.

use eframe::egui;

use evaluateur_postfixe::noyau::{evaluer_expression, jetons::format_tokens, rpn, validate};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Évaluateur postfixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_sortie(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression infixe :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + 3) * 4, 2^3^2")
                .char_limit(self.limites.entree_max)
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Un champ singleline perd le focus sur Enter : on teste les deux.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        self.ui_apercu(ui);

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = sortie seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface rapport + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([80.0, 30.0], egui::Button::new("Évaluer"));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Indicateur de validité + postfixe provisoire (sans évaluer).
    fn ui_apercu(&self, ui: &mut egui::Ui) {
        let s = self.entree.trim();
        if s.is_empty() {
            return;
        }

        if !validate(s) {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "caractère non permis ou parenthèses déséquilibrées",
            );
            return;
        }

        match rpn::convert_avec(s, &self.limites) {
            Ok(p) => {
                ui.monospace(format!("postfixe : {}", format_tokens(&p)));
            }
            Err(e) => {
                ui.colored_label(ui.visuals().warn_fg_color, e.to_string());
            }
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_postfixe")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "(", ")"],
                    ["4", "5", "6", "*", "/"],
                    ["1", "2", "3", "+", "-"],
                    ["0", " ", "^", "", ""],
                ] {
                    for t in ligne {
                        if t.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, t);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_sortie(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                let contenu = if self.sortie.is_empty() {
                    "(aucun rapport)"
                } else {
                    self.sortie.as_str()
                };
                Self::champ_monospace(ui, "sortie_rapport", contenu, 8);
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str) {
        let texte = if label == " " { "espace" } else { label };
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if resp.clicked() {
            self.inserer(label);
        }
    }

    /// Évalue l’expression via le noyau, puis dépose le rapport (ou l’erreur) dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match evaluer_expression(&self.entree, &self.limites) {
            Ok(rapport) => self.set_sortie(rapport.rendu()),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
