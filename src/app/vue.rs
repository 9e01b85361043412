// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter soumet (expression ou ":commande") quand le champ est focus
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Variables de session visibles (panneau repliable)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use crate::noyau::environnement::PRECISION_MAX;
use crate::noyau::format::format_variables;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("SuperCalc");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);
                self.ui_demarche(ui);
            });

        if self.quitter {
            self.quitter = false;
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sin(pi/2), pow(2,8), x=5, 3*x^2 + 1, :help")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // En egui, Enter fait perdre le focus au champ une ligne : on teste lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.soumettre_entree();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (variables comprises)",
                Action::ResetTotal,
            );

            ui.separator();

            ui.label("Précision :");
            let mut p = self.env.precision() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=PRECISION_MAX as u32)
                    .suffix(" déc."),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);
            self.bouton_insert(ui, ",", ",", InsertKind::Comma);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);
            self.bouton_insert(ui, "=", "=", InsertKind::Op);

            ui.separator();

            self.bouton_insert(ui, "pi", "pi", InsertKind::Word);
            self.bouton_insert(ui, "e", "e", InsertKind::Word);
            self.bouton_insert(ui, "sqrt", "sqrt(", InsertKind::Func);
            self.bouton_insert(ui, "sin", "sin(", InsertKind::Func);
            self.bouton_insert(ui, "cos", "cos(", InsertKind::Func);
            self.bouton_insert(ui, "tan", "tan(", InsertKind::Func);
            self.bouton_insert(ui, "pow", "pow(", InsertKind::Func);

            ui.separator();

            self.bouton_insert(ui, "x", "x", InsertKind::Word);
            self.bouton_insert(ui, "y", "y", InsertKind::Word);

            ui.add_space(10.0);

            let calc = ui.add_sized([84.0, 32.0], egui::Button::new("Calculer"));
            if calc.clicked() {
                self.soumettre_entree();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, "E", "e", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, ".", ".", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace : retire d’un coup les motifs insérés par les boutons ("sin(", "pi"...).
    fn backspace_entree(&mut self) {
        self.entree.truncate(self.entree.trim_end().len());

        for pat in ["sqrt(", "sin(", "cos(", "tan(", "pow(", "pi"] {
            if self.entree.ends_with(pat) {
                self.entree.truncate(self.entree.len() - pat.len());
                self.entree.truncate(self.entree.trim_end().len());
                return;
            }
        }

        self.entree.pop();
        self.entree.truncate(self.entree.trim_end().len());
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        if !self.message.is_empty() {
            ui.add_space(6.0);
            Self::champ_monospace(ui, "message_out", &self.message, 2);
        }
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Variables ({})", self.env.len()))
            .default_open(false)
            .show(ui, |ui| {
                let lignes = format_variables(&self.env).join("\n");
                Self::champ_monospace(ui, "variables_out", &lignes, 2);

                if ui
                    .button("Effacer les variables")
                    .on_hover_text("Garde pi et e")
                    .clicked()
                {
                    self.effacer_variables();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(
                    ui,
                    "Normalisé",
                    "demarche_normalise",
                    &self.demarche.normalise,
                );
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, sans TextEdit interactif.
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
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert, kind);
        }
    }

    /// Insertion avec espacement lisible (sans effet sur le sens de l’expression).
    fn inserer(&mut self, texte: &str, kind: InsertKind) {
        let dernier = self.entree.chars().rev().find(|c| !c.is_whitespace());

        match kind {
            InsertKind::CloseParen | InsertKind::Comma => {
                self.entree.truncate(self.entree.trim_end().len());
                self.entree.push_str(texte);
                if kind == InsertKind::Comma {
                    self.entree.push(' ');
                }
            }
            InsertKind::OpenParen | InsertKind::Func => {
                if dernier.is_some_and(|c| c.is_ascii_alphanumeric() || c == ')') {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
            }
            InsertKind::Op => {
                self.entree.truncate(self.entree.trim_end().len());
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(texte);
            }
            InsertKind::Word => {
                if !self.entree.ends_with(char::is_whitespace)
                    && dernier.is_some_and(|c| c.is_ascii_digit() || c == ')')
                {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
            }
        }

        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InsertKind {
    Digit,
    Word,
    Func,
    Op,
    Comma,
    OpenParen,
    CloseParen,
}
