// src/app/commandes.rs
//
// Soumission d’une ligne : méta-commande (":help", ":vars"...) ou expression.
//
// Contrats:
// - une ligne qui commence par ':' n’est JAMAIS évaluée comme expression
// - une commande inconnue ou mal formée => message d’erreur, environnement intact
// - une expression passe par le noyau ; l’affichage respecte la précision courante

use strum::{EnumIter, IntoEnumIterator};

use crate::noyau::environnement::PRECISION_MAX;
use crate::noyau::fonctions::{BinaryFunction, UnaryFunction};
use crate::noyau::format::{format_affectation, format_resultat, format_variables};
use crate::noyau::{evaluate, expliquer};

use super::etat::{AppCalc, Demarche};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Commande {
    Aide,
    Variables,
    Effacer,
    Precision(usize),
    Quitter,
}

impl Commande {
    fn syntaxe(self) -> &'static str {
        match self {
            Commande::Aide => ":help",
            Commande::Variables => ":vars",
            Commande::Effacer => ":clear",
            Commande::Precision(_) => ":precision N",
            Commande::Quitter => ":quit",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Commande::Aide => "cette aide",
            Commande::Variables => "liste des variables",
            Commande::Effacer => "efface les variables (garde pi et e)",
            Commande::Precision(_) => "décimales affichées (0..30)",
            Commande::Quitter => "quitte la calculatrice",
        }
    }
}

/// Reconnaît une méta-commande.
///
/// - `None` : la ligne n’est pas une commande (à évaluer)
/// - `Some(Err(msg))` : commande inconnue ou argument invalide
pub fn analyser_commande(ligne: &str) -> Option<Result<Commande, String>> {
    let reste = ligne.trim().strip_prefix(':')?;
    let mut mots = reste.split_whitespace();
    let nom = mots.next().unwrap_or("");
    let arg = mots.next();
    let en_trop = mots.next().is_some();

    let cmd = match (nom, arg) {
        ("help", None) => Ok(Commande::Aide),
        ("vars", None) => Ok(Commande::Variables),
        ("clear", None) => Ok(Commande::Effacer),
        ("quit", None) => Ok(Commande::Quitter),
        ("precision", Some(n)) if !en_trop => match n.parse::<usize>() {
            Ok(p) if p <= PRECISION_MAX => Ok(Commande::Precision(p)),
            _ => Err(format!("usage: :precision N (0..{PRECISION_MAX})")),
        },
        ("precision", _) => Err(format!("usage: :precision N (0..{PRECISION_MAX})")),
        ("help" | "vars" | "clear" | "quit", Some(_)) => {
            Err(format!(":{nom} ne prend pas d’argument"))
        }
        _ => Err(format!("commande inconnue: :{nom} (voir :help)")),
    };

    Some(cmd)
}

/// Texte d’aide (syntaxe, fonctions, constantes, commandes).
pub fn texte_aide() -> String {
    let unaires: Vec<&str> = UnaryFunction::iter().map(UnaryFunction::name).collect();
    let binaires: Vec<&str> = BinaryFunction::iter().map(BinaryFunction::name).collect();

    let mut lignes = vec![
        "Expressions : + - * / ^, parenthèses, moins unaire, 1.5e-3".to_string(),
        "Exemples    : 3*x^2 + 1, sin(pi/2), pow(2, 8), x = 5".to_string(),
        format!("Fonctions   : {} (1 arg.)", unaires.join(" ")),
        format!("              {} (2 arg.)", binaires.join(" ")),
        "Constantes  : pi e".to_string(),
        String::new(),
    ];
    for c in Commande::iter() {
        lignes.push(format!("{:<14} {}", c.syntaxe(), c.description()));
    }
    lignes.join("\n")
}

impl AppCalc {
    /// Soumet l’entrée courante (Enter ou bouton "Calculer").
    pub fn soumettre_entree(&mut self) {
        let ligne = self.entree.trim().to_string();
        if ligne.is_empty() {
            return;
        }

        match analyser_commande(&ligne) {
            Some(Ok(cmd)) => self.executer_commande(cmd),
            Some(Err(msg)) => self.set_erreur(msg),
            None => self.evaluer(&ligne),
        }
    }

    pub fn executer_commande(&mut self, cmd: Commande) {
        match cmd {
            Commande::Aide => self.set_message(texte_aide()),
            Commande::Variables => {
                let lignes = format_variables(&self.env);
                self.set_message(lignes.join("\n"));
            }
            Commande::Effacer => self.effacer_variables(),
            Commande::Precision(p) => {
                self.set_precision(p);
                self.set_message(format!("[ok] précision = {}", self.env.precision()));
            }
            Commande::Quitter => {
                self.quitter = true;
            }
        }
        self.entree.clear();
    }

    /// Évalue une expression via le noyau, puis dépose résultat + démarche dans l’état.
    fn evaluer(&mut self, ligne: &str) {
        // évaluation d’abord (seule étape qui écrit), démarche ensuite (lecture seule)
        let resultat = evaluate(ligne, &mut self.env)
            .and_then(|valeur| expliquer(ligne).map(|d| (valeur, d)));

        match resultat {
            Ok((valeur, d_noyau)) => {
                let precision = self.env.precision();
                let affiche = match &d_noyau.cible {
                    Some(nom) => format_affectation(nom, valeur, precision),
                    None => format_resultat(valeur, precision),
                };
                let d_ui = Demarche {
                    normalise: d_noyau.normalise,
                    jetons: d_noyau.jetons,
                    rpn: d_noyau.rpn,
                };
                self.set_resultat(affiche, d_ui);
            }
            Err(e) => self.set_erreur(format!("[erreur] {e}")),
        }
    }
}
