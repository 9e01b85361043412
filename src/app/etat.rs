//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! environnement de session) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau est appelé depuis commandes.rs).
//! - Actions déterministes, sans effet de bord caché.
//! - L’environnement est possédé par l’état : une session = un Environment.

use crate::noyau::environnement::PRECISION_DEFAUT;
use crate::noyau::Environment;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "= 76.0000000000" ou "[ok] x = 5.0000000000"
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)
    pub message: String,  // retour des commandes (:help, :vars, :clear...)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- session ---
    pub env: Environment,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // Posé par :quit, consommé par la vue.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            message: String::new(),
            demarche: Demarche::default(),
            env: Environment::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + variables + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.env = Environment::new();
        self.env.set_precision(PRECISION_DEFAUT);
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + message + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.message.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Variables : retour à {pi, e}.
    pub fn effacer_variables(&mut self) {
        self.env.reset();
        self.set_message("[ok] variables effacées");
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.message.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (ligne affichée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.message.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : retour d’une commande (ne touche pas au dernier résultat).
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.erreur.clear();
        self.message = msg.into();
        self.focus_entree = true;
    }

    /// Garde-fou : la précision est bornée par l’environnement (0..=30).
    pub fn set_precision(&mut self, precision: usize) {
        self.env.set_precision(precision);
        self.focus_entree = true;
    }
}
