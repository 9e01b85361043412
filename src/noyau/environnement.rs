// src/noyau/environnement.rs
//
// Environnement de session : variables nommées + précision d’affichage.
// Un seul par session, passé explicitement (pas d’état global).

use std::collections::BTreeMap;
use std::f64::consts::{E, PI};

use log::info;

/// Précision d’affichage par défaut (décimales).
pub const PRECISION_DEFAUT: usize = 10;

/// Garde-fou : précision bornée 0..=30.
pub const PRECISION_MAX: usize = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    // trié par nom => listing déterministe
    variables: BTreeMap<String, f64>,
    precision: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Nouvel environnement, pré-rempli avec `pi` et `e`.
    pub fn new() -> Self {
        let mut env = Self {
            variables: BTreeMap::new(),
            precision: PRECISION_DEFAUT,
        };
        env.semer_constantes();
        env
    }

    fn semer_constantes(&mut self) {
        self.variables.insert("pi".to_string(), PI);
        self.variables.insert("e".to_string(), E);
    }

    /// Efface toutes les variables puis remet `pi` et `e`.
    /// La précision n’est pas touchée.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.semer_constantes();
        info!("variables effacées");
    }

    pub fn get(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    /// Crée ou écrase.
    pub fn set(&mut self, nom: &str, valeur: f64) {
        self.variables.insert(nom.to_string(), valeur);
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Limite la précision (0..=PRECISION_MAX).
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.min(PRECISION_MAX);
    }
}
