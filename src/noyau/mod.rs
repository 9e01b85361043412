//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs        : tokenizer (curseur paresseux)
//! - appels.rs        : normalisation "nom(a, b)" => "(a, b) nom"
//! - operateurs.rs    : table des opérateurs (précédence, associativité, arité)
//! - fonctions.rs     : tables des fonctions unaires / binaires
//! - rpn.rs           : shunting-yard -> programme postfixé
//! - postfixe.rs      : machine à pile + affectation
//! - environnement.rs : variables de session + précision
//! - format.rs        : affichage point fixe
//! - erreur.rs        : taxonomie des erreurs
//! - eval.rs          : pipeline complet

pub mod appels;
pub mod environnement;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod postfixe;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use environnement::Environment;
pub use eval::{evaluate, expliquer};
