//! Noyau — évaluation (pipeline réel)
//!
//! texte -> normalisation des appels -> jetons -> RPN (shunting-yard) -> machine à pile
//!
//! Une ligne échoue en bloc : aucun résultat partiel, et l’environnement
//! n’est modifié que si tout le membre droit d’une affectation a réussi.

use log::debug;

use super::appels::normaliser_appels;
use super::environnement::Environment;
use super::erreur::EvalResult;
use super::jetons::{format_tokens, tokenize, Lexer};
use super::postfixe::eval_rpn;
use super::rpn::{format_rpn, to_rpn, Node};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
    /// Variable affectée par la ligne, s’il y en a une.
    pub cible: Option<String>,
}

/// API publique : évalue une ligne contre l’environnement de session.
pub fn evaluate(ligne: &str, env: &mut Environment) -> EvalResult<f64> {
    let (_normalise, rpn) = compiler(ligne)?;
    eval_rpn(&rpn, env)
}

/// Démarche d’une ligne (étapes intermédiaires), sans toucher à l’environnement.
pub fn expliquer(ligne: &str) -> EvalResult<DemarcheNoyau> {
    let (normalise, rpn) = compiler(ligne)?;
    let jetons = tokenize(&normalise)?;

    let cible = match rpn.as_slice() {
        [Node::Variable(nom), Node::Assignment, ..] => Some(nom.clone()),
        _ => None,
    };

    Ok(DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        normalise,
        cible,
    })
}

/// Texte -> (forme normalisée, programme postfixé).
fn compiler(ligne: &str) -> EvalResult<(String, Vec<Node>)> {
    // 1) Lexique vérifié sur la ligne brute : une position d’erreur
    //    désigne un octet de ce que l’utilisateur a tapé
    Lexer::new(ligne).try_for_each(|tok| tok.map(drop))?;

    // 2) Appels "nom(a, b)" => "(a, b) nom"
    let normalise = normaliser_appels(ligne.trim())?;
    debug!("normalisé: {normalise}");

    // 3) RPN
    let rpn = to_rpn(&normalise)?;
    Ok((normalise, rpn))
}
