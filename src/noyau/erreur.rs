// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque erreur termine l’évaluation de la ligne courante, rien n’est récupéré
// en interne : l’appelant affiche le message et continue.

use thiserror::Error;

use super::operateurs::Operator;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Caractère non reconnu par le tokenizer.
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    Lex { caractere: char, position: usize },

    #[error("parenthèses déséquilibrées")]
    UnbalancedParens,

    /// Virgule sans groupe ni appel englobant.
    #[error("virgule hors contexte")]
    MisplacedSeparator,

    #[error("affectation invalide, forme attendue: nom = expression")]
    InvalidAssignment,

    #[error("variable non définie: {0}")]
    UndefinedVariable(String),

    #[error("argument manquant pour la fonction {0}")]
    MissingArgument(&'static str),

    #[error("pile insuffisante pour l’opérateur {0}")]
    StackUnderflow(Operator),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("expression invalide")]
    InvalidExpression,
}

pub type EvalResult<T> = Result<T, EvalError>;
