// src/noyau/operateurs.rs
//
// Table statique des opérateurs : précédence, associativité, arité.
// Le moins unaire est un opérateur distinct ("u-"), le plus prioritaire.

use strum::{Display, EnumIter};

use super::erreur::{EvalError, EvalResult};
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Plus grand = lie plus fort.
    pub precedence: u8,
    pub associativity: Associativity,
    pub arity: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Minus,
    #[strum(to_string = "*")]
    Times,
    #[strum(to_string = "/")]
    Divide,
    #[strum(to_string = "^")]
    Power,
    #[strum(to_string = "u-")]
    Negate,
}

impl Operator {
    pub const fn info(self) -> OperatorInfo {
        use Associativity::*;

        let (precedence, associativity, arity) = match self {
            Operator::Plus | Operator::Minus => (1, Left, 2),
            Operator::Times | Operator::Divide => (2, Left, 2),
            Operator::Power => (3, Right, 2),
            Operator::Negate => (4, Right, 1),
        };

        OperatorInfo {
            precedence,
            associativity,
            arity,
        }
    }

    pub const fn arity(self) -> usize {
        self.info().arity
    }

    /// Opérateur binaire correspondant à un jeton, avec re-étiquetage du
    /// moins en moins unaire quand une opérande est attendue.
    pub fn from_tok(tok: &Tok, attend_operande: bool) -> Option<Self> {
        let op = match tok {
            Tok::Plus => Operator::Plus,
            Tok::Minus if attend_operande => Operator::Negate,
            Tok::Minus => Operator::Minus,
            Tok::Star => Operator::Times,
            Tok::Slash => Operator::Divide,
            Tok::Caret => Operator::Power,
            _ => return None,
        };
        Some(op)
    }

    /// `top` (sommet de pile) doit-il sortir avant d’empiler `self` ?
    /// Égalité : sort pour un opérateur gauche, reste pour un opérateur droit.
    pub fn cede_a(self, top: Operator) -> bool {
        let nouveau = self.info();
        let haut = top.info();
        match nouveau.associativity {
            Associativity::Left => nouveau.precedence <= haut.precedence,
            Associativity::Right => nouveau.precedence < haut.precedence,
        }
    }

    /// Applique l’opérateur aux opérandes, dans l’ordre gauche -> droite.
    pub fn apply(self, operandes: &[f64]) -> EvalResult<f64> {
        match (self, operandes) {
            (Operator::Negate, [a]) => Ok(-a),
            (Operator::Plus, [a, b]) => Ok(a + b),
            (Operator::Minus, [a, b]) => Ok(a - b),
            (Operator::Times, [a, b]) => Ok(a * b),
            (Operator::Divide, [a, b]) => {
                if *b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
            (Operator::Power, [a, b]) => Ok(a.powf(*b)),
            _ => Err(EvalError::StackUnderflow(self)),
        }
    }
}
