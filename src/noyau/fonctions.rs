// src/noyau/fonctions.rs
//
// Tables de fonctions (immuables) : unaires f64 -> f64, binaires (f64, f64) -> f64.
// Résolution par nom une seule fois, au parsing.

use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoStaticStr};

use super::erreur::{EvalError, EvalResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Cbrt,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Ln,
    Log,
    Log10,
}

impl UnaryFunction {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn apply(self, x: f64) -> f64 {
        use UnaryFunction::*;
        match self {
            Sin => x.sin(),
            Cos => x.cos(),
            Tan => x.tan(),
            Asin => x.asin(),
            Acos => x.acos(),
            Atan => x.atan(),
            Sqrt => x.sqrt(),
            Cbrt => x.cbrt(),
            Exp => x.exp(),
            Abs => x.abs(),
            Floor => x.floor(),
            Ceil => x.ceil(),
            Round => x.round(),
            // log = logarithme naturel (alias de ln)
            Ln | Log => x.ln(),
            Log10 => x.log10(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BinaryFunction {
    Pow,
}

impl BinaryFunction {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn apply(self, gauche: f64, droite: f64) -> f64 {
        match self {
            BinaryFunction::Pow => gauche.powf(droite),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Unary(UnaryFunction),
    Binary(BinaryFunction),
}

impl Function {
    /// Cherche d’abord la table unaire, puis la table binaire.
    /// `None` => l’identifiant désigne une variable.
    pub fn resolve(nom: &str) -> Option<Self> {
        if let Ok(f) = UnaryFunction::from_str(nom) {
            return Some(Function::Unary(f));
        }
        BinaryFunction::from_str(nom).ok().map(Function::Binary)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Unary(f) => f.name(),
            Function::Binary(f) => f.name(),
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Function::Unary(_) => 1,
            Function::Binary(_) => 2,
        }
    }

    /// `args` dans l’ordre source (gauche à droite), exactement `arity()` valeurs.
    pub fn apply(self, args: &[f64]) -> EvalResult<f64> {
        match (self, args) {
            (Function::Unary(f), &[x]) => Ok(f.apply(x)),
            (Function::Binary(f), &[a, b]) => Ok(f.apply(a, b)),
            _ => Err(EvalError::MissingArgument(self.name())),
        }
    }
}
