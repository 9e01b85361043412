// src/noyau/rpn.rs
//
// Shunting-yard -> programme postfixé (suite de Node)
// Objectif:
// - Consommer les jetons du texte normalisé (voir appels.rs)
// - Produire une suite plate de Node, évaluée de gauche à droite
//
// Règles:
// - Ident(name):
//    - suivi de '='              => Variable (cible d’affectation, jamais une fonction)
//    - name ∈ tables de fonctions => Function (résolue ici, une seule fois)
//        - suivi de '('          => marque de fonction sur la pile, sortie après ')'
//        - sinon                 => sortie directe (forme normalisée "(args) name")
//    - sinon                     => Variable
// - Moins unaire: un '-' est unaire ssi une opérande est attendue
//   (début, après '(' ',' '=' ou un opérateur) => Operator::Negate
// - '=' : admis seulement derrière un nom seul (sortie = [Variable], pile vide)
//   Node::Assignment sort tout de suite, une barrière reste sur la pile
//   (jamais dépilée par précédence : le membre droit consomme tout)

use log::debug;

use super::erreur::{EvalError, EvalResult};
use super::fonctions::Function;
use super::jetons::{Lexer, Tok};
use super::operateurs::Operator;

/// Une instruction du programme postfixé.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Number(f64),
    Variable(String),
    Function(Function),
    Operator(Operator),
    /// Inerte à l’évaluation (simple trace de la forme des arguments).
    ArgumentSeparator,
    Assignment,
}

/// Contenu de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Marque {
    Op(Operator),
    LPar,
    Fonction(Function),
    Affectation,
}

/// Convertit une source (déjà normalisée ou non) en programme postfixé.
///
/// Exemple:
///   source: "(pi/2) sin"
///   rpn:    [Variable(pi), Number(2), Operator(/), Function(sin)]
pub fn to_rpn(source: &str) -> EvalResult<Vec<Node>> {
    let mut jetons = Lexer::new(source).peekable();
    let mut out: Vec<Node> = Vec::new();
    let mut ops: Vec<Marque> = Vec::new();

    // État explicite pour le moins unaire.
    let mut attend_operande = true;

    while let Some(tok) = jetons.next() {
        match tok? {
            Tok::Num(v) => {
                out.push(Node::Number(v));
                attend_operande = false;
            }

            Tok::Ident(name) => {
                let avant_affectation = matches!(jetons.peek(), Some(Ok(Tok::Assign)));
                let avant_parenthese = matches!(jetons.peek(), Some(Ok(Tok::LPar)));

                match Function::resolve(&name) {
                    Some(f) if !avant_affectation => {
                        if avant_parenthese {
                            // appel brut "name(...)" : la fonction attend sa parenthèse
                            ops.push(Marque::Fonction(f));
                            attend_operande = true;
                        } else {
                            out.push(Node::Function(f));
                            attend_operande = false;
                        }
                    }
                    _ => {
                        out.push(Node::Variable(name));
                        attend_operande = false;
                    }
                }
            }

            Tok::LPar => {
                ops.push(Marque::LPar);
                attend_operande = true;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Marque::LPar) => break,
                        Some(Marque::Op(op)) => out.push(Node::Operator(op)),
                        Some(Marque::Fonction(f)) => out.push(Node::Function(f)),
                        Some(Marque::Affectation) | None => {
                            return Err(EvalError::UnbalancedParens)
                        }
                    }
                }

                // si une fonction attendait cette parenthèse, elle sort aussi
                if let Some(&Marque::Fonction(f)) = ops.last() {
                    ops.pop();
                    out.push(Node::Function(f));
                }

                attend_operande = false;
            }

            Tok::Comma => {
                loop {
                    match ops.last() {
                        Some(&Marque::Op(op)) => {
                            ops.pop();
                            out.push(Node::Operator(op));
                        }
                        Some(Marque::LPar) => break,
                        Some(Marque::Fonction(_) | Marque::Affectation) | None => {
                            return Err(EvalError::MisplacedSeparator)
                        }
                    }
                }

                out.push(Node::ArgumentSeparator);
                attend_operande = true;
            }

            Tok::Assign => {
                // seule forme admise avant '=' : un nom seul, pile vide
                // (refuse "-x = 3", "(x = 1)", "x + 1 = 2", "x = y = 3")
                let cible_seule = matches!(out.as_slice(), [Node::Variable(_)]);
                if !ops.is_empty() || !cible_seule {
                    return Err(EvalError::InvalidAssignment);
                }

                out.push(Node::Assignment);
                ops.push(Marque::Affectation);
                attend_operande = true;
            }

            Tok::End => break,

            tok => {
                let Some(op) = Operator::from_tok(&tok, attend_operande) else {
                    return Err(EvalError::InvalidExpression);
                };

                // dépile tant que:
                // - on n'est pas bloqué par '(' / une fonction / la barrière '='
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(&Marque::Op(top)) = ops.last() {
                    if !op.cede_a(top) {
                        break;
                    }
                    ops.pop();
                    out.push(Node::Operator(top));
                }

                ops.push(Marque::Op(op));
                attend_operande = true;
            }
        }
    }

    // vide la pile ops
    while let Some(m) = ops.pop() {
        match m {
            Marque::LPar => return Err(EvalError::UnbalancedParens),
            Marque::Op(op) => out.push(Node::Operator(op)),
            Marque::Fonction(f) => out.push(Node::Function(f)),
            Marque::Affectation => {}
        }
    }

    debug!("postfixe: {}", format_rpn(&out));
    Ok(out)
}

/// Format utilitaire (démarche) : programme postfixé en texte.
pub fn format_rpn(rpn: &[Node]) -> String {
    let mut out = Vec::with_capacity(rpn.len());
    for n in rpn {
        let s = match n {
            Node::Number(v) => format!("{v}"),
            Node::Variable(name) => name.clone(),
            Node::Function(f) => f.name().to_string(),
            Node::Operator(op) => op.to_string(),
            Node::ArgumentSeparator => ",".to_string(),
            Node::Assignment => "=".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
