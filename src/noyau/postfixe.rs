// src/noyau/postfixe.rs
//
// Machine à pile : exécute un programme postfixé contre un Environment.
// Une seule passe, de gauche à droite. L’environnement n’est modifié
// qu’après évaluation réussie du membre droit d’une affectation.

use log::info;

use super::environnement::Environment;
use super::erreur::{EvalError, EvalResult};
use super::rpn::Node;

/// Évalue un programme postfixé.
///
/// - Sans `Assignment` : retourne l’unique valeur restante.
/// - Avec : la forme doit être exactement `[Variable(nom), Assignment, rhs...]`,
///   la valeur du membre droit est stockée sous `nom` puis retournée.
pub fn eval_rpn(rpn: &[Node], env: &mut Environment) -> EvalResult<f64> {
    let est_affectation = |n: &Node| matches!(n, Node::Assignment);

    if !rpn.iter().any(est_affectation) {
        return executer(rpn, env);
    }

    match rpn {
        [Node::Variable(nom), Node::Assignment, rhs @ ..]
            if !rhs.is_empty() && !rhs.iter().any(est_affectation) =>
        {
            let valeur = executer(rhs, env)?;
            env.set(nom, valeur);
            info!("affectation: {nom} = {valeur}");
            Ok(valeur)
        }
        _ => Err(EvalError::InvalidAssignment),
    }
}

fn executer(rpn: &[Node], env: &Environment) -> EvalResult<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for noeud in rpn {
        match noeud {
            Node::Number(v) => pile.push(*v),

            Node::Variable(nom) => {
                let v = env
                    .get(nom)
                    .ok_or_else(|| EvalError::UndefinedVariable(nom.clone()))?;
                pile.push(v);
            }

            Node::Function(f) => {
                let arite = f.arity();
                if pile.len() < arite {
                    return Err(EvalError::MissingArgument(f.name()));
                }
                // split_off garde l’ordre source : le sommet est l’argument de droite
                let args = pile.split_off(pile.len() - arite);
                pile.push(f.apply(&args)?);
            }

            Node::Operator(op) => {
                let arite = op.arity();
                if pile.len() < arite {
                    return Err(EvalError::StackUnderflow(*op));
                }
                let operandes = pile.split_off(pile.len() - arite);
                pile.push(op.apply(&operandes)?);
            }

            Node::ArgumentSeparator => {}

            Node::Assignment => return Err(EvalError::InvalidAssignment),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidExpression),
    }
}
