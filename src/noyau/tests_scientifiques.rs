//! Tests scientifiques (campagne) : propriétés du pipeline + scénarios + limites contrôlées.
//!
//! But : épingler le comportement observable de `evaluate`.
//! - précédence / associativité standard (`^` droite, moins unaire au-dessus de tout)
//! - affectation atomique (aucune mutation si le membre droit échoue)
//! - appels imbriqués : tous normalisés (sans récursion), donc `pow(2, sqrt(9))` = 8
//! - un nom de fonction reste une fonction, même après `sin = 5`
//! - stress : tailles bornées + budget temps

use std::f64::consts::{E, PI};
use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::operateurs::Operator;
use super::{evaluate, Environment};

fn eval_ok(env: &mut Environment, expr: &str) -> f64 {
    evaluate(expr, env).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_seul(expr: &str) -> f64 {
    eval_ok(&mut Environment::new(), expr)
}

fn eval_err(expr: &str) -> EvalError {
    match evaluate(expr, &mut Environment::new()) {
        Ok(v) => panic!("expr={expr:?} devait échouer, obtenu {v}"),
        Err(e) => e,
    }
}

fn assert_proche(a: f64, b: f64, expr: &str) {
    assert!((a - b).abs() < 1e-12, "expr={expr:?}: {a} != {b}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence standard ------------------------ */

#[test]
fn sci_precedence_standard() {
    let cas: [(&str, f64); 8] = [
        ("2 + 3 * 4", 14.0),
        ("2 * 3 + 4", 10.0),
        ("2 + 3 * 4 ^ 2 / 8 - 1", 7.0),
        ("100 / 10 / 5", 2.0),
        ("2 ^ 3 ^ 2", 512.0),
        ("(2 ^ 3) ^ 2", 64.0),
        ("7 - 2 - 1", 4.0),
        ("7 - (2 - 1)", 6.0),
    ];
    for (expr, attendu) in cas {
        assert_eq!(eval_seul(expr), attendu, "expr={expr:?}");
    }
}

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_seul("-3+2"), -1.0);
    assert_eq!(eval_seul("3-2"), 1.0);
    assert_eq!(eval_seul("2^-1"), 0.5);
    assert_eq!(eval_seul("2*-3"), -6.0);
    assert_eq!(eval_seul("1 - -1"), 2.0);
    assert_eq!(eval_seul("-(2+3)"), -5.0);
    // le moins unaire lie plus fort que '^' : (-3)^2
    assert_eq!(eval_seul("-3^2"), 9.0);
}

#[test]
fn sci_plus_unaire_refuse() {
    assert_eq!(eval_err("+3"), EvalError::StackUnderflow(Operator::Plus));
}

#[test]
fn sci_notation_scientifique() {
    assert_eq!(eval_seul("1e3 + 2E+2"), 1200.0);
    assert_eq!(eval_seul("5e-1 * 4"), 2.0);
    // exposant incomplet : "2e" = nombre 2 puis la constante e
    assert_eq!(eval_err("2e"), EvalError::InvalidExpression);
}

/* ------------------------ Affectation ------------------------ */

#[test]
fn sci_aller_retour_affectation() {
    for expr in ["3*4-1", "sqrt(2)", "pow(2, 0.5) / 3", "-pi^2", "e^(1/3)"] {
        let mut env = Environment::new();
        let direct = eval_ok(&mut env, expr);
        let stocke = eval_ok(&mut env, &format!("x = {expr}"));
        let relu = eval_ok(&mut env, "x");
        assert_eq!(direct.to_bits(), stocke.to_bits(), "expr={expr:?}");
        assert_eq!(direct.to_bits(), relu.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn sci_scenario_variable() {
    let mut env = Environment::new();
    assert_eq!(eval_ok(&mut env, "x=5"), 5.0);
    assert_eq!(eval_ok(&mut env, "3*x^2+1"), 76.0);

    // écrasement
    assert_eq!(eval_ok(&mut env, "x = x + 1"), 6.0);
    assert_eq!(env.get("x"), Some(6.0));
}

#[test]
fn sci_affectation_atomique() {
    let mut env = Environment::new();
    eval_ok(&mut env, "x = 2");
    let avant = env.clone();

    assert_eq!(evaluate("x = 1/0", &mut env), Err(EvalError::DivisionByZero));
    assert_eq!(
        evaluate("x = y + 1", &mut env),
        Err(EvalError::UndefinedVariable("y".into()))
    );
    assert_eq!(evaluate("x = (1", &mut env), Err(EvalError::UnbalancedParens));
    assert_eq!(env, avant);
}

#[test]
fn sci_affectations_invalides() {
    assert_eq!(eval_err("x = y = 3"), EvalError::InvalidAssignment);
    assert_eq!(eval_err("2 = 3"), EvalError::InvalidAssignment);
    assert_eq!(eval_err("x ="), EvalError::InvalidAssignment);
    assert_eq!(eval_err("x + 1 = 3"), EvalError::InvalidAssignment);
    assert_eq!(eval_err("(x = 3)"), EvalError::InvalidAssignment);
    assert_eq!(eval_err("-x = 3"), EvalError::InvalidAssignment);
    assert_eq!(eval_err("--y = 4"), EvalError::InvalidAssignment);

    // refus sans écriture
    let mut env = Environment::new();
    assert_eq!(evaluate("-x = 3", &mut env), Err(EvalError::InvalidAssignment));
    assert_eq!(env.get("x"), None);
}

#[test]
fn sci_reset_idempotent() {
    let mut env = Environment::new();
    eval_ok(&mut env, "a = 1");
    eval_ok(&mut env, "pi = 3");

    env.reset();
    env.reset();

    let noms: Vec<&str> = env.variables().map(|(n, _)| n).collect();
    assert_eq!(noms, vec!["e", "pi"]);
    assert_eq!(eval_ok(&mut env, "pi"), PI);
    assert_eq!(eval_ok(&mut env, "e"), E);
    assert_eq!(
        evaluate("a", &mut env),
        Err(EvalError::UndefinedVariable("a".into()))
    );
}

/* ------------------------ Division / parenthèses ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(eval_err("1/0"), EvalError::DivisionByZero);
    assert_eq!(eval_err("1/(2-2)"), EvalError::DivisionByZero);
    assert_eq!(eval_err("1/-0"), EvalError::DivisionByZero);
    assert_eq!(eval_seul("0/1"), 0.0);
}

#[test]
fn sci_parentheses_desequilibrees() {
    assert_eq!(eval_err("(1+2"), EvalError::UnbalancedParens);
    assert_eq!(eval_err("1+2)"), EvalError::UnbalancedParens);
    assert_eq!(eval_err("((1)"), EvalError::UnbalancedParens);
    assert_eq!(eval_err("sqrt(4"), EvalError::UnbalancedParens);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_scenarios_fonctions() {
    assert_eq!(eval_seul("pow(2,8)"), 256.0);
    assert_eq!(eval_seul("sqrt(16)"), 4.0);
    assert_proche(eval_seul("sin(pi/2)"), 1.0, "sin(pi/2)");
    assert_proche(eval_seul("cos(0) + tan(0)"), 1.0, "cos(0) + tan(0)");
    assert_proche(eval_seul("ln(e) + log(e)"), 2.0, "ln(e) + log(e)");
    assert_proche(eval_seul("log10(1000)"), 3.0, "log10(1000)");
    assert_proche(eval_seul("cbrt(27)"), 3.0, "cbrt(27)");
    assert_proche(eval_seul("exp(0) + asin(1)*2/pi"), 2.0, "exp(0) + asin(1)*2/pi");
    assert_eq!(eval_seul("round(2.5) + ceil(0.1) + floor(-0.1)"), 3.0);
}

#[test]
fn sci_fonction_prioritaire_sur_variable() {
    let mut env = Environment::new();

    // la cible d’une affectation est toujours une variable
    assert_eq!(eval_ok(&mut env, "sin = 5"), 5.0);
    assert_eq!(env.get("sin"), Some(5.0));

    // l’appel invoque toujours la fonction
    assert_eq!(eval_ok(&mut env, "sin(1)"), 1.0_f64.sin());

    // et le nom seul reste une fonction sans argument
    assert_eq!(
        evaluate("sin + 1", &mut env),
        Err(EvalError::MissingArgument("sin"))
    );
}

#[test]
fn sci_appels_imbriques() {
    // chaque argument est réécrit, à toute profondeur
    assert_eq!(eval_seul("pow(2, sqrt(9))"), 8.0);
    assert_eq!(eval_seul("sqrt(pow(3, 2) + pow(4, 2))"), 5.0);
    assert_eq!(eval_seul("abs(-pow(2, abs(-3)))"), 8.0);
}

#[test]
fn sci_arguments_manquants() {
    assert_eq!(eval_err("pow(2)"), EvalError::MissingArgument("pow"));
    assert_eq!(eval_err("cos()"), EvalError::MissingArgument("cos"));
}

#[test]
fn sci_virgule_hors_appel() {
    assert_eq!(eval_err("1, 2"), EvalError::MisplacedSeparator);
    // groupe avec virgule : deux valeurs restent
    assert_eq!(eval_err("(1, 2)"), EvalError::InvalidExpression);
}

#[test]
fn sci_variable_inconnue() {
    assert_eq!(
        eval_err("2 * inconnue"),
        EvalError::UndefinedVariable("inconnue".into())
    );
    // sensible à la casse
    assert_eq!(eval_err("PI"), EvalError::UndefinedVariable("PI".into()));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 5000].join(" + ");
    assert_eq!(eval_seul(&expr), 5000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 2000;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_seul(&expr), 7.0);

    let expr = format!("{}1", "-".repeat(1001));
    assert_eq!(eval_seul(&expr), -1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_appels_imbriques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let n = 10_000;
    let expr = format!("{}16{}", "abs(".repeat(n), ")".repeat(n));
    assert_eq!(eval_seul(&expr), 16.0);

    // imbrication côté second argument
    let n = 2_000;
    let expr = format!("{}4{}", "pow(1, ".repeat(n), ")".repeat(n));
    assert_eq!(eval_seul(&expr), 1.0);
    budget(t0, max);
}
