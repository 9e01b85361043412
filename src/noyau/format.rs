// src/noyau/format.rs
//
// Affichage des valeurs : point fixe, `precision` décimales.

use super::environnement::Environment;

/// Valeur en point fixe (ex: 76 avec 3 => "76.000").
pub fn format_valeur(valeur: f64, precision: usize) -> String {
    format!("{valeur:.precision$}")
}

/// Ligne de résultat : "= 76.0000000000".
pub fn format_resultat(valeur: f64, precision: usize) -> String {
    format!("= {}", format_valeur(valeur, precision))
}

/// Confirmation d’affectation : "[ok] x = 5.00".
pub fn format_affectation(nom: &str, valeur: f64, precision: usize) -> String {
    format!("[ok] {nom} = {}", format_valeur(valeur, precision))
}

/// Une ligne "nom = valeur" par variable, triées par nom.
pub fn format_variables(env: &Environment) -> Vec<String> {
    env.variables()
        .map(|(nom, v)| format!("{nom} = {}", format_valeur(v, env.precision())))
        .collect()
}
