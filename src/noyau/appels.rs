// src/noyau/appels.rs
//
// Normalisation des appels de fonction (réécriture texte)
// ------------------------------------------------------
// `nom(a1, a2, ...)`  =>  `(a1, a2, ...) nom`
//
// Le nom de fonction passe APRÈS sa liste d’arguments : une fois les arguments
// parsés, l’identifiant final se comporte comme un opérateur postfixé.
//
// Règles:
// - les virgules ne coupent qu’au niveau 1 (juste dans les parenthèses de l’appel)
// - les appels imbriqués sont réécrits aussi (`pow(2, sqrt(9))`)
// - les arguments restent séparés par ", " : la virgule ferme l’argument au parse
//   (sinon `pow(2+1, 3)` ou `pow(2, -3)` se mélangent)
// - parenthèse fermante manquante dans un appel => UnbalancedParens
//
// Une seule passe, sans récursion : les appels ouverts vivent sur une pile
// explicite et le texte sort directement dans `out`.

use log::trace;

use super::erreur::{EvalError, EvalResult};
use super::jetons::{est_debut_ident, fin_ident, fin_nombre};

/// Appel en cours de réécriture.
struct Appel<'a> {
    nom: &'a str,
    /// Début (dans `out`) de l’argument courant.
    debut_arg: usize,
    /// Parenthèses simples ouvertes dans l’argument courant.
    profondeur: usize,
    nb_args: usize,
}

pub fn normaliser_appels(entree: &str) -> EvalResult<String> {
    let octets = entree.as_bytes();
    let mut out = String::with_capacity(entree.len() + 16);
    let mut appels: Vec<Appel> = Vec::new();
    let mut i = 0;

    while i < octets.len() {
        let c = octets[i];

        // Littéral numérique copié d’un bloc (le 'e' d’un exposant n’est pas un nom)
        if c.is_ascii_digit() {
            let fin = fin_nombre(octets, i);
            out.push_str(&entree[i..fin]);
            i = fin;
            continue;
        }

        if est_debut_ident(c) {
            let fin_nom = fin_ident(octets, i);
            let nom = &entree[i..fin_nom];

            let mut k = fin_nom;
            while octets.get(k).is_some_and(u8::is_ascii_whitespace) {
                k += 1;
            }

            if octets.get(k) == Some(&b'(') {
                out.push('(');
                appels.push(Appel {
                    nom,
                    debut_arg: out.len(),
                    profondeur: 0,
                    nb_args: 1,
                });
                i = k + 1;
            } else {
                out.push_str(nom);
                i = fin_nom;
            }
            continue;
        }

        if let Some(appel) = appels.last_mut() {
            match c {
                b'(' => appel.profondeur += 1,
                b')' if appel.profondeur > 0 => appel.profondeur -= 1,
                b')' => {
                    let (nom, nb_args) = (appel.nom, appel.nb_args);
                    fermer_argument(&mut out, appel.debut_arg);
                    appels.pop();

                    out.push_str(") ");
                    out.push_str(nom);
                    trace!("appel normalisé: {nom} ({nb_args} argument(s))");
                    i += 1;
                    continue;
                }
                b',' if appel.profondeur == 0 => {
                    fermer_argument(&mut out, appel.debut_arg);
                    out.push_str(", ");
                    appel.debut_arg = out.len();
                    appel.nb_args += 1;
                    i += 1;
                    continue;
                }
                // blancs en tête d’argument
                c if c.is_ascii_whitespace() && out.len() == appel.debut_arg => {
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }

        // Tout le reste est recopié tel quel (caractère complet, UTF-8 compris)
        match entree[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    if !appels.is_empty() {
        return Err(EvalError::UnbalancedParens);
    }

    Ok(out)
}

/// Retire les blancs de fin de l’argument courant (sans entamer ce qui précède).
fn fermer_argument(out: &mut String, debut_arg: usize) {
    let fin = out.trim_end().len().max(debut_arg);
    out.truncate(fin);
}
