// src/noyau/jetons.rs

use super::erreur::{EvalError, EvalResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes + variables : un seul espace de noms.
    // NOTE: c’est le parse qui décidera si c’est une fonction ou une variable.
    Ident(String),

    LPar,
    RPar,
    Comma,

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    Assign, // =

    End,
}

/// Tokenizer paresseux : un jeton à la fois depuis un curseur (octets).
/// Le curseur avance toujours, jamais de retour arrière.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    fini: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            fini: false,
        }
    }

    /// Jeton suivant. Retourne `Tok::End` (indéfiniment) une fois la source épuisée.
    pub fn next_tok(&mut self) -> EvalResult<Tok> {
        let octets = self.source.as_bytes();

        while self.pos < octets.len() && octets[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        let Some(&c) = octets.get(self.pos) else {
            return Ok(Tok::End);
        };

        // Nombre : chiffres, un point au plus, exposant optionnel
        if c.is_ascii_digit() || c == b'.' {
            let debut = self.pos;
            let fin = fin_nombre(octets, debut);
            let texte = &self.source[debut..fin];

            // "." tout seul n’est pas un nombre
            let erreur = EvalError::Lex {
                caractere: '.',
                position: debut,
            };
            if !texte.bytes().any(|b| b.is_ascii_digit()) {
                return Err(erreur);
            }
            let valeur = texte.parse::<f64>().map_err(|_| erreur)?;

            self.pos = fin;
            return Ok(Tok::Num(valeur));
        }

        // Identifiants ASCII : [A-Za-z_][A-Za-z0-9_]* (sensibles à la casse)
        if est_debut_ident(c) {
            let debut = self.pos;
            self.pos = fin_ident(octets, debut);
            return Ok(Tok::Ident(self.source[debut..self.pos].to_string()));
        }

        let tok = match c {
            b'(' => Tok::LPar,
            b')' => Tok::RPar,
            b',' => Tok::Comma,
            b'+' => Tok::Plus,
            b'-' => Tok::Minus,
            b'*' => Tok::Star,
            b'/' => Tok::Slash,
            b'^' => Tok::Caret,
            b'=' => Tok::Assign,
            _ => {
                // le curseur est toujours sur une frontière de caractère
                let caractere = self.source[self.pos..].chars().next().unwrap_or('?');
                return Err(EvalError::Lex {
                    caractere,
                    position: self.pos,
                });
            }
        };

        self.pos += 1;
        Ok(tok)
    }
}

/// Itération jusqu’à `End` (exclu). S’arrête après la première erreur.
impl Iterator for Lexer<'_> {
    type Item = EvalResult<Tok>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini {
            return None;
        }
        match self.next_tok() {
            Ok(Tok::End) => {
                self.fini = true;
                None
            }
            Ok(tok) => Some(Ok(tok)),
            Err(e) => {
                self.fini = true;
                Some(Err(e))
            }
        }
    }
}

pub(crate) fn est_debut_ident(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

pub(crate) fn fin_ident(octets: &[u8], debut: usize) -> usize {
    let mut i = debut + 1;
    while octets
        .get(i)
        .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
    {
        i += 1;
    }
    i
}

/// Fin (exclue) d’un littéral numérique commençant à `debut`.
/// L’exposant n’est consommé que s’il est suivi d’au moins un chiffre.
pub(crate) fn fin_nombre(octets: &[u8], debut: usize) -> usize {
    let mut i = debut;
    let mut point_vu = false;
    let mut chiffre_vu = false;

    while let Some(&c) = octets.get(i) {
        if c.is_ascii_digit() {
            chiffre_vu = true;
        } else if c == b'.' && !point_vu {
            point_vu = true;
        } else {
            break;
        }
        i += 1;
    }

    if chiffre_vu && matches!(octets.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(octets.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let debut_exposant = j;
        while octets.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > debut_exposant {
            i = j;
        }
    }

    i
}

/// Tokenize une chaîne entière (sans le `End` final).
pub fn tokenize(s: &str) -> EvalResult<Vec<Tok>> {
    Lexer::new(s).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Assign => "=".to_string(),

            Tok::End => continue,
        };
        out.push(s);
    }
    out.join(" ")
}
