// src/noyau/canon.rs
//
// Normalisation de l’entrée brute (avant le lexeur) :
// - suppression des espaces
// - signe unaire réécrit en binaire depuis zéro : "-x" => "0-x", "(+a)" => "(0+a)"
// - rejet immédiat de tout caractère hors alphabet
//
// Le drapeau `attend_operande` n’est PAS remis à faux après un "0" inséré :
// "--x" => "0-0-x" (soit -x), "2*-3" => "2*0-3" (soit -3).

use super::erreur::ErreurAnalyse;
use super::reglages::ModePosition;

/// Flux normalisé + origine de chaque caractère dans l’entrée brute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalise {
    pub texte: String,
    /// `origines[i]` = index (en caractères) dans l’entrée du caractère normalisé `i`.
    /// Un "0" inséré pointe sur le signe qui l’a provoqué.
    pub origines: Vec<usize>,
}

impl Normalise {
    fn with_capacity(n: usize) -> Self {
        Self {
            texte: String::with_capacity(n * 2),
            origines: Vec::with_capacity(n * 2),
        }
    }

    fn emet(&mut self, c: char, origine: usize) {
        self.texte.push(c);
        self.origines.push(origine);
    }

    /// Index dans l’entrée d’une position du flux normalisé.
    /// Au-delà de la fin : une position après le dernier caractère connu.
    pub fn origine(&self, pos: usize) -> usize {
        match self.origines.get(pos) {
            Some(&o) => o,
            None => self.origines.last().map_or(0, |&o| o + 1),
        }
    }
}

/// Normalise `expr`.
///
/// Exemple:
///   " -a * (+2)"  =>  "0-a*(0+2)"
pub fn normalise(expr: &str, mode: ModePosition) -> Result<Normalise, ErreurAnalyse> {
    let mut out = Normalise::with_capacity(expr.len());
    let mut attend_operande = true;

    for (i, c) in expr.chars().enumerate() {
        match c {
            c if c.is_ascii_whitespace() => {}

            '+' | '-' => {
                if attend_operande {
                    out.emet('0', i);
                } else {
                    attend_operande = true;
                }
                out.emet(c, i);
            }

            '(' | '*' | '/' | '^' => {
                out.emet(c, i);
                attend_operande = true;
            }

            ')' => {
                out.emet(c, i);
                attend_operande = false;
            }

            c if c.is_ascii_alphanumeric() || c == '.' => {
                out.emet(c, i);
                attend_operande = false;
            }

            _ => {
                let pos = match mode {
                    // compat : longueur de la sortie déjà produite
                    ModePosition::Normalisee => out.origines.len(),
                    ModePosition::Source => i,
                };
                return Err(ErreurAnalyse::InvalidCharacter(pos));
            }
        }
    }

    Ok(out)
}
