// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurAnalyse;
use super::pile::Pile;
use super::reglages::Reglages;
use super::variables::Variables;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

/// Fonctions unaires reconnues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Sqrt,
}

impl Fonction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Sqrt => "sqrt",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral gardé sous forme texte jusqu’à l’évaluation.
    Num(String),

    // Variable (jamais un nom de fonction).
    Ident(String),

    Op(Op),
    Fonction(Fonction),

    LPar,
    RPar,
}

impl Tok {
    /// Nombre ou variable.
    pub fn est_operande(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::Ident(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) | Tok::Ident(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Fonction(fun) => f.write_str(fun.name()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Découpe un flux normalisé (voir `canon::normalise`) en jetons.
///
/// - parenthèses vérifiées avec une pile d’index
/// - nombres : suite maximale de chiffres et de '.' (validée seulement à l’évaluation)
/// - identifiants : [a-zA-Z][a-zA-Z0-9]*, les inconnus entrent dans `variables` à 0.0
///
/// Les positions d’erreur sont des index dans `texte`.
pub fn tokenize(
    texte: &str,
    variables: &mut Variables,
    reglages: &Reglages,
) -> Result<Vec<Tok>, ErreurAnalyse> {
    let chars: Vec<char> = texte.chars().collect();
    let mut out = Vec::new();
    let mut parentheses: Pile<usize> = Pile::new(reglages.capacite_pour(chars.len()))?;
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            parentheses.push(i)?;
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            if parentheses.is_empty() {
                return Err(ErreurAnalyse::UnmatchedClosingParen(i));
            }
            parentheses.pop()?;
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = Op::from_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Nombre : un '.' initial doit être suivi d’un chiffre ou d’une lettre
        let point_initial = c == '.'
            && chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_alphanumeric());
        if c.is_ascii_digit() || point_initial {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // Identifiants : fonction ou variable
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            match Fonction::from_name(&word) {
                Some(f) => out.push(Tok::Fonction(f)),
                None => {
                    variables.decouvrir(&word);
                    out.push(Tok::Ident(word));
                }
            }
            continue;
        }

        return Err(ErreurAnalyse::InvalidCharacter(i));
    }

    // Parenthèse ouvrante orpheline : on rapporte la plus ancienne (fond de pile)
    let mut plus_ancienne = None;
    while let Ok(pos) = parentheses.pop() {
        plus_ancienne = Some(pos);
    }
    if let Some(pos) = plus_ancienne {
        return Err(ErreurAnalyse::UnmatchedOpeningParen(pos));
    }

    Ok(out)
}

/// Format utilitaire (affichage) : jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
