//! Noyau — erreurs structurées
//!
//! Deux familles, séparées volontairement :
//! - [`ErreurAnalyse`] : erreurs de `parse`, porteuses d’une position
//! - [`ErreurCalcul`]  : erreurs de `calculate`, sans position (le postfixe n’en a plus)
//!
//! Les messages restent courts : la présentation (pointeur de position, langue)
//! appartient à l’appelant.

use thiserror::Error;

/// Erreurs de la pile bornée.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurPile {
    #[error("capacité de pile nulle")]
    InvalidCapacity,

    #[error("débordement de pile")]
    Overflow,

    #[error("pile vide")]
    Underflow,
}

/// Erreurs d’analyse (normalisation + lexeur + conversion postfixe).
///
/// La position est un index de caractère : dans le flux normalisé par défaut,
/// dans l’entrée brute avec `ModePosition::Source`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurAnalyse {
    #[error("caractère invalide (position {0})")]
    InvalidCharacter(usize),

    #[error("parenthèse ouvrante sans fermeture (position {0})")]
    UnmatchedOpeningParen(usize),

    #[error("parenthèse fermante sans ouverture (position {0})")]
    UnmatchedClosingParen(usize),

    /// Pile interne trop petite : n’arrive qu’avec `Reglages::capacite_fixe`.
    #[error("pile interne: {0}")]
    Pile(#[from] ErreurPile),
}

impl ErreurAnalyse {
    /// Position fautive, si l’erreur en porte une.
    pub fn position(&self) -> Option<usize> {
        match *self {
            Self::InvalidCharacter(p)
            | Self::UnmatchedOpeningParen(p)
            | Self::UnmatchedClosingParen(p) => Some(p),
            Self::Pile(_) => None,
        }
    }

    /// Même erreur, position transformée par `f`.
    pub(crate) fn map_position(self, f: impl FnOnce(usize) -> usize) -> Self {
        match self {
            Self::InvalidCharacter(p) => Self::InvalidCharacter(f(p)),
            Self::UnmatchedOpeningParen(p) => Self::UnmatchedOpeningParen(f(p)),
            Self::UnmatchedClosingParen(p) => Self::UnmatchedClosingParen(f(p)),
            Self::Pile(e) => Self::Pile(e),
        }
    }
}

/// Erreurs d’évaluation du postfixe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("identifiant inconnu: {0}")]
    UnknownIdentifier(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("racine carrée d’un nombre négatif")]
    NegativeSquareRoot,

    #[error("expression mal formée")]
    MalformedExpression,

    /// `calculate` appelé sans `parse` réussi.
    #[error("aucune expression analysée")]
    NoExpression,

    #[error("pile interne: {0}")]
    Pile(#[from] ErreurPile),
}

/// Erreur unique pour l’évaluation en une fois (`eval_expression`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Erreur {
    #[error("analyse: {0}")]
    Analyse(#[from] ErreurAnalyse),

    #[error("calcul: {0}")]
    Calcul(#[from] ErreurCalcul),
}
