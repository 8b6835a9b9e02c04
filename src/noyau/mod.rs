//! Noyau postfixe
//!
//! Organisation interne :
//! - pile.rs         : pile bornée (parenthèses, opérateurs, valeurs)
//! - canon.rs        : normalisation (espaces, signe unaire => "0-x")
//! - jetons.rs       : jetons + lexeur (parenthèses, découverte des variables)
//! - rpn.rs          : shunting-yard (infixe -> postfixe)
//! - eval.rs         : machine à pile sur le postfixe
//! - variables.rs    : table nom -> valeur
//! - reglages.rs     : mode de position des erreurs, capacité des piles
//! - erreur.rs       : erreurs structurées
//! - calculatrice.rs : façade (parse / calculate / variables)

pub mod calculatrice;
pub mod canon;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod pile;
pub mod reglages;
pub mod rpn;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use calculatrice::{eval_expression, Calculatrice};
pub use erreur::{Erreur, ErreurAnalyse, ErreurCalcul, ErreurPile};
pub use jetons::{format_tokens, Fonction, Op, Tok};
pub use pile::{Pile, CAPACITE_DEFAUT};
pub use reglages::{ModePosition, Reglages};
pub use variables::Variables;
