//! Calculatrice postfixe
//!
//! Analyse une expression infixe (nombres, variables, `+ - * / ^`, signes
//! unaires, parenthèses, `sin` / `cos` / `sqrt`), la convertit en notation
//! polonaise inversée, puis l’évalue contre une table de variables.
//!
//! ```rust
//! use calculatrice_postfixe::Calculatrice;
//!
//! let mut calc = Calculatrice::new();
//! calc.parse("a + b * c").unwrap();
//! assert_eq!(calc.postfix_tokens(), ["a", "b", "c", "*", "+"]);
//!
//! calc.set_variable_value("a", 1.0);
//! calc.set_variable_value("b", 2.0);
//! calc.set_variable_value("c", 3.0);
//! assert_eq!(calc.calculate().unwrap(), 7.0);
//! ```
//!
//! L’interface utilisateur (saisie, messages, pointeur de position) n’est pas
//! ici : le noyau ne fait aucune I/O et ne journalise qu’à travers `log`.

pub mod noyau;

pub use noyau::*;
