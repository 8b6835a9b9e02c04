//! Noyau — façade
//!
//! [`Calculatrice`] garde la dernière expression analysée (infixe + postfixe)
//! et la table des variables, qui survit aux analyses successives.
//!
//! Pipeline :
//!   entrée -> normalise -> tokenize -> to_rpn -> (stocké) -> eval_postfix
//!
//! Aucune synchronisation interne : une instance par fil, ou un verrou externe.

use super::canon::normalise;
use super::erreur::{Erreur, ErreurAnalyse, ErreurCalcul};
use super::eval::eval_postfix;
use super::jetons::{format_tokens, tokenize, Tok};
use super::reglages::{ModePosition, Reglages};
use super::rpn::to_rpn;
use super::variables::Variables;

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    expression: String,
    infixe: Vec<Tok>,
    // None tant qu’aucune analyse n’a réussi (ou après un échec)
    postfixe: Option<Vec<Tok>>,
    variables: Variables,
    reglages: Reglages,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reglages(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Analyse `expression` et stocke sa forme postfixe.
    ///
    /// En cas d’échec, infixe et postfixe sont vidés ; les variables déjà
    /// découvertes par le lexeur restent dans la table.
    pub fn parse(&mut self, expression: &str) -> Result<(), ErreurAnalyse> {
        self.expression = expression.to_string();
        self.infixe.clear();
        self.postfixe = None;

        let mode = self.reglages.mode_position;
        let flux = normalise(expression, mode)?;

        let infixe = tokenize(&flux.texte, &mut self.variables, &self.reglages).map_err(|e| {
            match mode {
                ModePosition::Normalisee => e,
                ModePosition::Source => e.map_position(|p| flux.origine(p)),
            }
        })?;

        let postfixe = to_rpn(&infixe, &self.reglages)?;

        log::debug!(
            "parse {expression:?} -> postfixe [{}]",
            format_tokens(&postfixe)
        );

        self.infixe = infixe;
        self.postfixe = Some(postfixe);
        Ok(())
    }

    /// Évalue le postfixe stocké avec les valeurs courantes des variables.
    pub fn calculate(&self) -> Result<f64, ErreurCalcul> {
        let postfixe = self.postfixe.as_ref().ok_or(ErreurCalcul::NoExpression)?;
        let r = eval_postfix(postfixe, &self.variables, &self.reglages);
        log::debug!("calculate {:?} -> {r:?}", self.expression);
        r
    }

    /// Dernière expression passée à `parse` (telle que saisie).
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn infix_tokens(&self) -> Vec<String> {
        self.infixe.iter().map(Tok::to_string).collect()
    }

    pub fn postfix_tokens(&self) -> Vec<String> {
        self.postfixe
            .iter()
            .flatten()
            .map(Tok::to_string)
            .collect()
    }

    /// Variables utilisées par l’expression courante, sans doublon,
    /// dans l’ordre de première apparition dans le postfixe.
    pub fn expression_variables(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for tok in self.postfixe.iter().flatten() {
            if let Tok::Ident(name) = tok {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
        }
        out
    }

    /// Toutes les variables connues (triées, sans noms de fonctions).
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.names()
    }

    pub fn variable_value(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    pub fn set_variable_value(&mut self, name: &str, value: f64) {
        self.variables.set(name, value);
    }

    pub fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }
}

/// Évalue `expression` en une fois (variables inconnues = 0).
pub fn eval_expression(expression: &str) -> Result<f64, Erreur> {
    let mut calc = Calculatrice::new();
    calc.parse(expression)?;
    Ok(calc.calculate()?)
}
