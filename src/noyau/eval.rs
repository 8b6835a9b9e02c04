//! Noyau — évaluation d’une suite postfixe
//!
//! Machine à pile : chaque opérande est empilé, chaque opérateur / fonction
//! consomme ses arguments au sommet. Rien n’est modifié : le même postfixe
//! peut être évalué autant de fois que voulu.

use num_traits::Float;

use super::erreur::ErreurCalcul;
use super::jetons::{Fonction, Op, Tok};
use super::pile::Pile;
use super::reglages::Reglages;
use super::variables::Variables;

/// Évalue `rpn` avec les valeurs de `variables`.
///
/// - `Num` : littéral, sinon nom de variable, sinon `UnknownIdentifier`
/// - opérateur binaire : droite = premier dépilé, gauche = second
/// - il doit rester exactement une valeur à la fin
pub fn eval_postfix(
    rpn: &[Tok],
    variables: &Variables,
    reglages: &Reglages,
) -> Result<f64, ErreurCalcul> {
    let mut st: Pile<f64> = Pile::new(reglages.capacite_pour(rpn.len()))?;

    for tok in rpn {
        match tok {
            Tok::Num(s) => st.push(resoudre_litteral(s, variables)?)?,

            Tok::Ident(name) => {
                let v = variables
                    .get(name)
                    .ok_or_else(|| ErreurCalcul::UnknownIdentifier(name.clone()))?;
                st.push(v)?;
            }

            Tok::Op(op) => {
                let b = st.pop().map_err(|_| ErreurCalcul::MalformedExpression)?;
                let a = st.pop().map_err(|_| ErreurCalcul::MalformedExpression)?;
                st.push(appliquer_op(*op, a, b)?)?;
            }

            Tok::Fonction(f) => {
                let x = st.pop().map_err(|_| ErreurCalcul::MalformedExpression)?;
                st.push(appliquer_fonction(*f, x)?)?;
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::MalformedExpression),
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalcul::MalformedExpression);
    }
    Ok(st.pop()?)
}

/// Littéral numérique, ou à défaut valeur d’une variable du même nom.
fn resoudre_litteral(s: &str, variables: &Variables) -> Result<f64, ErreurCalcul> {
    if let Ok(v) = s.parse::<f64>() {
        return Ok(v);
    }
    variables
        .get(s)
        .ok_or_else(|| ErreurCalcul::UnknownIdentifier(s.to_string()))
}

pub(crate) fn appliquer_op<T: Float>(op: Op, a: T, b: T) -> Result<T, ErreurCalcul> {
    Ok(match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionByZero);
            }
            a / b
        }
        // NaN / inf possibles (base négative, 0^-1...) : non interceptés
        Op::Caret => a.powf(b),
    })
}

pub(crate) fn appliquer_fonction<T: Float>(f: Fonction, x: T) -> Result<T, ErreurCalcul> {
    Ok(match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Sqrt => {
            if x < T::zero() {
                return Err(ErreurCalcul::NegativeSquareRoot);
            }
            x.sqrt()
        }
    })
}
