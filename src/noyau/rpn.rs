// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfixe)
//
// Règles:
// - opérande (Num / Ident) : sortie directe
// - '(' : empilée
// - ')' : dépile jusqu’à '(' (jetée), puis sort la fonction collée au sommet s’il y en a une
// - opérateur / fonction : dépile selon précédence + associativité, puis empile
//
// NOTE:
// - l’équilibre des parenthèses est garanti par le lexeur, pas vérifié ici.
// - le moins unaire est déjà réécrit en "0 - x" par la normalisation.

use super::erreur::ErreurPile;
use super::jetons::{Op, Tok};
use super::pile::Pile;
use super::reglages::Reglages;

pub(crate) fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Fonction(_) => 4,
        Tok::Op(Op::Caret) => 3,
        Tok::Op(Op::Star | Op::Slash) => 2,
        Tok::Op(Op::Plus | Op::Minus) => 1,
        _ => 0,
    }
}

/// `^` est associatif à droite : il ne fait pas sortir un `^` de même rang.
fn doit_depiler(sommet: &Tok, entrant: &Tok) -> bool {
    if matches!(entrant, Tok::Op(Op::Caret)) {
        precedence(sommet) > precedence(entrant)
    } else {
        precedence(sommet) >= precedence(entrant)
    }
}

/// Convertit une suite de jetons infixe (validée par le lexeur) en RPN.
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Ident("x"), RPar, Op(Plus), Num("2")]
///   rpn:    [Ident("x"), Fonction(Sin), Num("2"), Op(Plus)]
pub fn to_rpn(tokens: &[Tok], reglages: &Reglages) -> Result<Vec<Tok>, ErreurPile> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Pile<Tok> = Pile::new(reglages.capacite_pour(tokens.len()))?;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Ident(_) => out.push(tok),

            Tok::LPar => ops.push(tok)?,

            Tok::RPar => {
                loop {
                    match ops.pop()? {
                        Tok::LPar => break,
                        top => out.push(top),
                    }
                }
                if matches!(ops.top(), Ok(Tok::Fonction(_))) {
                    out.push(ops.pop()?);
                }
            }

            Tok::Op(_) | Tok::Fonction(_) => {
                while let Ok(top) = ops.top() {
                    if matches!(top, Tok::LPar) || !doit_depiler(top, &tok) {
                        break;
                    }
                    out.push(ops.pop()?);
                }
                ops.push(tok)?;
            }
        }
    }

    // vide la pile ops
    while let Ok(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}
