//! Noyau — machine à pile (évaluation postfixe)
//!
//! Une étape de trace est ajoutée après chaque jeton consommé.
//! La pile d’opérandes vit dans l’appel : deux évaluations ne partagent rien.

use log::{debug, trace};
use num_traits::ToPrimitive;

use super::erreurs::EvalError;
use super::jetons::{format_tok, Op, Tok};

/// Instantané de la pile après un jeton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtapeTrace {
    pub jeton: Tok,
    pub libelle: String,
    pub pile: Vec<i64>,
}

impl EtapeTrace {
    fn nouvelle(jeton: Tok, pile: &[i64]) -> Self {
        Self {
            jeton,
            libelle: format_tok(&jeton),
            pile: pile.to_vec(),
        }
    }
}

/// a^b en flottant, puis troncature vers zéro.
/// Hors de i64 (NaN, infini, trop grand) => Overflow.
fn puissance(a: i64, b: i64) -> Result<i64, EvalError> {
    let r = (a as f64).powf(b as f64);
    r.trunc().to_i64().ok_or(EvalError::Overflow)
}

fn appliquer(op: Op, a: i64, b: i64) -> Result<i64, EvalError> {
    match op {
        Op::Plus => a.checked_add(b).ok_or(EvalError::Overflow),
        Op::Minus => a.checked_sub(b).ok_or(EvalError::Overflow),
        Op::Star => a.checked_mul(b).ok_or(EvalError::Overflow),
        Op::Slash => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // i64::MIN / -1
            a.checked_div(b).ok_or(EvalError::Overflow)
        }
        Op::Caret => puissance(a, b),
    }
}

/// Évalue une suite postfixe.
///
/// Retourne la valeur finale et la trace complète (une étape par jeton).
/// Échoue dès la première erreur : pas de résultat partiel.
pub fn evaluate(postfixe: &[Tok]) -> Result<(i64, Vec<EtapeTrace>), EvalError> {
    let mut pile: Vec<i64> = Vec::with_capacity(postfixe.len());
    let mut etapes: Vec<EtapeTrace> = Vec::with_capacity(postfixe.len());

    for &tok in postfixe {
        match tok {
            Tok::Entier(n) => pile.push(n),

            Tok::Op(op) => {
                let b = pile.pop().ok_or(EvalError::StackUnderflow)?;
                let a = pile.pop().ok_or(EvalError::StackUnderflow)?;
                let r = appliquer(op, a, b)?;
                debug!("{a} {} {b} = {r}", op.symbole());
                pile.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::InvalidToken),
        }

        trace!("pile: {pile:?}");
        etapes.push(EtapeTrace::nouvelle(tok, &pile));
    }

    match pile.as_slice() {
        [valeur] => Ok((*valeur, etapes)),
        _ => Err(EvalError::MalformedExpression),
    }
}
