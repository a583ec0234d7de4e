// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfixe)
//
// Règles:
// - Entier : sortie directe (ne passe jamais par la pile)
// - '(' : empilée ; ')' : dépile jusqu’à '(' (qui est jetée)
// - Opérateur : dépile tant que le sommet lie plus fort
//   (ou aussi fort, sauf si l’opérateur entrant est associatif à droite)
//
// Les piles sont locales à l’appel : aucun état entre deux conversions.

use log::{debug, trace};

use super::erreurs::ConversionError;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::limites::Limites;
use super::validation::verifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

pub fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::Caret => 3,
    }
}

pub fn associativite(op: Op) -> Associativite {
    match op {
        Op::Caret => Associativite::Droite,
        _ => Associativite::Gauche,
    }
}

/// Suite postfixe produite par le convertisseur (entiers + opérateurs).
/// Lecture seule une fois construite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Postfixe(Vec<Tok>);

impl std::ops::Deref for Postfixe {
    type Target = [Tok];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Postfixe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&format_tokens(&self.0))
    }
}

/// Vrai si `top` (sommet de pile) doit sortir avant d’empiler `entrant`.
fn doit_depiler(top: Op, entrant: Op) -> bool {
    let p_top = precedence(top);
    let p_tok = precedence(entrant);
    p_top > p_tok || (p_top == p_tok && associativite(entrant) != Associativite::Droite)
}

fn emettre(out: &mut Vec<Tok>, tok: Tok, limites: &Limites) -> Result<(), ConversionError> {
    if out.len() >= limites.sortie_max {
        return Err(ConversionError::OutputBufferOverflow);
    }
    out.push(tok);
    Ok(())
}

fn empiler(ops: &mut Vec<Tok>, tok: Tok, limites: &Limites) -> Result<(), ConversionError> {
    if ops.len() >= limites.pile_operateurs_max {
        return Err(ConversionError::OperatorStackOverflow);
    }
    ops.push(tok);
    Ok(())
}

/// Convertit une expression infixe en postfixe, bornes par défaut.
pub fn convert(s: &str) -> Result<Postfixe, ConversionError> {
    convert_avec(s, &Limites::default())
}

/// Convertit une expression infixe en postfixe (shunting-yard).
///
/// Exemple:
///   "2^3^2"  =>  2 3 2 ^ ^
pub fn convert_avec(s: &str, limites: &Limites) -> Result<Postfixe, ConversionError> {
    verifier(s)?;
    let jetons = tokenize(s)?;
    debug!("conversion de {} jetons: {}", jetons.len(), format_tokens(&jetons));

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in jetons {
        match tok {
            Tok::Entier(_) => emettre(&mut out, tok, limites)?,

            Tok::LPar => empiler(&mut ops, tok, limites)?,

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => emettre(&mut out, top, limites)?,
                        None => return Err(ConversionError::UnmatchedParenthesis),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(&Tok::Op(top)) = ops.last() {
                    if !doit_depiler(top, op) {
                        break;
                    }
                    ops.pop();
                    emettre(&mut out, Tok::Op(top), limites)?;
                }
                empiler(&mut ops, tok, limites)?;
            }
        }
        trace!(
            "après {:?}: sortie=[{}] pile=[{}]",
            tok,
            format_tokens(&out),
            format_tokens(&ops)
        );
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ConversionError::UnmatchedParenthesis);
        }
        emettre(&mut out, top, limites)?;
    }

    debug!("postfixe: {}", format_tokens(&out));
    Ok(Postfixe(out))
}
