//! Noyau — pipeline complet et rapport texte
//!
//! texte -> validation -> jetons -> RPN -> machine à pile -> Rapport
//!
//! Le rapport est assemblé en mémoire ; la vue et le mode CLI l’affichent tel quel.

use std::fmt::Write as _;

use log::{info, warn};

use super::erreurs::ErreurNoyau;
use super::eval::{evaluate, EtapeTrace};
use super::jetons::Tok;
use super::limites::Limites;
use super::rpn::{convert_avec, Postfixe};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rapport {
    pub infixe: String,
    pub postfixe: Postfixe,
    pub etapes: Vec<EtapeTrace>,
    pub resultat: i64,
}

fn format_pile(pile: &[i64]) -> String {
    if pile.is_empty() {
        return "(vide)".to_string();
    }
    pile.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Rapport {
    /// Rendu texte : infixe, postfixe, une entrée par étape, résultat final.
    pub fn rendu(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Infixe : {}", self.infixe);
        let _ = writeln!(out, "Postfixe : {}", self.postfixe);
        out.push('\n');

        for e in &self.etapes {
            let _ = match e.jeton {
                Tok::Op(_) => writeln!(out, "Après l'opérateur '{}' :", e.libelle),
                _ => writeln!(out, "Après le nombre '{}' :", e.libelle),
            };
            let _ = writeln!(out, "Pile : {}", format_pile(&e.pile));
        }

        let _ = write!(out, "Résultat final : {}", self.resultat);
        out
    }
}

/// API publique : évalue une expression infixe et retourne le rapport complet.
pub fn evaluer_expression(expr_str: &str, limites: &Limites) -> Result<Rapport, ErreurNoyau> {
    let resultat = pipeline(expr_str, limites);
    match &resultat {
        Ok(r) => info!("{} = {}", r.infixe, r.resultat),
        Err(e) => warn!("échec pour {expr_str:?}: {e}"),
    }
    resultat
}

fn pipeline(expr_str: &str, limites: &Limites) -> Result<Rapport, ErreurNoyau> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }
    if s.chars().count() > limites.entree_max {
        return Err(ErreurNoyau::EntreeTropLongue {
            max: limites.entree_max,
        });
    }

    let postfixe = convert_avec(s, limites)?;
    let (resultat, etapes) = evaluate(&postfixe)?;

    Ok(Rapport {
        infixe: s.to_string(),
        postfixe,
        etapes,
        resultat,
    })
}
