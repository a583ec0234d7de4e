//! Noyau de l’évaluateur postfixe
//!
//! Organisation interne :
//! - erreurs.rs    : erreurs typées (validation, conversion, évaluation)
//! - limites.rs    : bornes de ressources (configuration)
//! - jetons.rs     : tokenisation
//! - validation.rs : caractères permis + parenthèses équilibrées
//! - rpn.rs        : shunting-yard -> postfixe
//! - eval.rs       : machine à pile + trace
//! - rapport.rs    : pipeline complet + rendu texte

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod limites;
pub mod rapport;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluate;
pub use limites::Limites;
pub use rapport::{evaluer_expression, Rapport};
pub use rpn::convert;
pub use validation::validate;
