//! Évaluateur postfixe : infixe -> postfixe (shunting-yard) -> machine à pile,
//! avec une trace de la pile après chaque jeton.
//!
//! API du noyau :
//! - [`noyau::validate`]
//! - [`noyau::convert`]
//! - [`noyau::evaluate`]
//! - [`noyau::evaluer_expression`] (pipeline complet + rapport)

pub mod noyau;
