// src/noyau/erreurs.rs
//
// Erreurs typées du noyau.
// Les messages (Display) sont affichés tels quels par la vue et par le mode CLI.

use thiserror::Error;

/// Pourquoi une entrée infixe est refusée avant toute conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("caractère inattendu: '{c}' (position {position})")]
    InvalidCharacter { c: char, position: usize },

    #[error("parenthèses déséquilibrées")]
    UnbalancedParentheses,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("expression infixe invalide: {0}")]
    InvalidInfix(#[from] ValidationError),

    #[error("nombre trop grand: {0}")]
    NumberTooLarge(String),

    #[error("débordement de la pile d’opérateurs")]
    OperatorStackOverflow,

    #[error("sortie postfixe trop longue")]
    OutputBufferOverflow,

    #[error("parenthèse non appariée")]
    UnmatchedParenthesis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("pile vide: opérandes manquants")]
    StackUnderflow,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("dépassement de capacité entière")]
    Overflow,

    #[error("expression postfixe invalide")]
    MalformedExpression,

    #[error("jeton inattendu en postfixe")]
    InvalidToken,
}

/// Erreur du pipeline complet (texte brut -> rapport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("Entrée trop longue (max {max} caractères)")]
    EntreeTropLongue { max: usize },

    #[error("Erreur de conversion: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Erreur d’évaluation: {0}")]
    Evaluation(#[from] EvalError),
}
