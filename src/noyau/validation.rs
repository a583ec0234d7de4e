// src/noyau/validation.rs
//
// Validation de l’entrée brute, avant toute conversion.
// Fonction pure : aucun état partagé.

use super::erreurs::ValidationError;
use super::jetons::Op;

fn caractere_permis(c: char) -> bool {
    c.is_ascii_digit() || Op::depuis_char(c).is_some() || c == '(' || c == ')'
}

/// Vérifie l’entrée et dit pourquoi elle est refusée.
///
/// - espaces ignorés
/// - seuls chiffres, `+-*/^` et parenthèses sont permis
/// - la profondeur de parenthèses ne doit jamais passer sous 0, et doit finir à 0
pub fn verifier(s: &str) -> Result<(), ValidationError> {
    let mut profondeur: i64 = 0;

    for (position, c) in s.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if !caractere_permis(c) {
            return Err(ValidationError::InvalidCharacter { c, position });
        }
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return Err(ValidationError::UnbalancedParentheses);
                }
            }
            _ => {}
        }
    }

    if profondeur != 0 {
        return Err(ValidationError::UnbalancedParentheses);
    }
    Ok(())
}

/// Vrai si l’entrée est acceptable pour la conversion.
pub fn validate(s: &str) -> bool {
    verifier(s).is_ok()
}
