// src/noyau/jetons.rs

use super::erreurs::{ConversionError, ValidationError};

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok {
    Entier(i64),
    Op(Op),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers décimaux (ex: 12), sans signe
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Les espaces séparent les nombres mais ne produisent rien.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ConversionError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Suite de chiffres => un seul entier
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let n = txt
                .parse::<i64>()
                .map_err(|_| ConversionError::NumberTooLarge(txt.clone()))?;
            out.push(Tok::Entier(n));
            continue;
        }

        return Err(ValidationError::InvalidCharacter { c, position: i }.into());
    }

    Ok(out)
}

/// Libellé d’un jeton seul ("12", "+", "(").
pub fn format_tok(t: &Tok) -> String {
    match t {
        Tok::Entier(n) => n.to_string(),
        Tok::Op(op) => op.symbole().to_string(),
        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
    }
}

/// Liste de jetons en texte, séparés par un espace.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(format_tok).collect::<Vec<_>>().join(" ")
}
