//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   - validate(s) faux  => convert(s) échoue en InvalidInfix
//!   - trace : une étape par jeton postfixe, dernière pile == [résultat]
//!   - expressions générées : même valeur (ou même erreur) qu’un calcul direct

use std::time::{Duration, Instant};

use super::erreurs::{ConversionError, EvalError};
use super::{convert, evaluate, validate};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Chaînes brutes ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '7', '9', '+', '-', '*', '/', '^', '(', ')', ' ', 'x', '.',
];

fn gen_brut(rng: &mut Rng) -> String {
    let n = rng.pick(24) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Expressions bien formées ------------------------ */

/// Calcul direct (référence), même sémantique que la machine à pile.
fn appliquer_ref(c: char, a: i64, b: i64) -> Result<i64, EvalError> {
    match c {
        '+' => a.checked_add(b).ok_or(EvalError::Overflow),
        '-' => a.checked_sub(b).ok_or(EvalError::Overflow),
        '*' => a.checked_mul(b).ok_or(EvalError::Overflow),
        '/' if b == 0 => Err(EvalError::DivisionByZero),
        '/' => a.checked_div(b).ok_or(EvalError::Overflow),
        _ => {
            let r = (a as f64).powf(b as f64).trunc();
            if r.is_finite() && r >= i64::MIN as f64 && r < i64::MAX as f64 {
                Ok(r as i64)
            } else {
                Err(EvalError::Overflow)
            }
        }
    }
}

/// Expression entièrement parenthésée + valeur attendue.
/// Gauche puis droite puis opérateur : même ordre que la postfixe.
fn gen_expr(rng: &mut Rng, profondeur: u32) -> (String, Result<i64, EvalError>) {
    if profondeur == 0 || rng.pick(3) == 0 {
        let v = rng.pick(13) as i64;
        return (v.to_string(), Ok(v));
    }

    let c = ['+', '-', '*', '/', '^'][rng.pick(5) as usize];
    let (ga, va) = gen_expr(rng, profondeur - 1);
    let (gb, vb) = gen_expr(rng, profondeur - 1);

    let v = va.and_then(|a| vb.and_then(|b| appliquer_ref(c, a, b)));
    (format!("({ga} {c} {gb})"), v)
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_chaines_brutes() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..4000 {
        budget(start, max);
        let s = gen_brut(&mut rng);

        match convert(&s) {
            Err(ConversionError::InvalidInfix(_)) => {
                assert!(!validate(&s), "s={s:?} : refusée mais valide");
            }
            Err(ConversionError::NumberTooLarge(_)) => assert!(validate(&s)),
            Err(e) => panic!("s={s:?} : erreur inattendue {e}"),
            Ok(p) => {
                assert!(validate(&s), "s={s:?}");
                if let Ok((v, etapes)) = evaluate(&p) {
                    assert_eq!(etapes.len(), p.len(), "s={s:?}");
                    assert_eq!(etapes.last().map(|e| e.pile.clone()), Some(vec![v]));
                }
            }
        }
    }
}

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..2000 {
        budget(start, max);
        let (s, attendu) = gen_expr(&mut rng, 4);

        assert!(validate(&s), "s={s:?}");
        let p = convert(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));

        match evaluate(&p) {
            Ok((v, etapes)) => {
                assert_eq!(Ok(v), attendu, "s={s:?}");
                assert_eq!(etapes.len(), p.len());
                assert_eq!(etapes.last().map(|e| e.pile.as_slice()), Some(&[v][..]));
            }
            Err(e) => assert_eq!(Err(e), attendu, "s={s:?}"),
        }
    }
}

#[test]
fn determinisme() {
    let mut rng = Rng::new(7);
    for _ in 0..200 {
        let (s, _) = gen_expr(&mut rng, 3);
        let a = convert(&s).map(|p| evaluate(&p));
        let b = convert(&s).map(|p| evaluate(&p));
        assert_eq!(a, b, "s={s:?}");
    }
}
