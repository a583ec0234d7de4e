//! Tests de propriétés : comportements attendus de bout en bout.
//!
//! - validation (équilibre + caractères)
//! - priorités et associativité
//! - erreurs d’évaluation
//! - trace complète
//! - évaluations concurrentes (aucun état partagé)

use std::thread;

use super::erreurs::{ConversionError, EvalError, ValidationError};
use super::jetons::{Op, Tok};
use super::{convert, evaluate, validate};

fn eval_ok(expr: &str) -> i64 {
    let p = convert(expr).unwrap_or_else(|e| panic!("convert({expr:?}) erreur: {e}"));
    evaluate(&p)
        .unwrap_or_else(|e| panic!("evaluate({expr:?}) erreur: {e}"))
        .0
}

/* ------------------------ Validation ------------------------ */

#[test]
fn equilibrees_valides() {
    for s in ["1", "(1)", "((2+3)*(4-1))^2", "10 / (2) - 3", "  7  "] {
        assert!(validate(s), "s={s:?}");
    }
}

#[test]
fn fermante_en_trop_ou_manquante() {
    for s in ["(1+2", "1+2)", "((3)", "(4))", ")5("] {
        assert!(!validate(s), "s={s:?}");
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sommes_et_produits() {
    assert_eq!(eval_ok("3 + 4"), 7);
    assert_eq!(eval_ok("2 * 3 + 4"), 10);
    assert_eq!(eval_ok("2 + 3 * 4"), 14);
    assert_eq!(eval_ok("(2 + 3) * 4"), 20);
    assert_eq!(eval_ok("100 - 10 - 1"), 89);
    assert_eq!(eval_ok("64 / 4 / 2"), 8);
}

#[test]
fn puissance_a_droite() {
    let p = convert("2^3^2").unwrap();
    assert_eq!(
        p.to_vec(),
        vec![
            Tok::Entier(2),
            Tok::Entier(3),
            Tok::Entier(2),
            Tok::Op(Op::Caret),
            Tok::Op(Op::Caret),
        ]
    );
    assert_eq!(eval_ok("2^3^2"), 512);
    assert_eq!(eval_ok("(2^3)^2"), 64);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero() {
    let p = convert("4/0").unwrap();
    assert_eq!(evaluate(&p).unwrap_err(), EvalError::DivisionByZero);
    // le zéro peut venir d’un calcul
    let p = convert("4/(2-2)").unwrap();
    assert_eq!(evaluate(&p).unwrap_err(), EvalError::DivisionByZero);
}

#[test]
fn parenthese_non_fermee() {
    assert!(!validate("(1+2"));
    assert_eq!(
        convert("(1+2").unwrap_err(),
        ConversionError::InvalidInfix(ValidationError::UnbalancedParentheses)
    );
}

#[test]
fn operateur_seul() {
    assert_eq!(
        evaluate(&[Tok::Op(Op::Plus)]).unwrap_err(),
        EvalError::StackUnderflow
    );
}

/* ------------------------ Trace ------------------------ */

#[test]
fn trace_un_plus_deux() {
    let p = convert("1+2").unwrap();
    let (v, etapes) = evaluate(&p).unwrap();
    assert_eq!(v, 3);
    assert_eq!(etapes.len(), 3);
    assert_eq!(etapes[1].pile, vec![1, 2]);
    assert_eq!(etapes[2].pile, vec![3]);
}

#[test]
fn trace_puissance() {
    let p = convert("2^3^2").unwrap();
    let (_, etapes) = evaluate(&p).unwrap();
    let piles: Vec<Vec<i64>> = etapes.into_iter().map(|e| e.pile).collect();
    assert_eq!(
        piles,
        vec![vec![2], vec![2, 3], vec![2, 3, 2], vec![2, 9], vec![512]]
    );
}

/* ------------------------ Concurrence ------------------------ */

#[test]
fn evaluations_concurrentes_independantes() {
    let handles: Vec<_> = (0..8i64)
        .map(|k| {
            thread::spawn(move || {
                let expr = format!("({k} + 1) * 2 ^ 2");
                (0..200).all(|_| eval_ok(&expr) == (k + 1) * 4)
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
