//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’évaluateur (entrée, rapport rendu, erreur, bornes)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de conversion, pas de pile).
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur remplace le rapport : pas d’affichage partiel.

use evaluateur_postfixe::noyau::Limites;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub sortie: String, // rapport rendu (infixe, postfixe, piles, résultat)
    pub erreur: String, // message d’erreur (conversion ou évaluation)

    // --- paramètres ---
    pub limites: Limites,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Limites::default())
    }
}

impl AppCalc {
    pub fn new(limites: Limites) -> Self {
        Self {
            entree: String::new(),
            sortie: String::new(),
            erreur: String::new(),
            limites,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + sortie + erreur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher à la sortie).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer sortie + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.sortie.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Place une erreur ; l’ancien rapport n’est plus fiable, on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.sortie.clear();
        self.focus_entree = true;
    }

    /// Dépose un rapport rendu.
    pub fn set_sortie(&mut self, rendu: impl Into<String>) {
        self.erreur.clear();
        self.sortie = rendu.into();
        self.focus_entree = true;
    }

    /// Ajoute du texte à l’entrée, sans dépasser la borne.
    pub fn inserer(&mut self, txt: &str) {
        let restant = self
            .limites
            .entree_max
            .saturating_sub(self.entree.chars().count());
        self.entree.extend(txt.chars().take(restant));
        self.focus_entree = true;
    }
}
