//! Bornes de ressources (configuration du noyau).
//!
//! Les conteneurs sont des `Vec` dynamiques ; ces bornes sont volontaires
//! (anti-abus), pas des tailles de buffer.

/// Longueur max de l’entrée (caractères), comme le champ texte.
pub const ENTREE_MAX_DEFAUT: usize = 255;

/// Profondeur max de la pile d’opérateurs.
pub const PILE_OPERATEURS_MAX_DEFAUT: usize = 100;

/// Nombre max de jetons émis en postfixe.
pub const SORTIE_MAX_DEFAUT: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub entree_max: usize,
    pub pile_operateurs_max: usize,
    pub sortie_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            entree_max: ENTREE_MAX_DEFAUT,
            pile_operateurs_max: PILE_OPERATEURS_MAX_DEFAUT,
            sortie_max: SORTIE_MAX_DEFAUT,
        }
    }
}

impl Limites {
    /// Remplace les bornes du convertisseur ; `None` garde la valeur actuelle.
    pub fn avec_bornes(mut self, pile: Option<usize>, sortie: Option<usize>) -> Self {
        if let Some(p) = pile {
            self.pile_operateurs_max = p;
        }
        if let Some(s) = sortie {
            self.sortie_max = s;
        }
        self
    }
}
