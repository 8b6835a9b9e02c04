// src/noyau/reglages.rs
//
// Réglages du noyau (sans I/O, valeurs par défaut = comportement historique
// sauf pour le dimensionnement des piles).

/// Référentiel des positions rapportées par `ErreurAnalyse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModePosition {
    /// Index dans le flux normalisé (les `0` insérés comptent).
    /// Pour un caractère invalide : longueur de la sortie déjà produite.
    #[default]
    Normalisee,

    /// Index du caractère dans l’entrée brute.
    Source,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub mode_position: ModePosition,

    /// `None` : chaque pile est dimensionnée sur son entrée.
    /// `Some(c)` : toutes les piles internes ont la capacité `c`.
    pub capacite_fixe: Option<usize>,
}

impl Reglages {
    /// Capacité d’une pile interne devant contenir au plus `besoin` éléments.
    pub(crate) fn capacite_pour(&self, besoin: usize) -> usize {
        self.capacite_fixe.unwrap_or(besoin.max(1))
    }
}
