// src/noyau/pile.rs
//
// Pile bornée (LIFO à capacité fixe)
// Utilisée pour:
// - l’appariement des parenthèses (lexeur)
// - l’ordre des opérateurs (shunting-yard)
// - les valeurs (évaluation postfixe)
//
// Invariant : 0 <= len <= capacite, aucune croissance au-delà de la capacité.

use super::erreur::ErreurPile;

/// Capacité utilisée par `Pile::default()`.
pub const CAPACITE_DEFAUT: usize = 100;

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: usize,
}

impl<T> Pile<T> {
    /// Crée une pile vide de capacité `capacite`.
    /// Refuse une capacité nulle.
    pub fn new(capacite: usize) -> Result<Self, ErreurPile> {
        if capacite == 0 {
            return Err(ErreurPile::InvalidCapacity);
        }
        Ok(Self {
            elements: Vec::with_capacity(capacite),
            capacite,
        })
    }

    /// Empile `v` (nouveau sommet).
    pub fn push(&mut self, v: T) -> Result<(), ErreurPile> {
        if self.is_full() {
            return Err(ErreurPile::Overflow);
        }
        self.elements.push(v);
        Ok(())
    }

    /// Dépile et retourne le sommet.
    pub fn pop(&mut self) -> Result<T, ErreurPile> {
        self.elements.pop().ok_or(ErreurPile::Underflow)
    }

    /// Sommet sans le retirer.
    pub fn top(&self) -> Result<&T, ErreurPile> {
        self.elements.last().ok_or(ErreurPile::Underflow)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacite
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    /// Vide la pile (la capacité ne change pas).
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self {
            elements: Vec::with_capacity(CAPACITE_DEFAUT),
            capacite: CAPACITE_DEFAUT,
        }
    }
}
