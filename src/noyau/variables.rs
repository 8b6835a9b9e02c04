//! Table des variables : nom -> valeur (f64).
//!
//! Ordonnée par nom (listes déterministes). Les noms de fonctions
//! (`sin`, `cos`, `sqrt`) n’apparaissent jamais dans [`Variables::names`].

use std::collections::BTreeMap;

use super::jetons::Fonction;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    tab: BTreeMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre `name` avec 0.0 s’il est inconnu.
    /// Retourne `true` si l’entrée vient d’être créée.
    pub fn decouvrir(&mut self, name: &str) -> bool {
        if self.tab.contains_key(name) {
            return false;
        }
        log::trace!("nouvelle variable {name:?} = 0");
        self.tab.insert(name.to_string(), 0.0);
        true
    }

    /// Insère ou remplace.
    pub fn set(&mut self, name: &str, value: f64) {
        self.tab.insert(name.to_string(), value);
    }

    /// Sans effet si `name` est absent.
    pub fn remove(&mut self, name: &str) {
        self.tab.remove(name);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.tab.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tab.contains_key(name)
    }

    /// Noms connus, triés, sans les noms de fonctions.
    pub fn names(&self) -> Vec<String> {
        self.tab
            .keys()
            .filter(|k| Fonction::from_name(k).is_none())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    pub fn clear(&mut self) {
        self.tab.clear();
    }
}
