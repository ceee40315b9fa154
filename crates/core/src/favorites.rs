//! Favorite-set mutation.

use crate::types::DbId;

/// What a toggle did to the favorite set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Flip membership of `entity_id` in `favorites`.
///
/// Removes exactly one occurrence when present, appends otherwise. Calling it
/// twice with the same id restores the original sequence (up to the position
/// of a re-added id, which moves to the end).
pub fn toggle_favorite(favorites: &mut Vec<DbId>, entity_id: DbId) -> FavoriteChange {
    match favorites.iter().position(|&id| id == entity_id) {
        Some(index) => {
            favorites.remove(index);
            FavoriteChange::Removed
        }
        None => {
            favorites.push(entity_id);
            FavoriteChange::Added
        }
    }
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedup_favorites(favorites: &[DbId]) -> Vec<DbId> {
    let mut seen = std::collections::HashSet::with_capacity(favorites.len());
    favorites
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}
