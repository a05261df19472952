//! Equipment set bonuses.
//!
//! Pieces that share a set name count toward that set's bonus. Each set
//! grants only its single highest attained level; lower levels never
//! stack on top of it.

use crate::equipment::EquipmentPiece;
use crate::stats::StatVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One piece-count-gated level of a set bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBonusLevel {
    /// Number of equipped set pieces needed.
    pub pieces_required: u32,
    /// Stats granted at this level.
    #[serde(default)]
    pub stats: StatVector,
}

/// A set bonus definition.
///
/// `pieces_required` values are distinct within a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBonus {
    /// Set name, matched against `EquipmentPiece::set_name`.
    pub set_name: String,
    /// Levels, in any order.
    #[serde(default)]
    pub bonus_levels: Vec<SetBonusLevel>,
}

impl SetBonus {
    /// Create a set bonus with no levels.
    pub fn new(set_name: impl Into<String>) -> Self {
        Self {
            set_name: set_name.into(),
            bonus_levels: Vec::new(),
        }
    }

    /// Add a level to this set.
    pub fn level(mut self, pieces_required: u32, stats: StatVector) -> Self {
        self.bonus_levels.push(SetBonusLevel {
            pieces_required,
            stats,
        });
        self
    }

    /// The highest level satisfied by `count` pieces, if any.
    pub fn highest_level(&self, count: u32) -> Option<&SetBonusLevel> {
        self.bonus_levels
            .iter()
            .filter(|level| level.pieces_required <= count)
            .max_by_key(|level| level.pieces_required)
    }
}

/// A set bonus that is active for a particular build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSetBonus {
    /// Set name.
    pub set_name: String,
    /// Number of equipped pieces from the set.
    pub pieces_count: u32,
    /// Stats of the highest satisfied level.
    pub stats: StatVector,
}

/// Resolve the active set bonuses for a group of equipped pieces.
///
/// Pieces are counted per set name (untagged pieces are ignored). For each
/// counted set with a known definition, the level with the largest
/// `pieces_required` not exceeding the count is selected. Sets with no
/// satisfied level, or with no definition, produce nothing.
///
/// Results are ordered by set name.
///
/// # Examples
///
/// ```rust
/// use buildscore::{resolve_set_bonuses, EquipmentPiece, EquipmentSlot, IconicLevel};
/// use buildscore::{SetBonus, StatField, StatVector};
///
/// let set = SetBonus::new("Eternal Empire")
///     .level(2, StatVector::ZERO.with(StatField::Defense, 3.0))
///     .level(4, StatVector::ZERO.with(StatField::Attack, 5.0));
///
/// let piece = |slot| EquipmentPiece::new(slot, IconicLevel::V, StatVector::ZERO)
///     .in_set("Eternal Empire");
/// let pieces = vec![
///     piece(EquipmentSlot::Helm),
///     piece(EquipmentSlot::Chest),
///     piece(EquipmentSlot::Boots),
/// ];
///
/// let active = resolve_set_bonuses(&pieces, &[set]);
/// assert_eq!(active.len(), 1);
/// assert_eq!(active[0].pieces_count, 3);
/// assert_eq!(active[0].stats.defense, 3.0);
/// assert_eq!(active[0].stats.attack, 0.0);
/// ```
pub fn resolve_set_bonuses(
    pieces: &[EquipmentPiece],
    definitions: &[SetBonus],
) -> Vec<ActiveSetBonus> {
    let counts = pieces
        .iter()
        .filter_map(|piece| piece.set_name.as_deref())
        .fold(BTreeMap::<&str, u32>::new(), |mut counts, set_name| {
            *counts.entry(set_name).or_insert(0) += 1;
            counts
        });

    counts
        .into_iter()
        .filter_map(|(set_name, count)| {
            let definition = definitions.iter().find(|d| d.set_name == set_name)?;
            let level = definition.highest_level(count)?;
            Some(ActiveSetBonus {
                set_name: set_name.to_string(),
                pieces_count: count,
                stats: level.stats,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentSlot, IconicLevel};
    use crate::field::StatField;

    fn pieces(set_name: &str, n: usize) -> Vec<EquipmentPiece> {
        (0..n)
            .map(|_| {
                EquipmentPiece::new(EquipmentSlot::Accessory, IconicLevel::I, StatVector::ZERO)
                    .in_set(set_name)
            })
            .collect()
    }

    fn tiered_set() -> SetBonus {
        SetBonus::new("Hellish Wasteland")
            .level(2, StatVector::ZERO.with(StatField::Health, 1.0))
            .level(4, StatVector::ZERO.with(StatField::Health, 2.0))
            .level(6, StatVector::ZERO.with(StatField::Health, 3.0))
    }

    #[test]
    fn test_highest_satisfied_level_only() {
        let active = resolve_set_bonuses(&pieces("Hellish Wasteland", 5), &[tiered_set()]);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].stats.health, 2.0);
        assert_eq!(active[0].pieces_count, 5);
    }

    #[test]
    fn test_level_order_in_definition_does_not_matter() {
        let mut set = tiered_set();
        set.bonus_levels.reverse();
        let active = resolve_set_bonuses(&pieces("Hellish Wasteland", 6), &[set]);
        assert_eq!(active[0].stats.health, 3.0);
    }

    #[test]
    fn test_unsatisfied_set_is_omitted() {
        let active = resolve_set_bonuses(&pieces("Hellish Wasteland", 1), &[tiered_set()]);
        assert!(active.is_empty());
    }

    #[test]
    fn test_unknown_and_untagged_sets_are_ignored() {
        let mut equipped = pieces("Unknown Set", 4);
        equipped.push(EquipmentPiece::new(
            EquipmentSlot::Weapon,
            IconicLevel::V,
            StatVector::ZERO,
        ));
        assert!(resolve_set_bonuses(&equipped, &[tiered_set()]).is_empty());
    }

    #[test]
    fn test_multiple_sets_sorted_by_name() {
        let mut equipped = pieces("Hellish Wasteland", 2);
        equipped.extend(pieces("Eternal Empire", 2));
        let definitions = vec![
            tiered_set(),
            SetBonus::new("Eternal Empire").level(2, StatVector::ZERO.with(StatField::Defense, 3.0)),
        ];

        let active = resolve_set_bonuses(&equipped, &definitions);
        let names: Vec<&str> = active.iter().map(|a| a.set_name.as_str()).collect();
        assert_eq!(names, vec!["Eternal Empire", "Hellish Wasteland"]);
    }
}
