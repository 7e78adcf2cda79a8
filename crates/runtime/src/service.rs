//! Planner session service.
//!
//! Owns the one mutable [`EquipmentSelection`] of a session and is the
//! only place policy is enforced: aggregation, the codec, and the
//! rehydrator all tolerate whatever they are handed, so every rule about
//! what may be equipped lives in these mutation methods.

use planner_core::{
    Armor, BuildExport, ConsolidatedStats, EquipmentSelection, EquippedPact, EquippedWeapon, Mote,
    Pact, PlannerConfig, PlayerStats, SlotId, Weapon, WeaponDisplay, decode, encode,
};

use crate::error::{PlannerError, Result};
use crate::provider::ContentProvider;
use crate::rehydrate::{rehydrate, resolved_ids};
use crate::repository::{BuildRepository, StoredBuild};

/// Result of importing a shared build string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Identifiers in the decoded build that no longer resolve.
    pub missing: usize,
}

impl ImportOutcome {
    /// True when every referenced identifier resolved.
    pub fn is_complete(self) -> bool {
        self.missing == 0
    }
}

/// A planning session: selection, player stats, and the collaborators
/// needed to import, export, and persist builds.
pub struct Planner<P, R> {
    config: PlannerConfig,
    selection: EquipmentSelection,
    player: PlayerStats,
    provider: P,
    repository: R,
}

impl<P: ContentProvider, R: BuildRepository> Planner<P, R> {
    pub fn new(provider: P, repository: R) -> Self {
        Self::with_config(PlannerConfig::default(), provider, repository)
    }

    pub fn with_config(config: PlannerConfig, provider: P, repository: R) -> Self {
        Self {
            config,
            selection: EquipmentSelection::new(),
            player: PlayerStats::default(),
            provider,
            repository,
        }
    }

    pub fn selection(&self) -> &EquipmentSelection {
        &self.selection
    }

    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    // ===== equipment mutations =====

    pub fn equip_armor(&mut self, slot: SlotId, armor: Armor) -> Result<()> {
        let target = match slot {
            SlotId::Helm => &mut self.selection.helm,
            SlotId::UpperBody => &mut self.selection.upper_body,
            SlotId::LowerBody => &mut self.selection.lower_body,
            SlotId::Totem => &mut self.selection.totem,
            _ => {
                return Err(PlannerError::SlotCategoryMismatch {
                    slot,
                    expected: "armor",
                });
            }
        };
        tracing::debug!("Equipping armor `{}` in {}", armor.alias, slot);
        *target = Some(armor);
        Ok(())
    }

    /// Equip a weapon. Replacing a weapon empties its mote sockets; motes
    /// belong to the socketed instance, not the slot.
    pub fn equip_weapon(&mut self, slot: SlotId, weapon: Weapon) -> Result<()> {
        let target = match slot {
            SlotId::Primary => &mut self.selection.primary,
            SlotId::Sidearm => &mut self.selection.sidearm,
            _ => {
                return Err(PlannerError::SlotCategoryMismatch {
                    slot,
                    expected: "weapon",
                });
            }
        };
        tracing::debug!("Equipping weapon `{}` in {}", weapon.alias, slot);
        *target = Some(EquippedWeapon::new(weapon));
        Ok(())
    }

    pub fn equip_pact(&mut self, pact: Pact) {
        tracing::debug!("Equipping pact `{}`", pact.alias);
        self.selection.pact = Some(EquippedPact::new(pact));
    }

    pub fn unequip(&mut self, slot: SlotId) {
        tracing::debug!("Unequipping {}", slot);
        match slot {
            SlotId::Helm => self.selection.helm = None,
            SlotId::UpperBody => self.selection.upper_body = None,
            SlotId::LowerBody => self.selection.lower_body = None,
            SlotId::Totem => self.selection.totem = None,
            SlotId::Primary => self.selection.primary = None,
            SlotId::Sidearm => self.selection.sidearm = None,
            SlotId::Pact => self.selection.pact = None,
        }
    }

    // ===== mote mutations =====

    /// Socket a mote at `index` on a weapon or the pact.
    ///
    /// A mote id may appear at most once across both weapon slots, and
    /// at most once within the pact; the same id on a weapon and on the
    /// pact is allowed.
    pub fn socket_mote(&mut self, slot: SlotId, index: usize, mote: Mote) -> Result<()> {
        if index >= PlannerConfig::MAX_MOTE_SLOTS {
            return Err(PlannerError::SocketOutOfRange {
                index,
                max: PlannerConfig::MAX_MOTE_SLOTS,
            });
        }

        match slot {
            SlotId::Primary | SlotId::Sidearm => {
                let occupied = match slot {
                    SlotId::Primary => self.selection.primary.is_some(),
                    _ => self.selection.sidearm.is_some(),
                };
                if !occupied {
                    return Err(PlannerError::EmptySlot { slot });
                }
                if self.weapon_has_mote(&mote, slot, index) {
                    return Err(PlannerError::DuplicateWeaponMote { id: mote.id });
                }
                let Some(equipped) = self.weapon_mut(slot) else {
                    return Err(PlannerError::EmptySlot { slot });
                };
                tracing::debug!("Socketing mote `{}` at {}[{}]", mote.id, slot, index);
                set_socket(&mut equipped.motes, index, mote);
                Ok(())
            }
            SlotId::Pact => {
                let Some(equipped) = self.selection.pact.as_ref() else {
                    return Err(PlannerError::EmptySlot { slot });
                };
                if has_mote_elsewhere(&equipped.motes, &mote, index) {
                    return Err(PlannerError::DuplicatePactMote { id: mote.id });
                }
                let Some(equipped) = self.selection.pact.as_mut() else {
                    return Err(PlannerError::EmptySlot { slot });
                };
                tracing::debug!("Socketing mote `{}` at pact[{}]", mote.id, index);
                set_socket(&mut equipped.motes, index, mote);
                Ok(())
            }
            _ => Err(PlannerError::SlotWithoutSockets { slot }),
        }
    }

    /// Empty one mote socket. Clearing an already-empty socket is a no-op.
    pub fn clear_mote(&mut self, slot: SlotId, index: usize) -> Result<()> {
        let motes = match slot {
            SlotId::Primary | SlotId::Sidearm => {
                let Some(equipped) = self.weapon_mut(slot) else {
                    return Err(PlannerError::EmptySlot { slot });
                };
                &mut equipped.motes
            }
            SlotId::Pact => {
                let Some(equipped) = self.selection.pact.as_mut() else {
                    return Err(PlannerError::EmptySlot { slot });
                };
                &mut equipped.motes
            }
            _ => return Err(PlannerError::SlotWithoutSockets { slot }),
        };
        if let Some(socket) = motes.get_mut(index) {
            *socket = None;
        }
        Ok(())
    }

    fn weapon_mut(&mut self, slot: SlotId) -> Option<&mut EquippedWeapon> {
        match slot {
            SlotId::Primary => self.selection.primary.as_mut(),
            SlotId::Sidearm => self.selection.sidearm.as_mut(),
            _ => None,
        }
    }

    /// Is this mote already socketed on either weapon, other than at the
    /// socket being written?
    fn weapon_has_mote(&self, mote: &Mote, target_slot: SlotId, target_index: usize) -> bool {
        self.selection.weapon_slots().into_iter().any(|(slot, equipped)| {
            let Some(equipped) = equipped else {
                return false;
            };
            let exclude = (slot == target_slot).then_some(target_index);
            has_mote_at_other_index(&equipped.motes, mote, exclude)
        })
    }

    // ===== player stats =====

    /// Set the mastery rank.
    ///
    /// Lowering the rank below the already-allocated virtue points is
    /// rejected; points must be freed first.
    pub fn set_mastery_rank(&mut self, rank: u8) -> Result<()> {
        if rank > PlannerConfig::MAX_MASTERY_RANK {
            return Err(PlannerError::MasteryRankOutOfRange {
                rank,
                max: PlannerConfig::MAX_MASTERY_RANK,
            });
        }
        let budget = self.config.virtue_budget(rank);
        if self.player.allocated() > budget {
            return Err(PlannerError::VirtueBudgetExceeded {
                requested: self.player.allocated(),
                budget,
            });
        }
        self.player.mastery_rank = rank;
        Ok(())
    }

    /// Set the three virtue allocations at once (absolute values).
    pub fn allocate_virtues(&mut self, grace: u16, spirit: u16, courage: u16) -> Result<()> {
        let requested = grace + spirit + courage;
        let budget = self.config.virtue_budget(self.player.mastery_rank);
        if requested > budget {
            return Err(PlannerError::VirtueBudgetExceeded { requested, budget });
        }
        self.player.grace = grace;
        self.player.spirit = spirit;
        self.player.courage = courage;
        Ok(())
    }

    // ===== derived output =====

    pub fn stats(&self, display: WeaponDisplay) -> ConsolidatedStats {
        ConsolidatedStats::compute(&self.selection, display)
    }

    // ===== export / import =====

    /// Encode the current session as a shareable string.
    pub fn export(&self) -> String {
        encode(&BuildExport::from_selection(&self.selection, &self.player))
    }

    /// Decode a shared string and replace the session with it.
    ///
    /// Identifiers that no longer resolve are dropped silently here and
    /// reported through the outcome so the caller can surface an
    /// incomplete-build notice. Player stats are taken as decoded; the
    /// budget invariant is an allocation-time rule, not an import gate.
    pub async fn import(&mut self, encoded: &str) -> Result<ImportOutcome> {
        let export = decode(encoded)?;
        let selection = rehydrate(&export.equipment, &self.provider).await;
        let missing = export
            .equipment
            .referenced_ids()
            .saturating_sub(resolved_ids(&selection));
        if missing > 0 {
            tracing::warn!("Imported build is missing {} reference(s)", missing);
        }
        self.selection = selection;
        self.player = export.player_stats;
        Ok(ImportOutcome { missing })
    }

    // ===== persistence =====

    pub fn save(&self, key: &str) -> Result<()> {
        let stored = StoredBuild {
            selection: self.selection.clone(),
            player_stats: self.player.clone(),
        };
        self.repository.save(key, &stored)?;
        Ok(())
    }

    /// Restore a saved session. Returns false when the key has no build.
    pub fn restore(&mut self, key: &str) -> Result<bool> {
        match self.repository.load(key)? {
            Some(stored) => {
                self.selection = stored.selection;
                self.player = stored.player_stats;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn saved_keys(&self) -> Result<Vec<String>> {
        Ok(self.repository.list_keys()?)
    }
}

/// Write a mote into a socket, growing the socket list up to the index.
fn set_socket(motes: &mut Vec<Option<Mote>>, index: usize, mote: Mote) {
    if motes.len() <= index {
        motes.resize(index + 1, None);
    }
    motes[index] = Some(mote);
}

fn has_mote_elsewhere(motes: &[Option<Mote>], mote: &Mote, exclude_index: usize) -> bool {
    has_mote_at_other_index(motes, mote, Some(exclude_index))
}

fn has_mote_at_other_index(motes: &[Option<Mote>], mote: &Mote, exclude: Option<usize>) -> bool {
    motes.iter().enumerate().any(|(i, socket)| {
        Some(i) != exclude && socket.as_ref().is_some_and(|s| s.id == mote.id)
    })
}
