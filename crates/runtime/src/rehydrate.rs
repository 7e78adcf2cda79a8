//! Concurrent identifier resolution for imported builds.
//!
//! The async counterpart of [`planner_core::rehydrate`]: same
//! best-effort semantics, but the seven slot lookups are issued
//! concurrently since none of them depends on another. Each future
//! writes only its own slot, so joining the results is the whole
//! synchronization story.

use planner_core::{
    Armor, EquipmentSelection, EquippedPact, EquippedWeapon, ItemCategory, ItemRecord, MoteId,
    MoteSlots, SimplifiedBuild, SlotExport,
};
use tracing::warn;

use crate::provider::ContentProvider;

/// Reconstruct an equipment selection from a decoded build, best-effort.
///
/// A base-item miss (or provider error) leaves that slot empty, a mote
/// miss leaves a hole at its socket, and nothing aborts the other
/// slots. Compare [`resolved_ids`] with
/// [`SimplifiedBuild::referenced_ids`] to tell how much was dropped.
pub async fn rehydrate<P: ContentProvider>(
    build: &SimplifiedBuild,
    provider: &P,
) -> EquipmentSelection {
    let (helm, upper_body, lower_body, totem, primary, sidearm, pact) = tokio::join!(
        armor_slot(build.helm.as_deref(), provider),
        armor_slot(build.upper_body.as_deref(), provider),
        armor_slot(build.lower_body.as_deref(), provider),
        armor_slot(build.totem.as_deref(), provider),
        weapon_slot(build.primary.as_ref(), provider),
        weapon_slot(build.sidearm.as_ref(), provider),
        pact_slot(build.pact.as_ref(), provider),
    );

    EquipmentSelection {
        helm,
        upper_body,
        lower_body,
        totem,
        primary,
        sidearm,
        pact,
    }
}

/// Number of identifiers that actually resolved into the selection.
pub fn resolved_ids(selection: &EquipmentSelection) -> usize {
    let armor = selection
        .armor_slots()
        .into_iter()
        .filter(|(_, slot)| slot.is_some())
        .count();
    let weapons = selection
        .weapon_slots()
        .into_iter()
        .filter_map(|(_, slot)| slot)
        .map(|equipped| 1 + equipped.socketed().count())
        .sum::<usize>();
    let pact = selection
        .pact
        .as_ref()
        .map_or(0, |equipped| 1 + equipped.socketed().count());
    armor + weapons + pact
}

async fn fetch_item<P: ContentProvider>(
    map_id: &str,
    category: ItemCategory,
    provider: &P,
) -> Option<ItemRecord> {
    match provider.fetch_item(map_id, category).await {
        Ok(record) => record,
        Err(error) => {
            warn!(%map_id, %category, %error, "item lookup failed, treating as miss");
            None
        }
    }
}

async fn armor_slot<P: ContentProvider>(map_id: Option<&str>, provider: &P) -> Option<Armor> {
    match fetch_item(map_id?, ItemCategory::Armor, provider).await? {
        ItemRecord::Armor(armor) => Some(armor),
        _ => None,
    }
}

async fn weapon_slot<P: ContentProvider>(
    slot: Option<&SlotExport>,
    provider: &P,
) -> Option<EquippedWeapon> {
    let slot = slot?;
    let weapon = match fetch_item(&slot.item, ItemCategory::Weapon, provider).await? {
        ItemRecord::Weapon(weapon) => weapon,
        _ => return None,
    };
    let motes = mote_slots(slot.motes.as_deref(), provider).await;
    Some(EquippedWeapon::with_motes(weapon, motes))
}

async fn pact_slot<P: ContentProvider>(
    slot: Option<&SlotExport>,
    provider: &P,
) -> Option<EquippedPact> {
    let slot = slot?;
    let pact = match fetch_item(&slot.item, ItemCategory::Pact, provider).await? {
        ItemRecord::Pact(pact) => pact,
        _ => return None,
    };
    let motes = mote_slots(slot.motes.as_deref(), provider).await;
    Some(EquippedPact::with_motes(pact, motes))
}

/// Resolve each stored socket at its original index; misses and provider
/// errors become holes.
async fn mote_slots<P: ContentProvider>(
    stored: Option<&[Option<String>]>,
    provider: &P,
) -> MoteSlots {
    let mut slots = MoteSlots::new();
    for socket in stored.unwrap_or_default() {
        let resolved = match socket.as_deref() {
            Some(id) => {
                let id = MoteId::new(id);
                match provider.fetch_mote(&id).await {
                    Ok(mote) => mote,
                    Err(error) => {
                        warn!(mote_id = %id, %error, "mote lookup failed, leaving socket empty");
                        None
                    }
                }
            }
            None => None,
        };
        slots.push(resolved);
    }
    slots
}
