//! Starter tables for a fresh store.

use lb_core::{Entry, TableCollection};

const MELEE_WEAPONS: &[&str] = &[
    "Long sword",
    "Axe",
    "Dagger",
    "Mace",
    "Flail",
    "Scimitar",
    "Machete",
    "Sickle",
    "Morning star",
    "Quarterstaff",
];

const RANGED_WEAPONS: &[&str] = &["Bow and arrows", "Crossbow", "Spear"];

const STARTER_MONSTERS: &[&str] = &["Goblin", "Orc", "Slime", "Giant rat"];

const COMMON_TREASURE: &[&str] = &["5 gold coins", "Healing potion", "Torn map", "Rusty key"];

/// The tables a new store is seeded with.
///
/// `RPG Weapons` draws through references into the melee and ranged tables,
/// so a fresh install already shows how `LIST_REF:` entries work.
pub fn default_tables() -> TableCollection {
    TableCollection::new()
        .with_table(
            "RPG Weapons",
            vec![
                Entry::reference("Melee Weapons"),
                Entry::reference("Ranged Weapons"),
                Entry::leaf("Shield"),
                Entry::leaf("Halberd"),
            ],
        )
        .with_table("Melee Weapons", leaves(MELEE_WEAPONS))
        .with_table("Ranged Weapons", leaves(RANGED_WEAPONS))
        .with_table("Starter Monsters", leaves(STARTER_MONSTERS))
        .with_table("Common Treasure", leaves(COMMON_TREASURE))
}

fn leaves(names: &[&str]) -> Vec<Entry> {
    names.iter().map(|n| Entry::leaf(*n)).collect()
}
