//! Static generation and type metadata.
//!
//! These tables drive the browse menus: nine generations and the eighteen
//! canonical type names, in display order.

/// A coarse partition of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Generation {
    pub id: u8,
    pub name: &'static str,
    pub region: &'static str,
}

/// All generations, in menu order.
pub static GENERATIONS: [Generation; 9] = [
    Generation {
        id: 1,
        name: "Generation I",
        region: "Kanto",
    },
    Generation {
        id: 2,
        name: "Generation II",
        region: "Johto",
    },
    Generation {
        id: 3,
        name: "Generation III",
        region: "Hoenn",
    },
    Generation {
        id: 4,
        name: "Generation IV",
        region: "Sinnoh",
    },
    Generation {
        id: 5,
        name: "Generation V",
        region: "Unova",
    },
    Generation {
        id: 6,
        name: "Generation VI",
        region: "Kalos",
    },
    Generation {
        id: 7,
        name: "Generation VII",
        region: "Alola",
    },
    Generation {
        id: 8,
        name: "Generation VIII",
        region: "Galar",
    },
    Generation {
        id: 9,
        name: "Generation IX",
        region: "Paldea",
    },
];

/// Canonical type names, in menu order.
pub static TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];
