//! Built-in sample dataset.
//!
//! A small Kanto lineup used when no catalog file is configured, so the
//! application always starts with something to browse.

use crate::catalog::{
    EvolutionChain, EvolutionStage, EvolutionTrigger, Move, Pokedex, Pokemon, Stats,
};

/// Build the built-in sample catalog.
pub fn sample_catalog() -> Pokedex {
    let mut dex = Pokedex::new();
    for pokemon in sample_records() {
        dex.add(pokemon);
    }
    dex
}

fn sample_records() -> Vec<Pokemon> {
    vec![
        Pokemon {
            id: 1,
            name: "Bulbasaur".to_string(),
            name_local: String::new(),
            generation: 1,
            types: vec!["grass".to_string(), "poison".to_string()],
            height: 7.0,
            weight: 69.0,
            base_experience: 64,
            stats: Stats {
                hp: 45,
                attack: 49,
                defense: 49,
                sp_atk: 65,
                sp_def: 65,
                speed: 45,
            },
            moves: vec![
                attack_move("Razor Leaf", "grass", 55, "physical"),
                attack_move("Vine Whip", "grass", 45, "physical"),
            ],
            evolution: Some(level_up_chain(
                (1, "Bulbasaur"),
                &[(2, "Ivysaur", 16), (3, "Venusaur", 32)],
            )),
        },
        Pokemon {
            id: 4,
            name: "Charmander".to_string(),
            name_local: String::new(),
            generation: 1,
            types: vec!["fire".to_string()],
            height: 6.0,
            weight: 85.0,
            base_experience: 62,
            stats: Stats {
                hp: 39,
                attack: 52,
                defense: 43,
                sp_atk: 60,
                sp_def: 50,
                speed: 65,
            },
            moves: vec![
                attack_move("Ember", "fire", 40, "special"),
                attack_move("Flamethrower", "fire", 90, "special"),
            ],
            evolution: Some(level_up_chain(
                (4, "Charmander"),
                &[(5, "Charmeleon", 16), (6, "Charizard", 36)],
            )),
        },
        Pokemon {
            id: 7,
            name: "Squirtle".to_string(),
            name_local: String::new(),
            generation: 1,
            types: vec!["water".to_string()],
            height: 5.0,
            weight: 90.0,
            base_experience: 63,
            stats: Stats {
                hp: 44,
                attack: 48,
                defense: 65,
                sp_atk: 50,
                sp_def: 64,
                speed: 43,
            },
            moves: vec![
                attack_move("Water Gun", "water", 40, "special"),
                attack_move("Hydro Pump", "water", 110, "special"),
            ],
            evolution: Some(level_up_chain(
                (7, "Squirtle"),
                &[(8, "Wartortle", 16), (9, "Blastoise", 36)],
            )),
        },
        Pokemon {
            id: 25,
            name: "Pikachu".to_string(),
            name_local: String::new(),
            generation: 1,
            types: vec!["electric".to_string()],
            height: 4.0,
            weight: 60.0,
            base_experience: 112,
            stats: Stats {
                hp: 35,
                attack: 55,
                defense: 40,
                sp_atk: 50,
                sp_def: 50,
                speed: 90,
            },
            moves: vec![
                attack_move("Thunderbolt", "electric", 90, "special"),
                attack_move("Quick Attack", "normal", 40, "physical"),
                attack_move("Iron Tail", "steel", 100, "physical"),
                attack_move("Thunder Wave", "electric", 0, "status"),
            ],
            evolution: Some(EvolutionChain {
                base: EvolutionStage {
                    id: 172,
                    name: "Pichu".to_string(),
                    trigger: EvolutionTrigger::Friendship,
                    min_level: 0,
                    item: None,
                },
                stages: vec![
                    EvolutionStage {
                        id: 25,
                        name: "Pikachu".to_string(),
                        trigger: EvolutionTrigger::UseItem,
                        min_level: 0,
                        item: Some("Thunder Stone".to_string()),
                    },
                    EvolutionStage {
                        id: 26,
                        name: "Raichu".to_string(),
                        trigger: EvolutionTrigger::None,
                        min_level: 0,
                        item: None,
                    },
                ],
            }),
        },
        Pokemon {
            id: 150,
            name: "Mewtwo".to_string(),
            name_local: String::new(),
            generation: 1,
            types: vec!["psychic".to_string()],
            height: 20.0,
            weight: 1220.0,
            base_experience: 340,
            stats: Stats {
                hp: 106,
                attack: 110,
                defense: 90,
                sp_atk: 154,
                sp_def: 90,
                speed: 130,
            },
            moves: vec![
                attack_move("Psychic", "psychic", 90, "special"),
                attack_move("Shadow Ball", "ghost", 80, "special"),
                attack_move("Psystrike", "psychic", 100, "special"),
            ],
            evolution: None,
        },
    ]
}

fn attack_move(name: &str, type_name: &str, power: u32, category: &str) -> Move {
    Move {
        name: name.to_string(),
        name_local: String::new(),
        type_name: type_name.to_string(),
        power,
        category: category.to_string(),
    }
}

/// A plain chain where every stage after the base is a level-up evolution.
fn level_up_chain(base: (u32, &str), stages: &[(u32, &str, u32)]) -> EvolutionChain {
    EvolutionChain {
        base: EvolutionStage {
            id: base.0,
            name: base.1.to_string(),
            trigger: EvolutionTrigger::None,
            min_level: 0,
            item: None,
        },
        stages: stages
            .iter()
            .map(|&(id, name, min_level)| EvolutionStage {
                id,
                name: name.to_string(),
                trigger: EvolutionTrigger::LevelUp,
                min_level,
                item: None,
            })
            .collect(),
    }
}
