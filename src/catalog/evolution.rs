//! Evolution chains.
//!
//! A chain is a base stage plus an ordered sequence of subsequent stages.
//! Stage order reflects evolution order; lookups by id return the stage
//! index or `None`.

use serde::{Deserialize, Serialize};

/// What causes a stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvolutionTrigger {
    LevelUp,
    Friendship,
    UseItem,
    #[default]
    None,
}

/// One stage of an evolution chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStage {
    /// Catalog id of the record at this stage.
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub trigger: EvolutionTrigger,
    /// Minimum level for level-up triggers; 0 when not level-gated.
    #[serde(default)]
    pub min_level: u32,
    /// Item name for item-triggered evolutions.
    #[serde(default)]
    pub item: Option<String>,
}

/// A base stage plus the ordered stages that follow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub base: EvolutionStage,
    #[serde(default)]
    pub stages: Vec<EvolutionStage>,
}

impl EvolutionChain {
    /// Catalog ids of every stage, base first.
    pub fn stage_ids(&self) -> Vec<u32> {
        let mut ids = vec![self.base.id];
        ids.extend(self.stages.iter().map(|s| s.id));
        ids
    }

    /// Display names of every stage, base first.
    pub fn stage_names(&self) -> Vec<&str> {
        let mut names = vec![self.base.name.as_str()];
        names.extend(self.stages.iter().map(|s| s.name.as_str()));
        names
    }

    /// Index of the stage holding `id` (0 = base), or `None` if the id is
    /// not part of this chain.
    pub fn find_stage(&self, id: u32) -> Option<usize> {
        self.stage_ids().iter().position(|&sid| sid == id)
    }

    /// The stage the record with `id` evolves into, if any.
    pub fn next_stage(&self, id: u32) -> Option<&EvolutionStage> {
        let stage = self.find_stage(id)?;
        self.stages.get(stage)
    }

    /// The stage the record with `id` evolved from, if any.
    pub fn prev_stage(&self, id: u32) -> Option<&EvolutionStage> {
        match self.find_stage(id)? {
            0 => None,
            1 => Some(&self.base),
            n => self.stages.get(n - 2),
        }
    }
}
