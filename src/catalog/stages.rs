//! Campaign stage definitions.

#[derive(Debug, Clone, PartialEq)]
pub struct StageDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub chapter: u32,
    pub stamina_cost: u32,
    /// Power the player's team is measured against.
    pub enemy_power: u32,
    pub gold_reward: u64,
    pub exp_reward: u64,
    pub first_clear_gems: u64,
    /// Stage that must be cleared first.
    pub requires: Option<&'static str>,
}

pub static STAGES: &[StageDefinition] = &[
    StageDefinition {
        id: "stage_1_1",
        name: "Slime Meadow",
        chapter: 1,
        stamina_cost: 5,
        enemy_power: 150,
        gold_reward: 100,
        exp_reward: 60,
        first_clear_gems: 20,
        requires: None,
    },
    StageDefinition {
        id: "stage_1_2",
        name: "Goblin Trail",
        chapter: 1,
        stamina_cost: 5,
        enemy_power: 300,
        gold_reward: 150,
        exp_reward: 90,
        first_clear_gems: 20,
        requires: Some("stage_1_1"),
    },
    StageDefinition {
        id: "stage_1_3",
        name: "Wolf Den",
        chapter: 1,
        stamina_cost: 6,
        enemy_power: 550,
        gold_reward: 220,
        exp_reward: 130,
        first_clear_gems: 30,
        requires: Some("stage_1_2"),
    },
    StageDefinition {
        id: "stage_2_1",
        name: "Misty Shore",
        chapter: 2,
        stamina_cost: 8,
        enemy_power: 900,
        gold_reward: 320,
        exp_reward: 200,
        first_clear_gems: 40,
        requires: Some("stage_1_3"),
    },
    StageDefinition {
        id: "stage_2_2",
        name: "Sunken Temple",
        chapter: 2,
        stamina_cost: 8,
        enemy_power: 1400,
        gold_reward: 420,
        exp_reward: 280,
        first_clear_gems: 40,
        requires: Some("stage_2_1"),
    },
    StageDefinition {
        id: "stage_2_3",
        name: "Leviathan's Maw",
        chapter: 2,
        stamina_cost: 10,
        enemy_power: 2200,
        gold_reward: 600,
        exp_reward: 400,
        first_clear_gems: 60,
        requires: Some("stage_2_2"),
    },
    StageDefinition {
        id: "stage_3_1",
        name: "Ashen Fields",
        chapter: 3,
        stamina_cost: 12,
        enemy_power: 3400,
        gold_reward: 800,
        exp_reward: 550,
        first_clear_gems: 80,
        requires: Some("stage_2_3"),
    },
    StageDefinition {
        id: "stage_3_2",
        name: "Dragon's Roost",
        chapter: 3,
        stamina_cost: 15,
        enemy_power: 5000,
        gold_reward: 1200,
        exp_reward: 800,
        first_clear_gems: 100,
        requires: Some("stage_3_1"),
    },
];

pub fn get_stage(id: &str) -> Option<&'static StageDefinition> {
    STAGES.iter().find(|s| s.id == id)
}
