use serde::{Deserialize, Serialize};

/// Compact per-player view of one match, shaped for the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Game mode (e.g., "CLASSIC", "ARAM")
    pub game_mode: String,

    pub outcome: Outcome,

    /// Game length as "m:ss"
    pub duration: String,

    /// "kills/deaths/assists"
    pub kda: String,

    pub cs: CreepScore,

    pub champ_level: u32,

    pub champion_id: u32,

    /// Item slots 0-5, 0 for an empty slot
    pub item_ids: [u32; 6],

    pub summoner_spells: [u32; 2],

    /// Keystone and secondary-tree perk IDs, in style order
    pub runes: Vec<u32>,

    pub vision_score: u32,

    /// Free-form annotations (e.g. "MVP"); nothing fills these yet
    pub tags: Vec<String>,
}

/// Match result for the summarised participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn from_win(win: bool) -> Self {
        if win {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

/// Minion kills with the per-minute rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreepScore {
    pub total: u32,

    /// One-decimal rate, `None` when the game has no duration
    pub per_minute: Option<String>,
}
