use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw match document as returned by the Riot match-v5 API.
///
/// The payload is kept opaque so that it can be cached and forwarded
/// unchanged; only the fields the proxy needs are read out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord(Value);

impl MatchRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `info.gameMode`, e.g. "CLASSIC" or "ARAM"
    pub fn game_mode(&self) -> Option<&str> {
        self.0.pointer("/info/gameMode").and_then(Value::as_str)
    }

    /// `metadata.matchId`, e.g. "NA1_4960123456"
    pub fn match_id(&self) -> Option<&str> {
        self.0.pointer("/metadata/matchId").and_then(Value::as_str)
    }
}

/// Typed view over the parts of a match the normalizer reads
#[derive(Debug, Clone, Deserialize)]
pub struct MatchData {
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_mode: String,
    /// Game length in seconds
    pub game_duration: u64,
    pub participants: Vec<Participant>,
}

/// One player's line in a match
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id_game_name: Option<String>,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    pub champ_level: u32,
    pub champion_id: u32,

    // Empty item slots are reported as 0
    #[serde(default)]
    pub item0: u32,
    #[serde(default)]
    pub item1: u32,
    #[serde(default)]
    pub item2: u32,
    #[serde(default)]
    pub item3: u32,
    #[serde(default)]
    pub item4: u32,
    #[serde(default)]
    pub item5: u32,

    pub summoner1_id: u32,
    pub summoner2_id: u32,
    pub perks: Perks,
    #[serde(default)]
    pub vision_score: u32,
}

impl Participant {
    /// Whether this participant is shown under `name`
    pub fn has_name(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        if self.summoner_name == name {
            return true;
        }

        // Riot ID era payloads leave summonerName blank
        self.summoner_name.is_empty() && self.riot_id_game_name.as_deref() == Some(name)
    }

    pub fn item_ids(&self) -> [u32; 6] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5,
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Perks {
    #[serde(default)]
    pub styles: Vec<PerkStyle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerkStyle {
    #[serde(default)]
    pub selections: Vec<PerkSelection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerkSelection {
    pub perk: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let record = MatchRecord::new(json!({
            "metadata": { "matchId": "NA1_1" },
            "info": { "gameMode": "ARAM" }
        }));

        assert_eq!(record.match_id(), Some("NA1_1"));
        assert_eq!(record.game_mode(), Some("ARAM"));
    }

    #[test]
    fn test_accessors_on_unexpected_shape() {
        let record = MatchRecord::new(json!({ "status": { "status_code": 404 } }));

        assert_eq!(record.match_id(), None);
        assert_eq!(record.game_mode(), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let value = json!({ "info": { "gameMode": "CLASSIC" } });
        let record = MatchRecord::new(value.clone());

        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_riot_id_name_fallback() {
        let participant: Participant = serde_json::from_value(json!({
            "summonerName": "",
            "riotIdGameName": "lolarmon1",
            "win": true,
            "kills": 1, "deaths": 2, "assists": 3,
            "champLevel": 10, "championId": 1,
            "summoner1Id": 4, "summoner2Id": 14,
            "perks": { "styles": [] }
        }))
        .unwrap();

        assert!(participant.has_name("lolarmon1"));
        assert!(!participant.has_name("Lolarmon1"));
        assert!(!participant.has_name(""));
        assert_eq!(participant.item_ids(), [0; 6]);
    }
}
