use crate::error::{RelayError, RelayResult};
use crate::models::{CreepScore, MatchData, MatchRecord, MatchSummary, Outcome, Participant};

/// Summarise `record` from the point of view of the participant named `participant_key`.
///
/// Pure: the same record and name always give the same summary.
pub fn normalize(record: &MatchRecord, participant_key: &str) -> RelayResult<MatchSummary> {
    // A blank summonerName would otherwise match the empty key
    if participant_key.is_empty() {
        return Err(RelayError::ParticipantNotFound(String::new()));
    }

    let data: MatchData = serde_json::from_value(record.as_value().clone())
        .map_err(|e| RelayError::MalformedInput(format!("unexpected match shape: {}", e)))?;

    let participant = data
        .info
        .participants
        .iter()
        .find(|p| p.has_name(participant_key))
        .ok_or_else(|| RelayError::ParticipantNotFound(participant_key.to_string()))?;

    let seconds = data.info.game_duration;

    Ok(MatchSummary {
        game_mode: data.info.game_mode.clone(),
        outcome: Outcome::from_win(participant.win),
        duration: format_duration(seconds),
        kda: format!(
            "{}/{}/{}",
            participant.kills, participant.deaths, participant.assists
        ),
        cs: CreepScore {
            total: participant.total_minions_killed,
            per_minute: creep_rate(participant.total_minions_killed, seconds),
        },
        champ_level: participant.champ_level,
        champion_id: participant.champion_id,
        item_ids: participant.item_ids(),
        summoner_spells: [participant.summoner1_id, participant.summoner2_id],
        runes: rune_ids(participant)?,
        vision_score: participant.vision_score,
        tags: Vec::new(),
    })
}

/// Format a duration in seconds as "m:ss"
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Minions per minute rounded to one decimal, `None` for a zero-length game
pub fn creep_rate(minions: u32, seconds: u64) -> Option<String> {
    if seconds == 0 {
        return None;
    }

    let minutes = seconds as f64 / 60.0;
    Some(format!("{:.1}", f64::from(minions) / minutes))
}

/// First selection of every perk style, in style order
fn rune_ids(participant: &Participant) -> RelayResult<Vec<u32>> {
    participant
        .perks
        .styles
        .iter()
        .enumerate()
        .map(|(i, style)| {
            style.selections.first().map(|s| s.perk).ok_or_else(|| {
                RelayError::MalformedInput(format!("perk style {} has no selections", i))
            })
        })
        .collect()
}
