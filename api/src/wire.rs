//! Scorebox server raw wire types, the serde shapes for the JSON it returns.
//! Every field is optional so a sparse or older server payload still parses;
//! the mapping functions in client.rs supply the defaults.

use serde::Deserialize;
use std::collections::HashMap;

/// Reply to `POST /ball`: either a full snapshot of the innings or an
/// `error` message (the server also sets a 4xx status on rejection, but the
/// body is the authoritative part).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BallResponse {
    pub error: Option<String>,
    /// "ok" or "free_hit_blocked"; informational only.
    pub status: Option<String>,
    /// Echo of the token the server recorded for this ball.
    pub token: Option<String>,
    pub total_runs: Option<u32>,
    pub wickets: Option<u32>,
    pub overs: Option<String>,
    pub remaining_overs: Option<String>,
    pub current_over_balls: Option<Vec<String>>,
    pub completed_overs: Option<Vec<WireOver>>,
    pub current_bowler: Option<String>,
    pub predicted_score_rr: Option<i64>,
    pub predicted_score_rr_plus2: Option<i64>,
    pub predicted_score_rr_plus4: Option<i64>,
    pub current_batting: Option<Vec<WireBatter>>,
    pub out_batsmen: Option<Vec<WireBatter>>,
    pub bowler_stats: Option<HashMap<String, WireBowlerStats>>,
    pub fall_of_wickets: Option<Vec<WireFallOfWicket>>,
    pub free_hit: Option<bool>,
    pub need_bowler: Option<bool>,
    pub innings_over: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireOver {
    pub over: Option<u32>,
    pub bowler: Option<String>,
    pub balls: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireBatter {
    pub name: Option<String>,
    pub runs: Option<u32>,
    pub balls: Option<u32>,
    pub fours: Option<u32>,
    pub sixes: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireBowlerStats {
    pub balls: Option<u32>,
    pub runs: Option<u32>,
    pub wickets: Option<u32>,
    /// Tracked server-side but not displayed yet.
    pub maidens: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireFallOfWicket {
    pub wk_no: Option<u32>,
    pub score: Option<u32>,
    pub batsman: Option<String>,
    pub bowler: Option<String>,
    pub reason: Option<String>,
    pub over: Option<String>,
}
