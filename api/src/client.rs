use crate::wire::{BallResponse, WireBatter, WireFallOfWicket, WireOver};
use crate::{
    BallSubmission, BatterLine, BowlerFigures, CompletedOver, FallOfWicket, MatchSnapshot,
    Projections,
};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Scorebox API client — thin HTTP wrapper over the scoring server that
/// owns all match state. The client holds no state of its own.
#[derive(Debug, Clone)]
pub struct ScoreboxApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ScoreboxApi {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_owned())
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Outcome of a ball submission. A rejection is a domain answer, not a
/// transport failure: the server made no state change and the message must
/// reach the user verbatim.
#[derive(Debug, Clone)]
pub enum BallReply {
    Accepted(MatchSnapshot),
    Rejected(String),
}

impl ScoreboxApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .user_agent("stumps/0.1 (terminal cricket scorer)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Record one delivery. The server answers with either a fresh snapshot
    /// or an `{error}` body; rejected balls come back with a 4xx status AND
    /// the error body, so the body is read before the status is consulted.
    pub async fn record_ball(&self, submission: &BallSubmission) -> ApiResult<BallReply> {
        let url = format!("{}/ball", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&submission.form_fields())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        let status = response.status();
        let raw: BallResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parsing(e, url.clone()))?;

        if let Some(message) = raw.error {
            return Ok(BallReply::Rejected(message));
        }
        if !status.is_success() {
            return Err(ApiError::Other(format!("{url}: unexpected status {status}")));
        }
        Ok(BallReply::Accepted(map_snapshot(raw)))
    }

    /// Fetch the candidate bowlers for the next over, in server order.
    pub async fn fetch_bowlers(&self) -> ApiResult<Vec<String>> {
        let url = format!("{}/bowlers", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<Vec<String>>()
                .await
                .map_err(|e| ApiError::Parsing(e, url)),
            Err(e) => Err(ApiError::Api(e, url)),
        }
    }

    /// Commit the chosen bowler. The response body is ignored — the caller
    /// reloads afterwards regardless, re-establishing state from scratch.
    pub async fn set_bowler(&self, bowler: &str) -> ApiResult<()> {
        let url = format!("{}/set_bowler", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("bowler", bowler)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        response
            .error_for_status()
            .map(|_| ())
            .map_err(|e| ApiError::Api(e, url))
    }
}

// ---------------------------------------------------------------------------
// Mapping: scorebox wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_snapshot(raw: BallResponse) -> MatchSnapshot {
    // The wire sends bowling figures as a JSON object with unspecified key
    // order; sort by name so every render of the same snapshot is identical.
    let mut bowling: Vec<BowlerFigures> = raw
        .bowler_stats
        .unwrap_or_default()
        .into_iter()
        .map(|(name, s)| BowlerFigures {
            name,
            balls: s.balls.unwrap_or_default(),
            runs: s.runs.unwrap_or_default(),
            wickets: s.wickets.unwrap_or_default(),
        })
        .collect();
    bowling.sort_by(|a, b| a.name.cmp(&b.name));

    MatchSnapshot {
        total_runs: raw.total_runs.unwrap_or_default(),
        wickets: raw.wickets.unwrap_or_default(),
        overs: raw.overs.unwrap_or_default(),
        remaining_overs: raw.remaining_overs.unwrap_or_default(),
        current_over_balls: raw.current_over_balls.unwrap_or_default(),
        completed_overs: raw
            .completed_overs
            .unwrap_or_default()
            .into_iter()
            .map(map_over)
            .collect(),
        current_bowler: raw.current_bowler.filter(|b| !b.is_empty()),
        projections: Projections {
            at_current_rate: raw.predicted_score_rr.unwrap_or_default(),
            plus_two: raw.predicted_score_rr_plus2.unwrap_or_default(),
            plus_four: raw.predicted_score_rr_plus4.unwrap_or_default(),
        },
        current_batting: raw
            .current_batting
            .unwrap_or_default()
            .into_iter()
            .map(map_batter)
            .collect(),
        out_batsmen: raw
            .out_batsmen
            .unwrap_or_default()
            .into_iter()
            .map(map_batter)
            .collect(),
        bowling,
        fall_of_wickets: raw
            .fall_of_wickets
            .unwrap_or_default()
            .into_iter()
            .map(map_fall_of_wicket)
            .collect(),
        free_hit: raw.free_hit.unwrap_or_default(),
        need_bowler: raw.need_bowler.unwrap_or_default(),
        innings_over: raw.innings_over.unwrap_or_default(),
    }
}

fn map_over(raw: WireOver) -> CompletedOver {
    CompletedOver {
        over: raw.over.unwrap_or_default(),
        bowler: raw.bowler.unwrap_or_default(),
        balls: raw.balls.unwrap_or_default(),
    }
}

fn map_batter(raw: WireBatter) -> BatterLine {
    BatterLine {
        name: raw.name.unwrap_or_default(),
        runs: raw.runs.unwrap_or_default(),
        balls: raw.balls.unwrap_or_default(),
        fours: raw.fours.unwrap_or_default(),
        sixes: raw.sixes.unwrap_or_default(),
    }
}

fn map_fall_of_wicket(raw: WireFallOfWicket) -> FallOfWicket {
    FallOfWicket {
        wk_no: raw.wk_no.unwrap_or_default(),
        score: raw.score.unwrap_or_default(),
        batsman: raw.batsman.unwrap_or_default(),
        bowler: raw.bowler.unwrap_or_default(),
        reason: raw.reason.unwrap_or_default(),
        over: raw.over.unwrap_or_default(),
    }
}
