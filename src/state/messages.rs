use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use scorebox_api::{BallSubmission, MatchSnapshot};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    RecordBall { submission: BallSubmission },
    FetchBowlers,
    CommitBowler { bowler: String },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// Server accepted the ball: the snapshot fully replaces the rendering.
    BallAccepted { snapshot: MatchSnapshot },
    /// Server rejected the ball: message shown verbatim, no state change.
    BallRejected { message: String },
    BowlersLoaded { bowlers: Vec<String> },
    BowlerCommitted,
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
}
