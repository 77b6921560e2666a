use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use scorebox_api::client::{ApiError, BallReply, ScoreboxApi};
use scorebox_api::BallSubmission;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Owns the HTTP client and drains the request channel serially — one
/// round trip at a time, matching the one-interaction-in-flight model.
pub struct NetworkWorker {
    client: ScoreboxApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        server_url: String,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: ScoreboxApi::with_base_url(server_url),
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::RecordBall { submission } => {
                    self.handle_record_ball(submission).await
                }
                NetworkRequest::FetchBowlers => self.handle_fetch_bowlers().await,
                NetworkRequest::CommitBowler { bowler } => {
                    self.handle_commit_bowler(bowler).await
                }
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_record_ball(
        &self,
        submission: BallSubmission,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("recording ball: {}", submission.outcome.token());
        match self.client.record_ball(&submission).await? {
            BallReply::Accepted(snapshot) => Ok(NetworkResponse::BallAccepted { snapshot }),
            BallReply::Rejected(message) => Ok(NetworkResponse::BallRejected { message }),
        }
    }

    async fn handle_fetch_bowlers(&self) -> Result<NetworkResponse, ApiError> {
        debug!("fetching bowler candidates");
        let bowlers = self.client.fetch_bowlers().await?;
        Ok(NetworkResponse::BowlersLoaded { bowlers })
    }

    async fn handle_commit_bowler(&self, bowler: String) -> Result<NetworkResponse, ApiError> {
        debug!("committing next bowler: {bowler}");
        self.client.set_bowler(&bowler).await?;
        Ok(NetworkResponse::BowlerCommitted)
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}
