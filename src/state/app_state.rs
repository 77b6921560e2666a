use scorebox_api::{MatchSnapshot, OutcomeCode};

/// Reason label substituted when the scorer gives no answer for a wicket.
pub const DEFAULT_WICKET_REASON: &str = "out";
/// Pre-fill for the wicket reason prompt, the most common dismissal.
pub const REASON_PREFILL: &str = "caught";

/// What happens once a notice is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterNotice {
    Dismiss,
    /// Discard all client state and start over, the way the original page
    /// reload re-established everything from the server.
    Reload,
}

/// The modal overlay machine. While a prompt is open it owns the keyboard:
/// scoring keys become prompt input, Enter resolves, Esc dismisses (which
/// counts as an empty answer, never an error).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PromptState {
    #[default]
    Idle,
    /// Illegal delivery: runs taken besides the penalty run.
    ExtraRuns { outcome: OutcomeCode, input: String },
    /// Bye / leg-bye: runs actually taken.
    ByeRuns { outcome: OutcomeCode, input: String },
    /// Wicket: free-text dismissal reason.
    WicketReason { outcome: OutcomeCode, input: String },
    /// Next-bowler selection. Free text is accepted even when it names
    /// nobody in the candidate list; the server is the validation point.
    BowlerPick { candidates: Vec<String>, input: String },
    /// Blocking notice; the interaction resumes only on acknowledgement.
    Notice { message: String, then: AfterNotice },
}

impl PromptState {
    pub fn is_open(&self) -> bool {
        !matches!(self, PromptState::Idle)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PromptState::Idle => "",
            PromptState::ExtraRuns { .. } => " Extra runs ",
            PromptState::ByeRuns { .. } => " Bye runs ",
            PromptState::WicketReason { .. } => " Wicket ",
            PromptState::BowlerPick { .. } => " Next bowler ",
            PromptState::Notice { .. } => " Notice ",
        }
    }

    pub fn question(&self) -> String {
        match self {
            PromptState::ExtraRuns { outcome, .. } => format!(
                "{}: runs taken on this ball, besides the penalty run? Enter for 0.",
                outcome.label()
            ),
            PromptState::ByeRuns { outcome, .. } => {
                format!("{}: runs taken? Enter for 0.", outcome.label())
            }
            PromptState::WicketReason { .. } => {
                "Reason for wicket (caught, bowled, lbw, stumping, run out, ...)".to_owned()
            }
            PromptState::BowlerPick { candidates, .. } => {
                format!("Select next bowler: {}", candidates.join(", "))
            }
            PromptState::Notice { message, .. } => message.clone(),
            PromptState::Idle => String::new(),
        }
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            PromptState::ExtraRuns { input, .. }
            | PromptState::ByeRuns { input, .. }
            | PromptState::WicketReason { input, .. }
            | PromptState::BowlerPick { input, .. } => Some(input),
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let PromptState::ExtraRuns { input, .. }
        | PromptState::ByeRuns { input, .. }
        | PromptState::WicketReason { input, .. }
        | PromptState::BowlerPick { input, .. } = self
        {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let PromptState::ExtraRuns { input, .. }
        | PromptState::ByeRuns { input, .. }
        | PromptState::WicketReason { input, .. }
        | PromptState::BowlerPick { input, .. } = self
        {
            input.pop();
        }
    }
}

/// Extra-runs answer → count. Absence of input is a valid "0"; so is a
/// malformed or negative answer. Never an error.
pub fn resolve_extra_runs(input: &str) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Wicket reason answer → reason. Empty or cancelled falls back to the
/// generic label; anything else passes through untouched (open text, the
/// server validates).
pub fn resolve_wicket_reason(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_WICKET_REASON.to_owned()
    } else {
        trimmed.to_owned()
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    /// The most recent server snapshot; None until the first accepted ball
    /// (and again after a reload).
    pub snapshot: Option<MatchSnapshot>,
    pub prompt: PromptState,
    /// One submission in flight at a time; scoring keys are dropped while set.
    pub in_flight: bool,
    pub last_error: Option<String>,
    pub show_help: bool,
    pub show_logs: bool,
}
