use crate::state::app_settings::AppSettings;
use crate::state::app_state::{
    AfterNotice, AppState, PromptState, REASON_PREFILL, resolve_extra_runs,
    resolve_wicket_reason,
};
use scorebox_api::{BallSubmission, MatchSnapshot, OutcomeCode, SupplementKind};

/// What the caller should do next. The app core never touches the network
/// itself; it hands the follow-up back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Submit(BallSubmission),
    FetchBowlers,
    CommitBowler(String),
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::default(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Scoring pipeline: classify → (optionally) collect → submit
    // -----------------------------------------------------------------------

    /// A scoring key was pressed. Either the outcome submits immediately or
    /// a supplementary prompt opens first. Dropped while a submission is in
    /// flight or a prompt already owns the keyboard.
    pub fn begin_ball(&mut self, outcome: OutcomeCode) -> Action {
        if self.state.in_flight || self.state.prompt.is_open() {
            return Action::None;
        }
        match outcome.supplement() {
            SupplementKind::None => self.submit(BallSubmission::new(outcome)),
            SupplementKind::ExtraRuns => {
                self.state.prompt = PromptState::ExtraRuns { outcome, input: String::new() };
                Action::None
            }
            SupplementKind::ByeRuns => {
                self.state.prompt = PromptState::ByeRuns { outcome, input: String::new() };
                Action::None
            }
            SupplementKind::WicketReason => {
                self.state.prompt = PromptState::WicketReason {
                    outcome,
                    input: REASON_PREFILL.to_owned(),
                };
                Action::None
            }
        }
    }

    fn submit(&mut self, submission: BallSubmission) -> Action {
        self.state.in_flight = true;
        Action::Submit(submission)
    }

    /// Enter on an open prompt: resolve the answer (with silent defaulting)
    /// and continue the interaction.
    pub fn prompt_confirm(&mut self) -> Action {
        match std::mem::take(&mut self.state.prompt) {
            PromptState::Idle => Action::None,
            PromptState::ExtraRuns { outcome, input }
            | PromptState::ByeRuns { outcome, input } => {
                let mut submission = BallSubmission::new(outcome);
                submission.extra_runs = resolve_extra_runs(&input);
                self.submit(submission)
            }
            PromptState::WicketReason { outcome, input } => {
                let mut submission = BallSubmission::new(outcome);
                submission.wicket_reason = resolve_wicket_reason(&input);
                self.submit(submission)
            }
            PromptState::BowlerPick { input, .. } => {
                let name = input.trim();
                if name.is_empty() {
                    // No selection, no commit. The server re-raises
                    // need_bowler on the next submission.
                    Action::None
                } else {
                    // Accepted even when absent from the candidate list.
                    Action::CommitBowler(name.to_owned())
                }
            }
            PromptState::Notice { then, .. } => {
                if then == AfterNotice::Reload {
                    self.reload();
                }
                Action::None
            }
        }
    }

    /// Esc on an open prompt: dismissal counts as an empty answer, resolved
    /// via the same defaults — never an error, and never a dropped ball.
    pub fn prompt_cancel(&mut self) -> Action {
        match std::mem::take(&mut self.state.prompt) {
            PromptState::Idle => Action::None,
            PromptState::ExtraRuns { outcome, .. } | PromptState::ByeRuns { outcome, .. } => {
                self.submit(BallSubmission::new(outcome))
            }
            PromptState::WicketReason { outcome, .. } => {
                let mut submission = BallSubmission::new(outcome);
                submission.wicket_reason = resolve_wicket_reason("");
                self.submit(submission)
            }
            PromptState::BowlerPick { .. } => Action::None,
            PromptState::Notice { then, .. } => {
                if then == AfterNotice::Reload {
                    self.reload();
                }
                Action::None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Apply an accepted ball. The snapshot replaces the rendering
    /// unconditionally; then innings end wins over bowler rotation.
    pub fn on_ball_accepted(&mut self, snapshot: MatchSnapshot) -> Action {
        self.state.in_flight = false;
        self.state.last_error = None;

        let need_bowler = snapshot.need_bowler;
        let innings_over = snapshot.innings_over;
        self.state.snapshot = Some(snapshot);

        if innings_over {
            self.state.prompt = PromptState::Notice {
                message: "Innings over".to_owned(),
                then: AfterNotice::Reload,
            };
            return Action::None;
        }
        if need_bowler {
            return Action::FetchBowlers;
        }
        Action::None
    }

    /// Server rejected the ball: prior rendering stays (the server made no
    /// state change), message surfaces verbatim.
    pub fn on_ball_rejected(&mut self, message: String) {
        self.state.in_flight = false;
        self.state.prompt = PromptState::Notice { message, then: AfterNotice::Dismiss };
    }

    pub fn on_bowlers_loaded(&mut self, candidates: Vec<String>) {
        self.state.prompt = PromptState::BowlerPick { candidates, input: String::new() };
    }

    /// The bowler commit never applies a snapshot itself — it reloads, and
    /// the next submission re-establishes everything.
    pub fn on_bowler_committed(&mut self) {
        self.reload();
    }

    /// Unreachable server or malformed response: non-fatal notice, prior
    /// rendering intact.
    pub fn on_error(&mut self, message: String) {
        log::error!("network error: {message}");
        self.state.in_flight = false;
        self.state.last_error = Some(message.clone());
        self.state.prompt = PromptState::Notice { message, then: AfterNotice::Dismiss };
    }

    /// The terminal analog of the original full page reload: drop every
    /// piece of transient client state and start from scratch.
    pub fn reload(&mut self) {
        let show_logs = self.state.show_logs;
        self.state = AppState { show_logs, ..AppState::default() };
    }

    // -----------------------------------------------------------------------
    // View toggles
    // -----------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebox_api::OutcomeCode;

    fn app() -> App {
        App { settings: AppSettings::default(), state: AppState::default() }
    }

    fn snapshot() -> MatchSnapshot {
        MatchSnapshot {
            total_runs: 42,
            wickets: 1,
            overs: "5.2".to_owned(),
            current_over_balls: vec!["1".into(), "4".into()],
            ..MatchSnapshot::default()
        }
    }

    fn type_answer(app: &mut App, answer: &str) {
        // Clear any pre-fill first, the way a scorer would.
        while app.state.prompt.input().is_some_and(|i| !i.is_empty()) {
            app.state.prompt.backspace();
        }
        for c in answer.chars() {
            app.state.prompt.push_char(c);
        }
    }

    #[test]
    fn boundary_submits_without_any_prompt() {
        let mut app = app();
        let action = app.begin_ball(OutcomeCode::Four);
        let Action::Submit(sub) = action else { panic!("expected a submission") };
        assert_eq!(sub.outcome.token(), "4");
        assert_eq!(sub.extra_runs, 0);
        assert_eq!(sub.wicket_reason, "");
        assert!(app.state.in_flight);
    }

    #[test]
    fn wide_prompts_and_carries_the_answer() {
        let mut app = app();
        assert_eq!(app.begin_ball(OutcomeCode::Wide), Action::None);
        assert!(app.state.prompt.is_open());
        assert!(!app.state.in_flight, "nothing submitted while the prompt is open");

        type_answer(&mut app, "2");
        let Action::Submit(sub) = app.prompt_confirm() else { panic!() };
        assert_eq!(sub.outcome.token(), "WD");
        assert_eq!(sub.extra_runs, 2);
        assert_eq!(sub.wicket_reason, "");
    }

    #[test]
    fn garbage_extra_runs_answers_submit_zero() {
        for answer in ["", "abc", "-3", "1.5"] {
            let mut app = app();
            app.begin_ball(OutcomeCode::NoBall);
            type_answer(&mut app, answer);
            let Action::Submit(sub) = app.prompt_confirm() else { panic!() };
            assert_eq!(sub.extra_runs, 0, "answer {answer:?} must default to 0");
        }
    }

    #[test]
    fn cancelling_the_extra_runs_prompt_still_submits_zero() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Wide);
        let Action::Submit(sub) = app.prompt_cancel() else { panic!() };
        assert_eq!(sub.outcome.token(), "WD");
        assert_eq!(sub.extra_runs, 0);
    }

    #[test]
    fn wicket_prompt_prefills_and_defaults_to_out() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Wicket);
        assert_eq!(app.state.prompt.input(), Some("caught"));

        type_answer(&mut app, "");
        let Action::Submit(sub) = app.prompt_confirm() else { panic!() };
        assert_eq!(sub.wicket_reason, "out");
        assert_eq!(sub.extra_runs, 0);
    }

    #[test]
    fn wicket_reason_is_open_text() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Wicket);
        type_answer(&mut app, "obstructing the field");
        let Action::Submit(sub) = app.prompt_confirm() else { panic!() };
        assert_eq!(sub.wicket_reason, "obstructing the field");
    }

    #[test]
    fn rejection_keeps_the_prior_snapshot_and_quotes_the_server() {
        let mut app = app();
        app.begin_ball(OutcomeCode::One);
        assert_eq!(app.on_ball_accepted(snapshot()), Action::None);
        let before = app.state.snapshot.clone();

        app.begin_ball(OutcomeCode::Six);
        app.on_ball_rejected("No bowler set".to_owned());

        assert_eq!(app.state.snapshot, before, "rejection must not touch the rendering");
        assert!(!app.state.in_flight);
        let PromptState::Notice { message, then } = &app.state.prompt else { panic!() };
        assert_eq!(message, "No bowler set");
        assert_eq!(*then, AfterNotice::Dismiss);
    }

    #[test]
    fn need_bowler_triggers_exactly_one_candidate_fetch() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Dot);
        let mut snap = snapshot();
        snap.need_bowler = true;
        assert_eq!(app.on_ball_accepted(snap), Action::FetchBowlers);

        let mut plain = snapshot();
        plain.need_bowler = false;
        app.begin_ball(OutcomeCode::Dot);
        assert_eq!(app.on_ball_accepted(plain), Action::None);
    }

    #[test]
    fn bowler_outside_the_candidate_list_is_accepted() {
        let mut app = app();
        app.on_bowlers_loaded(vec!["Kumar".into(), "Dev".into()]);
        type_answer(&mut app, "Occasional Spinner");
        assert_eq!(
            app.prompt_confirm(),
            Action::CommitBowler("Occasional Spinner".to_owned())
        );
    }

    #[test]
    fn dismissed_bowler_prompt_commits_nothing() {
        let mut app = app();
        app.on_bowlers_loaded(vec!["Kumar".into()]);
        assert_eq!(app.prompt_cancel(), Action::None);
        assert_eq!(app.state.prompt, PromptState::Idle);

        // Empty answer on Enter is the same non-commit.
        app.on_bowlers_loaded(vec!["Kumar".into()]);
        assert_eq!(app.prompt_confirm(), Action::None);
    }

    #[test]
    fn bowler_commit_reloads_to_the_fresh_start_state() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Dot);
        app.on_ball_accepted(snapshot());
        app.on_bowler_committed();
        assert_eq!(app.state.snapshot, None);
        assert!(!app.state.in_flight);
        assert_eq!(app.state.prompt, PromptState::Idle);
    }

    #[test]
    fn innings_over_renders_then_notices_then_reloads() {
        let mut app = app();
        app.begin_ball(OutcomeCode::Four);
        let mut snap = snapshot();
        snap.innings_over = true;
        snap.need_bowler = true; // innings end wins over rotation
        assert_eq!(app.on_ball_accepted(snap), Action::None);

        // Rendered first: the snapshot is applied before the notice.
        assert!(app.state.snapshot.is_some());
        let PromptState::Notice { then, .. } = &app.state.prompt else { panic!() };
        assert_eq!(*then, AfterNotice::Reload);

        app.prompt_confirm();
        assert_eq!(app.state.snapshot, None, "acknowledging the notice forces the reload");
    }

    #[test]
    fn scoring_keys_are_dropped_while_a_submission_is_in_flight() {
        let mut app = app();
        assert!(matches!(app.begin_ball(OutcomeCode::Two), Action::Submit(_)));
        assert_eq!(app.begin_ball(OutcomeCode::Two), Action::None);
        assert_eq!(app.begin_ball(OutcomeCode::Wicket), Action::None);
        assert_eq!(app.state.prompt, PromptState::Idle);
    }

    #[test]
    fn network_failure_leaves_the_rendering_intact() {
        let mut app = app();
        app.begin_ball(OutcomeCode::One);
        app.on_ball_accepted(snapshot());
        let before = app.state.snapshot.clone();

        app.begin_ball(OutcomeCode::One);
        app.on_error("Network error for http://127.0.0.1:5000/ball: timeout".to_owned());
        assert_eq!(app.state.snapshot, before);
        assert!(matches!(app.state.prompt, PromptState::Notice { .. }));
    }
}
