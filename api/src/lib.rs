pub mod client;
pub mod wire;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the scorebox wire format
// ---------------------------------------------------------------------------

/// Canonical code for what happened on a delivery. Every scoring action in
/// the UI maps to exactly one of these; an unbound action is a programming
/// error, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCode {
    Dot,
    One,
    Two,
    Three,
    Four,
    Six,
    Wide,
    NoBall,
    Wicket,
    Bye,
    LegBye,
}

/// Which supplementary question (if any) an outcome requires before it can
/// be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementKind {
    /// Submit as-is.
    None,
    /// Illegal delivery — runs taken besides the one-run penalty.
    ExtraRuns,
    /// Bye / leg-bye — runs actually taken. The server reads the count from
    /// the same extra_runs field as illegal deliveries.
    ByeRuns,
    /// Wicket — free-text dismissal reason.
    WicketReason,
}

impl OutcomeCode {
    /// The wire token the server expects in the `outcome` form field.
    pub fn token(&self) -> &'static str {
        match self {
            OutcomeCode::Dot => "0",
            OutcomeCode::One => "1",
            OutcomeCode::Two => "2",
            OutcomeCode::Three => "3",
            OutcomeCode::Four => "4",
            OutcomeCode::Six => "6",
            OutcomeCode::Wide => "WD",
            OutcomeCode::NoBall => "NB",
            OutcomeCode::Wicket => "W",
            OutcomeCode::Bye => "B",
            OutcomeCode::LegBye => "LB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeCode::Dot => "dot ball",
            OutcomeCode::One => "single",
            OutcomeCode::Two => "two runs",
            OutcomeCode::Three => "three runs",
            OutcomeCode::Four => "four",
            OutcomeCode::Six => "six",
            OutcomeCode::Wide => "wide",
            OutcomeCode::NoBall => "no-ball",
            OutcomeCode::Wicket => "wicket",
            OutcomeCode::Bye => "bye",
            OutcomeCode::LegBye => "leg bye",
        }
    }

    pub fn supplement(&self) -> SupplementKind {
        match self {
            OutcomeCode::Wide | OutcomeCode::NoBall => SupplementKind::ExtraRuns,
            OutcomeCode::Bye | OutcomeCode::LegBye => SupplementKind::ByeRuns,
            OutcomeCode::Wicket => SupplementKind::WicketReason,
            _ => SupplementKind::None,
        }
    }

    /// Wide and no-ball: the delivery does not count and carries a penalty run.
    pub fn is_illegal_delivery(&self) -> bool {
        matches!(self, OutcomeCode::Wide | OutcomeCode::NoBall)
    }
}

/// Presentation category of a ball token, derived by prefix/equality check
/// on the token text (tokens like "WD+2" and "NB+4" stay unparsed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Four,
    Six,
    Wicket,
    Wide,
    NoBall,
    Plain,
}

impl TokenClass {
    pub fn of(token: &str) -> Self {
        if token == "4" {
            TokenClass::Four
        } else if token == "6" {
            TokenClass::Six
        } else if token == "W" {
            TokenClass::Wicket
        } else if token.starts_with("WD") {
            TokenClass::Wide
        } else if token.starts_with("NB") {
            TokenClass::NoBall
        } else {
            TokenClass::Plain
        }
    }
}

/// One recorded delivery, ready for `POST /ball`. Exactly one of the
/// supplementary fields is meaningful per outcome; the other carries its
/// neutral default (0 / empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallSubmission {
    pub outcome: OutcomeCode,
    pub extra_runs: u32,
    pub wicket_reason: String,
}

impl BallSubmission {
    pub fn new(outcome: OutcomeCode) -> Self {
        Self {
            outcome,
            extra_runs: 0,
            wicket_reason: String::new(),
        }
    }

    /// Form-encoded body fields for the ball-recording endpoint.
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("outcome", self.outcome.token().to_owned()),
            ("extra_runs", self.extra_runs.to_string()),
            ("wicket_reason", self.wicket_reason.clone()),
        ]
    }
}

/// The complete, rendering-ready state of the innings as of the most recent
/// server response. Received, never mutated: each snapshot fully replaces
/// the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSnapshot {
    pub total_runs: u32,
    pub wickets: u32,
    /// Overs bowled, "x.y" as formatted by the server.
    pub overs: String,
    pub remaining_overs: String,
    pub current_over_balls: Vec<String>,
    pub completed_overs: Vec<CompletedOver>,
    pub current_bowler: Option<String>,
    pub projections: Projections,
    pub current_batting: Vec<BatterLine>,
    pub out_batsmen: Vec<BatterLine>,
    /// Sorted by bowler name — the wire carries an unordered object.
    pub bowling: Vec<BowlerFigures>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub free_hit: bool,
    pub need_bowler: bool,
    pub innings_over: bool,
}

/// Projected final scores at the current run rate and at RR+2 / RR+4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projections {
    pub at_current_rate: i64,
    pub plus_two: i64,
    pub plus_four: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatterLine {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedOver {
    pub over: u32,
    pub bowler: String,
    pub balls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BowlerFigures {
    pub name: String,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
}

impl BowlerFigures {
    /// Whole-overs.remainder display of the raw ball count, e.g. 14 → "2.2".
    /// Purely presentational; the ball count stays authoritative.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.balls / 6, self.balls % 6)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallOfWicket {
    pub wk_no: u32,
    pub score: u32,
    pub batsman: String,
    pub bowler: String,
    pub reason: String,
    /// "x.y" over string at the fall, as sent by the server.
    pub over: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outcome_has_a_distinct_token() {
        let all = [
            OutcomeCode::Dot,
            OutcomeCode::One,
            OutcomeCode::Two,
            OutcomeCode::Three,
            OutcomeCode::Four,
            OutcomeCode::Six,
            OutcomeCode::Wide,
            OutcomeCode::NoBall,
            OutcomeCode::Wicket,
            OutcomeCode::Bye,
            OutcomeCode::LegBye,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.token(), b.token(), "{a:?} and {b:?} share a token");
            }
        }
    }

    #[test]
    fn supplement_classes() {
        assert_eq!(OutcomeCode::Wide.supplement(), SupplementKind::ExtraRuns);
        assert_eq!(OutcomeCode::NoBall.supplement(), SupplementKind::ExtraRuns);
        assert_eq!(OutcomeCode::Wicket.supplement(), SupplementKind::WicketReason);
        assert_eq!(OutcomeCode::Bye.supplement(), SupplementKind::ByeRuns);
        assert_eq!(OutcomeCode::LegBye.supplement(), SupplementKind::ByeRuns);
        for code in [
            OutcomeCode::Dot,
            OutcomeCode::One,
            OutcomeCode::Two,
            OutcomeCode::Three,
            OutcomeCode::Four,
            OutcomeCode::Six,
        ] {
            assert_eq!(code.supplement(), SupplementKind::None);
        }
    }

    #[test]
    fn only_wide_and_no_ball_are_illegal() {
        assert!(OutcomeCode::Wide.is_illegal_delivery());
        assert!(OutcomeCode::NoBall.is_illegal_delivery());
        assert!(!OutcomeCode::Bye.is_illegal_delivery());
        assert!(!OutcomeCode::Wicket.is_illegal_delivery());
        assert!(!OutcomeCode::Four.is_illegal_delivery());
    }

    #[test]
    fn token_class_by_prefix_and_equality() {
        assert_eq!(TokenClass::of("4"), TokenClass::Four);
        assert_eq!(TokenClass::of("6"), TokenClass::Six);
        assert_eq!(TokenClass::of("W"), TokenClass::Wicket);
        assert_eq!(TokenClass::of("WD"), TokenClass::Wide);
        assert_eq!(TokenClass::of("WD+2"), TokenClass::Wide);
        assert_eq!(TokenClass::of("NB"), TokenClass::NoBall);
        assert_eq!(TokenClass::of("NB+4"), TokenClass::NoBall);
        assert_eq!(TokenClass::of("0"), TokenClass::Plain);
        assert_eq!(TokenClass::of("LB2"), TokenClass::Plain);
    }

    #[test]
    fn plain_submission_carries_neutral_supplement() {
        let sub = BallSubmission::new(OutcomeCode::Four);
        assert_eq!(
            sub.form_fields(),
            [
                ("outcome", "4".to_owned()),
                ("extra_runs", "0".to_owned()),
                ("wicket_reason", String::new()),
            ]
        );
    }

    #[test]
    fn overs_display_splits_balls_at_six() {
        let figures = BowlerFigures { name: "Kumar".into(), balls: 14, runs: 21, wickets: 1 };
        assert_eq!(figures.overs_display(), "2.2");

        let fresh = BowlerFigures { name: "Dev".into(), balls: 0, runs: 0, wickets: 0 };
        assert_eq!(fresh.overs_display(), "0.0");

        let exact = BowlerFigures { name: "Lal".into(), balls: 24, runs: 30, wickets: 2 };
        assert_eq!(exact.overs_display(), "4.0");
    }
}
