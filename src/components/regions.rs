//! Pure line builders for the scorecard regions. Every region is rebuilt
//! from scratch on each snapshot — no diffing, no retained widgets — so
//! rendering the same snapshot twice always yields the same lines.

use scorebox_api::{BatterLine, MatchSnapshot, TokenClass};

/// The extras breakdown is not in the snapshot contract yet; render a fixed
/// placeholder rather than deriving something from bowler_stats.
pub const EXTRAS_PLACEHOLDER: &str = "Extras: breakdown not in snapshot yet";

/// Score header: "57/2  7.3 ov (12.3 left)  FREE HIT".
pub fn header_line(snapshot: &MatchSnapshot) -> String {
    let mut line = format!(
        "{}/{}  {} ov",
        snapshot.total_runs, snapshot.wickets, snapshot.overs
    );
    if !snapshot.remaining_overs.is_empty() {
        line.push_str(&format!(" ({} left)", snapshot.remaining_overs));
    }
    if snapshot.free_hit {
        line.push_str("  FREE HIT");
    }
    line
}

pub fn bowler_line(snapshot: &MatchSnapshot) -> String {
    format!("Bowling: {}", snapshot.current_bowler.as_deref().unwrap_or("-"))
}

/// Current-over tokens tagged with their presentation category.
pub fn current_over_tokens(snapshot: &MatchSnapshot) -> Vec<(String, TokenClass)> {
    snapshot
        .current_over_balls
        .iter()
        .map(|token| (token.clone(), TokenClass::of(token)))
        .collect()
}

/// Completed overs in snapshot order (assumed chronological).
pub fn completed_over_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    snapshot
        .completed_overs
        .iter()
        .map(|over| format!("Over {} [{}]: {}", over.over, over.bowler, over.balls.join(" ")))
        .collect()
}

pub fn projection_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    let p = snapshot.projections;
    vec![
        format!("At current rate: {}", p.at_current_rate),
        format!("At RR+2:         {}", p.plus_two),
        format!("At RR+4:         {}", p.plus_four),
    ]
}

pub fn batting_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    snapshot.current_batting.iter().map(batter_line).collect()
}

pub fn out_batsmen_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    snapshot.out_batsmen.iter().map(batter_line).collect()
}

fn batter_line(b: &BatterLine) -> String {
    format!("{} {}({})  4s:{} 6s:{}", b.name, b.runs, b.balls, b.fours, b.sixes)
}

/// Figures already arrive sorted by name; the overs form of the ball count
/// is derived here for display only.
pub fn bowling_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    snapshot
        .bowling
        .iter()
        .map(|f| {
            format!(
                "{} - {} overs, {} runs, {} wkts",
                f.name,
                f.overs_display(),
                f.runs,
                f.wickets
            )
        })
        .collect()
}

/// Fall of wickets in snapshot order, "1-23 (P1, Kumar, caught, 2.4 ov)".
pub fn fall_of_wicket_lines(snapshot: &MatchSnapshot) -> Vec<String> {
    snapshot
        .fall_of_wickets
        .iter()
        .map(|f| {
            format!(
                "{}-{} ({}, {}, {}, {} ov)",
                f.wk_no, f.score, f.batsman, f.bowler, f.reason, f.over
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebox_api::{
        BowlerFigures, CompletedOver, FallOfWicket, MatchSnapshot, Projections, TokenClass,
    };

    fn snapshot() -> MatchSnapshot {
        MatchSnapshot {
            total_runs: 57,
            wickets: 2,
            overs: "7.3".to_owned(),
            remaining_overs: "12.3".to_owned(),
            current_over_balls: vec!["1".into(), "WD+2".into(), "4".into(), "W".into()],
            completed_overs: vec![CompletedOver {
                over: 1,
                bowler: "Kumar".to_owned(),
                balls: vec!["0".into(), "1".into(), "4".into(), "0".into(), "2".into(), "W".into()],
            }],
            current_bowler: Some("Dev".to_owned()),
            projections: Projections { at_current_rate: 152, plus_two: 192, plus_four: 232 },
            current_batting: vec![BatterLine {
                name: "P3".to_owned(),
                runs: 21,
                balls: 14,
                fours: 3,
                sixes: 0,
            }],
            out_batsmen: vec![BatterLine {
                name: "P1".to_owned(),
                runs: 12,
                balls: 9,
                fours: 2,
                sixes: 0,
            }],
            bowling: vec![
                BowlerFigures { name: "Dev".to_owned(), balls: 12, runs: 18, wickets: 0 },
                BowlerFigures { name: "Kumar".to_owned(), balls: 14, runs: 21, wickets: 1 },
            ],
            fall_of_wickets: vec![FallOfWicket {
                wk_no: 1,
                score: 23,
                batsman: "P1".to_owned(),
                bowler: "Kumar".to_owned(),
                reason: "caught".to_owned(),
                over: "2.4".to_owned(),
            }],
            free_hit: false,
            need_bowler: false,
            innings_over: false,
        }
    }

    #[test]
    fn header_carries_score_overs_and_remaining() {
        assert_eq!(header_line(&snapshot()), "57/2  7.3 ov (12.3 left)");

        let mut fh = snapshot();
        fh.free_hit = true;
        assert_eq!(header_line(&fh), "57/2  7.3 ov (12.3 left)  FREE HIT");
    }

    #[test]
    fn bowler_line_falls_back_to_dash() {
        assert_eq!(bowler_line(&snapshot()), "Bowling: Dev");
        assert_eq!(bowler_line(&MatchSnapshot::default()), "Bowling: -");
    }

    #[test]
    fn current_over_tokens_are_categorized() {
        let tokens = current_over_tokens(&snapshot());
        assert_eq!(tokens[0], ("1".to_owned(), TokenClass::Plain));
        assert_eq!(tokens[1], ("WD+2".to_owned(), TokenClass::Wide));
        assert_eq!(tokens[2], ("4".to_owned(), TokenClass::Four));
        assert_eq!(tokens[3], ("W".to_owned(), TokenClass::Wicket));
    }

    #[test]
    fn completed_over_line_format() {
        assert_eq!(
            completed_over_lines(&snapshot()),
            vec!["Over 1 [Kumar]: 0 1 4 0 2 W"]
        );
    }

    #[test]
    fn bowling_figures_render_whole_overs_and_remainder() {
        let lines = bowling_lines(&snapshot());
        assert_eq!(lines[0], "Dev - 2.0 overs, 18 runs, 0 wkts");
        assert_eq!(lines[1], "Kumar - 2.2 overs, 21 runs, 1 wkts");
    }

    #[test]
    fn fall_of_wickets_render_in_snapshot_order() {
        assert_eq!(
            fall_of_wicket_lines(&snapshot()),
            vec!["1-23 (P1, Kumar, caught, 2.4 ov)"]
        );
    }

    #[test]
    fn rendering_the_same_snapshot_twice_is_identical() {
        let snap = snapshot();
        assert_eq!(header_line(&snap), header_line(&snap));
        assert_eq!(current_over_tokens(&snap), current_over_tokens(&snap));
        assert_eq!(completed_over_lines(&snap), completed_over_lines(&snap));
        assert_eq!(projection_lines(&snap), projection_lines(&snap));
        assert_eq!(batting_lines(&snap), batting_lines(&snap));
        assert_eq!(out_batsmen_lines(&snap), out_batsmen_lines(&snap));
        assert_eq!(bowling_lines(&snap), bowling_lines(&snap));
        assert_eq!(fall_of_wicket_lines(&snap), fall_of_wicket_lines(&snap));
    }

    #[test]
    fn empty_snapshot_builds_empty_regions() {
        let empty = MatchSnapshot::default();
        assert!(current_over_tokens(&empty).is_empty());
        assert!(completed_over_lines(&empty).is_empty());
        assert!(batting_lines(&empty).is_empty());
        assert!(bowling_lines(&empty).is_empty());
        assert!(fall_of_wicket_lines(&empty).is_empty());
    }
}
