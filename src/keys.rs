use crate::app::{Action, App};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scorebox_api::OutcomeCode;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // An open prompt owns the keyboard: scoring keys become answer text.
    if guard.state.prompt.is_open() {
        let action = match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Enter, _) => guard.prompt_confirm(),
            (KeyCode::Esc, _) => guard.prompt_cancel(),
            (KeyCode::Backspace, _) => {
                guard.state.prompt.backspace();
                Action::None
            }
            (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                guard.state.prompt.push_char(c);
                Action::None
            }
            _ => Action::None,
        };
        drop(guard);
        dispatch(action, network_requests).await;
        return;
    }

    if guard.state.show_help {
        match (key_event.code, key_event.modifiers) {
            (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Esc, _) | (Char('?'), _) => guard.toggle_help(),
            _ => {}
        }
        return;
    }

    let action = match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Scoring keys — the classifier's UI edge: one key, one outcome.
        (Char('0') | Char('.'), _) => guard.begin_ball(OutcomeCode::Dot),
        (Char('1'), _) => guard.begin_ball(OutcomeCode::One),
        (Char('2'), _) => guard.begin_ball(OutcomeCode::Two),
        (Char('3'), _) => guard.begin_ball(OutcomeCode::Three),
        (Char('4'), _) => guard.begin_ball(OutcomeCode::Four),
        (Char('6'), _) => guard.begin_ball(OutcomeCode::Six),
        (Char('w'), _) => guard.begin_ball(OutcomeCode::Wicket),
        (Char('d'), _) => guard.begin_ball(OutcomeCode::Wide),
        (Char('n'), _) => guard.begin_ball(OutcomeCode::NoBall),
        (Char('b'), _) => guard.begin_ball(OutcomeCode::Bye),
        (Char('l'), _) => guard.begin_ball(OutcomeCode::LegBye),

        // Global
        (Char('?'), _) => {
            guard.toggle_help();
            Action::None
        }
        (Char('f'), _) => {
            guard.toggle_full_screen();
            Action::None
        }
        (Char('"'), _) => {
            guard.toggle_show_logs();
            Action::None
        }

        _ => Action::None,
    };

    drop(guard);
    dispatch(action, network_requests).await;
}

/// Hand an app-core decision to the network worker.
pub async fn dispatch(action: Action, network_requests: &mpsc::Sender<NetworkRequest>) {
    match action {
        Action::None => {}
        Action::Submit(submission) => {
            let _ = network_requests
                .send(NetworkRequest::RecordBall { submission })
                .await;
        }
        Action::FetchBowlers => {
            let _ = network_requests.send(NetworkRequest::FetchBowlers).await;
        }
        Action::CommitBowler(bowler) => {
            let _ = network_requests
                .send(NetworkRequest::CommitBowler { bowler })
                .await;
        }
    }
}
