use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::regions;
use crate::state::app_state::PromptState;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use scorebox_api::TokenClass;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_header(f, layout.header, app);
            }

            if app.state.show_help {
                draw_help(f, layout.main);
            } else {
                draw_scorecard(f, layout.main, app);
            }

            if app.state.prompt.is_open() {
                draw_prompt(f, f.area(), &app.state.prompt);
            }

            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" stumps ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(2);
    match app.state.snapshot.as_ref() {
        Some(snapshot) => {
            lines.push(Line::from(Span::styled(
                regions::header_line(snapshot),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                regions::bowler_line(snapshot),
                Style::default().fg(Color::Gray),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No balls recorded yet",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                "Keys: 0-6=runs  w=wicket  d=wide  n=no-ball  b=bye  l=leg-bye  ?=help  q=quit",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_scorecard(f: &mut Frame, area: Rect, app: &App) {
    let mut content = area;
    if app.state.show_logs && area.height >= 16 {
        let [top, bottom] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(8)]).areas(area);
        content = top;
        draw_log_pane(f, bottom);
    }

    let Some(snapshot) = app.state.snapshot.as_ref() else {
        let block = default_border(Color::White).title(" Scorecard ");
        let inner = block.inner(content);
        f.render_widget(block, content);
        let msg = if let Some(err) = app.state.last_error.as_deref() {
            format!("Last request failed:\n{err}\n\nPress a scoring key to retry")
        } else {
            "Press a scoring key to record the first ball".to_string()
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(content);

    draw_over_pane(f, left, app, snapshot);
    draw_card_pane(f, right, snapshot);
}

fn draw_over_pane(f: &mut Frame, area: Rect, app: &App, snapshot: &scorebox_api::MatchSnapshot) {
    let block = default_border(Color::White).title(" Overs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    let mut current: Vec<Span> = vec![Span::styled(
        "This over: ",
        Style::default().fg(Color::Gray),
    )];
    let tokens = regions::current_over_tokens(snapshot);
    if tokens.is_empty() {
        current.push(Span::styled("-", Style::default().fg(Color::DarkGray)));
    }
    for (token, class) in tokens {
        current.push(Span::styled(
            format!("{token} "),
            Style::default().fg(token_color(class)),
        ));
    }
    lines.push(Line::from(current));
    lines.push(Line::from(""));

    for over in regions::completed_over_lines(snapshot) {
        lines.push(Line::from(Span::styled(
            over,
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));

    for projection in regions::projection_lines(snapshot) {
        lines.push(Line::from(Span::styled(
            projection,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        regions::EXTRAS_PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(err) = app.state.last_error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Last error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(clip_lines(lines, inner)), inner);
}

fn draw_card_pane(f: &mut Frame, area: Rect, snapshot: &scorebox_api::MatchSnapshot) {
    let block = default_border(Color::White).title(" Scorecard ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(section_title("Batting"));
    for batter in regions::batting_lines(snapshot) {
        lines.push(Line::from(batter));
    }
    let dismissed = regions::out_batsmen_lines(snapshot);
    if !dismissed.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Dismissed"));
        for batter in dismissed {
            lines.push(Line::from(Span::styled(
                batter,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(section_title("Bowling"));
    for figures in regions::bowling_lines(snapshot) {
        lines.push(Line::from(figures));
    }

    let wickets = regions::fall_of_wicket_lines(snapshot);
    if !wickets.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("Fall of Wickets"));
        for fow in wickets {
            lines.push(Line::from(Span::styled(
                fow,
                Style::default().fg(Color::Red),
            )));
        }
    }

    f.render_widget(Paragraph::new(clip_lines(lines, inner)), inner);
}

fn section_title(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn token_color(class: TokenClass) -> Color {
    match class {
        TokenClass::Four => Color::Green,
        TokenClass::Six => Color::Magenta,
        TokenClass::Wicket => Color::Red,
        TokenClass::Wide | TokenClass::NoBall => Color::Yellow,
        TokenClass::Plain => Color::White,
    }
}

fn clip_lines(lines: Vec<Line>, area: Rect) -> Vec<Line> {
    lines.into_iter().take(area.height as usize).collect()
}

fn draw_prompt(f: &mut Frame, area: Rect, prompt: &PromptState) {
    let popup = centered_rect(area, 60, 8);
    f.render_widget(Clear, popup);

    let block = default_border(Color::Yellow).title(prompt.title());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines = vec![Line::from(prompt.question())];
    if let Some(input) = prompt.input() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("> {input}_"),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(
            "Enter=confirm  Esc=cancel  Backspace=edit",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter/Esc=dismiss",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = "Scoring keys
  0 or .   dot ball
  1 2 3    runs off the bat
  4        boundary four
  6        six
  w        wicket (asks for the reason)
  d        wide (asks for extra runs)
  n        no-ball (asks for extra runs)
  b        bye (asks for runs)
  l        leg-bye (asks for runs)

Other
  f        toggle full screen
  \"        toggle log pane
  ?        toggle this help
  q        quit";
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn draw_log_pane(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(widget, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
