use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::session::Phase;
use crate::solver::CellResult;
use crate::{Session, CELL_W, MIN_PANE_WIDTH, SIDEBAR_W};

pub fn draw_session(frame: &mut Frame, session: &Session) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("MINESOLVE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer frame.
    let cabinet = Block::default()
        .title("MINESOLVE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into board/solution area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(cols[0]);

    draw_board(frame, session, panes[0]);
    draw_solution(frame, session, panes[1]);
    draw_sidebar(frame, session, cols[1]);
}

fn draw_board(frame: &mut Frame, session: &Session, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(session.rows);
    for row in 0..session.rows {
        let mut spans: Vec<Span> = Vec::with_capacity(session.cols * 2);
        for col in 0..session.cols {
            let glyph = if session.is_marked(row, col) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if session.cursor == (row, col) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let width = (session.cols * CELL_W) as u16;
    let board = Paragraph::new(lines)
        .block(Block::default().title("BOARD").borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(board, centered(area, width + 2, session.rows as u16 + 2));
}

fn draw_solution(frame: &mut Frame, session: &Session, area: Rect) {
    let Some(solution) = session.solution.as_ref() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::with_capacity(solution.rows());
    for row in 0..solution.rows() {
        let mut spans: Vec<Span> = Vec::with_capacity(solution.cols() * 2);
        for col in 0..solution.cols() {
            match solution.at(row, col) {
                CellResult::Mine => {
                    spans.push(Span::styled("X", Style::default().fg(Color::Red)));
                }
                CellResult::Count(n) => spans.push(Span::raw(n.to_string())),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let width = (solution.cols() * 2) as u16;
    let panel = Paragraph::new(lines)
        .block(Block::default().title("SOLUTION").borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(panel, centered(area, width + 2, solution.rows() as u16 + 2));
}

fn draw_sidebar(frame: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(0), Constraint::Length(10)].as_ref())
        .split(area);

    let status = match session.phase {
        Phase::Editing => "EDITING",
        Phase::Solved => "SOLVED",
    };
    let mut info = format!(
        "ROWS\n{}\n\nCOLS\n{}\n\nMINES\n{}\n\nSTATUS\n{}",
        session.rows,
        session.cols,
        session.mine_count(),
        status
    );
    if let Some(err) = &session.error {
        info.push_str("\n\n");
        info.push_str(err);
    }
    let info = Paragraph::new(info)
        .block(Block::default().title("INFO").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(
        "arrows move\nspace mark\nenter solve\nc clear\nr reset\n] [ rows\n= - cols\nq quit",
    )
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

// Center a fixed-size rect within `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
