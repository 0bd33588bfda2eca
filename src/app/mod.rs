use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_session;
use crate::Session;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();

    loop {
        terminal.draw(|frame| draw_session(frame, &session))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q')) {
                    break;
                }
                handle_input(key.code, &mut session);
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, session: &mut Session) {
    match code {
        KeyCode::Left => session.move_cursor(0, -1),
        KeyCode::Right => session.move_cursor(0, 1),
        KeyCode::Up => session.move_cursor(-1, 0),
        KeyCode::Down => session.move_cursor(1, 0),
        KeyCode::Char(' ') => session.toggle_cursor(),
        KeyCode::Enter => session.solve_board(),
        KeyCode::Char('c') => session.clear_board(),
        KeyCode::Char('r') => session.reset(),
        KeyCode::Char(']') => session.grow_rows(),
        KeyCode::Char('[') => session.shrink_rows(),
        KeyCode::Char('=') | KeyCode::Char('+') => session.grow_cols(),
        KeyCode::Char('-') => session.shrink_cols(),
        _ => {}
    }
}
