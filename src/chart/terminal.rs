use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::{ChartError, ChartSeries, LineChart, Renderer, Viewport, ViewportAction};
use crate::table::Projection;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Close,
    Move(ViewportAction),
}

/// Map a key to a viewer command. `None` means the key is ignored.
///
/// `q`/`Esc` close, arrows or `h`/`l` pan, `+`/`=` and `-` zoom,
/// `0`/`Home` show everything again.
pub fn key_command(code: KeyCode) -> Option<ViewerCommand> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(ViewerCommand::Close),
        KeyCode::Left | KeyCode::Char('h') => ViewportAction::PanLeft,
        KeyCode::Right | KeyCode::Char('l') => ViewportAction::PanRight,
        KeyCode::Char('+') | KeyCode::Char('=') => ViewportAction::ZoomIn,
        KeyCode::Char('-') => ViewportAction::ZoomOut,
        KeyCode::Char('0') | KeyCode::Home => ViewportAction::Reset,
        _ => return None,
    };
    Some(ViewerCommand::Move(action))
}

/// Raw mode and the alternate screen, undone on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen)
            .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Draws the chart full screen in the terminal and blocks until the
/// user closes it.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    x_title: String,
    y_title: String,
}

impl TerminalRenderer {
    pub fn new(x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            x_title: x_title.into(),
            y_title: y_title.into(),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, projection: &Projection) -> Result<(), ChartError> {
        let series = ChartSeries::new(projection);
        let mut viewport = Viewport::new(series.len());
        let mut session = TerminalSession::start()?;

        loop {
            session.terminal.draw(|frame| {
                let chart = LineChart::new(&series)
                    .viewport(viewport)
                    .x_title(&self.x_title)
                    .y_title(&self.y_title);
                frame.render_widget(chart, frame.area());
            })?;

            // Anything else (resize, mouse, focus) just redraws.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key_command(key.code) {
                    Some(ViewerCommand::Close) => break,
                    Some(ViewerCommand::Move(action)) => viewport.apply(action),
                    None => {}
                }
            }
        }
        Ok(())
    }
}
