use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::EndReason;
use crate::grid::{Cell, Grid};
use crate::session::{Diagnostics, GameSummary, Renderer};

const FRUIT_SYMBOL: &str = "♥";
const TITLE: &str = "SNEK    arrows/WASD to steer, Esc to quit";

impl Widget for &Grid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, cells) in self.rows().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, cell) in cells.iter().enumerate() {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                match cell {
                    Cell::Empty => {}
                    Cell::SnakeBody => {
                        buf[(x, y)].set_symbol(" ").set_bg(Color::Green);
                    }
                    Cell::Fruit => {
                        buf[(x, y)].set_symbol(FRUIT_SYMBOL).set_fg(Color::LightRed);
                    }
                }
            }
        }
    }
}

// Latest diagnostics line, drawn under the arena.
#[derive(Clone, Debug, Default)]
pub struct StatusLine(Rc<RefCell<String>>);

impl StatusLine {
    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl Diagnostics for StatusLine {
    fn report(&mut self, status: &str) {
        info!("{}", status);
        let mut line = self.0.borrow_mut();
        line.clear();
        line.push_str(status);
    }
}

pub struct TerminalRenderer<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    status: StatusLine,
    last_grid: Option<Grid>,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut renderer = TerminalRenderer::with_backend(CrosstermBackend::new(stdout))?;
        renderer.terminal.hide_cursor()?;
        renderer.terminal.clear()?;
        Ok(renderer)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn with_backend(backend: B) -> io::Result<Self> {
        Ok(TerminalRenderer {
            terminal: Terminal::new(backend)?,
            status: StatusLine::default(),
            last_grid: None,
        })
    }

    pub fn status_line(&self) -> StatusLine {
        self.status.clone()
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn show_start_menu(&mut self) -> io::Result<()> {
        self.last_grid = None;
        let status = self.status.text();
        self.terminal.draw(|frame| {
            let [bar, arena, status_area] = layout(frame.area());
            frame.render_widget(title_bar(), bar);
            frame.render_widget(
                Paragraph::new("Press SPACE to start\nEsc to exit")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                arena,
            );
            frame.render_widget(Paragraph::new(status), status_area);
        })?;
        Ok(())
    }

    pub fn show_game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
        let headline = match summary.reason {
            EndReason::Collision => "GAME OVER",
            EndReason::Quit => "QUIT",
        };
        let text = format!(
            "{}\nLength {} after {} ticks\nPress SPACE to play again, Esc to exit",
            headline, summary.final_length, summary.ticks
        );
        let status = self.status.text();
        let grid = self.last_grid.as_ref();

        self.terminal.draw(|frame| {
            let [bar, arena, status_area] = layout(frame.area());
            let block = Block::default().borders(Borders::ALL);
            let inner = block.inner(arena);

            frame.render_widget(title_bar(), bar);
            frame.render_widget(block, arena);
            if let Some(grid) = grid {
                frame.render_widget(grid, inner);
            }
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
            frame.render_widget(Paragraph::new(status), status_area);
        })?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        let status = self.status.text();
        self.terminal.draw(|frame| {
            let [bar, arena, status_area] = layout(frame.area());
            let block = Block::default().title("Playing").borders(Borders::ALL);
            let inner = block.inner(arena);

            frame.render_widget(title_bar(), bar);
            frame.render_widget(block, arena);
            frame.render_widget(grid, inner);
            frame.render_widget(Paragraph::new(status), status_area);
        })?;
        self.last_grid = Some(grid.clone());
        Ok(())
    }
}

fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // title
        Constraint::Min(0),    // arena
        Constraint::Length(1), // status
    ])
    .areas(area)
}

fn title_bar() -> Paragraph<'static> {
    Paragraph::new(TITLE)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL))
}
