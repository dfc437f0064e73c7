use crate::render::RenderSurface;
use crate::trace::TraceLog;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io;
use tui::backend::{Backend, CrosstermBackend};
use tui::layout::Rect;
use tui::style::Style;
use tui::symbols::Marker;
use tui::text::Spans;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;

/// Display puts a rendered frame, and the trace behind it, in front of a
/// person. It should abstract the implementation details, so a variety of
/// kinds of screen would work.
pub trait Display {
    /// present the surface and the newest trace lines
    fn draw(&mut self, surface: &RenderSurface, trace: &TraceLog) -> Result<(), io::Error>;
}

// canvas coordinates for a surface; TUI's y axis points up, so rows go negative
struct Resolution(usize, usize);

impl Resolution {
    fn of(surface: &RenderSurface) -> Self {
        Resolution(surface.width(), surface.height())
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.0.saturating_sub(1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * self.1.saturating_sub(1) as f64, 0.0]
    }

    // the block the canvas sits in, borders included; clamped to what a Rect holds
    fn frame(&self) -> Rect {
        let side = |n: usize| u16::try_from(n.saturating_add(2)).unwrap_or(u16::MAX);
        Rect::new(0, 0, side(self.0), side(self.1))
    }
}

fn canvas_points(coords: impl Iterator<Item = (usize, usize)>) -> Vec<(f64, f64)> {
    coords
        .map(|(x, y)| (x as f64, -1.0 * y as f64))
        .collect()
}

/// monochrome display in a terminal, rendered using TUI: the surface on a
/// block-marker canvas, with the trace tail in a panel to its right
pub struct TermDisplay<B: Backend> {
    terminal: Terminal<B>,
    alternate_screen: bool,
}

impl TermDisplay<CrosstermBackend<io::Stdout>> {
    /// take over stdout, on the alternate screen, until dropped
    pub fn stdout() -> Result<Self, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(TermDisplay {
            terminal,
            alternate_screen: true,
        })
    }
}

impl<B: Backend> TermDisplay<B> {
    pub fn new(backend: B) -> Result<Self, io::Error> {
        Ok(TermDisplay {
            terminal: Terminal::new(backend)?,
            alternate_screen: false,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Drop for TermDisplay<B> {
    fn drop(&mut self) {
        if self.alternate_screen {
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
                eprintln!("Warning: couldn't restore the terminal: {}", e);
            }
        }
    }
}

impl<B: Backend> Display for TermDisplay<B> {
    fn draw(&mut self, surface: &RenderSurface, trace: &TraceLog) -> Result<(), io::Error> {
        let resolution = Resolution::of(surface);
        let palette = surface.palette();
        let background = canvas_points(surface.coords_of(palette.background));
        let foreground = canvas_points(surface.coords_of(palette.foreground));

        self.terminal.draw(|f| {
            let size = f.size();
            let screen = resolution.frame().intersection(size);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(palette.background)),
                )
                .x_bounds(resolution.x_bounds())
                .y_bounds(resolution.y_bounds())
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &background,
                        color: palette.background,
                    });
                    ctx.draw(&Points {
                        coords: &foreground,
                        color: palette.foreground,
                    });
                });
            f.render_widget(canvas, screen);

            // whatever is left of the terminal goes to the trace
            if size.width > screen.width {
                let panel = Rect::new(screen.width, 0, size.width - screen.width, screen.height);
                let rows = panel.height.saturating_sub(2) as usize;
                let lines: Vec<Spans> = trace.tail(rows).map(Spans::from).collect();
                let title = format!("trace ({} steps)", trace.appended());
                let paragraph =
                    Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
                f.render_widget(paragraph, panel);
            }
        })?;
        Ok(())
    }
}

/// useful for testing non-display routines; keeps a copy of the last frame
#[derive(Default)]
pub struct DummyDisplay {
    pub frames: u64,
    pub last_frame: Option<RenderSurface>,
    pub last_trace_len: usize,
}

impl DummyDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, surface: &RenderSurface, trace: &TraceLog) -> Result<(), io::Error> {
        self.frames += 1;
        self.last_frame = Some(surface.clone());
        self.last_trace_len = trace.len();
        Ok(())
    }
}
