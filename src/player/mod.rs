//! Player: the interactive playback controller.
//!
//! Owns the model for the duration of playback and polls it with repeated
//! `shapes_at_tick` queries, one per timer step, strictly serialized; the
//! model's working-state resets make interleaved queries unsafe. The
//! player performs no interpolation of its own. It rasterizes each
//! snapshot and draws the cell diff against the previous one.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::{cursor, event, execute, queue, style, terminal};

use crate::model::Animation;
use crate::renderer::{Cell, Renderer};
use crate::types::{Frame, Tick};

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;

/// The tick-delay ladder in milliseconds, fastest last; `+` and `-` walk
/// it. The starting rung sits mid-ladder, then the whole ladder is divided
/// by the user-chosen speed.
const DELAYS_MS: [u64; 15] = [
    6400, 4800, 3200, 2400, 1600, 1200, 800, 600, 400, 300, 200, 150, 100, 75, 50,
];
const START_RUNG: usize = 7;

pub struct Player {
    animation: Animation,
    frame: Frame,
    final_tick: Tick,
    tick: Tick,
    playing: bool,
    looping: bool,
    rung: usize,
    speed: u64,
    grid: Vec<Vec<Cell>>,
    cols: u16,
    rows: u16,
}

impl Player {
    /// Wrap a fully built model for playback at `speed` (a divisor applied
    /// to the delay ladder; 1 is the authored pace).
    pub fn new(animation: Animation, speed: u64) -> Result<Self> {
        let frame = animation
            .frame()
            .context("the animation declares no canvas")?;
        let final_tick = animation
            .final_tick()
            .context("nothing to play")?;
        Ok(Player {
            animation,
            frame,
            final_tick,
            tick: 0,
            playing: true,
            looping: false,
            rung: START_RUNG,
            speed: speed.max(1),
            grid: Vec::new(),
            cols: 0,
            rows: 0,
        })
    }

    /// Play the animation in the terminal.
    ///
    /// Sets up the terminal, enters the event loop, and restores the
    /// terminal on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        // +2: one row for the menu bar, one for the status bar.
        if term_w < 20 || term_h < 8 + 2 {
            bail!(
                "Terminal too small: need at least 20x10, have {}x{}",
                term_w,
                term_h,
            );
        }
        self.cols = term_w;
        self.rows = term_h - 2;

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.run_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        self.apply_tick(0)?;
        self.render_menubar(stdout)?;
        self.render_full(stdout)?;
        self.render_status(stdout)?;

        loop {
            let timeout = if self.playing {
                Duration::from_millis(self.delay_ms())
            } else {
                Duration::from_millis(250)
            };

            if event::poll(timeout)? {
                match event::read()? {
                    event::Event::Key(key) => {
                        use event::KeyCode::*;
                        match key.code {
                            Char('q') | Esc => break,
                            Char(' ') => {
                                self.playing = !self.playing;
                                self.render_status(stdout)?;
                            }
                            Char('r') => {
                                self.tick = 0;
                                self.playing = true;
                                self.apply_tick(0)?;
                                self.render_full(stdout)?;
                                self.render_status(stdout)?;
                            }
                            Char('l') => {
                                self.looping = !self.looping;
                                self.render_status(stdout)?;
                            }
                            Char('+') | Char('=') => {
                                self.rung = (self.rung + 1).min(DELAYS_MS.len() - 1);
                                self.render_status(stdout)?;
                            }
                            Char('-') => {
                                self.rung = self.rung.saturating_sub(1);
                                self.render_status(stdout)?;
                            }
                            _ => {}
                        }
                    }
                    event::Event::Resize(_, _) => {
                        self.render_menubar(stdout)?;
                        self.render_full(stdout)?;
                        self.render_status(stdout)?;
                    }
                    _ => {}
                }
            } else if self.playing {
                self.step(stdout)?;
            }
        }

        Ok(())
    }

    /// Advance one tick: query the model, draw the diff, hold or wrap at
    /// the end depending on the loop toggle.
    fn step(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let mut next = self.tick + 1;
        if next > self.final_tick {
            if self.looping {
                next = 0;
            } else {
                self.playing = false;
                self.render_status(stdout)?;
                return Ok(());
            }
        }
        self.tick = next;

        let shapes = self.animation.shapes_at_tick(self.tick)?;
        let grid = Renderer::rasterize(&shapes, &self.frame, self.cols, self.rows);
        let changes = Renderer::diff(&self.grid, &grid);
        for change in &changes {
            queue!(
                stdout,
                cursor::MoveTo(change.x, change.y + CANVAS_OFFSET),
                style::PrintStyledContent(style::StyledContent::new(
                    content_style(&change.cell),
                    change.cell.ch,
                )),
            )?;
        }
        self.grid = grid;
        self.render_status(stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn apply_tick(&mut self, tick: Tick) -> Result<()> {
        let shapes = self.animation.shapes_at_tick(tick)?;
        self.grid = Renderer::rasterize(&shapes, &self.frame, self.cols, self.rows);
        Ok(())
    }

    fn delay_ms(&self) -> u64 {
        (DELAYS_MS[self.rung] / self.speed).max(16)
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    fn render_menubar(&self, stdout: &mut io::Stdout) -> Result<()> {
        let items: &[&str] = &[
            "[Space] play/pause",
            "[r] restart",
            "[+][-] speed",
            "[l] loop",
            "[q][Esc] quit",
        ];

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(" "),
        )?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                queue!(stdout, style::Print("  "))?;
            }
            print_menu_item(stdout, item)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_full(&self, stdout: &mut io::Stdout) -> Result<()> {
        for (y, row) in self.grid.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, y as u16 + CANVAS_OFFSET))?;
            for cell in row {
                queue!(
                    stdout,
                    style::PrintStyledContent(style::StyledContent::new(
                        content_style(cell),
                        cell.ch,
                    ))
                )?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_status(&self, stdout: &mut io::Stdout) -> Result<()> {
        let status_y = self.rows + CANVAS_OFFSET;
        let state = if self.playing { "playing" } else { "paused" };
        let looping = if self.looping { "on" } else { "off" };
        let status = format!(
            " Tick {}/{} | {}ms/tick | {} | loop {} ",
            self.tick,
            self.final_tick,
            self.delay_ms(),
            state,
            looping,
        );

        let mut cs = style::ContentStyle::default();
        cs.attributes.set(style::Attribute::Dim);

        queue!(
            stdout,
            cursor::MoveTo(0, status_y),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::PrintStyledContent(style::StyledContent::new(cs, status)),
        )?;
        stdout.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Style helpers
// ---------------------------------------------------------------------------

fn content_style(cell: &Cell) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(color) = cell.color {
        cs.foreground_color = Some(style::Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        });
    }
    cs
}

/// Print a menu item string, bolding any text inside `[...]` brackets.
/// Text outside brackets is printed dim.
fn print_menu_item(stdout: &mut io::Stdout, item: &str) -> Result<()> {
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(open) = rest.find('[') {
            if open > 0 {
                queue!(
                    stdout,
                    style::SetAttribute(style::Attribute::Dim),
                    style::Print(&rest[..open]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
            }
            rest = &rest[open..];
            if let Some(close) = rest.find(']') {
                queue!(
                    stdout,
                    style::SetAttribute(style::Attribute::Bold),
                    style::Print(&rest[..=close]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
                rest = &rest[close + 1..];
            } else {
                queue!(stdout, style::Print(rest))?;
                break;
            }
        } else {
            queue!(
                stdout,
                style::SetAttribute(style::Attribute::Dim),
                style::Print(rest),
                style::SetAttribute(style::Attribute::Reset),
            )?;
            break;
        }
    }
    Ok(())
}
