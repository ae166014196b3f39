use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::session::{scenes, LineKind, Phase, Sparkles};
use crate::ui::state::{FOOTER_ROWS, HEADER_ROWS};

use super::TerminalUI;

const BOOT_TITLE: &str = "DB://BIRTHDAY_TERMINAL";
const HELP_BUTTON: &str = "[F1] HELP";
const TIMESTAMP_WIDTH: usize = 10;
const SPARKLE_COUNT: usize = 50;
const PLACEHOLDER: &str = "Enter SQL command...";
const RAIN_COLUMNS: u16 = 20;
const RAIN_TRAIL: u16 = 6;

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();

        queue!(stdout, cursor::Hide, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.state.terminal_size;
        let log_top = HEADER_ROWS;
        let input_row = height.saturating_sub(FOOTER_ROWS);
        let status_row = height.saturating_sub(1);

        self.render_header(&mut stdout, width)?;
        render_rain(&mut stdout, log_top, width, input_row, self.state.frame)?;
        self.render_log(&mut stdout, log_top, width)?;
        if self.session.sparkles() != Sparkles::Off {
            render_sparkles(&mut stdout, log_top, width, input_row)?;
        }
        self.render_status_line(&mut stdout, status_row, width)?;
        self.render_input_area(&mut stdout, input_row, width)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_header(&self, stdout: &mut impl Write, width: u16) -> Result<()> {
        let title = match self.session.phase() {
            Phase::Boot => BOOT_TITLE.to_string(),
            _ => self.config.title(),
        };

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Magenta),
            Print(fit(&title, width as usize)),
            ResetColor
        )?;

        let title_width = UnicodeWidthStr::width(title.as_str());
        let button_width = UnicodeWidthStr::width(HELP_BUTTON);
        if title_width + button_width + 1 < width as usize {
            let color = if self.session.phase() == Phase::Terminal {
                Color::Cyan
            } else {
                Color::DarkGrey
            };
            queue!(
                stdout,
                cursor::MoveTo(width - button_width as u16, 0),
                SetForegroundColor(color),
                Print(HELP_BUTTON),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn render_log(&self, stdout: &mut impl Write, top: u16, width: u16) -> Result<()> {
        let lines = self.session.lines();
        let range = self.state.visible_range(lines.len());
        let mut row = top;

        for line in &lines[range] {
            queue!(stdout, cursor::MoveTo(0, row))?;

            let mut remaining = width as usize;
            if let Some(stamp) = &line.timestamp {
                let column = format!("{:<width$}", stamp, width = TIMESTAMP_WIDTH);
                let column = fit(&column, remaining);
                remaining = remaining.saturating_sub(UnicodeWidthStr::width(column.as_str()));
                queue!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print(column),
                    ResetColor
                )?;
            }

            queue!(
                stdout,
                SetForegroundColor(kind_color(line.kind)),
                Print(fit(&line.text, remaining)),
                ResetColor
            )?;
            row += 1;
        }

        // The log area is exactly as tall as the visible range, so extra
        // rows only exist when the view is pinned to the bottom.
        let limit = top + self.state.log_area_height() as u16;
        if row < limit && self.state.is_at_bottom {
            if self.session.is_busy() {
                queue!(
                    stdout,
                    cursor::MoveTo(0, row),
                    SetForegroundColor(Color::Yellow),
                    Print(fit("Processing█", width as usize)),
                    ResetColor
                )?;
            } else if self.session.phase() == Phase::Boot && self.state.blink_on {
                queue!(
                    stdout,
                    cursor::MoveTo(0, row),
                    SetForegroundColor(Color::Green),
                    Print("█"),
                    ResetColor
                )?;
            }
        }
        Ok(())
    }

    fn render_status_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        )?;

        let status_text = status_text(self.session.history().len());
        let display_text = fit(&status_text, width as usize);
        queue!(stdout, Print(&display_text))?;

        let padding = (width as usize).saturating_sub(UnicodeWidthStr::width(display_text.as_str()));
        if padding > 0 {
            queue!(stdout, Print(" ".repeat(padding)))?;
        }

        queue!(stdout, ResetColor)?;
        Ok(())
    }

    fn render_input_area(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(stdout, cursor::MoveTo(0, row))?;

        let enabled = self.session.accepts_input();
        let prompt_color = if enabled { Color::Cyan } else { Color::DarkGrey };
        queue!(
            stdout,
            SetForegroundColor(prompt_color),
            Print(scenes::PROMPT),
            ResetColor
        )?;

        let prompt_width = UnicodeWidthStr::width(scenes::PROMPT);
        let available = (width as usize).saturating_sub(prompt_width);
        let input = self.session.input();

        if input.is_empty() {
            queue!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print(fit(PLACEHOLDER, available)),
                ResetColor
            )?;
        } else {
            let text_color = if enabled { Color::White } else { Color::DarkGrey };
            queue!(
                stdout,
                SetForegroundColor(text_color),
                Print(fit(input.as_str(), available)),
                ResetColor
            )?;
        }

        if !enabled {
            return Ok(());
        }

        let input_display_width: usize = input
            .as_str()
            .chars()
            .take(input.cursor_pos())
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum();

        let cursor_x = prompt_width + input_display_width;
        if cursor_x < width as usize {
            queue!(stdout, cursor::MoveTo(cursor_x as u16, row), cursor::Show)?;
        }
        Ok(())
    }
}

fn status_text(history_len: usize) -> String {
    format!(
        " Connected to BIRTHDAY_DB | Status: ONLINE | History: {} | F1: Help | Ctrl+R: Reboot | Ctrl+C: Exit",
        history_len
    )
}

fn kind_color(kind: LineKind) -> Color {
    match kind {
        LineKind::Input => Color::Cyan,
        LineKind::Output => Color::White,
        LineKind::Error => Color::Red,
        LineKind::System => Color::Magenta,
    }
}

/// Scatters sparkles over the log area.
fn render_sparkles(stdout: &mut impl Write, top: u16, width: u16, bottom: u16) -> Result<()> {
    if width < 2 || bottom <= top {
        return Ok(());
    }
    let mut rng = rand::thread_rng();
    for _ in 0..SPARKLE_COUNT {
        let x = rng.gen_range(0..width - 1);
        let y = rng.gen_range(top..bottom);
        queue!(
            stdout,
            cursor::MoveTo(x, y),
            SetForegroundColor(Color::Yellow),
            Print("✨"),
            ResetColor
        )?;
    }
    Ok(())
}

/// Background rain: columns of binary digits falling through the log area.
fn render_rain(stdout: &mut impl Write, top: u16, width: u16, bottom: u16, frame: u64) -> Result<()> {
    let mut rng = rand::thread_rng();
    for (x, y) in rain_cells(width, top, bottom, frame) {
        let digit = if rng.gen_bool(0.5) { "1" } else { "0" };
        queue!(
            stdout,
            cursor::MoveTo(x, y),
            SetForegroundColor(Color::DarkGrey),
            Print(digit),
            ResetColor
        )?;
    }
    Ok(())
}

/// Positions of the rain digits for one frame. Columns sit every 5% of the
/// width and fall at one to three rows per frame.
fn rain_cells(width: u16, top: u16, bottom: u16, frame: u64) -> Vec<(u16, u16)> {
    if width == 0 || bottom <= top {
        return Vec::new();
    }
    let height = (bottom - top) as u64;
    let mut cells = Vec::new();
    for column in 0..RAIN_COLUMNS {
        let x = (width as u32 * column as u32 * 5 / 100) as u16;
        let speed = column as u64 % 3 + 1;
        let head = (frame * speed + column as u64 * 7) % height;
        for trail in 0..RAIN_TRAIL.min(height as u16) {
            let y = (head + height - trail as u64) % height;
            cells.push((x, top + y as u16));
        }
    }
    cells
}

/// Cuts `text` to at most `max_width` display columns.
fn fit(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
