//! Terminal rendering of an occupancy snapshot.
//!
//! Output order is fixed: clear, banner, summary, one line per person.

use crate::core::{Occupancy, Person};
use crate::utils::error::{InSpaceError, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use figlet_rs::FIGfont;
use owo_colors::OwoColorize;
use std::io::Write;

pub const BANNER_TEXT: &str = "InSpace";

#[derive(Debug, Clone)]
pub struct Renderer {
    clear_screen: bool,
    color: bool,
}

impl Renderer {
    pub fn new(clear_screen: bool, color: bool) -> Self {
        Self {
            clear_screen,
            color,
        }
    }

    pub fn render<W: Write>(&self, occupancy: &Occupancy, out: &mut W) -> Result<()> {
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let banner = banner()?;
        let summary = summary_line(occupancy.number);
        if self.color {
            writeln!(out, "{}", banner.bright_yellow())?;
            writeln!(out, "{}", summary.blue())?;
        } else {
            writeln!(out, "{}", banner)?;
            writeln!(out, "{}", summary)?;
        }

        for person in &occupancy.people {
            writeln!(out, "{}", person_line(person, self.color))?;
        }

        out.flush()?;
        Ok(())
    }
}

/// FIGlet rendering of the title in the standard font at full width.
pub fn banner() -> Result<String> {
    let font = FIGfont::standard().map_err(|message| InSpaceError::BannerError { message })?;
    let figure = font
        .convert(BANNER_TEXT)
        .ok_or_else(|| InSpaceError::BannerError {
            message: format!("font has no glyphs for '{}'", BANNER_TEXT),
        })?;
    Ok(figure.to_string())
}

pub fn summary_line(number: u64) -> String {
    format!("There is currently {} people in space", number)
}

pub fn person_line(person: &Person, color: bool) -> String {
    if color {
        format!("{} - {}", person.name, person.craft.yellow())
    } else {
        format!("{} - {}", person.name, person.craft)
    }
}
