// file: src/surface/writers.rs
// version: 1.0.0
// guid: 31829c8d-5abc-48a4-af3b-f194e8a1f7b9

//! Line writers for the text surface

use super::{OutputWriter, Segment};
use colored::Colorize;
use std::io::{self, Write};

/// Writes segment text only, dropping all styling
pub struct PlainWriter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> PlainWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

impl OutputWriter for PlainWriter<'_> {
    fn write_line(&mut self, segments: &[Segment]) -> io::Result<()> {
        for segment in segments {
            write!(self.out, "{}", segment.text)?;
        }
        writeln!(self.out)
    }
}

/// Writes segments with ANSI styling.
///
/// Styling goes through `colored`, so `colored::control::set_override(false)`
/// or `NO_COLOR` still turn it off.
pub struct AnsiWriter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> AnsiWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

impl OutputWriter for AnsiWriter<'_> {
    fn write_line(&mut self, segments: &[Segment]) -> io::Result<()> {
        for segment in segments {
            let mut styled = segment.text.as_str().normal();
            if let Some(color) = segment.style.fg {
                styled = styled.color(color);
            }
            if segment.style.bold {
                styled = styled.bold();
            }
            if segment.style.dim {
                styled = styled.dimmed();
            }
            write!(self.out, "{}", styled)?;
        }
        writeln!(self.out)
    }
}
