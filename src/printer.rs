//! The `Printer` module is a little shortcut layer for conditional console
//! output. Three independent flags gate what gets emitted: `silent` mutes
//! the normal path, `verbose` and `debug` opt extra categories in. Warnings
//! and errors bypass the silent gate entirely, since suppressing them would
//! hide actionable failures from the user.

use std::fmt::Display;
use std::io::{self, BufWriter, Stdout, Write};

use colored::Colorize;
use terminal_size::terminal_size;

use crate::charset::{Charset, FrameGlyphs};
use crate::error::PrintResult;

pub struct Printer<W: Write> {
    out: W,
    charset: Charset,
    verbose: bool,
    debug: bool,
    silent: bool,
}

impl Printer<BufWriter<Stdout>> {
    /// Creates a printer over buffered stdout with the charset detected
    /// for the host platform. The buffer flushes on drop; call [`flush`]
    /// explicitly when output ordering matters before that.
    ///
    /// [`flush`]: Printer::flush
    pub fn new() -> Self {
        Printer::with_charset(Charset::detect())
    }

    /// Creates a stdout printer with an explicit glyph charset.
    pub fn with_charset(charset: Charset) -> Self {
        Printer::with_writer(charset, BufWriter::new(io::stdout()))
    }
}

impl Default for Printer<BufWriter<Stdout>> {
    fn default() -> Self {
        Printer::new()
    }
}

impl<W: Write> Printer<W> {
    /// Creates a printer emitting into `out`, so callers can capture
    /// everything written instead of sharing the process stdout.
    pub fn with_writer(charset: Charset, out: W) -> Self {
        Printer {
            out,
            charset,
            verbose: false,
            debug: false,
            silent: false,
        }
    }

    // Management functions for Printer

    pub fn set_verbose(&mut self, b: bool) {
        self.verbose = b;
    }

    pub fn set_debug(&mut self, b: bool) {
        self.debug = b;
    }

    pub fn set_silent(&mut self, b: bool) {
        self.silent = b;
    }

    /// Drains the underlying writer.
    pub fn flush(&mut self) -> PrintResult<()> {
        self.out.flush()?;
        Ok(())
    }

    // Helper functions for Printer

    /// Wraps `text` in a single-line box, two padding columns wider than
    /// the text itself.
    pub fn frame(&self, text: &str) -> String {
        render_frame(self.charset.frame(), text)
    }

    /// Same as [`frame`], drawn with the outer glyph set and preceded by a
    /// blank line.
    ///
    /// [`frame`]: Printer::frame
    pub fn outer_frame(&self, text: &str) -> String {
        format!("\n{}", render_frame(self.charset.outer_frame(), text))
    }

    /// Builds a same-length run of the horizontal glyph for every cell in
    /// `row`; used to underline tabular headers.
    pub fn underline<S: AsRef<str>>(&self, row: &[S]) -> Vec<String> {
        let glyph = self.charset.frame().horizontal;
        row.iter()
            .map(|cell| glyph.repeat(cell.as_ref().chars().count()))
            .collect()
    }

    /// Writes `message` unless the printer is silent.
    pub fn write(&mut self, message: impl Display) -> PrintResult<()> {
        if !self.silent {
            write!(self.out, "{}", message)?;
        }
        Ok(())
    }

    /// Writes `message` even when the printer is silent.
    pub fn write_always(&mut self, message: impl Display) -> PrintResult<()> {
        write!(self.out, "{}", message)?;
        Ok(())
    }

    // Print functions for Printer

    pub fn banner(&mut self, message: impl Display) -> PrintResult<()> {
        let framed = self.frame(&message.to_string());
        self.write(framed.green().bold())
    }

    pub fn outer_banner(&mut self, message: impl Display) -> PrintResult<()> {
        let framed = self.outer_frame(&message.to_string());
        self.write(framed.green().bold())
    }

    /// Prints a section heading. Module sub-pages get a full-width thin
    /// rule above a `Module <name>:` line; the top-level page gets a plain
    /// `Usage:` line and no rule.
    pub fn module_heading(
        &mut self,
        sub_page: bool,
        module_name: &str,
        message: impl Display,
    ) -> PrintResult<()> {
        let heading = if sub_page {
            self.write_always(format!("\n{}\n", hline(self.charset.thin_rule(), 0)))?;
            format!("\nModule {:<10}   {}\n", format!("{}:", module_name), message)
        } else {
            format!("\nUsage:   {}\n", message)
        };
        self.write_always(heading.yellow())
    }

    pub fn verbose(&mut self, message: impl Display) -> PrintResult<()> {
        if self.verbose {
            self.write(message)?;
        }
        Ok(())
    }

    pub fn verboseln(&mut self, message: impl Display) -> PrintResult<()> {
        self.verbose(format!("{}\n", message))
    }

    pub fn verbose_info(&mut self, message: impl Display) -> PrintResult<()> {
        if self.verbose {
            self.write(message.to_string().green())?;
        }
        Ok(())
    }

    pub fn verbose_infoln(&mut self, message: impl Display) -> PrintResult<()> {
        self.verbose_info(format!("{}\n", message))
    }

    pub fn verbose_bold(&mut self, message: impl Display) -> PrintResult<()> {
        if self.verbose {
            self.write(message.to_string().bold())?;
        }
        Ok(())
    }

    pub fn verbose_boldln(&mut self, message: impl Display) -> PrintResult<()> {
        self.verbose_bold(format!("{}\n", message))
    }

    /// Debug output carries a fixed marker so it stays greppable in
    /// captured console logs.
    pub fn debug(&mut self, message: impl Display) -> PrintResult<()> {
        if self.debug {
            self.write(format!("*** DEB: {}", message).red())?;
        }
        Ok(())
    }

    pub fn debugln(&mut self, message: impl Display) -> PrintResult<()> {
        self.debug(format!("{}\n", message))
    }

    pub fn warning(&mut self, message: impl Display) -> PrintResult<()> {
        self.write_always(format!("*** WARN: {}", message).yellow())
    }

    pub fn warningln(&mut self, message: impl Display) -> PrintResult<()> {
        self.warning(format!("{}\n", message))
    }

    pub fn error(&mut self, message: impl Display) -> PrintResult<()> {
        self.write_always(format!("*** ERR: {}", message).red())
    }

    pub fn errorln(&mut self, message: impl Display) -> PrintResult<()> {
        self.error(format!("{}\n", message))
    }
}

//
// PRIVATES
//

fn render_frame(glyphs: &FrameGlyphs, text: &str) -> String {
    let width = text.chars().count() + 2;
    let head = format!(
        "{}{}{}",
        glyphs.top_left,
        glyphs.horizontal.repeat(width),
        glyphs.top_right
    );
    let tail = format!(
        "{}{}{}",
        glyphs.bottom_left,
        glyphs.horizontal.repeat(width),
        glyphs.bottom_right
    );
    format!(
        "{}\n{} {} {}\n{}\n",
        head, glyphs.vertical, text, glyphs.vertical, tail
    )
}

/// Repeats `glyph` `n` times; `n == 0` means "span the terminal".
fn hline(glyph: &str, n: usize) -> String {
    let n = if n == 0 { term_width() } else { n };
    glyph.repeat(n)
}

/// Detected terminal width, 80 columns when detection comes up empty.
fn term_width() -> usize {
    terminal_size().map_or(80, |(width, _)| width.0 as usize)
}

//
// TESTS
//
