//! Screen surface that renders to a terminal

use disco_ui::{ErrorDisplay, ListDataSource, ScreenSurface};
use std::fmt;
use std::io::Write;
use tracing::{debug, warn};

pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> ScreenSurface for TerminalSurface<W> {
    fn set_title(&mut self, title: &str) {
        self.line(format_args!("== {} ==", title));
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        if refreshing {
            self.line(format_args!("(refreshing...)"));
        }
    }

    fn reload_list(&mut self, rows: &dyn ListDataSource) {
        self.line(format_args!("{} ({})", rows.section_title(), rows.count()));
        for index in 0..rows.count() {
            let album = rows.record_at(index);
            match &album.image_url {
                Some(url) => self.line(format_args!("  {}. {} [{}]", index + 1, album.title, url)),
                None => self.line(format_args!("  {}. {} [no artwork]", index + 1, album.title)),
            }
        }
    }

    fn present_error(&mut self, error: &ErrorDisplay) {
        match &error.retry_label {
            Some(label) => self.line(format_args!(
                "! {}: {} ({})",
                error.title, error.message, label
            )),
            None => self.line(format_args!("! {}: {}", error.title, error.message)),
        }
    }

    fn dismiss_error(&mut self) {
        debug!("Error notice dismissed");
    }
}
