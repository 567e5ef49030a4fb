//! Labeled display sink.
//!
//! Writes one labeled line per call: the label left-justified in a fixed
//! width field, a `" : "` separator, then the value (or the sequence
//! elements joined by single spaces). Performs no validation of its
//! inputs.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::error::Result;

/// Default width of the label field.
pub const LABEL_WIDTH: usize = 32;

pub struct DisplaySink<W> {
    out: W,
    width: usize,
    lines: usize,
}

impl<W: Write> DisplaySink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: LABEL_WIDTH,
            lines: 0,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Number of labeled lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Write a labeled scalar value.
    pub fn scalar(&mut self, label: &str, value: impl Display) -> Result<()> {
        writeln!(self.out, "{:<w$} : {}", label, value, w = self.width)?;
        self.lines += 1;
        Ok(())
    }

    /// Write a labeled sequence, elements separated by single spaces.
    pub fn sequence<T: Display>(
        &mut self,
        label: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let rendered = values.into_iter().map(|v| v.to_string()).join(" ");
        self.scalar(label, rendered)
    }
}
