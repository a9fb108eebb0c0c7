//! Streaming output formatter
//!
//! `StreamingFormatter` writes one line per entry straight to its sink as the
//! walker produces them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, NoColor, WriteColor};

use crate::error::{Result, TreeError};
use crate::tree::{Node, TreeOutput, connector};

use super::config::OutputConfig;
use super::utils::clean_path;

/// Streaming output formatter over any color-capable writer.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<BufferedStandardStream> {
    /// Formatter writing to buffered stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, BufferedStandardStream::stdout(choice))
    }
}

impl StreamingFormatter<NoColor<BufWriter<File>>> {
    /// Formatter writing to a newly created (or truncated) file. Files never get color.
    pub fn create(path: &Path, config: OutputConfig) -> Result<Self> {
        let file = File::create(path).map_err(|source| TreeError::OutputCreation {
            path: path.to_path_buf(),
            source,
        })?;
        let config = OutputConfig {
            use_color: false,
            ..config
        };
        Ok(Self::new(config, NoColor::new(BufWriter::new(file))))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_label(&mut self, node: &Node<'_>) -> io::Result<()> {
        let colored = node.is_dir && self.config.use_color;
        if colored {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        if self.config.full_path {
            write!(self.out, "{}", clean_path(node.path).display())?;
        } else {
            write!(self.out, "{}", node.name)?;
        }
        if colored {
            self.out.reset()?;
        }
        Ok(())
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_node(&mut self, node: &Node<'_>) -> io::Result<()> {
        if self.config.indent {
            write!(self.out, "{}{}", node.prefix, connector(node.is_last))?;
        }
        self.write_label(node)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
