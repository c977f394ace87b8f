use std::io;
use std::io::{BufWriter, Write};

use crate::header::title;

// Fasta output with the sequence wrapped to a fixed number of residues per line.
// Errors are returned instead of panicking so that the caller can tell a closed
// pipe apart from a real failure.
pub struct FastaWriter<W: Write> {
    output: BufWriter<W>,
    line_width: usize, // 0 means no wrapping
}

impl<W: Write> FastaWriter<W> {
    // No need to give a buffered writer. Buffering is handled internally.
    pub fn new(output: W, line_width: usize) -> Self {
        Self {
            output: BufWriter::new(output),
            line_width,
        }
    }

    pub fn write_record(&mut self, id: &[u8], description: &[u8], seq: &[u8]) -> io::Result<()> {
        self.output.write_all(b">")?;
        self.output.write_all(&title(id, description))?;
        self.output.write_all(b"\n")?;

        if seq.is_empty() {
            return Ok(());
        }
        if self.line_width == 0 {
            self.output.write_all(seq)?;
            self.output.write_all(b"\n")?;
        } else {
            for line in seq.chunks(self.line_width) {
                self.output.write_all(line)?;
                self.output.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.output.into_inner().map_err(|e| e.into_error())
    }
}
