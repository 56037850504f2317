//! Output streams the input encoders write into.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Seek, Write};

/// A seekable output that can be cut short at its current position, such as
/// a file opened for reading and writing.
///
/// The metric space encoder rewinds and truncates its output before writing,
/// so every encoder accepts this rather than a bare [`Write`].
pub trait RewritableStream: Write + Seek {
    /// Discards everything after the current position.
    fn truncate_at_position(&mut self) -> io::Result<()>;
}

impl RewritableStream for File {
    fn truncate_at_position(&mut self) -> io::Result<()> {
        let pos = self.stream_position()?;
        self.set_len(pos)
    }
}

impl RewritableStream for BufWriter<File> {
    fn truncate_at_position(&mut self) -> io::Result<()> {
        self.flush()?;
        self.get_mut().truncate_at_position()
    }
}

impl RewritableStream for Cursor<Vec<u8>> {
    fn truncate_at_position(&mut self) -> io::Result<()> {
        let pos = usize::try_from(self.position())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        self.get_mut().truncate(pos);
        Ok(())
    }
}

impl<T: RewritableStream + ?Sized> RewritableStream for &mut T {
    fn truncate_at_position(&mut self) -> io::Result<()> {
        (**self).truncate_at_position()
    }
}
