//! Writing export documents to files and streams.

use crate::codec::encode;
use crate::error::ExportError;
use mazegen_core::{Coord, Path};
use mazegen_grid::Maze;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write the export document for `maze` to `writer`.
///
/// The document is rendered in memory first, so a missing path fails
/// with [`ExportError::NoPath`] before any byte reaches the sink.
pub fn write_solution<W: Write + ?Sized>(
    writer: &mut W,
    maze: &Maze,
    entry: Coord,
    exit: Coord,
    path: Option<&Path>,
) -> Result<(), ExportError> {
    let path = path.ok_or(ExportError::NoPath)?;
    let doc = encode(maze, entry, exit, path);
    writer.write_all(doc.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write the export document to the file at `file`, replacing it.
///
/// A missing path is reported before the file is created.
pub fn save(
    file: impl AsRef<std::path::Path>,
    maze: &Maze,
    entry: Coord,
    exit: Coord,
    path: Option<&Path>,
) -> Result<(), ExportError> {
    if path.is_none() {
        return Err(ExportError::NoPath);
    }
    let file = file.as_ref();
    let mut out = BufWriter::new(File::create(file)?);
    write_solution(&mut out, maze, entry, exit, path)?;
    log::info!("saved {}x{} maze to {}", maze.width(), maze.height(), file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegen_path::bfs;
    use mazegen_test_utils::fixtures;
    use std::io;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_to_buffer() {
        let m = fixtures::serpentine(3, 2);
        let (s, e) = (Coord::new(0, 0), Coord::new(0, 1));
        let path = bfs(&m, s, e);
        let mut buf = Vec::new();
        write_solution(&mut buf, &m, s, e, path.as_ref()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "D53\nD56\n\n0,0\n0,1\nEESWW\n");
    }

    #[test]
    fn no_path_writes_nothing() {
        let m = Maze::new(2, 2);
        let mut buf = Vec::new();
        let err = write_solution(&mut buf, &m, Coord::new(0, 0), Coord::new(1, 1), None);
        assert!(matches!(err, Err(ExportError::NoPath)));
        assert!(buf.is_empty());
    }

    #[test]
    fn sink_failure_is_io() {
        let m = fixtures::serpentine(2, 1);
        let path = bfs(&m, Coord::new(0, 0), Coord::new(1, 0));
        let err = write_solution(
            &mut FailingSink,
            &m,
            Coord::new(0, 0),
            Coord::new(1, 0),
            path.as_ref(),
        );
        assert!(matches!(err, Err(ExportError::Io(_))));
    }

    #[test]
    fn dyn_writer_is_accepted() {
        let m = fixtures::serpentine(2, 1);
        let path = bfs(&m, Coord::new(0, 0), Coord::new(1, 0));
        let mut buf = Vec::new();
        let sink: &mut dyn Write = &mut buf;
        write_solution(sink, &m, Coord::new(0, 0), Coord::new(1, 0), path.as_ref()).unwrap();
        assert!(!buf.is_empty());
    }
}
