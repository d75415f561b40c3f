//! Writing report rows to the destination file

use crate::error::Result;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Line terminator of the platform's default text writer
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator of the platform's default text writer
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Write every row to `path`, one per line, replacing any existing file
///
/// The whole sequence is consumed before returning. The first error from the
/// sequence aborts the write and is returned; rows already written stay on
/// disk. Returns the number of rows written.
pub fn write_lines<I>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
{
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for line in lines {
        let line = line?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
        count += 1;
    }

    writer.flush()?;
    debug!(?path, lines = count, "wrote report rows");
    Ok(count)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArchiveError, Error};
    use tempfile::TempDir;

    fn ok_lines(lines: &[&str]) -> Vec<Result<String>> {
        lines.iter().map(|l| Ok(l.to_string())).collect()
    }

    #[test]
    fn writes_each_line_with_terminator() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let count = write_lines(&path, ok_lines(&["a", "b"])).unwrap();

        assert_eq!(count, 2);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("a{LINE_ENDING}b{LINE_ENDING}"));
    }

    #[test]
    fn overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, "old content that is much longer than the new one\n").unwrap();

        write_lines(&path, ok_lines(&["new"])).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("new{LINE_ENDING}")
        );
    }

    #[test]
    fn empty_sequence_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        assert_eq!(write_lines(&path, Vec::new()).unwrap(), 0);
        assert!(std::fs::read_to_string(&path).unwrap().is_empty());
    }

    #[test]
    fn error_mid_sequence_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let lines = vec![
            Ok("first".to_string()),
            Err(Error::Archive(ArchiveError::Consumed)),
            Ok("never".to_string()),
        ];

        let result = write_lines(&path, lines);

        assert!(matches!(
            result,
            Err(Error::Archive(ArchiveError::Consumed))
        ));
        assert!(path.exists());
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.txt");

        assert!(matches!(
            write_lines(&path, ok_lines(&["a"])),
            Err(Error::Io(_))
        ));
    }
}
