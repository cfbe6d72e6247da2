use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Result, TransError};

pub struct InputReader;

impl InputReader {
    /// Reads a whole file as one translation unit.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD.
    pub fn read_file(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| TransError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Iterates over input lines, one item per line, blank ones included.
    ///
    /// The line terminator (`\n` or `\r\n`) is removed and invalid UTF-8
    /// becomes U+FFFD. Read errors are yielded, not swallowed.
    pub fn lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = Result<String>> {
        let mut buffer = Vec::new();
        std::iter::from_fn(move || {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => None,
                Ok(_) => {
                    if buffer.ends_with(b"\n") {
                        buffer.pop();
                        if buffer.ends_with(b"\r") {
                            buffer.pop();
                        }
                    }
                    Some(Ok(String::from_utf8_lossy(&buffer).into_owned()))
                }
                Err(e) => Some(Err(TransError::Stdin(e))),
            }
        })
    }
}
