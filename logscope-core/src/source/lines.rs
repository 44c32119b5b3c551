use std::io::{self, BufRead};

/// Splits a byte stream into text lines.
///
/// Lines end at `\n`; one trailing `\r` is dropped. The final line need not be
/// terminated. Invalid UTF-8 surfaces as an `InvalidData` error and ends the
/// stream.
pub struct LineFramer<R> {
    reader: R,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> LineFramer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for LineFramer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }

                match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => Some(Ok(line)),
                    Err(e) => {
                        self.failed = true;
                        Some(Err(io::Error::new(io::ErrorKind::InvalidData, e)))
                    }
                }
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
