//! Output stream handles

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Byte sink a writer renders lines into
pub type OutputStream = Box<dyn Write + Send>;

/// Cloneable in-memory stream.
///
/// Every clone appends to the same buffer, so one clone can be given to a
/// writer while another is kept to inspect the output.
///
/// # Example
///
/// ```
/// use console_log_writer::core::SharedBuffer;
/// use std::io::Write;
///
/// let buffer = SharedBuffer::new();
/// let mut handle = buffer.clone();
/// handle.write_all(b"hello\n").unwrap();
///
/// assert_eq!(buffer.contents(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer contents decoded as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Buffer contents split into lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
