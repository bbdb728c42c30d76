//! Writable destination handles.
//!
//! A [`Sink`] is a shared handle: cloning it does not open a new destination,
//! every clone writes into the same underlying writer. Process streams are
//! reached through [`Sink::stdout`] and [`Sink::stderr`]; tests use
//! [`Sink::capture`] to collect output in memory.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Clone)]
pub struct Sink {
    label: &'static str,
    inner: Rc<RefCell<dyn Write>>,
}

impl Sink {
    pub fn new<W: Write + 'static>(label: &'static str, writer: W) -> Self {
        Self {
            label,
            inner: Rc::new(RefCell::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new("stderr", io::stderr())
    }

    /// In-memory sink plus a handle to read back what was written.
    pub fn capture() -> (Self, Capture) {
        let capture = Capture::default();
        (Self::new("capture", capture.clone()), capture)
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Write `text` verbatim and flush.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut writer = self.inner.borrow_mut();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Shared in-memory buffer behind a capture sink.
#[derive(Debug, Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Take all captured output and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
