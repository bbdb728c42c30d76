//! Output stream object.
//!
//! Wraps one destination [`Sink`]. Writing to a stream whose destination was
//! never bound fails with [`ObjectError::UnboundHandle`] and writes nothing.

use becaps_runtime::{object_table, ObjectError, Result, Sink, TypeEntry, OBJECT_TYPES};
use linkme::distributed_slice;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Stream {
    file: Option<Sink>,
}

object_table! {
    /// Shared operation table of [`Stream`].
    pub struct StreamFuncs for Stream {
        /// Clear the destination handle.
        fn init(StreamInit {}) -> () = Stream::init;
        /// Rebind the destination handle. Not validated.
        fn set_file(StreamSetFile { file: Option<Sink> }) -> () = Stream::set_file;
        /// Write text verbatim, without a trailing newline.
        fn write(StreamWrite { text: String }) -> Result<()> = Stream::write;
    }
}

#[distributed_slice(OBJECT_TYPES)]
static STREAM_TYPE: TypeEntry = TypeEntry::of::<Stream>();

impl Stream {
    pub fn file(&self) -> Option<&Sink> {
        self.file.as_ref()
    }

    fn init(&mut self, _: StreamInit) {
        self.file = None;
    }

    fn set_file(&mut self, params: StreamSetFile) {
        self.file = params.file;
    }

    fn write(&mut self, params: StreamWrite) -> Result<()> {
        let file = self.file.as_ref().ok_or(ObjectError::UnboundHandle {
            type_name: "Stream",
            op: "write",
        })?;
        trace!(sink = file.label(), len = params.text.len(), "stream write");
        file.write_str(&params.text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use becaps_runtime::{invoke, DynObject, Object, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_is_verbatim() {
        let (sink, out) = Sink::capture();
        let mut s = Object::<Stream>::new();
        invoke!(s.init());
        invoke!(s.set_file(Some(sink)));
        invoke!(s.write { text: "no newline".into() }).unwrap();
        invoke!(s.write { text: " | second\n".into() }).unwrap();
        assert_eq!(out.contents(), "no newline | second\n");
    }

    #[test]
    fn test_unbound_write_fails() {
        let mut s = Object::<Stream>::new();
        invoke!(s.init());
        let err = invoke!(s.write { text: "lost".into() }).unwrap_err();
        assert!(matches!(err, ObjectError::UnboundHandle { type_name: "Stream", op: "write" }));
    }

    #[test]
    fn test_init_unbinds() {
        let (sink, out) = Sink::capture();
        let mut s = Object::<Stream>::new();
        invoke!(s.set_file { file: Some(sink) });
        invoke!(s.init());
        assert!(s.state().file().is_none());
        assert!(invoke!(s.write { text: "x".into() }).is_err());
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_no_leakage_between_destinations() {
        let (sink_a, out_a) = Sink::capture();
        let (sink_b, out_b) = Sink::capture();
        let mut a = Object::<Stream>::new();
        let mut b = Object::<Stream>::new();
        invoke!(a.set_file(Some(sink_a)));
        invoke!(b.set_file(Some(sink_b)));

        invoke!(a.write { text: "to a".into() }).unwrap();
        assert_eq!(out_a.contents(), "to a");
        assert_eq!(out_b.contents(), "");

        invoke!(b.write { text: "to b".into() }).unwrap();
        assert_eq!(out_a.contents(), "to a");
        assert_eq!(out_b.contents(), "to b");
    }

    #[test]
    fn test_dynamic_write() {
        let (sink, out) = Sink::capture();
        let mut s = Object::<Stream>::new();
        s.invoke("set_file", &[Value::Sink(sink)]).unwrap();
        let ret = s.invoke("write", &[Value::Text("dyn".into())]).unwrap();
        assert!(matches!(ret, Value::Unit));
        assert_eq!(out.contents(), "dyn");

        s.invoke("set_file", &[Value::Unit]).unwrap();
        let err = s.invoke("write", &[Value::Text("dyn".into())]).unwrap_err();
        assert!(matches!(err, ObjectError::UnboundHandle { .. }));
    }
}
