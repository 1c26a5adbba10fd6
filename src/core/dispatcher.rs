//! Dual-sink dispatch and verbosity gating
//!
//! The dispatcher owns at most one console sink and at most one file sink,
//! each with an `active` flag. For every record it picks a [`Route`] from the
//! record's severity and the verbosity flag, then writes to the active sinks
//! the route allows.
//!
//! | severity  | verbose | file sink | receives            |
//! |-----------|---------|-----------|---------------------|
//! | FRAMEWORK | any     | any       | every active sink   |
//! | standard  | true    | any       | every active sink   |
//! | standard  | false   | present   | file sink only      |
//! | standard  | false   | absent    | nothing             |
//!
//! Quiet-mode console exclusion is a property of the route computed for one
//! call; the active set itself is never touched, so nothing leaks between
//! calls.

use super::{
    error::Result,
    log_record::LogRecord,
    severity::Severity,
    sink::{Sink, SinkKind},
};

/// Which active sinks a single record may reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AllActive,
    FileOnly,
    Drop,
}

impl Route {
    fn allows(self, kind: SinkKind) -> bool {
        match self {
            Route::AllActive => true,
            Route::FileOnly => kind == SinkKind::File,
            Route::Drop => false,
        }
    }
}

/// Outcome of dispatching one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivery {
    pub delivered: usize,
    pub failed: usize,
}

impl Delivery {
    pub fn is_dropped(&self) -> bool {
        self.delivered == 0 && self.failed == 0
    }
}

struct SinkSlot {
    sink: Box<dyn Sink>,
    active: bool,
}

pub struct Dispatcher {
    verbose: bool,
    console: Option<SinkSlot>,
    file: Option<SinkSlot>,
}

impl Dispatcher {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            console: None,
            file: None,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Attach `sink` in the `kind` slot, replacing any previous occupant.
    /// A newly attached sink starts active.
    pub fn attach(&mut self, kind: SinkKind, sink: Box<dyn Sink>) {
        *self.slot_mut(kind) = Some(SinkSlot { sink, active: true });
    }

    pub fn has_sink(&self, kind: SinkKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn is_active(&self, kind: SinkKind) -> bool {
        self.slot(kind).is_some_and(|slot| slot.active)
    }

    /// Toggle dispatch membership of the sink in `kind`.
    ///
    /// Returns `true` if membership changed. A missing sink or a sink already
    /// in the requested state is left alone.
    pub fn set_active(&mut self, kind: SinkKind, active: bool) -> bool {
        match self.slot_mut(kind) {
            Some(slot) if slot.active != active => {
                slot.active = active;
                true
            }
            _ => false,
        }
    }

    pub fn route(&self, severity: Severity) -> Route {
        if !severity.is_standard() || self.verbose {
            Route::AllActive
        } else if self.has_sink(SinkKind::File) {
            Route::FileOnly
        } else {
            Route::Drop
        }
    }

    pub fn dispatch(&mut self, record: &LogRecord) -> Delivery {
        let route = self.route(record.severity);
        let mut delivery = Delivery::default();

        for (kind, slot) in [
            (SinkKind::Console, self.console.as_mut()),
            (SinkKind::File, self.file.as_mut()),
        ] {
            let Some(slot) = slot else { continue };
            if !slot.active || !route.allows(kind) {
                continue;
            }

            if Self::write_isolated(slot.sink.as_mut(), record) {
                delivery.delivered += 1;
            } else {
                delivery.failed += 1;
            }
        }

        delivery
    }

    /// Write to one sink; a failing or panicking sink never takes the caller
    /// down and never keeps the record from the other sink.
    fn write_isolated(sink: &mut dyn Sink, record: &LogRecord) -> bool {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(record)));

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                false
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_msg
                );
                false
            }
        }
    }

    /// Flush every attached sink, paused ones included.
    pub fn flush(&mut self) -> Result<()> {
        for slot in [self.console.as_mut(), self.file.as_mut()].into_iter().flatten() {
            slot.sink.flush()?;
        }
        Ok(())
    }

    fn slot(&self, kind: SinkKind) -> Option<&SinkSlot> {
        match kind {
            SinkKind::Console => self.console.as_ref(),
            SinkKind::File => self.file.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: SinkKind) -> &mut Option<SinkSlot> {
        match kind {
            SinkKind::Console => &mut self.console,
            SinkKind::File => &mut self.file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records the messages it receives
    struct RecordingSink {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Sink for RecordingSink {
        fn write(&mut self, record: &LogRecord) -> Result<()> {
            self.seen.lock().push(record.message.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            Err(std::io::Error::other("device gone").into())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn recorder() -> (Box<dyn Sink>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(RecordingSink {
                seen: Arc::clone(&seen),
            }),
            seen,
        )
    }

    fn record(severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(severity, message, SourceLocation::caller())
    }

    fn setup(
        verbose: bool,
        with_file: bool,
    ) -> (Dispatcher, Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
        let mut dispatcher = Dispatcher::new(verbose);
        let (console, console_seen) = recorder();
        let (file, file_seen) = recorder();
        dispatcher.attach(SinkKind::Console, console);
        if with_file {
            dispatcher.attach(SinkKind::File, file);
        }
        (dispatcher, console_seen, file_seen)
    }

    #[test]
    fn test_route_table() {
        let (verbose, _, _) = setup(true, true);
        let (quiet_file, _, _) = setup(false, true);
        let (quiet_console, _, _) = setup(false, false);

        for severity in Severity::STANDARD {
            assert_eq!(verbose.route(severity), Route::AllActive);
            assert_eq!(quiet_file.route(severity), Route::FileOnly);
            assert_eq!(quiet_console.route(severity), Route::Drop);
        }
        assert_eq!(quiet_file.route(Severity::Framework), Route::AllActive);
        assert_eq!(quiet_console.route(Severity::Framework), Route::AllActive);
    }

    #[test]
    fn test_verbose_reaches_both_sinks() {
        let (mut dispatcher, console, file) = setup(true, true);
        let delivery = dispatcher.dispatch(&record(Severity::Info, "hello"));

        assert_eq!(delivery.delivered, 2);
        assert_eq!(*console.lock(), vec!["hello"]);
        assert_eq!(*file.lock(), vec!["hello"]);
    }

    #[test]
    fn test_quiet_without_file_drops() {
        let (mut dispatcher, console, _) = setup(false, false);
        let delivery = dispatcher.dispatch(&record(Severity::Critical, "lost"));

        assert!(delivery.is_dropped());
        assert!(console.lock().is_empty());
    }

    #[test]
    fn test_quiet_with_file_skips_console_for_one_call_only() {
        let (mut dispatcher, console, file) = setup(false, true);
        dispatcher.dispatch(&record(Severity::Warning, "quiet"));

        assert!(console.lock().is_empty());
        assert_eq!(*file.lock(), vec!["quiet"]);
        // console stays a member of the active set
        assert!(dispatcher.is_active(SinkKind::Console));

        dispatcher.dispatch(&record(Severity::Framework, "loud"));
        assert_eq!(*console.lock(), vec!["loud"]);
        assert_eq!(*file.lock(), vec!["quiet", "loud"]);
    }

    #[test]
    fn test_paused_file_gets_nothing() {
        let (mut dispatcher, console, file) = setup(false, true);
        assert!(dispatcher.set_active(SinkKind::File, false));

        let quiet = dispatcher.dispatch(&record(Severity::Error, "nowhere"));
        assert!(quiet.is_dropped());

        dispatcher.dispatch(&record(Severity::Framework, "console only"));
        assert_eq!(*console.lock(), vec!["console only"]);
        assert!(file.lock().is_empty());
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let (mut dispatcher, _, _) = setup(true, true);
        assert!(!dispatcher.set_active(SinkKind::File, true));
        assert!(dispatcher.set_active(SinkKind::File, false));
        assert!(!dispatcher.set_active(SinkKind::File, false));
        assert!(dispatcher.has_sink(SinkKind::File));

        let (mut console_only, _, _) = setup(true, false);
        assert!(!console_only.set_active(SinkKind::File, false));
        assert!(!console_only.is_active(SinkKind::File));
    }

    #[test]
    fn test_failing_sink_does_not_block_other() {
        let mut dispatcher = Dispatcher::new(true);
        let (file, file_seen) = recorder();
        dispatcher.attach(SinkKind::Console, Box::new(FailingSink));
        dispatcher.attach(SinkKind::File, file);

        let delivery = dispatcher.dispatch(&record(Severity::Info, "survives"));
        assert_eq!(delivery, Delivery { delivered: 1, failed: 1 });
        assert_eq!(*file_seen.lock(), vec!["survives"]);
    }
}
