#![cfg(test)]
//! Testing utils.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

/// Logger that keeps every record on the thread that emitted it
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

/// Run `f` and return its result together with the log records it emitted
///
/// Records are collected per thread, so tests running in parallel do not see
/// each other's output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    RECORDS.with(|r| r.borrow_mut().clear());
    let result = f();
    let records = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
    (result, records)
}

/// Records more severe than `Debug`
pub fn above_debug(records: &[(Level, String)]) -> Vec<&(Level, String)> {
    records.iter().filter(|(level, _)| *level < Level::Debug).collect()
}
