//! `log` backend writing to the first serial port.
//!
//! Under QEMU, `-serial stdio` makes the output show up in the terminal
//! that started the emulator.

use core::fmt::{self, Write};

use bare_metal::cpu::io::com::{SerialPort, COM1_ADDR};
use log::{Log, Metadata, Record, SetLoggerError};
use spinlock::Mutex;

use crate::config;

pub struct SerialLogger {
    port: Mutex<SerialPort>,
}

static LOGGER: SerialLogger = SerialLogger {
    port: Mutex::new(unsafe { SerialPort::new(COM1_ADDR) }),
};

/// Install the serial logger as the global `log` backend.
/// Fails if some logger has already been installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(config::LOG_LEVEL);
    Ok(())
}

/// Format a record as a single line.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> fmt::Result {
    write!(out, "[{:<5}] {}: {}\r\n", record.level(), record.target(), record.args())
}

/// Write to the serial port even if the logger currently holds it,
/// which happens when the panic originated inside the logger.
pub fn emergency_write(args: fmt::Arguments) {
    with_locked_or(&LOGGER.port, || unsafe { SerialPort::new(COM1_ADDR) }, |port| {
        port.write_fmt(args).unwrap_or(())
    })
}

/// Run `f` on the guarded value, or on a freshly made one if the lock is taken.
fn with_locked_or<T, R, N, F>(mutex: &Mutex<T>, make: N, f: F) -> R
where
    N: FnOnce() -> T,
    F: FnOnce(&mut T) -> R,
{
    match mutex.try_lock() {
        Some(mut guard) => f(&mut *guard),
        None => f(&mut make()),
    }
}

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut port = self.port.lock();
            write_record(&mut *port, record).unwrap_or(());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod test {
    use super::*;
    use log::{Level, LevelFilter};

    #[test]
    fn init_installs_once() {
        // the first call may only fail if some other test installed a logger
        init().unwrap_or(());
        assert!(init().is_err());
        assert_eq!(log::max_level(), config::LOG_LEVEL);

        let above = Metadata::builder().level(Level::Warn).build();
        let below = Metadata::builder().level(Level::Trace).build();
        assert!(LOGGER.enabled(&above));
        assert_eq!(config::LOG_LEVEL, LevelFilter::Info);
        assert!(!LOGGER.enabled(&below));
    }

    #[test]
    fn falls_back_when_locked() {
        let shared = Mutex::new(String::new());

        let out = with_locked_or(&shared, String::new, |s| {
            s.push_str("free");
            s.len()
        });
        assert_eq!(out, 4);
        assert_eq!(*shared.lock(), "free");

        let guard = shared.lock();
        let fallback = with_locked_or(&shared, || String::from("fresh "), |s| {
            s.push_str("busy");
            s.clone()
        });
        assert_eq!(fallback, "fresh busy");
        assert_eq!(*guard, "free");
    }

    #[test]
    fn record_format() {
        let mut out = String::new();
        write_record(
            &mut out,
            &Record::builder()
                .args(format_args!("cleared {} cells", 2000))
                .level(Level::Info)
                .target("tinyos_kernel::kernel")
                .build(),
        )
        .unwrap();
        assert_eq!(out, "[INFO ] tinyos_kernel::kernel: cleared 2000 cells\r\n");
    }

    #[test]
    fn records_are_one_line_each() {
        let mut out = String::new();
        for level in &[Level::Error, Level::Trace] {
            write_record(
                &mut out,
                &Record::builder().args(format_args!("x")).level(*level).target("t").build(),
            )
            .unwrap();
        }
        assert_eq!(out, "[ERROR] t: x\r\n[TRACE] t: x\r\n");
    }
}
