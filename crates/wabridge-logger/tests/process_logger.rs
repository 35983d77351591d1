//! Integration tests for the process-wide logger.
//!
//! All tests share `LogSink::global()`, so they hold `SERIAL` for their whole
//! body and close the sink before returning.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use wabridge_logger::{FileLogger, LogOptions, LogSink, Logger, LoggerError};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Check the `HH:MM:SS.mmm [<module> <LEVEL>] <message>` shape.
fn assert_line(line: &str, module: &str, level: &str, message: &str) {
    let (time, rest) = line.split_at(12);
    let bytes = time.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            2 | 5 => assert_eq!(*b, b':', "bad time in {line:?}"),
            8 => assert_eq!(*b, b'.', "bad time in {line:?}"),
            _ => assert!(b.is_ascii_digit(), "bad time in {line:?}"),
        }
    }
    assert_eq!(rest, format!(" [{module} {level}] {message}"), "{line:?}");
}

#[test]
fn test_atomic_writes() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atomic.log");

    let log = FileLogger::open(&LogOptions::new(&path).with_module("Main")).unwrap();

    std::thread::scope(|s| {
        for _ in 0..1000 {
            let log = log.clone();
            s.spawn(move || log.info(format_args!("info")));
        }
    });
    log.close().unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1000);
    for line in &lines {
        assert_line(line, "Main", "INFO", "info");
    }
}

#[test]
fn test_singleton() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("logger1.log");
    let second = dir.path().join("logger2.log");

    let l1 = FileLogger::open(&LogOptions::new(&first).with_module("Main")).unwrap();

    let err = FileLogger::open(&LogOptions::new(&second).with_module("Main")).unwrap_err();
    assert!(matches!(err, LoggerError::AlreadyOpen { .. }), "{err}");

    let l2 = FileLogger::open(&LogOptions::new(&first).with_module("Other")).unwrap();
    assert!(std::sync::Arc::ptr_eq(l1.sink(), l2.sink()));
    assert!(std::sync::Arc::ptr_eq(l1.sink(), &LogSink::global()));

    l1.info(format_args!("from one"));
    l2.info(format_args!("from two"));
    l1.close().unwrap();

    let lines = read_lines(&first);
    assert_eq!(lines.len(), 2);
    assert_line(&lines[0], "Main", "INFO", "from one");
    assert_line(&lines[1], "Other", "INFO", "from two");
    assert!(!second.exists());
}

#[test]
fn test_verbose() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verbose.log");

    let count_debug = |verbose: bool| -> usize {
        let mut options = LogOptions::new(&path).with_module("Main").with_append();
        options.verbose = verbose;
        let log = FileLogger::open(&options).unwrap();
        for _ in 0..5 {
            log.debug(format_args!("test"));
        }
        log.close().unwrap();

        let found = read_lines(&path)
            .iter()
            .filter(|l| l.contains("DEBUG"))
            .count();
        fs::remove_file(&path).unwrap();
        found
    };

    assert_eq!(count_debug(false), 0);
    assert_eq!(count_debug(true), 5);
}

#[cfg(unix)]
#[test]
fn test_rotation() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rotated.log");

    let log = FileLogger::open(&LogOptions::new(&path).with_module("Main")).unwrap();
    log.info(format_args!("before rotation"));

    fs::remove_file(&path).unwrap();
    log.sub("Rotator").warn(format_args!("after rotation"));
    log.close().unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert_line(&lines[0], "Main/Rotator", "WARN", "after rotation");
}

#[test]
fn test_empty_module_keeps_brackets() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bare.log");

    let log = FileLogger::open(&LogOptions::new(&path)).unwrap();
    log.info(format_args!("msg"));
    log.sub("").error(format_args!("still bare"));
    log.close().unwrap();

    let lines = read_lines(&path);
    assert_line(&lines[0], "", "INFO", "msg");
    assert_line(&lines[1], "", "ERROR", "still bare");
    assert!(lines[0].ends_with("[ INFO] msg"));
}

#[test]
fn test_sub_loggers_as_trait_objects() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("client.log");

    let base = FileLogger::open(&LogOptions::new(&path)).unwrap();
    let client: Box<dyn Logger> = Logger::sub(&base, "Client");
    let socket = client.sub("Socket");
    socket.info(format_args!("frame received"));
    base.close().unwrap();

    let lines = read_lines(&path);
    assert_line(&lines[0], "Client/Socket", "INFO", "frame received");
}

#[test]
fn test_late_write_after_close_releases_file() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("session1.log");
    let second = dir.path().join("session2.log");

    let log = FileLogger::open(&LogOptions::new(&first).with_module("Main")).unwrap();
    log.close().unwrap();
    log.info(format_args!("straggler"));
    assert!(!LogSink::global().is_open());

    let next = FileLogger::open(&LogOptions::new(&second).with_module("Main")).unwrap();
    next.info(format_args!("second session"));
    next.close().unwrap();

    assert_line(&read_lines(&first)[0], "Main", "INFO", "straggler");
    assert_line(&read_lines(&second)[0], "Main", "INFO", "second session");
}
