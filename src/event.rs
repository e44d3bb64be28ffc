//! Log and notice callback system.
//!
//! The controller never talks to the user directly: advisory messages for
//! deliberately unimplemented affordances are emitted as typed [`Notice`]
//! values, and the presentation layer decides how to surface them. Log
//! lines go through a separate callback so embedders (and tests) can route
//! them wherever they like.

use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// An affordance that is present in the chrome but intentionally inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// The close button on the only editor tab.
    CloseTab,
    /// The red traffic-light button on the window chrome.
    CloseWindow,
}

impl Feature {
    /// Advisory text for the notice, in the voice of the shell.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::CloseTab => "Cannot close the only tab!",
            Self::CloseWindow => "This window stays open while the portfolio is running.",
        }
    }
}

/// A typed advisory event emitted by the navigation controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The user activated an affordance that deliberately does nothing.
    UnimplementedFeature(Feature),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnimplementedFeature(feature) => f.write_str(feature.message()),
        }
    }
}

type NoticeCallback = Box<dyn Fn(Notice) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn notice_callback() -> &'static Mutex<Option<NoticeCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<NoticeCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global notice callback.
pub fn set_notice_callback<F>(callback: F)
where
    F: Fn(Notice) + Send + Sync + 'static,
{
    let mut guard = notice_callback().lock().expect("notice callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a notice to the registered callback.
pub fn emit_notice(notice: Notice) {
    if let Ok(guard) = notice_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(notice);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_notice_callback(move |notice| {
            assert_eq!(notice, Notice::UnimplementedFeature(Feature::CloseTab));
            called_clone.store(true, Ordering::SeqCst);
        });
        emit_notice(Notice::UnimplementedFeature(Feature::CloseTab));
        assert!(called.load(Ordering::SeqCst));
        // Reset so the asserting callback cannot fire in unrelated tests.
        set_notice_callback(|_| {});
    }

    #[test]
    fn test_log_callback() {
        set_log_callback(|level, msg| {
            assert_eq!(level, LogLevel::Info);
            assert_eq!(msg, "hello");
        });
        emit_log(LogLevel::Info, "hello");
        // Reset so the asserting callback cannot fire in unrelated tests.
        set_log_callback(|_, _| {});
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::UnimplementedFeature(Feature::CloseTab);
        assert!(notice.to_string().contains("only tab"));
    }
}
