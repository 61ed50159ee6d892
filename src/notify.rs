//! Toast-style messages emitted by mapping operations. The host decides
//! how to surface them; the engine only needs something that accepts a
//! (title, description, severity) triple.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Info,
        }
    }

    pub fn warning(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Warning,
        }
    }

    pub fn error(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Error,
        }
    }
}

/// Injected notification sink. Mapping operations report through this
/// instead of printing or rendering anything themselves.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Discards everything. For callers that don't surface notifications.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notification: Notification) {}
}

/// Records every notification in order. Useful for tests and for hosts
/// that batch-render toasts after an operation.
#[derive(Debug, Default)]
pub struct MemoNotifier {
    pub events: Vec<Notification>,
}

impl MemoNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.events.iter().map(|n| n.title.as_str()).collect()
    }
}

impl Notifier for MemoNotifier {
    fn notify(&mut self, notification: Notification) {
        self.events.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_records_in_order() {
        let mut memo = MemoNotifier::new();
        memo.notify(Notification::info("First", "one".to_string()));
        memo.notify(Notification::warning("Second", "two".to_string()));

        assert_eq!(memo.titles(), ["First", "Second"]);
        assert_eq!(memo.events[1].severity, Severity::Warning);
    }

    #[test]
    fn test_null_notifier_accepts_anything() {
        let mut sink = NullNotifier;
        sink.notify(Notification::error("Oops", "ignored".to_string()));
    }
}
