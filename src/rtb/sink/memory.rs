use super::LogSink;
use crate::model::Severity;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every line in memory.
///
/// Useful in tests and anywhere the host wants to show log output itself.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(Severity, String)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.guard().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Everything written so far, one newline-terminated line per entry.
    pub fn contents(&self) -> String {
        self.guard()
            .iter()
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, line: &str) {
        self.guard().push((severity, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let sink = MemorySink::new();
        sink.log(Severity::Warning, "w");
        sink.log(Severity::Info, "i");

        assert_eq!(
            sink.entries(),
            vec![
                (Severity::Warning, "w".to_string()),
                (Severity::Info, "i".to_string())
            ]
        );
        assert_eq!(sink.contents(), "w\ni\n");

        sink.clear();
        assert!(sink.is_empty());
    }
}
