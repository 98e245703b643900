use crate::scan::RemoteSubmission;
use std::sync::{Mutex, PoisonError};

/// Process-wide queue of submissions awaiting the next merge cycle.
///
/// The listener only appends, the merger only drains, and the mutex keeps the
/// two mutually exclusive: a submission appended during a drain lands in the
/// next cycle, and nothing a drain returns can be read again. Growth between
/// cycles is unbounded; there is no backpressure on inbound connections, so a
/// flood of secondaries is a real capacity risk.
pub struct PendingBuffer {
    inner: Mutex<Vec<RemoteSubmission>>,
}

impl PendingBuffer {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn append(&self, submission: RemoteSubmission) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.push(submission);
    }

    /// Removes and returns everything buffered so far, atomically with
    /// respect to concurrent appends.
    pub fn drain_all(&self) -> Vec<RemoteSubmission> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PendingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::NetworkObservation;

    fn submission(ssid: &str) -> RemoteSubmission {
        RemoteSubmission::new(vec![NetworkObservation::new(ssid, -60)])
    }

    #[test]
    fn drain_clears_the_buffer() {
        let buffer = PendingBuffer::new();
        buffer.append(submission("one"));
        buffer.append(submission("two"));

        let drained = buffer.drain_all();
        assert_eq!(drained.len(), 2);
        assert!(buffer.is_empty());
        assert!(buffer.drain_all().is_empty());
    }

    #[test]
    fn append_after_drain_lands_in_next_drain() {
        let buffer = PendingBuffer::new();
        buffer.append(submission("early"));

        let first = buffer.drain_all();
        buffer.append(submission("late"));
        let second = buffer.drain_all();

        assert_eq!(first[0].wifi_data[0].ssid, "early");
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].wifi_data[0].ssid, "late");
    }

    #[test]
    fn drain_preserves_append_order() {
        let buffer = PendingBuffer::new();
        for name in ["a", "b", "c"] {
            buffer.append(submission(name));
        }
        let drained = buffer.drain_all();
        let names: Vec<_> = drained
            .iter()
            .map(|s| s.wifi_data[0].ssid.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
