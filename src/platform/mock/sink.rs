//! Recording trace sink for testing

use heapless::Vec;

use crate::libraries::motor_driver::{MotorEvent, TraceSink};

/// Maximum number of events kept by [`RecordingSink`]
const EVENT_CAPACITY: usize = 32;

/// Trace sink that stores every event it receives
///
/// Events past the capacity are counted but not stored.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<MotorEvent, EVENT_CAPACITY>,
    dropped: u32,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> &[MotorEvent] {
        &self.events
    }

    /// Most recent event
    pub fn last(&self) -> Option<&MotorEvent> {
        self.events.last()
    }

    /// Events that did not fit in the buffer
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: &MotorEvent) {
        if self.events.push(*event).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_overflow() {
        let mut sink = RecordingSink::new();
        let event = MotorEvent::Speed {
            label: 'A',
            normalized: 0.5,
            pwm: 127,
        };

        for _ in 0..EVENT_CAPACITY + 3 {
            sink.record(&event);
        }

        assert_eq!(sink.events().len(), EVENT_CAPACITY);
        assert_eq!(sink.dropped(), 3);
        assert_eq!(sink.last(), Some(&event));

        sink.clear();
        assert!(sink.events().is_empty());
        assert_eq!(sink.dropped(), 0);
    }
}
