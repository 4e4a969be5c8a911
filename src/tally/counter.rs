use core::fmt;

/// Static heading rendered above the counter button.
pub const GREETING: &str = "Vite + React";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Click,
}

/// Per-mount counter state. Created at mount, dropped at unmount; never
/// shared between mounts.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Pure transition: the rendering layer re-invokes this with each event
    /// and projects the new text from the returned state. Increment
    /// saturates at u64::MAX.
    pub fn apply(self, event: CounterEvent) -> Self {
        match event {
            CounterEvent::Click => Counter {
                count: self.count.saturating_add(1),
            },
        }
    }

    pub fn label(&self) -> String {
        format!("count is {}", self.count)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
