use std::time::{Duration, Instant};

/// How long a success message stays visible.
pub const FLASH_TTL: Duration = Duration::from_secs(3);

/// A transient message that disappears on its own once its deadline passes.
///
/// There is no timer behind it: visibility is decided when the message is
/// read, so nothing keeps running after the owning page is gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    current: Option<(String, Instant)>,
}

impl Flash {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now + FLASH_TTL));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn visible(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((message, until)) if now < *until => Some(message.as_str()),
            _ => None,
        }
    }

    /// Time left before the message disappears, if it is still showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.current {
            Some((_, until)) if now < *until => Some(*until - now),
            _ => None,
        }
    }
}
