//! Single-slot transient message for the active form.
//!
//! DESIGN
//! ======
//! Every `show` supersedes the previous message and hands out a fresh ticket.
//! The shell sleeps for the TTL and then calls `expire` with that ticket; only
//! the latest ticket clears, so rapid repeats clear exactly once, one TTL after
//! the last call.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

/// How long a message stays visible unless superseded.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// Identifies one `show` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct MessageSlot {
    current: Option<Message>,
    seq: u64,
}

impl MessageSlot {
    /// Replace any visible message and return the ticket that may clear it.
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageTicket {
        self.seq += 1;
        self.current = Some(Message { text: text.into(), kind });
        MessageTicket(self.seq)
    }

    /// Clear the message if `ticket` is still the latest. Returns whether
    /// anything was cleared.
    pub fn expire(&mut self, ticket: MessageTicket) -> bool {
        if ticket.0 != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Drop the visible message without issuing a ticket. Outstanding tickets
    /// become no-ops.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }
}
