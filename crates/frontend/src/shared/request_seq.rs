//! Tickets for overlapping loads of the same list.
//!
//! Every load takes a ticket before it awaits; only the holder of the newest
//! ticket may write the result or clear the loading flag.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Loading flag driven by [`RequestSeq`] tickets
#[derive(Debug, Clone, Copy)]
pub struct LoadTracker {
    pub is_loading: RwSignal<bool>,
    seq: RwSignal<RequestSeq>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self {
            is_loading: RwSignal::new(false),
            seq: RwSignal::new(RequestSeq::default()),
        }
    }

    /// Raise the flag and hand out the newest ticket.
    pub fn begin(&self) -> u64 {
        let mut ticket = 0;
        self.seq.update(|seq| ticket = seq.next());
        self.is_loading.set(true);
        ticket
    }

    /// Returns false for a superseded ticket, leaving the flag to the
    /// newer load; otherwise clears the flag.
    pub fn finish(&self, ticket: u64) -> bool {
        if !self.seq.with_untracked(|seq| seq.is_current(ticket)) {
            return false;
        }
        self.is_loading.set(false);
        true
    }
}

impl Default for LoadTracker {
    fn default() -> Self {
        Self::new()
    }
}
