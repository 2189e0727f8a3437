// src/auth/gate.rs
use parking_lot::Mutex;
use std::collections::HashSet;

/// Login forms with a request in flight, keyed by the form id each rendered
/// page carries. Two pages never share an id, so one client cannot block
/// another, even for the same username.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: Mutex<HashSet<String>>,
}

/// Held for the duration of one submission. Dropping it frees the key.
#[must_use]
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    gate: &'a SubmitGate,
    key: String,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if `key` already has a submission pending.
    pub fn try_acquire(&self, key: &str) -> Option<SubmitPermit<'_>> {
        let mut in_flight = self.in_flight.lock();
        if !in_flight.insert(key.to_string()) {
            return None;
        }
        Some(SubmitPermit {
            gate: self,
            key: key.to_string(),
        })
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.lock().contains(key)
    }
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.lock().remove(&self.key);
    }
}
