//! Fired flags written by the timer backend

use portable_atomic::{AtomicBool, Ordering};

use super::role::AlarmRole;

/// One fired flag per alarm role
///
/// Written from interrupt/task context, read and cleared by the poll loop.
pub struct AlarmFlags {
    fired: [AtomicBool; AlarmRole::COUNT],
}

impl Default for AlarmFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmFlags {
    /// Create a flag block with nothing fired
    pub const fn new() -> Self {
        Self {
            fired: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
        }
    }

    /// Mark the alarm as fired
    pub fn raise(&self, role: AlarmRole) {
        self.fired[role.index()].store(true, Ordering::Release);
    }

    /// Check the flag without consuming it
    pub fn is_raised(&self, role: AlarmRole) -> bool {
        self.fired[role.index()].load(Ordering::Acquire)
    }

    /// Consume the flag, returning whether it was set
    pub fn take(&self, role: AlarmRole) -> bool {
        self.fired[role.index()].swap(false, Ordering::AcqRel)
    }

    /// Drop the flag
    pub fn clear(&self, role: AlarmRole) {
        self.fired[role.index()].store(false, Ordering::Release);
    }
}
