//! One-shot alarms on embassy timers
//!
//! Each [`AlarmRole`] gets a command slot and a dedicated task running an
//! [`AlarmRunner`]. The poll loop arms and cancels through
//! [`SignalAlarmTimer`] without blocking; the runner sleeps until the
//! deadline and reports the fire.
//!
//! A slot holds only the latest command. That is enough because the
//! latest command always describes the wanted state of the role: either
//! armed with the newest deadline, or idle.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use photogate_core::alarm::{AlarmRole, TimerId};
use photogate_core::traits::{AlarmTimer, TimerError};

/// Command sent from the poll loop to an alarm task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmCommand {
    /// Fire once at `deadline`, replacing any armed alarm
    Arm { id: TimerId, deadline: Instant },
    /// Drop the armed alarm
    Cancel { id: TimerId },
}

/// Latest-wins command slot for one role
pub type AlarmSlot = Signal<CriticalSectionRawMutex, AlarmCommand>;

/// Command slots for every role, indexed by [`AlarmRole::index`]
pub struct AlarmSlots {
    slots: [AlarmSlot; AlarmRole::COUNT],
}

impl Default for AlarmSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmSlots {
    pub const fn new() -> Self {
        Self {
            slots: [
                Signal::new(),
                Signal::new(),
                Signal::new(),
                Signal::new(),
                Signal::new(),
            ],
        }
    }

    pub fn slot(&self, role: AlarmRole) -> &AlarmSlot {
        &self.slots[role.index()]
    }
}

/// [`AlarmTimer`] that hands commands to the alarm tasks
pub struct SignalAlarmTimer {
    slots: &'static AlarmSlots,
    next_id: u32,
}

impl SignalAlarmTimer {
    pub const fn new(slots: &'static AlarmSlots) -> Self {
        Self { slots, next_id: 0 }
    }
}

impl AlarmTimer for SignalAlarmTimer {
    fn schedule_once(&mut self, role: AlarmRole, duration_ms: u32) -> Result<TimerId, TimerError> {
        // One task per role is spawned at boot, so there is nothing to run out of
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        let deadline = Instant::now() + Duration::from_millis(u64::from(duration_ms));
        self.slots.slot(role).signal(AlarmCommand::Arm { id, deadline });
        Ok(id)
    }

    fn cancel(&mut self, role: AlarmRole, id: TimerId) {
        self.slots.slot(role).signal(AlarmCommand::Cancel { id });
    }
}

/// Waits out the alarms of one role
pub struct AlarmRunner {
    role: AlarmRole,
    slot: &'static AlarmSlot,
    armed: Option<(TimerId, Instant)>,
}

impl AlarmRunner {
    pub fn new(role: AlarmRole, slots: &'static AlarmSlots) -> Self {
        Self {
            role,
            slot: slots.slot(role),
            armed: None,
        }
    }

    pub fn role(&self) -> AlarmRole {
        self.role
    }

    /// Wait until the armed alarm expires and return its id
    ///
    /// Commands received while waiting re-arm or cancel. An expiry that
    /// races a new command is dropped in favour of the command.
    pub async fn next_fire(&mut self) -> TimerId {
        loop {
            let Some((id, deadline)) = self.armed else {
                let command = self.slot.wait().await;
                self.apply(command);
                continue;
            };

            match select(self.slot.wait(), Timer::at(deadline)).await {
                Either::First(command) => self.apply(command),
                Either::Second(()) => {
                    if self.slot.signaled() {
                        continue;
                    }
                    self.armed = None;
                    return id;
                }
            }
        }
    }

    fn apply(&mut self, command: AlarmCommand) {
        self.armed = match command {
            AlarmCommand::Arm { id, deadline } => Some((id, deadline)),
            AlarmCommand::Cancel { .. } => None,
        };
    }
}
