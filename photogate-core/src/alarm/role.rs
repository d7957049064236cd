//! Alarm roles and their completion actions

/// Opaque token handed out by the timer backend for one armed alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(pub u32);

/// What the interrupt side does when an alarm of a role expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Completion {
    /// Raise the fired flag for the poll loop
    RaiseFlag,
    /// Raise the fired flag and re-enable the button edge
    ///
    /// Runs regardless of controller state so a stuck poll loop can never
    /// leave the button locked out.
    RaiseFlagAndReleaseButton,
}

/// Alarm roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmRole {
    /// Partner sensor must trigger before this expires
    SensorTimeout,
    /// Sensors stay disabled after a measurement until this expires
    SensorReset,
    /// Reading stays on screen until this expires
    DisplayTimeout,
    /// Unit is persisted once this expires without another change
    UnitChangeTimeout,
    /// Button edge is locked out until this expires
    ButtonDebounce,
}

impl AlarmRole {
    /// Number of roles
    pub const COUNT: usize = 5;

    /// All roles in index order
    pub const ALL: [AlarmRole; Self::COUNT] = [
        AlarmRole::SensorTimeout,
        AlarmRole::SensorReset,
        AlarmRole::DisplayTimeout,
        AlarmRole::UnitChangeTimeout,
        AlarmRole::ButtonDebounce,
    ];

    /// Stable slot index, always below [`AlarmRole::COUNT`]
    pub const fn index(self) -> usize {
        match self {
            AlarmRole::SensorTimeout => 0,
            AlarmRole::SensorReset => 1,
            AlarmRole::DisplayTimeout => 2,
            AlarmRole::UnitChangeTimeout => 3,
            AlarmRole::ButtonDebounce => 4,
        }
    }

    /// Action performed from interrupt context when this alarm fires
    pub const fn completion(self) -> Completion {
        match self {
            AlarmRole::ButtonDebounce => Completion::RaiseFlagAndReleaseButton,
            _ => Completion::RaiseFlag,
        }
    }
}
