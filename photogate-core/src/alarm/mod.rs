//! One-shot alarms
//!
//! Each timeout the speedometer uses has a fixed role. The poll loop arms and
//! cancels alarms through [`AlarmService`]; the timer backend reports expiry
//! through [`crate::input::SharedInputs::on_alarm_fired`], which raises the
//! role's flag in [`AlarmFlags`].

pub mod flags;
pub mod role;
pub mod service;

pub use flags::AlarmFlags;
pub use role::{AlarmRole, Completion, TimerId};
pub use service::AlarmService;
