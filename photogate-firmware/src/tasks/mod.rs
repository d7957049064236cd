//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! [`crate::channels`].

pub mod alarm;
pub mod button;
pub mod display;
pub mod sensor;
pub mod settings;
pub mod speedometer;

pub use alarm::alarm_task;
pub use button::button_task;
pub use display::display_task;
pub use sensor::sensor_task;
pub use settings::settings_task;
pub use speedometer::speedometer_task;
