//! State machine for the measurement cycle
//!
//! The transition table is pure: it maps a state and an event to the next
//! state. Entry actions and input polling live in the controller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
