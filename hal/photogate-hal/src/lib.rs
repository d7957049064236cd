//! Photogate Hardware Abstraction Layer
//!
//! Traits implemented by chip-specific HALs so the firmware does not
//! depend on one particular chip for persistence.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (photogate-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  photogate-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  photogate-hal-rp2040                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Digital I/O and I2C use the `embedded-hal` traits directly.

#![no_std]
#![deny(unsafe_code)]

pub mod flash;

pub use flash::{FlashError, FlashStorage, StorageKey};
