//! RP2040-specific HAL for the speedometer firmware
//!
//! This crate provides RP2040 implementations of the `photogate-hal` and
//! `photogate-core` hardware traits:
//!
//! - Flash storage driver (implements `photogate_hal::FlashStorage`)
//! - Monotonic microsecond clock on the embassy time driver
//! - One-shot alarm timer backed by one embassy task per alarm role

#![no_std]

pub mod alarm;
pub mod clock;
pub mod flash;

// Re-export shared traits from photogate-hal for convenience
pub use photogate_hal::{FlashStorage as FlashStorageTrait, StorageKey};
