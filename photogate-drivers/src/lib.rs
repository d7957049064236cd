//! Hardware driver implementations
//!
//! This crate provides the device drivers behind the speedometer's
//! outputs:
//!
//! - SSD1306 128x64 OLED over async I2C, as an `embedded-graphics` target
//! - Speed readout layout (value, title and unit label)
//! - Sensor indicator LEDs

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
