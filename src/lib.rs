#![cfg_attr(not(test), no_std)]

//! plant_reminder - Plant watering reminder for EEPROM-backed microcontrollers
//!
//! This library provides the persistent plant registry, watering status
//! formatting and indicator polling. The web UI and time synchronization live
//! in the application and talk to the registry through plain values.

// Platform abstraction layer (EEPROM, GPIO)
pub mod platform;

// Core systems (plant registry, logging, time)
pub mod core;

// Build-time configuration
pub mod parameters;
