#![cfg_attr(not(test), no_std)]

//! Slide presentation controller: navigation state machine, input
//! arbitration, display projection, and modal overlay.
//!
//! The crate performs no I/O. Hosts feed input events and a monotonic
//! millisecond clock in, and read a [`render::Screen`] plus queued
//! [`app::HostRequest`]s back out.

pub mod app;
pub mod deck;
pub mod display;
pub mod input;
pub mod render;
pub mod settings;
pub mod timers;
