//! WebAssembly bindings for the emulator.
//!
//! Exposes a JavaScript-callable wrapper around a flat-memory CPU so a page
//! can stage a program, single-step it and inspect registers.

pub mod api;

pub use api::Emulator;
