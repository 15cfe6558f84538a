//! Core types for flipbook.
//!
//! Everything here is independent of any engine or UI framework. Hosts supply two things on each
//! update: the time elapsed since the previous update, and the number (or list) of frames. In
//! return they learn which single frame should be visible. All important types are re-exported by
//! the `flipbook` crate.

pub mod flipbook;
pub mod naming;
pub mod random;
pub mod sequencer;
pub mod timing;
pub mod visibility;
