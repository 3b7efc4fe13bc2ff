//! Input adapters for the sorting visualizer.
//!
//! Translate user input into run controller calls.

pub mod gui;
