//! Sort engine: five in-place algorithms sharing one frame-emitting contract.
//!
//! Every algorithm takes the sequence by mutable slice, a [`FrameEmitter`]
//! that is called after each meaningful mutation, and a [`CancelToken`] that
//! is checked before every mutation that would produce a frame. A cancelled
//! run unwinds with `Err(Cancelled)` and leaves the slice as a permutation of
//! its input.
//!
//! [`FrameEmitter`]: ports::frame_emitter::FrameEmitter
//! [`CancelToken`]: crate::core::actions::cancellation::CancelToken

pub mod algorithms;
pub mod factory;
pub mod kinds;
pub mod ports;
#[cfg(test)]
pub(crate) mod test_support;
