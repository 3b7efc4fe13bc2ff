pub mod frame_emitter;
pub mod sort_algorithm;
