pub mod cancellation;
pub mod generate_sequence;
pub mod render_frame;
pub mod sort;
