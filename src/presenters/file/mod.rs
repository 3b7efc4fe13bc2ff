pub mod ppm;

pub use ppm::{PpmFilePresenter, PpmFrameSequencePresenter};
