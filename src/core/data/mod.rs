pub mod colour;
pub mod frame;
pub mod highlight;
pub mod pixel_buffer;
pub mod value_range;
