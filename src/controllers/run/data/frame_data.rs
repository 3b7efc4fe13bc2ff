use crate::core::data::frame::Frame;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub frame: Frame,
}
