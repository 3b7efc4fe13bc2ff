use crate::controllers::run::data::frame_data::FrameData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    Frame(FrameData),
    Finished {
        generation: u64,
        outcome: RunOutcome,
        frames: u64,
    },
    Cleared,
}
