use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;

pub trait SortAlgorithm: Send + Sync {
    fn kind(&self) -> SortAlgorithmKinds;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Sorts `values` in place, emitting a frame after each meaningful step.
    ///
    /// Returns `Err(Cancelled)` as soon as `cancel` fires; `values` is then
    /// left as a partially sorted permutation of the input.
    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled>;
}
