use crate::core::actions::cancellation::{CancelToken, Cancelled, checkpoint};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn kind(&self) -> SortAlgorithmKinds {
        SortAlgorithmKinds::Bubble
    }

    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled> {
        bubble_sort(values, emitter, cancel)
    }
}

/// Number of frames a bubble sort of `len` values emits.
#[must_use]
pub fn bubble_sort_frame_count(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

/// `len - 1` passes over adjacent pairs; every compared pair is a frame,
/// swapped or not.
pub fn bubble_sort<T: PartialOrd + Copy>(
    values: &mut [T],
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    let len = values.len();

    for pass in 0..len.saturating_sub(1) {
        for j in 0..(len - 1 - pass) {
            checkpoint(cancel)?;

            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }

            emitter.emit(values, Highlight::Pair(j, j + 1));
        }
    }

    Ok(())
}
