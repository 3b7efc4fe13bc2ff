use crate::core::actions::cancellation::{CancelToken, Cancelled, checkpoint};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn kind(&self) -> SortAlgorithmKinds {
        SortAlgorithmKinds::Selection
    }

    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled> {
        selection_sort(values, emitter, cancel)
    }
}

/// One frame per position `i`, highlighting `i` and the minimum that was
/// swapped into it (the pair may be equal).
pub fn selection_sort<T: PartialOrd + Copy>(
    values: &mut [T],
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    let len = values.len();

    for i in 0..len {
        checkpoint(cancel)?;

        let mut min_index = i;
        for j in (i + 1)..len {
            // Strict: the first occurrence of the minimum wins.
            if values[j] < values[min_index] {
                min_index = j;
            }
        }

        values.swap(i, min_index);
        emitter.emit(values, Highlight::Pair(i, min_index));
    }

    Ok(())
}
