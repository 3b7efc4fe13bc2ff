use crate::core::actions::cancellation::{CancelToken, Cancelled, checkpoint};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn kind(&self) -> SortAlgorithmKinds {
        SortAlgorithmKinds::Insertion
    }

    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled> {
        insertion_sort(values, emitter, cancel)
    }
}

/// Shift-based insertion. One frame per placed element, highlighting the
/// index it came from and the index it landed on.
///
/// Shifting and placing one element is a single step: the cancel token is
/// only checked between elements so a cancelled run never drops the held key.
pub fn insertion_sort<T: PartialOrd + Copy>(
    values: &mut [T],
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    for i in 1..values.len() {
        checkpoint(cancel)?;

        let key = values[i];
        let mut j = i;

        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }

        values[j] = key;
        emitter.emit(values, Highlight::Pair(i, j));
    }

    Ok(())
}
