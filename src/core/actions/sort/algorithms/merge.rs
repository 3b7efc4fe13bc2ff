use crate::core::actions::cancellation::{CancelToken, Cancelled, checkpoint};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn kind(&self) -> SortAlgorithmKinds {
        SortAlgorithmKinds::Merge
    }

    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled> {
        merge_sort(values, emitter, cancel)
    }
}

/// Top-down merge sort. One frame per merge, highlighting the whole merged
/// subrange `[left, right]`.
pub fn merge_sort<T: PartialOrd + Copy>(
    values: &mut [T],
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    if values.is_empty() {
        return Ok(());
    }

    let right = values.len() - 1;
    merge_sort_range(values, 0, right, emitter, cancel)
}

fn merge_sort_range<T: PartialOrd + Copy>(
    values: &mut [T],
    left: usize,
    right: usize,
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    checkpoint(cancel)?;

    if left >= right {
        return Ok(());
    }

    let middle = (left + right) / 2;
    merge_sort_range(values, left, middle, emitter, cancel)?;
    merge_sort_range(values, middle + 1, right, emitter, cancel)?;

    checkpoint(cancel)?;
    merge(values, left, middle, right);
    emitter.emit(values, Highlight::Range { start: left, end: right });

    Ok(())
}

/// Merges the sorted runs `[left, middle]` and `(middle, right]`.
fn merge<T: PartialOrd + Copy>(values: &mut [T], left: usize, middle: usize, right: usize) {
    let left_run = values[left..=middle].to_vec();
    let right_run = values[middle + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        // Left wins ties, which keeps the sort stable.
        if left_run[i] <= right_run[j] {
            values[k] = left_run[i];
            i += 1;
        } else {
            values[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        values[k] = value;
        k += 1;
    }
}
