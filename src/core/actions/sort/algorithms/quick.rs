use crate::core::actions::cancellation::{CancelToken, Cancelled, checkpoint};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn kind(&self) -> SortAlgorithmKinds {
        SortAlgorithmKinds::Quick
    }

    fn sort(
        &self,
        values: &mut [u32],
        emitter: &mut dyn FrameEmitter,
        cancel: &dyn CancelToken,
    ) -> Result<(), Cancelled> {
        quick_sort(values, emitter, cancel)
    }
}

/// Quick sort with a Lomuto partition around the last element.
pub fn quick_sort<T: PartialOrd + Copy>(
    values: &mut [T],
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    if values.is_empty() {
        return Ok(());
    }

    let high = values.len() - 1;
    quick_sort_range(values, 0, high, emitter, cancel)
}

fn quick_sort_range<T: PartialOrd + Copy>(
    values: &mut [T],
    low: usize,
    high: usize,
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<(), Cancelled> {
    checkpoint(cancel)?;

    if low >= high {
        return Ok(());
    }

    let pivot_index = partition(values, low, high, emitter, cancel)?;

    if pivot_index > low {
        quick_sort_range(values, low, pivot_index - 1, emitter, cancel)?;
    }
    quick_sort_range(values, pivot_index + 1, high, emitter, cancel)
}

/// Moves every value `<= pivot` in front of the boundary, then drops the pivot
/// on the boundary. Each swap is a frame, self-swaps included.
fn partition<T: PartialOrd + Copy>(
    values: &mut [T],
    low: usize,
    high: usize,
    emitter: &mut dyn FrameEmitter<T>,
    cancel: &dyn CancelToken,
) -> Result<usize, Cancelled> {
    let pivot = values[high];
    let mut boundary = low;

    for j in low..high {
        if values[j] <= pivot {
            checkpoint(cancel)?;
            values.swap(boundary, j);
            emitter.emit(values, Highlight::Pair(boundary, j));
            boundary += 1;
        }
    }

    checkpoint(cancel)?;
    values.swap(boundary, high);
    emitter.emit(values, Highlight::Pair(boundary, high));

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::sort::test_support::{record, record_cancelled_after};

    #[test]
    fn two_values_take_a_single_pivot_swap() {
        let mut values = vec![3, 1];
        let emitter = record(&mut values, quick_sort);

        assert_eq!(values, vec![1, 3]);
        assert_eq!(emitter.frames.len(), 1);
        assert_eq!(emitter.frames[0].highlight, Highlight::Pair(0, 1));
        assert_eq!(emitter.frames[0].values, vec![1, 3]);
    }

    #[test]
    fn partition_emits_self_swaps_and_pivot_placement() {
        let mut values = vec![1, 2, 3];
        let emitter = record(&mut values, quick_sort);

        // Pivot 3: 1 and 2 swap with themselves, then the pivot lands on 2.
        // Pivot 2 on [0, 1]: 1 self-swaps, then the pivot lands on 1.
        assert_eq!(
            emitter.highlights(),
            vec![
                Highlight::Pair(0, 0),
                Highlight::Pair(1, 1),
                Highlight::Pair(2, 2),
                Highlight::Pair(0, 0),
                Highlight::Pair(1, 1),
            ]
        );
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn values_equal_to_pivot_go_left() {
        let mut values = vec![2, 1, 2];
        let emitter = record(&mut values, quick_sort);

        assert_eq!(emitter.frames[0].highlight, Highlight::Pair(0, 0));
        assert_eq!(emitter.frames[1].highlight, Highlight::Pair(1, 1));
        assert_eq!(emitter.frames[2].highlight, Highlight::Pair(2, 2));
        assert_eq!(values, vec![1, 2, 2]);
    }

    #[test]
    fn handles_all_equal_values() {
        let mut values = vec![7; 6];
        record(&mut values, quick_sort);

        assert_eq!(values, vec![7; 6]);
    }

    #[test]
    fn stops_after_cancellation_without_further_mutation() {
        let mut values = vec![4, 1, 3, 2];
        let (result, frames) = record_cancelled_after(&mut values, 1, quick_sort);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(frames.len(), 1);
        assert_eq!(values, vec![1, 4, 3, 2]);
    }
}
