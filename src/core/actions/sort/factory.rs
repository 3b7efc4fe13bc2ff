use crate::core::actions::sort::algorithms::{
    bubble::BubbleSort, insertion::InsertionSort, merge::MergeSort, quick::QuickSort,
    selection::SelectionSort,
};
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;

#[must_use]
pub fn sort_algorithm_factory(kind: SortAlgorithmKinds) -> Box<dyn SortAlgorithm> {
    match kind {
        SortAlgorithmKinds::Selection => Box::new(SelectionSort),
        SortAlgorithmKinds::Bubble => Box::new(BubbleSort),
        SortAlgorithmKinds::Insertion => Box::new(InsertionSort),
        SortAlgorithmKinds::Merge => Box::new(MergeSort),
        SortAlgorithmKinds::Quick => Box::new(QuickSort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in SortAlgorithmKinds::ALL {
            let algorithm = sort_algorithm_factory(kind);
            assert_eq!(algorithm.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in SortAlgorithmKinds::ALL {
            let algorithm = sort_algorithm_factory(kind);
            assert_eq!(algorithm.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = SortAlgorithmKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
