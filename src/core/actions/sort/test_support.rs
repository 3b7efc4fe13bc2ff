//! Shared helpers for sort engine tests.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::sort::ports::frame_emitter::FrameEmitter;
use crate::core::data::highlight::Highlight;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame<T> {
    pub values: Vec<T>,
    pub highlight: Highlight,
}

/// Emitter that keeps every frame it sees.
#[derive(Debug)]
pub struct RecordingEmitter<T> {
    pub frames: Vec<RecordedFrame<T>>,
}

impl<T> Default for RecordingEmitter<T> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<T: Clone> FrameEmitter<T> for RecordingEmitter<T> {
    fn emit(&mut self, values: &[T], highlight: Highlight) {
        self.frames.push(RecordedFrame {
            values: values.to_vec(),
            highlight,
        });
    }
}

impl<T> RecordingEmitter<T> {
    pub fn highlights(&self) -> Vec<Highlight> {
        self.frames.iter().map(|f| f.highlight).collect()
    }
}

/// Value compared by `key` only, so tests can observe stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyed {
    pub key: u32,
    pub tag: usize,
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

pub fn keyed(keys: &[u32]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Keyed { key, tag })
        .collect()
}

/// Runs `sort` uncancelled and returns the recorded frames.
pub fn record<T, S>(values: &mut [T], sort: S) -> RecordingEmitter<T>
where
    T: Clone,
    S: FnOnce(&mut [T], &mut dyn FrameEmitter<T>, &dyn CancelToken) -> Result<(), Cancelled>,
{
    let mut emitter = RecordingEmitter::default();
    sort(values, &mut emitter, &NeverCancel).expect("never cancelled");
    emitter
}

/// Runs `sort`, raising the cancel flag from inside the `cancel_after`-th emission.
pub fn record_cancelled_after<S>(
    values: &mut [u32],
    cancel_after: usize,
    sort: S,
) -> (Result<(), Cancelled>, Vec<RecordedFrame<u32>>)
where
    S: FnOnce(&mut [u32], &mut dyn FrameEmitter<u32>, &dyn CancelToken) -> Result<(), Cancelled>,
{
    let flag = AtomicBool::new(false);
    let mut frames = Vec::new();

    let result = {
        let mut emitter = |values: &[u32], highlight: Highlight| {
            assert!(
                !flag.load(Ordering::Acquire),
                "frame emitted after cancellation"
            );
            frames.push(RecordedFrame {
                values: values.to_vec(),
                highlight,
            });
            if frames.len() == cancel_after {
                flag.store(true, Ordering::Release);
            }
        };
        let cancel = || flag.load(Ordering::Acquire);
        sort(values, &mut emitter, &cancel)
    };

    (result, frames)
}

pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_permutation(a: &[u32], b: &[u32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
