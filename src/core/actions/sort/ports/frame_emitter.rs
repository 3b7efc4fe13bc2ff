use crate::core::data::highlight::Highlight;

/// Receives the full sequence state after each meaningful mutation.
///
/// Called synchronously from the sorting loop; an implementation may block
/// to pace an animation.
pub trait FrameEmitter<T = u32> {
    fn emit(&mut self, values: &[T], highlight: Highlight);
}

impl<T, F> FrameEmitter<T> for F
where
    F: FnMut(&[T], Highlight),
{
    #[inline]
    fn emit(&mut self, values: &[T], highlight: Highlight) {
        self(values, highlight);
    }
}
