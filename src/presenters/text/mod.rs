pub mod presenter;

pub use presenter::{DEFAULT_TEXT_HEIGHT, TextPresenter, render_text};
