pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
