//! Ready-made documents built on the layout engine.

pub mod oxford;

pub use oxford::oxford;
