//! Built-in widgets

mod number_picker;
pub(crate) mod text_core;

pub use number_picker::{NumberPicker, SubElements};
