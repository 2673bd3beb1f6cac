//! Pure placement geometry: caption bubbles, plain labels and cutout masks.

pub mod bubble;
pub mod cutout;
pub mod label;
