pub mod frequency;
pub mod result;
pub mod severity;
