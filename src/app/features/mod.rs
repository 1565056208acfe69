pub mod navigation;
pub mod palette;
