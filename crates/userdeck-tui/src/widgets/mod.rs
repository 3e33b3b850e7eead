pub mod detail_overlay;

pub use detail_overlay::DetailOverlay;
