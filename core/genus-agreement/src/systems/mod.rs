pub mod anchors;
pub mod propagation;
