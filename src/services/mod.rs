//! Services for view-model construction and color quantization

pub mod palette;
pub mod scale;
pub mod view_model;

pub use palette::{interpolated_three, interpolated_two, scheme_colors, BUCKETS};
pub use scale::QuantileScale;
pub use view_model::{ViewModelBuilder, VALUES_ROLE};
