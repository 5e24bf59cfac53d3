pub mod data_set;
pub mod date_format;
pub mod math;
pub mod types;
pub mod windowing;

pub use data_set::{DataSet, MIN_COLUMN_LEN, Series};
pub use date_format::format_date;
pub use math::{
    PixelPoint, compute_boundaries, compute_x_ratio, compute_y_ratio, is_mouse_over, to_coords,
    widen_flat_bounds,
};
pub use types::{HoverState, SeriesKind, Viewport};
pub use windowing::{IndexRange, SelectionWindow, SeriesPartition, SeriesSlice, visible_columns};
