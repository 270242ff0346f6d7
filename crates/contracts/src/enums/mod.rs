mod media_type;
mod progress_status;
mod sort_order;
mod statistics_view;

pub use media_type::MediaType;
pub use progress_status::ProgressStatus;
pub use sort_order::SortOrder;
pub use statistics_view::StatisticsView;
