use std::fmt;

use serde::{Deserialize, Serialize};

/// Granularity of the media consumption statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticsView {
    Yearly,
    Monthly,
}

impl StatisticsView {
    /// Wire label, as the `view` query parameter expects it
    pub fn label(&self) -> &'static str {
        match self {
            StatisticsView::Yearly => "Yearly",
            StatisticsView::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for StatisticsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
