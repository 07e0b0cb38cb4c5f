pub mod extractor;
pub mod report;
pub mod statistics;

pub use extractor::{
    build_label_map, derive_label, extract_from_directory, extract_labels, is_hidden,
    LabelExtraction, LabelMap,
};
pub use report::LabelReport;
pub use statistics::LabelStatistics;
