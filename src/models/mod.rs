pub mod grading;
pub mod report;
pub mod submission;

pub use grading::{GradingRequest, GradingResult, Level, Tone};
pub use report::ReportInfo;
pub use submission::{DocumentFormat, Submission};
