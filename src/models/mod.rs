pub mod report;
pub mod subject;

pub use report::{ReportCard, SubmissionPayload};
pub use subject::{parse_mark, ScoredSubject, SubjectEntry, SubjectField};
