//! Value types shared by the job sources, the engine and the reporters.
mod job;
mod method;
mod outcome;
mod threshold;


pub use job::{Job, JobRef};
pub use method::HttpMethod;
pub use outcome::{Outcome, Verdict};
pub use threshold::{DEFAULT_THRESHOLD, Threshold, classify};
