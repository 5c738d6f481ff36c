pub mod allocation;
pub mod fit_result;

pub use allocation::{MultiFitResult, SourceAllocation};
pub use fit_result::{FitResult, RejectReason, RejectedEntity};
