//! Optional observability helpers for descriptor resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run resolution inside a span named `oauth2_strategy.resolve` with the
//!   `strategy` field, and to log the resolved issuer or the failure.
//! - Enable `metrics` to increment the `oauth2_strategy_resolve_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Entry to the resolver.
	Attempt,
	/// A descriptor was produced.
	Success,
	/// Resolution failed; the process must not start serving.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Attempt => "attempt",
			ResolveOutcome::Success => "success",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
