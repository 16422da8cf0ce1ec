// self
use crate::{_prelude::*, auth::StrategyId};

/// Span wrapping a single descriptor resolution.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the strategy being resolved.
	pub fn new(strategy: &StrategyId) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_strategy.resolve", strategy = %strategy);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = strategy;

			Self {}
		}
	}

	/// Enters the span for the rest of the current scope.
	pub fn entered(self) -> ResolveSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ResolveSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ResolveSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ResolveSpan::entered`].
pub struct ResolveSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ResolveSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ResolveSpanGuard(..)")
	}
}
