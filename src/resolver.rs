//! Startup resolution of the strategy descriptor from the environment.
//!
//! [`AuthConfigResolver::resolve`] reads `OAUTH_ISSUER` and `CLIENT_ID`, derives the four
//! protocol endpoints from the issuer, and pairs them with the fixed authorization-code + PKCE
//! policy. It performs no I/O besides the environment lookup. Call it before binding any
//! listener and abort on error; the resulting descriptor is shared read-only afterwards.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, StrategyId},
	env::{self, EnvSource},
	error::ConfigError,
	obs::{ResolveOutcome, ResolveSpan, record_resolve_outcome},
	strategy::{AuthStrategyDescriptor, Issuer, RedirectPolicy},
};

/// Descriptor handle injected into request handlers.
pub type SharedDescriptor = Arc<AuthStrategyDescriptor>;

/// Assembles [`AuthStrategyDescriptor`]s from environment variables and static policy.
#[derive(Clone, Debug, Default)]
pub struct AuthConfigResolver {
	/// Name the strategy is registered under (defaults to `okta`).
	pub strategy_id: StrategyId,
	/// Sign-in routes copied into every descriptor.
	pub redirect: RedirectPolicy,
	/// Rejects plain-HTTP issuers when set.
	pub require_https: bool,
}
impl AuthConfigResolver {
	/// Creates a resolver with the default strategy name and routes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the strategy name.
	pub fn with_strategy_id(mut self, id: StrategyId) -> Self {
		self.strategy_id = id;

		self
	}

	/// Overrides the sign-in routes.
	pub fn with_redirect_policy(mut self, redirect: RedirectPolicy) -> Self {
		self.redirect = redirect;

		self
	}

	/// Toggles the HTTPS requirement for the issuer.
	pub fn require_https(mut self, require: bool) -> Self {
		self.require_https = require;

		self
	}

	/// Resolves a descriptor from `env`.
	///
	/// Fails with [`ConfigError::MissingConfiguration`] when `OAUTH_ISSUER` or `CLIENT_ID` is
	/// absent or blank (checked in that order).
	pub fn resolve<E>(&self, env: &E) -> Result<AuthStrategyDescriptor>
	where
		E: ?Sized + EnvSource,
	{
		let _guard = ResolveSpan::new(&self.strategy_id).entered();

		record_resolve_outcome(ResolveOutcome::Attempt);

		match self.resolve_inner(env) {
			Ok(descriptor) => {
				record_resolve_outcome(ResolveOutcome::Success);

				#[cfg(feature = "tracing")]
				tracing::info!(
					issuer = %descriptor.issuer,
					client_id = %descriptor.client_id,
					scope = %descriptor.scope,
					scope_fingerprint = %descriptor.scope.fingerprint(),
					refresh_enabled = descriptor.refresh_token.is_enabled(),
					"resolved auth strategy"
				);

				Ok(descriptor)
			},
			Err(e) => {
				record_resolve_outcome(ResolveOutcome::Failure);

				#[cfg(feature = "tracing")]
				tracing::error!(error = %e, "failed to resolve auth strategy");

				Err(e)
			},
		}
	}

	/// Resolves a descriptor and wraps it for sharing across handlers.
	pub fn resolve_shared<E>(&self, env: &E) -> Result<SharedDescriptor>
	where
		E: ?Sized + EnvSource,
	{
		self.resolve(env).map(Arc::new)
	}

	/// Resolves from the process environment, loading `.env` first when the `dotenv` feature
	/// is enabled.
	pub fn resolve_from_process_env(&self) -> Result<AuthStrategyDescriptor> {
		#[cfg(feature = "dotenv")]
		let env = env::ProcessEnv::with_dotenv();
		#[cfg(not(feature = "dotenv"))]
		let env = env::ProcessEnv;

		self.resolve(&env)
	}

	fn resolve_inner<E>(&self, env: &E) -> Result<AuthStrategyDescriptor>
	where
		E: ?Sized + EnvSource,
	{
		let raw_issuer = env.required(env::OAUTH_ISSUER)?;
		let raw_client_id = env.required(env::CLIENT_ID)?;
		let issuer = Issuer::parse(&raw_issuer)?;

		if self.require_https && !issuer.is_https() {
			return Err(ConfigError::InsecureIssuer { value: raw_issuer }.into());
		}

		let client_id = ClientId::new(&raw_client_id).map_err(ConfigError::InvalidClientId)?;
		let descriptor = AuthStrategyDescriptor::builder(self.strategy_id.clone())
			.issuer(issuer)
			.client_id(client_id)
			.redirect(self.redirect.clone())
			.build()?;

		Ok(descriptor)
	}
}
