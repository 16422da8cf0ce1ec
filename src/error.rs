//! Crate-level error types shared by the resolver, descriptor builder, and redirect policy.

// self
use crate::{
	_prelude::*,
	auth::IdentifierError,
	strategy::{DescriptorError, RedirectPolicyError},
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Environment-sourced configuration is missing or malformed.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Assembled descriptor violates one of its invariants.
	#[error(transparent)]
	Descriptor(#[from] DescriptorError),
	/// Redirect routes are malformed.
	#[error(transparent)]
	Redirect(#[from] RedirectPolicyError),
	/// Descriptor could not be rendered for the middleware.
	#[error("Middleware options could not be serialized.")]
	Serialize(#[from] serde_json::Error),
}
impl Error {
	/// Returns the environment key when the error is [`ConfigError::MissingConfiguration`].
	pub fn missing_key(&self) -> Option<&'static str> {
		match self {
			Error::Config(ConfigError::MissingConfiguration { key }) => Some(*key),
			_ => None,
		}
	}
}

/// Startup configuration failures. All of them are fatal: the process must not serve traffic
/// without a resolved descriptor.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// A required environment variable is absent or empty.
	#[error("Missing required configuration value `{key}`.")]
	MissingConfiguration {
		/// Environment key that was not set.
		key: &'static str,
	},
	/// The issuer cannot serve as the root for endpoint suffixes.
	#[error("Issuer `{value}` is invalid: {reason}.")]
	InvalidIssuer {
		/// Raw issuer value read from the environment.
		value: String,
		/// Human-readable rejection reason.
		reason: String,
	},
	/// The issuer uses plain HTTP while HTTPS is required.
	#[error("Issuer `{value}` must use HTTPS.")]
	InsecureIssuer {
		/// Raw issuer value read from the environment.
		value: String,
	},
	/// The client identifier failed validation.
	#[error("Client identifier is invalid.")]
	InvalidClientId(#[source] IdentifierError),
}
impl ConfigError {
	pub(crate) fn invalid_issuer(value: impl Into<String>, reason: impl Display) -> Self {
		Self::InvalidIssuer { value: value.into(), reason: reason.to_string() }
	}
}
