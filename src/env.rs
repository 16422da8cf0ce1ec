//! Environment sources the resolver reads from.
//!
//! [`EnvSource`] abstracts over the process environment and in-memory maps so startup code and
//! tests share the same lookup rules: absent, empty, and whitespace-only values all count as
//! missing.

// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL of the identity provider; every endpoint is derived from it.
pub const OAUTH_ISSUER: &str = "OAUTH_ISSUER";
/// OAuth 2.0 client identifier.
pub const CLIENT_ID: &str = "CLIENT_ID";

/// Read-only key/value lookup used during resolution.
pub trait EnvSource {
	/// Returns the raw value for `key`, if set.
	fn var(&self, key: &str) -> Option<String>;

	/// Returns the value for `key`, failing with
	/// [`ConfigError::MissingConfiguration`] when it is absent or blank.
	fn required(&self, key: &'static str) -> Result<String, ConfigError> {
		match self.var(key) {
			Some(value) if !value.trim().is_empty() => Ok(value),
			_ => Err(ConfigError::MissingConfiguration { key }),
		}
	}
}
impl<S> EnvSource for &S
where
	S: ?Sized + EnvSource,
{
	fn var(&self, key: &str) -> Option<String> {
		(**self).var(key)
	}
}
impl EnvSource for HashMap<String, String> {
	fn var(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}
impl EnvSource for BTreeMap<String, String> {
	fn var(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}
impl EnvSource for [(&str, &str)] {
	fn var(&self, key: &str) -> Option<String> {
		self.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
	}
}
impl<const N: usize> EnvSource for [(&str, &str); N] {
	fn var(&self, key: &str) -> Option<String> {
		self.as_slice().var(key)
	}
}

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;
impl ProcessEnv {
	/// Loads `.env` from the working directory (or its parents) into the process environment,
	/// then returns the source. A missing file is not an error; variables that are already set
	/// win over the file.
	#[cfg(feature = "dotenv")]
	pub fn with_dotenv() -> Self {
		match dotenvy::dotenv() {
			Ok(_path) => {
				#[cfg(feature = "tracing")]
				tracing::debug!(path = %_path.display(), "loaded .env file");
			},
			Err(_e) => {
				#[cfg(feature = "tracing")]
				if !_e.not_found() {
					tracing::warn!(error = %_e, "failed to load .env file");
				}
			},
		}

		Self
	}
}
impl EnvSource for ProcessEnv {
	fn var(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}
