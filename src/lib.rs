//! Environment-driven OAuth 2.0 strategy descriptors: resolve the issuer and client identifier
//! once at startup, validate the authorization-code + PKCE policy, and hand an immutable
//! descriptor to the middleware that runs the actual exchange.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod env;
pub mod error;
pub mod obs;
pub mod resolver;
pub mod strategy;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{resolver::AuthConfigResolver, strategy::AuthStrategyDescriptor};

	/// Issuer used by test fixtures.
	pub const TEST_ISSUER: &str = "https://idp.example.com";
	/// Client identifier used by test fixtures.
	pub const TEST_CLIENT_ID: &str = "abc123";

	/// Builds an in-memory environment from `(key, value)` pairs.
	pub fn test_env<'a, I>(pairs: I) -> HashMap<String, String>
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
	}

	/// Resolves a descriptor for [`TEST_ISSUER`] and [`TEST_CLIENT_ID`] with default policy.
	pub fn test_descriptor() -> AuthStrategyDescriptor {
		let env = test_env([
			(crate::env::OAUTH_ISSUER, TEST_ISSUER),
			(crate::env::CLIENT_ID, TEST_CLIENT_ID),
		]);

		AuthConfigResolver::default()
			.resolve(&env)
			.expect("Test environment should resolve into a descriptor.")
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::Result;
	#[cfg(test)] pub use crate::error::Error;
}

pub use url;
#[cfg(test)] use color_eyre as _;
