// self
use crate::_prelude::*;

/// How the middleware reads, presents, and ages out the access token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPolicy {
	/// Token endpoint response field holding the access token.
	pub property: String,
	/// Authorization header scheme.
	pub token_type: String,
	/// Session lifetime counted from issuance.
	pub max_age: Duration,
}
impl TokenPolicy {
	/// Default response field.
	pub const PROPERTY: &'static str = "access_token";
	/// Default header scheme.
	pub const TOKEN_TYPE: &'static str = "Bearer";
	/// Default lifetime: 30 minutes.
	pub const MAX_AGE: Duration = Duration::seconds(1800);
}
impl Default for TokenPolicy {
	fn default() -> Self {
		Self {
			property: Self::PROPERTY.into(),
			token_type: Self::TOKEN_TYPE.into(),
			max_age: Self::MAX_AGE,
		}
	}
}

/// Refresh-token handling.
///
/// The resolver always produces [`RefreshTokenPolicy::Disabled`]: sessions end after
/// [`TokenPolicy::max_age`] and the user signs in again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RefreshTokenPolicy {
	/// No refresh token is requested or stored.
	#[default]
	Disabled,
	/// Refresh tokens are requested with `access_type=offline` and kept for `max_age`.
	Enabled {
		/// Token endpoint response field holding the refresh token.
		property: String,
		/// Lifetime of the refresh token.
		max_age: Duration,
	},
}
impl RefreshTokenPolicy {
	/// Offline-access settings: `refresh_token` kept for 30 days.
	pub fn offline_default() -> Self {
		Self::Enabled { property: "refresh_token".into(), max_age: Duration::days(30) }
	}

	/// Returns true when refresh tokens are in use.
	pub fn is_enabled(&self) -> bool {
		matches!(self, Self::Enabled { .. })
	}
}
