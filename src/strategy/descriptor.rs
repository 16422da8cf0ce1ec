//! Strategy descriptor data structures handed to the auth middleware.
//!
//! A descriptor is assembled once at startup (usually by
//! [`AuthConfigResolver`](crate::resolver::AuthConfigResolver)), validated by its builder, and
//! shared read-only for the process lifetime.

/// Builder API for assembling strategy descriptors.
pub mod builder;
/// Grant, response type, and PKCE method helpers.
pub mod grant;
/// Access and refresh token policies.
pub mod token;

pub use builder::*;
pub use grant::*;
pub use token::*;

// self
use crate::{
	_prelude::*,
	auth::{ClientId, ScopeSet, StrategyId},
	strategy::{Issuer, RedirectPolicy},
};

/// Endpoint set derived from the issuer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyEndpoints {
	/// Authorization endpoint the browser is redirected to.
	pub authorization: Url,
	/// Token endpoint used for the code exchange.
	pub token: Url,
	/// Userinfo endpoint queried after sign-in.
	pub user_info: Url,
	/// Logout endpoint that ends the provider session.
	pub logout: Url,
}
impl StrategyEndpoints {
	/// Authorization endpoint suffix.
	pub const AUTHORIZATION_PATH: &'static str = "/v1/authorize";
	/// Token endpoint suffix.
	pub const TOKEN_PATH: &'static str = "/v1/token";
	/// Userinfo endpoint suffix.
	pub const USER_INFO_PATH: &'static str = "/v1/userinfo";
	/// Logout endpoint suffix.
	pub const LOGOUT_PATH: &'static str = "/v1/logout";

	/// Derives all four endpoints by appending the fixed suffixes to the issuer.
	pub fn from_issuer(issuer: &Issuer) -> Result<Self, DescriptorError> {
		let join = |endpoint: &'static str, suffix: &str| {
			issuer.join_literal(suffix).map_err(|e| DescriptorError::InvalidEndpoint {
				endpoint,
				reason: e.to_string(),
			})
		};

		Ok(Self {
			authorization: join("authorization", Self::AUTHORIZATION_PATH)?,
			token: join("token", Self::TOKEN_PATH)?,
			user_info: join("user_info", Self::USER_INFO_PATH)?,
			logout: join("logout", Self::LOGOUT_PATH)?,
		})
	}

	/// Iterates `(name, url)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Url)> {
		[
			("authorization", &self.authorization),
			("token", &self.token),
			("user_info", &self.user_info),
			("logout", &self.logout),
		]
		.into_iter()
	}
}

/// Immutable authorization-code + PKCE strategy descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthStrategyDescriptor {
	/// Name the strategy is registered under.
	pub id: StrategyId,
	/// Identity provider base URL.
	pub issuer: Issuer,
	/// Protocol endpoints derived from the issuer.
	pub endpoints: StrategyEndpoints,
	/// OAuth 2.0 client identifier.
	pub client_id: ClientId,
	/// Access token policy.
	pub token: TokenPolicy,
	/// Refresh token policy.
	pub refresh_token: RefreshTokenPolicy,
	/// `response_type` sent to the authorization endpoint.
	pub response_type: ResponseType,
	/// `grant_type` sent to the token endpoint.
	pub grant_type: GrantType,
	/// Requested scopes, in request order.
	pub scope: ScopeSet,
	/// PKCE challenge method.
	pub code_challenge_method: CodeChallengeMethod,
	/// Application routes used around sign-in.
	pub redirect: RedirectPolicy,
}
impl AuthStrategyDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: StrategyId) -> AuthStrategyDescriptorBuilder {
		AuthStrategyDescriptorBuilder::new(id)
	}

	/// Checks whether the middleware may use the given grant with this descriptor.
	pub fn supports(&self, grant: GrantType) -> bool {
		match grant {
			GrantType::RefreshToken => self.refresh_token.is_enabled(),
			grant => grant == self.grant_type,
		}
	}

	/// Instant at which an access token issued at `issued_at` stops being accepted.
	pub fn session_expires_at(&self, issued_at: OffsetDateTime) -> OffsetDateTime {
		issued_at + self.token.max_age
	}

	/// Returns true when a session started at `issued_at` can no longer be continued and the
	/// user must go through the authorization redirect again.
	pub fn requires_reauthentication(
		&self,
		issued_at: OffsetDateTime,
		now: OffsetDateTime,
	) -> bool {
		let deadline = match &self.refresh_token {
			RefreshTokenPolicy::Disabled => self.session_expires_at(issued_at),
			RefreshTokenPolicy::Enabled { max_age, .. } => issued_at + *max_age,
		};

		now >= deadline
	}

	/// Builds the authorization endpoint URL for one sign-in attempt.
	///
	/// `state` and `code_challenge` come from the middleware, which owns their generation and
	/// storage; this only projects the descriptor's fields into query parameters.
	pub fn authorization_url(&self, redirect_uri: &Url, state: &str, code_challenge: &str) -> Url {
		let mut url = self.endpoints.authorization.clone();
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("response_type", self.response_type.as_str());
		pairs.append_pair("client_id", &self.client_id);
		pairs.append_pair("redirect_uri", redirect_uri.as_str());

		if !self.scope.is_empty() {
			pairs.append_pair("scope", &self.scope.normalized());
		}
		if self.refresh_token.is_enabled() {
			pairs.append_pair("access_type", "offline");
		}

		pairs.append_pair("state", state);
		pairs.append_pair("code_challenge", code_challenge);
		pairs.append_pair("code_challenge_method", self.code_challenge_method.as_str());

		drop(pairs);

		url
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn descriptor(refresh: RefreshTokenPolicy) -> AuthStrategyDescriptor {
		AuthStrategyDescriptor::builder(StrategyId::default())
			.issuer(Issuer::parse("https://idp.example.com").expect("Issuer fixture should parse."))
			.client_id(ClientId::new("abc123").expect("Client fixture should be valid."))
			.refresh_token(refresh)
			.build()
			.expect("Descriptor fixture should build.")
	}

	#[test]
	fn endpoints_append_fixed_suffixes() {
		let issuer =
			Issuer::parse("https://idp.example.com/oauth2/default").expect("Issuer should parse.");
		let endpoints = StrategyEndpoints::from_issuer(&issuer).expect("Endpoints should derive.");
		let rendered: Vec<_> = endpoints.iter().map(|(name, url)| (name, url.as_str())).collect();

		assert_eq!(
			rendered,
			vec![
				("authorization", "https://idp.example.com/oauth2/default/v1/authorize"),
				("token", "https://idp.example.com/oauth2/default/v1/token"),
				("user_info", "https://idp.example.com/oauth2/default/v1/userinfo"),
				("logout", "https://idp.example.com/oauth2/default/v1/logout"),
			]
		);
	}

	#[test]
	fn sessions_expire_after_max_age_without_refresh() {
		let descriptor = descriptor(RefreshTokenPolicy::Disabled);
		let issued_at = time::macros::datetime!(2024-01-01 12:00 UTC);

		assert_eq!(
			descriptor.session_expires_at(issued_at),
			time::macros::datetime!(2024-01-01 12:30 UTC)
		);
		assert!(
			!descriptor.requires_reauthentication(issued_at, issued_at + Duration::seconds(1799))
		);
		assert!(descriptor.requires_reauthentication(issued_at, issued_at + Duration::seconds(1800)));
		assert!(!descriptor.supports(GrantType::RefreshToken));
		assert!(descriptor.supports(GrantType::AuthorizationCode));
	}

	#[test]
	fn refresh_extends_the_session_when_enabled() {
		let descriptor = descriptor(RefreshTokenPolicy::offline_default());
		let issued_at = time::macros::datetime!(2024-01-01 12:00 UTC);

		assert!(!descriptor.requires_reauthentication(issued_at, issued_at + Duration::hours(2)));
		assert!(descriptor.requires_reauthentication(issued_at, issued_at + Duration::days(30)));
		assert!(descriptor.supports(GrantType::RefreshToken));
	}

	#[test]
	fn authorization_url_carries_pkce_and_scope() {
		let descriptor = descriptor(RefreshTokenPolicy::Disabled);
		let redirect_uri =
			Url::parse("https://app.example.com/auth").expect("Redirect fixture should parse.");
		let url = descriptor.authorization_url(&redirect_uri, "state-1", "challenge-1");
		let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();

		assert!(url.as_str().starts_with("https://idp.example.com/v1/authorize?"));
		assert_eq!(pairs.get("response_type"), Some(&"code".into()));
		assert_eq!(pairs.get("client_id"), Some(&"abc123".into()));
		assert_eq!(pairs.get("redirect_uri"), Some(&"https://app.example.com/auth".into()));
		assert_eq!(pairs.get("scope"), Some(&"openid profile email".into()));
		assert_eq!(pairs.get("state"), Some(&"state-1".into()));
		assert_eq!(pairs.get("code_challenge"), Some(&"challenge-1".into()));
		assert_eq!(pairs.get("code_challenge_method"), Some(&"S256".into()));
		assert!(!pairs.contains_key("access_type"));
	}
}
