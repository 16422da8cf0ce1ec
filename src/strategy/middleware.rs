//! Serializable options in the shape auth middlewares expect.
//!
//! The layout mirrors the usual `auth` module block: a `strategies` map keyed by strategy
//! name with an `oauth2` scheme entry each, plus the shared `redirect` routes. Field names
//! are camelCase on the wire.

// self
use crate::{
	_prelude::*,
	strategy::{AuthStrategyDescriptor, RedirectPolicy, RefreshTokenPolicy},
};

/// Top-level options consumed by the auth middleware.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareOptions {
	/// Strategies keyed by registration name.
	pub strategies: BTreeMap<String, StrategyOptions>,
	/// Sign-in routes.
	pub redirect: RedirectOptions,
}
impl MiddlewareOptions {
	/// Renders the options as pretty-printed JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// A single OAuth 2.0 strategy entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyOptions {
	/// Always `oauth2`.
	pub scheme: String,
	/// Protocol endpoints.
	pub endpoints: EndpointOptions,
	/// Access token handling.
	pub token: TokenOptions,
	/// Refresh token handling; omitted while refresh is disabled.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<TokenOptions>,
	/// `offline` when refresh tokens are requested.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_type: Option<String>,
	/// `response_type` sent to the authorization endpoint.
	pub response_type: String,
	/// `grant_type` sent to the token endpoint.
	pub grant_type: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Requested scopes, in order.
	pub scope: Vec<String>,
	/// PKCE challenge method.
	pub code_challenge_method: String,
}

/// Endpoint URLs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOptions {
	/// Authorization endpoint.
	pub authorization: String,
	/// Token endpoint.
	pub token: String,
	/// Userinfo endpoint.
	pub user_info: String,
	/// Logout endpoint.
	pub logout: String,
}

/// Token field, header scheme, and lifetime in seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOptions {
	/// Token endpoint response field.
	pub property: String,
	/// Header scheme; absent for refresh tokens.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub token_type: Option<String>,
	/// Lifetime in seconds.
	pub max_age: i64,
}

/// Sign-in routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectOptions {
	/// Login route.
	pub login: String,
	/// Callback route.
	pub callback: String,
	/// Home route.
	pub home: String,
}
impl From<&RedirectPolicy> for RedirectOptions {
	fn from(policy: &RedirectPolicy) -> Self {
		Self {
			login: policy.login().into(),
			callback: policy.callback().into(),
			home: policy.home().into(),
		}
	}
}

impl From<&AuthStrategyDescriptor> for StrategyOptions {
	fn from(descriptor: &AuthStrategyDescriptor) -> Self {
		let endpoints = &descriptor.endpoints;
		let (refresh_token, access_type) = match &descriptor.refresh_token {
			RefreshTokenPolicy::Disabled => (None, None),
			RefreshTokenPolicy::Enabled { property, max_age } => (
				Some(TokenOptions {
					property: property.clone(),
					token_type: None,
					max_age: max_age.whole_seconds(),
				}),
				Some("offline".to_owned()),
			),
		};

		Self {
			scheme: "oauth2".into(),
			endpoints: EndpointOptions {
				authorization: endpoints.authorization.to_string(),
				token: endpoints.token.to_string(),
				user_info: endpoints.user_info.to_string(),
				logout: endpoints.logout.to_string(),
			},
			token: TokenOptions {
				property: descriptor.token.property.clone(),
				token_type: Some(descriptor.token.token_type.clone()),
				max_age: descriptor.token.max_age.whole_seconds(),
			},
			refresh_token,
			access_type,
			response_type: descriptor.response_type.as_str().into(),
			grant_type: descriptor.grant_type.as_str().into(),
			client_id: descriptor.client_id.to_string(),
			scope: descriptor.scope.iter().map(str::to_owned).collect(),
			code_challenge_method: descriptor.code_challenge_method.as_str().into(),
		}
	}
}

impl AuthStrategyDescriptor {
	/// Projects the descriptor into middleware options with a single strategy entry.
	pub fn middleware_options(&self) -> MiddlewareOptions {
		MiddlewareOptions {
			strategies: BTreeMap::from([(self.id.to_string(), StrategyOptions::from(self))]),
			redirect: RedirectOptions::from(&self.redirect),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::test_descriptor;

	#[test]
	fn options_mirror_the_strategy_block() {
		let options = test_descriptor().middleware_options();
		let value = serde_json::to_value(&options).expect("Options should serialize.");
		let okta = &value["strategies"]["okta"];

		assert_eq!(okta["scheme"], "oauth2");
		assert_eq!(okta["endpoints"]["userInfo"], "https://idp.example.com/v1/userinfo");
		assert_eq!(okta["token"]["type"], "Bearer");
		assert_eq!(okta["token"]["maxAge"], 1800);
		assert_eq!(okta["responseType"], "code");
		assert_eq!(okta["grantType"], "authorization_code");
		assert_eq!(okta["clientId"], "abc123");
		assert_eq!(okta["scope"], serde_json::json!(["openid", "profile", "email"]));
		assert_eq!(okta["codeChallengeMethod"], "S256");
		assert!(okta.get("refreshToken").is_none());
		assert!(okta.get("accessType").is_none());
		assert_eq!(
			value["redirect"],
			serde_json::json!({ "login": "/login", "callback": "/auth", "home": "/" })
		);
	}

	#[test]
	fn json_round_trips_through_serde() {
		let options = test_descriptor().middleware_options();
		let json = options.to_json().expect("Options should render as JSON.");
		let back: MiddlewareOptions = serde_json::from_str(&json).expect("JSON should parse back.");

		assert_eq!(back, options);
	}
}
