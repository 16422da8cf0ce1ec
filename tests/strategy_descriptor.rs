#![cfg(feature = "test")]

// self
use oauth2_strategy_config::{
	_preludet::*,
	auth::{ClientId, ScopeSet, StrategyId},
	strategy::{
		AuthStrategyDescriptor, AuthStrategyDescriptorBuilder, CodeChallengeMethod,
		DescriptorError, GrantType, Issuer, RedirectPolicy, RefreshTokenPolicy, ResponseType,
		StrategyEndpoints, TokenPolicy,
	},
};

fn url(value: &str) -> Url {
	Url::parse(value).expect("Failed to parse endpoint fixture URL.")
}

fn builder(issuer: &str) -> AuthStrategyDescriptorBuilder {
	AuthStrategyDescriptor::builder(StrategyId::default())
		.issuer(Issuer::parse(issuer).expect("Issuer fixture should parse."))
		.client_id(ClientId::new("0oa-client").expect("Client fixture should be valid."))
}

#[test]
fn builder_defaults_to_authorization_code_with_pkce() {
	let descriptor = builder("https://dev-1.okta.com/oauth2/default")
		.build()
		.expect("Descriptor with defaults should build.");

	assert_eq!(descriptor.response_type, ResponseType::Code);
	assert_eq!(descriptor.grant_type, GrantType::AuthorizationCode);
	assert_eq!(descriptor.code_challenge_method, CodeChallengeMethod::S256);
	assert_eq!(descriptor.token, TokenPolicy::default());
	assert_eq!(descriptor.refresh_token, RefreshTokenPolicy::Disabled);
	assert_eq!(descriptor.scope.normalized(), "openid profile email");
	assert_eq!(descriptor.redirect, RedirectPolicy::default());
	assert_eq!(
		descriptor.endpoints.logout.as_str(),
		"https://dev-1.okta.com/oauth2/default/v1/logout"
	);
}

#[test]
fn builder_requires_issuer_and_client_id() {
	let err = AuthStrategyDescriptor::builder(StrategyId::default())
		.client_id(ClientId::new("abc").expect("Client fixture should be valid."))
		.build()
		.expect_err("Builder without issuer must fail.");

	assert_eq!(err, DescriptorError::MissingIssuer);

	let err = AuthStrategyDescriptor::builder(StrategyId::default())
		.issuer(Issuer::parse(TEST_ISSUER).expect("Issuer fixture should parse."))
		.build()
		.expect_err("Builder without client id must fail.");

	assert_eq!(err, DescriptorError::MissingClientId);
}

#[test]
fn endpoints_must_share_the_issuer() {
	let issuer = Issuer::parse(TEST_ISSUER).expect("Issuer fixture should parse.");
	let mut endpoints =
		StrategyEndpoints::from_issuer(&issuer).expect("Endpoints should derive from issuer.");

	endpoints.token = url("https://other.example.com/v1/token");

	let err = builder(TEST_ISSUER)
		.endpoints(endpoints)
		.build()
		.expect_err("Foreign token endpoint must be rejected.");

	assert!(matches!(err, DescriptorError::EndpointOutsideIssuer { endpoint: "token", .. }));
}

#[test]
fn non_redirect_grants_are_rejected() {
	for grant in [GrantType::ClientCredentials, GrantType::RefreshToken] {
		let err = builder(TEST_ISSUER)
			.grant_type(grant)
			.build()
			.expect_err("Only the authorization code grant can drive the strategy.");

		assert_eq!(err, DescriptorError::UnsupportedGrant { grant });
	}
}

#[test]
fn token_policies_are_validated() {
	let err = builder(TEST_ISSUER)
		.token(TokenPolicy { max_age: Duration::ZERO, ..TokenPolicy::default() })
		.build()
		.expect_err("Zero max age must be rejected.");

	assert_eq!(err, DescriptorError::NonPositiveMaxAge { token: "access" });

	let err = builder(TEST_ISSUER)
		.token(TokenPolicy { property: String::new(), ..TokenPolicy::default() })
		.build()
		.expect_err("Empty token property must be rejected.");

	assert_eq!(err, DescriptorError::EmptyTokenField { field: "property" });

	let err = builder(TEST_ISSUER)
		.refresh_token(RefreshTokenPolicy::Enabled {
			property: "refresh_token".into(),
			max_age: Duration::seconds(-1),
		})
		.build()
		.expect_err("Negative refresh max age must be rejected.");

	assert_eq!(err, DescriptorError::NonPositiveMaxAge { token: "refresh" });
}

#[test]
fn scope_overrides_must_not_be_empty() {
	let err = builder(TEST_ISSUER)
		.scope(ScopeSet::default())
		.build()
		.expect_err("Empty scope set must be rejected.");

	assert_eq!(err, DescriptorError::EmptyScope);

	let descriptor = builder(TEST_ISSUER)
		.scope(ScopeSet::new(["openid", "groups"]).expect("Scope override should be valid."))
		.build()
		.expect("Custom scopes should build.");

	assert!(descriptor.scope.contains("groups"));
}

#[test]
fn offline_refresh_adds_access_type_to_the_authorize_request() {
	let descriptor = builder(TEST_ISSUER)
		.refresh_token(RefreshTokenPolicy::offline_default())
		.build()
		.expect("Descriptor with offline refresh should build.");
	let authorize = descriptor.authorization_url(
		&url("https://app.example.com/auth"),
		"state",
		&CodeChallengeMethod::S256.derive_challenge("verifier"),
	);

	assert!(
		authorize.query_pairs().any(|(k, v)| k == "access_type" && v == "offline"),
		"Offline refresh should request access_type=offline."
	);
	assert!(descriptor.supports(GrantType::RefreshToken));
}
