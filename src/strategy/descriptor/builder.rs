// self
use crate::{
	_prelude::*,
	auth::{ClientId, ScopeSet, StrategyId},
	strategy::{
		AuthStrategyDescriptor, CodeChallengeMethod, GrantType, Issuer, RedirectPolicy,
		RefreshTokenPolicy, StrategyEndpoints, TokenPolicy,
	},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DescriptorError {
	/// Every endpoint derives from the issuer, so it is required.
	#[error("Missing issuer.")]
	MissingIssuer,
	/// The middleware cannot authenticate without a client identifier.
	#[error("Missing client identifier.")]
	MissingClientId,
	/// An endpoint could not be formed from the issuer.
	#[error("The {endpoint} endpoint is invalid: {reason}.")]
	InvalidEndpoint {
		/// Which endpoint failed.
		endpoint: &'static str,
		/// Parser message.
		reason: String,
	},
	/// All endpoints must live under the same issuer.
	#[error("The {endpoint} endpoint {url} is not under the issuer {issuer}.")]
	EndpointOutsideIssuer {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
		/// Issuer the endpoint was checked against.
		issuer: String,
	},
	/// Strategies start with a browser redirect, which only the authorization code grant has.
	#[error("The {grant} grant cannot drive a redirect-based strategy.")]
	UnsupportedGrant {
		/// Rejected grant.
		grant: GrantType,
	},
	/// Token field names must be non-empty.
	#[error("Token {field} must not be empty.")]
	EmptyTokenField {
		/// Which field was empty.
		field: &'static str,
	},
	/// Lifetimes must be positive.
	#[error("The {token} token max age must be positive.")]
	NonPositiveMaxAge {
		/// Token kind (`access` or `refresh`).
		token: &'static str,
	},
	/// At least one scope must be requested.
	#[error("Scope set must not be empty.")]
	EmptyScope,
}

/// Builder for [`AuthStrategyDescriptor`] values.
///
/// Everything except the issuer and client identifier defaults to the authorization-code +
/// PKCE policy: `Bearer` access tokens read from `access_token` and kept for 30 minutes, no
/// refresh tokens, `openid profile email`, `S256`, and the default redirect routes.
#[derive(Debug)]
pub struct AuthStrategyDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: StrategyId,
	/// Identity provider base URL.
	pub issuer: Option<Issuer>,
	/// Explicit endpoints; derived from the issuer when unset.
	pub endpoints: Option<StrategyEndpoints>,
	/// OAuth 2.0 client identifier.
	pub client_id: Option<ClientId>,
	/// Access token policy.
	pub token: TokenPolicy,
	/// Refresh token policy.
	pub refresh_token: RefreshTokenPolicy,
	/// Grant driving the strategy.
	pub grant_type: GrantType,
	/// Requested scopes.
	pub scope: ScopeSet,
	/// PKCE challenge method.
	pub code_challenge_method: CodeChallengeMethod,
	/// Application routes used around sign-in.
	pub redirect: RedirectPolicy,
}
impl AuthStrategyDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: StrategyId) -> Self {
		Self {
			id,
			issuer: None,
			endpoints: None,
			client_id: None,
			token: TokenPolicy::default(),
			refresh_token: RefreshTokenPolicy::default(),
			grant_type: GrantType::AuthorizationCode,
			scope: ScopeSet::openid_profile_email(),
			code_challenge_method: CodeChallengeMethod::default(),
			redirect: RedirectPolicy::default(),
		}
	}

	/// Sets the issuer.
	pub fn issuer(mut self, issuer: Issuer) -> Self {
		self.issuer = Some(issuer);

		self
	}

	/// Overrides the derived endpoints. Each must still sit under the issuer.
	pub fn endpoints(mut self, endpoints: StrategyEndpoints) -> Self {
		self.endpoints = Some(endpoints);

		self
	}

	/// Sets the client identifier.
	pub fn client_id(mut self, client_id: ClientId) -> Self {
		self.client_id = Some(client_id);

		self
	}

	/// Overrides the access token policy.
	pub fn token(mut self, token: TokenPolicy) -> Self {
		self.token = token;

		self
	}

	/// Overrides the refresh token policy.
	pub fn refresh_token(mut self, refresh_token: RefreshTokenPolicy) -> Self {
		self.refresh_token = refresh_token;

		self
	}

	/// Overrides the grant type.
	pub fn grant_type(mut self, grant: GrantType) -> Self {
		self.grant_type = grant;

		self
	}

	/// Overrides the requested scopes.
	pub fn scope(mut self, scope: ScopeSet) -> Self {
		self.scope = scope;

		self
	}

	/// Overrides the redirect routes.
	pub fn redirect(mut self, redirect: RedirectPolicy) -> Self {
		self.redirect = redirect;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<AuthStrategyDescriptor, DescriptorError> {
		let issuer = self.issuer.ok_or(DescriptorError::MissingIssuer)?;
		let client_id = self.client_id.ok_or(DescriptorError::MissingClientId)?;
		let response_type = self
			.grant_type
			.response_type()
			.ok_or(DescriptorError::UnsupportedGrant { grant: self.grant_type })?;
		let endpoints = match self.endpoints {
			Some(endpoints) => endpoints,
			None => StrategyEndpoints::from_issuer(&issuer)?,
		};
		let descriptor = AuthStrategyDescriptor {
			id: self.id,
			issuer,
			endpoints,
			client_id,
			token: self.token,
			refresh_token: self.refresh_token,
			response_type,
			grant_type: self.grant_type,
			scope: self.scope,
			code_challenge_method: self.code_challenge_method,
			redirect: self.redirect,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl AuthStrategyDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), DescriptorError> {
		for (endpoint, url) in self.endpoints.iter() {
			if !self.issuer.contains(url) {
				return Err(DescriptorError::EndpointOutsideIssuer {
					endpoint,
					url: url.to_string(),
					issuer: self.issuer.to_string(),
				});
			}
		}

		validate_token_policy(&self.token)?;

		if let RefreshTokenPolicy::Enabled { property, max_age } = &self.refresh_token {
			if property.is_empty() {
				return Err(DescriptorError::EmptyTokenField { field: "refresh property" });
			}
			if !max_age.is_positive() {
				return Err(DescriptorError::NonPositiveMaxAge { token: "refresh" });
			}
		}
		if self.scope.is_empty() {
			return Err(DescriptorError::EmptyScope);
		}

		Ok(())
	}
}

fn validate_token_policy(token: &TokenPolicy) -> Result<(), DescriptorError> {
	if token.property.is_empty() {
		return Err(DescriptorError::EmptyTokenField { field: "property" });
	}
	if token.token_type.is_empty() {
		return Err(DescriptorError::EmptyTokenField { field: "type" });
	}
	if !token.max_age.is_positive() {
		return Err(DescriptorError::NonPositiveMaxAge { token: "access" });
	}

	Ok(())
}
