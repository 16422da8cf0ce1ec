// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

/// OAuth 2.0 grant types a strategy may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant (front-channel redirect + back-channel exchange).
	AuthorizationCode,
	/// Refresh Token grant for long-lived sessions.
	RefreshToken,
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
		}
	}

	/// Response type sent to the authorization endpoint, for grants that start with a
	/// browser redirect.
	pub fn response_type(self) -> Option<ResponseType> {
		match self {
			GrantType::AuthorizationCode => Some(ResponseType::Code),
			GrantType::RefreshToken | GrantType::ClientCredentials => None,
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `response_type` values sent to the authorization endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
	/// Authorization code.
	Code,
}
impl ResponseType {
	/// Returns the wire value.
	pub fn as_str(self) -> &'static str {
		match self {
			ResponseType::Code => "code",
		}
	}
}
impl Display for ResponseType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// PKCE code challenge methods (RFC 7636). Selecting one turns PKCE on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeChallengeMethod {
	/// SHA-256 based PKCE.
	#[default]
	S256,
}
impl CodeChallengeMethod {
	/// Returns the RFC 7636 identifier for the challenge method.
	pub fn as_str(self) -> &'static str {
		match self {
			CodeChallengeMethod::S256 => "S256",
		}
	}

	/// Applies the method's transform to a code verifier.
	///
	/// For `S256` this is `BASE64URL-NOPAD(SHA256(ASCII(verifier)))`.
	pub fn derive_challenge(self, verifier: &str) -> String {
		match self {
			CodeChallengeMethod::S256 => {
				let mut hasher = Sha256::new();

				hasher.update(verifier.as_bytes());

				URL_SAFE_NO_PAD.encode(hasher.finalize())
			},
		}
	}
}
impl Display for CodeChallengeMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_authorization_code_has_a_response_type() {
		assert_eq!(GrantType::AuthorizationCode.response_type(), Some(ResponseType::Code));
		assert_eq!(GrantType::RefreshToken.response_type(), None);
		assert_eq!(GrantType::ClientCredentials.response_type(), None);
		assert_eq!(GrantType::AuthorizationCode.to_string(), "authorization_code");
	}

	#[test]
	fn s256_matches_rfc_7636_appendix_b() {
		let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";

		assert_eq!(
			CodeChallengeMethod::S256.derive_challenge(verifier),
			"E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
		);
		assert_eq!(CodeChallengeMethod::default().to_string(), "S256");
	}
}
