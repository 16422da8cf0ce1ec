//! Identity-provider issuer parsing.
//!
//! Endpoints are formed by appending a fixed suffix to the issuer string exactly as configured,
//! so the issuer must be something that survives that append: an absolute `http`/`https` URL
//! with a host and without a trailing slash, query, or fragment, already in the canonical form
//! `Url` would serialize it to.

// self
use crate::{_prelude::*, error::ConfigError};

/// Validated issuer base URL.
#[derive(Clone, PartialEq, Eq)]
pub struct Issuer {
	raw: String,
	url: Url,
}
impl Issuer {
	/// Parses and validates an issuer value.
	pub fn parse(value: &str) -> Result<Self, ConfigError> {
		if value.trim().is_empty() {
			return Err(ConfigError::invalid_issuer(value, "value is empty"));
		}
		if value.trim() != value {
			return Err(ConfigError::invalid_issuer(value, "value has surrounding whitespace"));
		}

		let url = Url::parse(value).map_err(|e| ConfigError::invalid_issuer(value, e))?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::invalid_issuer(
				value,
				format!("unsupported scheme `{}`", url.scheme()),
			));
		}
		if url.host_str().is_none_or(str::is_empty) {
			return Err(ConfigError::invalid_issuer(value, "URL has no host"));
		}
		if url.query().is_some() || url.fragment().is_some() {
			return Err(ConfigError::invalid_issuer(value, "URL must not carry a query or fragment"));
		}
		if value.ends_with('/') {
			return Err(ConfigError::invalid_issuer(value, "URL must not end with a slash"));
		}
		if canonical(&url) != value {
			return Err(ConfigError::invalid_issuer(value, "URL is not in canonical form"));
		}

		Ok(Self { raw: value.to_owned(), url })
	}

	/// The issuer exactly as configured.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// The parsed issuer URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Returns true for `https` issuers.
	pub fn is_https(&self) -> bool {
		self.url.scheme() == "https"
	}

	/// Appends `suffix` to the configured string and parses the result.
	pub fn join_literal(&self, suffix: &str) -> Result<Url, url::ParseError> {
		Url::parse(&format!("{}{suffix}", self.raw))
	}

	/// Returns true when `url` begins with the configured issuer at a path boundary.
	pub fn contains(&self, url: &Url) -> bool {
		url.as_str()
			.strip_prefix(self.raw.as_str())
			.is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
	}
}
impl FromStr for Issuer {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Debug for Issuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Issuer").field(&self.raw).finish()
	}
}
impl Display for Issuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}
impl Serialize for Issuer {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.raw)
	}
}

// `Url` always serializes a bare host with a root `/`.
fn canonical(url: &Url) -> &str {
	let s = url.as_str();

	if url.path() == "/" { s.strip_suffix('/').unwrap_or(s) } else { s }
}
