//! Strongly typed identifiers carried by strategy descriptors.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty or whitespace.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (strategy, client).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (strategy, client).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (strategy, client).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { StrategyId, "Name under which a strategy is registered with the auth middleware.", "Strategy" }
def_id! { ClientId, "OAuth 2.0 client identifier issued by the identity provider.", "Client" }
impl StrategyId {
	/// Strategy name used when none is configured.
	pub const DEFAULT: &'static str = "okta";
}
impl Default for StrategyId {
	fn default() -> Self {
		Self(Self::DEFAULT.to_owned())
	}
}

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_padding_and_blanks() {
		assert!(ClientId::new(" abc123").is_err(), "Leading whitespace must be rejected.");
		assert!(ClientId::new("abc123 ").is_err(), "Trailing whitespace must be rejected.");

		let client = ClientId::new("0oa1b2c3d4").expect("Client fixture should be considered valid.");

		assert_eq!(client.as_ref(), "0oa1b2c3d4");
		assert_eq!(format!("{client:?}"), "Client(0oa1b2c3d4)");
		assert_eq!(ClientId::new(""), Err(IdentifierError::Empty { kind: "Client" }));
		assert!(StrategyId::new("with space").is_err());
		assert_eq!(StrategyId::default().as_ref(), "okta");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let strategy: StrategyId =
			serde_json::from_str("\"okta\"").expect("Strategy should deserialize successfully.");

		assert_eq!(strategy.as_ref(), "okta");
		assert_eq!(serde_json::to_string(&strategy).expect("Strategy should serialize."), "\"okta\"");
		assert!(serde_json::from_str::<StrategyId>("\"with space\"").is_err());
	}

	#[test]
	fn unicode_whitespace_and_length_limits() {
		let nbsp = format!("client{}id", '\u{00A0}');

		assert!(ClientId::new(&nbsp).is_err());

		let exact = "a".repeat(IDENTIFIER_MAX_LEN);

		ClientId::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(IDENTIFIER_MAX_LEN + 1);

		assert_eq!(
			ClientId::new(&too_long),
			Err(IdentifierError::TooLong { kind: "Client", max: IDENTIFIER_MAX_LEN })
		);
	}
}
