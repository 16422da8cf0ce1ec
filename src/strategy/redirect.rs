//! Application routes used around sign-in.

// self
use crate::_prelude::*;

/// Errors raised when constructing a [`RedirectPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RedirectPolicyError {
	/// Routes are application-relative paths.
	#[error("The {event} route must be an absolute path starting with `/`: {path:?}.")]
	NotAbsolutePath {
		/// Event whose route was rejected.
		event: RedirectEvent,
		/// Offending value.
		path: String,
	},
}

/// Logical points in the sign-in lifecycle that map to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectEvent {
	/// Where unauthenticated users are sent.
	Login,
	/// Where the identity provider sends the browser back with the authorization code.
	Callback,
	/// Where users land after signing in.
	Home,
}
impl RedirectEvent {
	/// Returns a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			RedirectEvent::Login => "login",
			RedirectEvent::Callback => "callback",
			RedirectEvent::Home => "home",
		}
	}
}
impl Display for RedirectEvent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Maps [`RedirectEvent`]s to application paths. Defaults: `/login`, `/auth`, `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedirectPolicy {
	login: String,
	callback: String,
	home: String,
}
impl RedirectPolicy {
	/// Creates a policy from explicit routes.
	pub fn new(
		login: impl Into<String>,
		callback: impl Into<String>,
		home: impl Into<String>,
	) -> Result<Self, RedirectPolicyError> {
		Ok(Self {
			login: validate_path(RedirectEvent::Login, login.into())?,
			callback: validate_path(RedirectEvent::Callback, callback.into())?,
			home: validate_path(RedirectEvent::Home, home.into())?,
		})
	}

	/// Route for the given event.
	pub fn path(&self, event: RedirectEvent) -> &str {
		match event {
			RedirectEvent::Login => &self.login,
			RedirectEvent::Callback => &self.callback,
			RedirectEvent::Home => &self.home,
		}
	}

	/// Route unauthenticated users are sent to.
	pub fn login(&self) -> &str {
		&self.login
	}

	/// Route that receives the authorization response.
	pub fn callback(&self) -> &str {
		&self.callback
	}

	/// Route users land on after signing in.
	pub fn home(&self) -> &str {
		&self.home
	}

	/// Where to send an unauthenticated request for `requested_path`.
	///
	/// Returns `None` for the login and callback routes themselves, which must stay reachable
	/// without a session.
	pub fn unauthenticated_redirect(&self, requested_path: &str) -> Option<&str> {
		let path = requested_path.split(['?', '#']).next().unwrap_or_default();

		if path == self.login || path == self.callback {
			None
		} else {
			Some(&self.login)
		}
	}

	/// Builds the absolute callback URL for an application origin, to be registered with the
	/// identity provider as the redirect URI.
	pub fn callback_url(&self, origin: &Url) -> Result<Url, url::ParseError> {
		origin.join(&self.callback)
	}
}
impl Default for RedirectPolicy {
	fn default() -> Self {
		Self { login: "/login".into(), callback: "/auth".into(), home: "/".into() }
	}
}

fn validate_path(event: RedirectEvent, path: String) -> Result<String, RedirectPolicyError> {
	if path.starts_with('/') && !path.starts_with("//") {
		Ok(path)
	} else {
		Err(RedirectPolicyError::NotAbsolutePath { event, path })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_match_the_sign_in_routes() {
		let policy = RedirectPolicy::default();

		assert_eq!(policy.path(RedirectEvent::Login), "/login");
		assert_eq!(policy.path(RedirectEvent::Callback), "/auth");
		assert_eq!(policy.path(RedirectEvent::Home), "/");
	}

	#[test]
	fn login_and_callback_stay_reachable() {
		let policy = RedirectPolicy::default();

		assert_eq!(policy.unauthenticated_redirect("/login"), None);
		assert_eq!(policy.unauthenticated_redirect("/auth?code=xyz&state=abc"), None);
		assert_eq!(policy.unauthenticated_redirect("/"), Some("/login"));
		assert_eq!(policy.unauthenticated_redirect("/dashboard"), Some("/login"));
		assert_eq!(policy.unauthenticated_redirect("/authors"), Some("/login"));
	}

	#[test]
	fn routes_must_be_local_paths() {
		assert_eq!(
			RedirectPolicy::new("login", "/auth", "/"),
			Err(RedirectPolicyError::NotAbsolutePath {
				event: RedirectEvent::Login,
				path: "login".into()
			})
		);
		assert!(RedirectPolicy::new("/login", "//evil.example.com", "/").is_err());
		assert!(RedirectPolicy::new("/sign-in", "/oauth/callback", "/home").is_ok());
	}

	#[test]
	fn callback_url_joins_the_origin() {
		let origin = Url::parse("https://app.example.com").expect("Origin fixture should parse.");

		assert_eq!(
			RedirectPolicy::default()
				.callback_url(&origin)
				.expect("Callback should join the origin.")
				.as_str(),
			"https://app.example.com/auth"
		);
	}
}
