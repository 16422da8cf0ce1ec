//! Resolves the strategy descriptor from `OAUTH_ISSUER` / `CLIENT_ID` (plus `.env`), prints the
//! middleware options, and shows how the web layer routes an unauthenticated request.
//!
//! ```sh
//! OAUTH_ISSUER=https://dev-123456.okta.com/oauth2/default CLIENT_ID=0oa1b2c3 \
//!     cargo run --example resolve_from_env
//! ```

// crates.io
use color_eyre::Result;
// self
use oauth2_strategy_config::{
	resolver::{AuthConfigResolver, SharedDescriptor},
	strategy::CodeChallengeMethod,
	url::Url,
};

fn main() -> Result<()> {
	color_eyre::install()?;

	// Fail before serving anything.
	let descriptor: SharedDescriptor =
		AuthConfigResolver::default().resolve_from_process_env().map(SharedDescriptor::new)?;

	println!("{}", descriptor.middleware_options().to_json()?);

	let requested = "/dashboard";

	match descriptor.redirect.unauthenticated_redirect(requested) {
		Some(login) => println!("Unauthenticated request for {requested} goes to {login}."),
		None => println!("{requested} is reachable without a session."),
	}

	let callback = descriptor.redirect.callback_url(&Url::parse("http://localhost:3000")?)?;
	let challenge = descriptor.code_challenge_method.derive_challenge("demo-verifier");
	let authorize = descriptor.authorization_url(&callback, "demo-state", &challenge);

	println!("Sample authorize URL: {authorize}.");
	println!("PKCE method: {}.", CodeChallengeMethod::S256);

	Ok(())
}
