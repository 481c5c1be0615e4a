//! Error types for deeplink configuration and dispatch.
//!
//! Routing itself never fails: every link resolves to a
//! [`RouteAction`](crate::RouteAction). Errors only surface while parsing raw
//! URI text, loading configuration, or handing a request to a navigator.

use thiserror::Error;

/// Errors that can occur during deeplink configuration and dispatch.
#[derive(Debug, Error)]
pub enum DeeplinkError {
	/// The raw text could not be parsed as an absolute URI.
	#[error("invalid URI: {uri}")]
	InvalidUri {
		uri: String,
		#[source]
		source: url::ParseError,
	},

	/// Invalid URL scheme name.
	///
	/// Schemes must start with an ASCII letter followed by letters, digits,
	/// `+`, `-` or `.`.
	#[error("invalid URL scheme: {0}")]
	InvalidScheme(String),

	/// Invalid app link host.
	#[error("invalid app link host: {0}")]
	InvalidHost(String),

	/// Invalid Android package name.
	///
	/// Package names must follow reverse domain notation (e.g. `com.example.app`).
	#[error("invalid package name: {0}. Expected reverse domain notation")]
	InvalidPackageName(String),

	/// The configuration file could not be parsed.
	#[error("configuration error: {0}")]
	Config(#[from] toml::de::Error),

	/// The navigator rejected a navigation request.
	#[error("navigation failed: {0}")]
	Navigation(#[from] NavigationError),

	/// JSON serialization failed.
	#[error("serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Error reported by a [`Navigator`](crate::Navigator) when a screen cannot be
/// launched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// No screen or system handler is available for the request.
	#[error("no handler available for {0}")]
	NoHandler(String),

	/// The host environment refused to launch the screen.
	#[error("launch failed: {0}")]
	LaunchFailed(String),
}

/// Validates a URL scheme name.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidScheme` if the name is not a valid RFC 3986
/// scheme.
pub fn validate_scheme(scheme: &str) -> Result<(), DeeplinkError> {
	let mut chars = scheme.chars();

	let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
	if !starts_with_letter {
		return Err(DeeplinkError::InvalidScheme(scheme.to_string()));
	}

	if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
		return Err(DeeplinkError::InvalidScheme(scheme.to_string()));
	}

	Ok(())
}

/// Validates an app link host.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidHost` if the host is empty or carries a
/// path, port or whitespace.
pub fn validate_host(host: &str) -> Result<(), DeeplinkError> {
	if host.is_empty()
		|| host
			.chars()
			.any(|c| c.is_whitespace() || matches!(c, '/' | ':' | '?' | '#' | '@'))
	{
		return Err(DeeplinkError::InvalidHost(host.to_string()));
	}

	Ok(())
}

/// Validates an Android package name.
///
/// Valid format: at least two dot-separated segments, each starting with an
/// ASCII letter and containing only letters, digits and underscores.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidPackageName` if the format is invalid.
pub fn validate_package_name(package_name: &str) -> Result<(), DeeplinkError> {
	let segments: Vec<&str> = package_name.split('.').collect();
	if segments.len() < 2 {
		return Err(DeeplinkError::InvalidPackageName(
			package_name.to_string(),
		));
	}

	for segment in segments {
		let mut chars = segment.chars();
		let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
			&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
		if !valid {
			return Err(DeeplinkError::InvalidPackageName(
				package_name.to_string(),
			));
		}
	}

	Ok(())
}
