//! Deeplink configuration.
//!
//! [`DeeplinkConfig`] names the custom URL scheme, the verified App Link host
//! and the Android package that file-open requests are restricted to.
//!
//! ```rust
//! use ehviewer_deeplink::DeeplinkConfig;
//!
//! let config = DeeplinkConfig::builder()
//!     .custom_scheme("ehviewer")
//!     .app_link_host("ehviewer.app")
//!     .package_name("com.hippo.ehviewer")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.custom_scheme, "ehviewer");
//! ```

use serde::{Deserialize, Serialize};

use crate::DeeplinkResult;
use crate::error::{DeeplinkError, validate_host, validate_package_name, validate_scheme};

/// Default custom URL scheme (`ehviewer://...`).
pub const DEFAULT_CUSTOM_SCHEME: &str = "ehviewer";

/// Default verified App Link host (`https://ehviewer.app/open/...`).
pub const DEFAULT_APP_LINK_HOST: &str = "ehviewer.app";

/// Default Android package name.
pub const DEFAULT_PACKAGE_NAME: &str = "com.hippo.ehviewer";

/// Scheme App Links are served over.
pub const APP_LINK_SCHEME: &str = "https";

/// Web schemes that cannot double as the custom scheme.
const RESERVED_SCHEMES: &[&str] = &[APP_LINK_SCHEME, "http"];

/// Deeplink routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeeplinkConfig {
	/// Custom URL scheme, compared case-insensitively.
	pub custom_scheme: String,

	/// Host of verified App Links.
	pub app_link_host: String,

	/// Package that `OpenFile` requests are restricted to.
	pub package_name: String,
}

impl Default for DeeplinkConfig {
	fn default() -> Self {
		Self {
			custom_scheme: String::from(DEFAULT_CUSTOM_SCHEME),
			app_link_host: String::from(DEFAULT_APP_LINK_HOST),
			package_name: String::from(DEFAULT_PACKAGE_NAME),
		}
	}
}

impl DeeplinkConfig {
	/// Creates a new builder starting from the default configuration.
	pub fn builder() -> DeeplinkConfigBuilder {
		DeeplinkConfigBuilder::default()
	}

	/// Loads a configuration from TOML text.
	///
	/// Missing keys keep their default values. The result is validated.
	///
	/// ```rust
	/// use ehviewer_deeplink::DeeplinkConfig;
	///
	/// let config = DeeplinkConfig::from_toml_str(r#"custom_scheme = "ehv""#).unwrap();
	/// assert_eq!(config.custom_scheme, "ehv");
	/// assert_eq!(config.app_link_host, "ehviewer.app");
	/// ```
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::Config` on malformed TOML and a validation
	/// error if a value is rejected by [`DeeplinkConfig::validate`].
	pub fn from_toml_str(source: &str) -> DeeplinkResult<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Validates every field.
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::InvalidScheme` for a malformed custom scheme or
	/// one of the web schemes (`https`, `http`), which would shadow App Links.
	pub fn validate(&self) -> DeeplinkResult<()> {
		validate_scheme(&self.custom_scheme)?;
		if RESERVED_SCHEMES
			.iter()
			.any(|reserved| reserved.eq_ignore_ascii_case(&self.custom_scheme))
		{
			return Err(DeeplinkError::InvalidScheme(self.custom_scheme.clone()));
		}
		validate_host(&self.app_link_host)?;
		validate_package_name(&self.package_name)?;
		Ok(())
	}

	/// Returns true if `scheme` is the configured custom scheme.
	pub(crate) fn is_custom_scheme(&self, scheme: &str) -> bool {
		self.custom_scheme.eq_ignore_ascii_case(scheme)
	}

	/// Returns true if `scheme` and `host` identify a verified App Link.
	pub(crate) fn is_app_link(&self, scheme: &str, host: Option<&str>) -> bool {
		scheme.eq_ignore_ascii_case(APP_LINK_SCHEME)
			&& host.is_some_and(|h| h.eq_ignore_ascii_case(&self.app_link_host))
	}
}

/// Builder for [`DeeplinkConfig`].
#[derive(Debug, Default)]
pub struct DeeplinkConfigBuilder {
	config: DeeplinkConfig,
}

impl DeeplinkConfigBuilder {
	/// Sets the custom URL scheme.
	pub fn custom_scheme(mut self, scheme: &str) -> Self {
		self.config.custom_scheme = scheme.to_string();
		self
	}

	/// Sets the App Link host.
	pub fn app_link_host(mut self, host: &str) -> Self {
		self.config.app_link_host = host.to_string();
		self
	}

	/// Sets the Android package name.
	pub fn package_name(mut self, package_name: &str) -> Self {
		self.config.package_name = package_name.to_string();
		self
	}

	/// Validates and builds the configuration.
	///
	/// # Errors
	///
	/// Returns the first validation error encountered.
	pub fn build(self) -> DeeplinkResult<DeeplinkConfig> {
		self.config.validate()?;
		Ok(self.config)
	}
}
