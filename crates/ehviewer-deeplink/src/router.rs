//! Link classification.
//!
//! [`DeeplinkRouter::route`] maps an inbound link to exactly one
//! [`RouteAction`]. It performs no navigation and never fails: links it does
//! not understand fall back to the main screen, carrying the link along.
//!
//! Two families of links are recognised:
//!
//! | Link | Action |
//! |---|---|
//! | `ehviewer://gallery/<id>` | [`RouteAction::OpenGallery`] |
//! | `ehviewer://search?q=<query>` | [`RouteAction::OpenSearch`] |
//! | `ehviewer://download/<id>` | [`RouteAction::OpenDownload`] |
//! | `ehviewer://settings` | [`RouteAction::OpenSettings`] |
//! | `ehviewer://browser?url=<url>` | [`RouteAction::OpenBrowser`] |
//! | `ehviewer://file?path=<path>` | [`RouteAction::OpenFile`] |
//! | `https://ehviewer.app/open/gallery/<id>` | [`RouteAction::OpenGallery`] |
//! | `https://ehviewer.app/open/news/<id>` | [`RouteAction::OpenNews`] |
//! | `https://ehviewer.app/open/file/<type>` | [`RouteAction::OpenFileByType`] |
//!
//! ```rust
//! use ehviewer_deeplink::{DeeplinkRouter, RouteAction};
//!
//! let router = DeeplinkRouter::default();
//! assert_eq!(
//!     router.route_str(Some("ehviewer://gallery/42")),
//!     RouteAction::OpenGallery { id: "42".to_string() },
//! );
//! assert_eq!(router.route_str(None), RouteAction::main());
//! ```

use url::Url;

use crate::action::RouteAction;
use crate::config::{APP_LINK_SCHEME, DeeplinkConfig};
use crate::link::IncomingLink;

/// Custom scheme host for gallery links.
pub const HOST_GALLERY: &str = "gallery";
/// Custom scheme host for search links.
pub const HOST_SEARCH: &str = "search";
/// Custom scheme host for download links.
pub const HOST_DOWNLOAD: &str = "download";
/// Custom scheme host for the settings screen.
pub const HOST_SETTINGS: &str = "settings";
/// Custom scheme host for in-app browser links.
pub const HOST_BROWSER: &str = "browser";
/// Custom scheme host for local file links.
pub const HOST_FILE: &str = "file";

/// App Link path prefix for galleries.
pub const PREFIX_GALLERY: &str = "/open/gallery/";
/// App Link path prefix for news entries.
pub const PREFIX_NEWS: &str = "/open/news/";
/// App Link path prefix for typed file opens.
pub const PREFIX_FILE: &str = "/open/file/";

const PARAM_QUERY: &str = "q";
const PARAM_URL: &str = "url";
const PARAM_PATH: &str = "path";

/// Classifies inbound links into [`RouteAction`]s.
#[derive(Debug, Clone, Default)]
pub struct DeeplinkRouter {
	config: DeeplinkConfig,
}

impl DeeplinkRouter {
	/// Creates a router for the given configuration.
	pub fn new(config: DeeplinkConfig) -> Self {
		Self { config }
	}

	/// Returns the router configuration.
	pub fn config(&self) -> &DeeplinkConfig {
		&self.config
	}

	/// Routes a link. An absent link opens the main screen.
	pub fn route(&self, link: Option<&IncomingLink>) -> RouteAction {
		let Some(link) = link else {
			tracing::debug!("no deep link attached, opening main screen");
			return RouteAction::main();
		};

		let action = if self.config.is_custom_scheme(link.scheme()) {
			self.route_custom_scheme(link)
		} else if self.config.is_app_link(link.scheme(), link.host()) {
			self.route_app_link(link)
		} else {
			RouteAction::main_with(link.as_str())
		};

		tracing::debug!("routed deep link {} to {}", link, action.name());
		action
	}

	/// Parses and routes raw URI text.
	///
	/// Text that does not parse as a URI still opens the main screen, carrying
	/// the text unchanged.
	pub fn route_str(&self, raw: Option<&str>) -> RouteAction {
		let Some(raw) = raw else {
			return self.route(None);
		};

		match IncomingLink::parse(raw) {
			Ok(link) => self.route(Some(&link)),
			Err(e) => {
				tracing::warn!("unparseable deep link, opening main screen: {}", e);
				RouteAction::main_with(raw)
			}
		}
	}

	/// Handles `ehviewer://<host>/...` links.
	fn route_custom_scheme(&self, link: &IncomingLink) -> RouteAction {
		let fallback = || RouteAction::main_with(link.as_str());

		match link.host() {
			Some(HOST_GALLERY) => link
				.last_path_segment()
				.map(|id| RouteAction::OpenGallery { id: id.to_string() })
				.unwrap_or_else(fallback),
			Some(HOST_SEARCH) => RouteAction::OpenSearch {
				query: link.query_param(PARAM_QUERY).map(str::to_string),
			},
			Some(HOST_DOWNLOAD) => RouteAction::OpenDownload {
				id: link.last_path_segment().map(str::to_string),
			},
			Some(HOST_SETTINGS) => RouteAction::OpenSettings,
			Some(HOST_BROWSER) => link
				.query_param(PARAM_URL)
				.map(|url| RouteAction::OpenBrowser {
					url: url.to_string(),
				})
				.unwrap_or_else(fallback),
			Some(HOST_FILE) => link
				.query_param(PARAM_PATH)
				.map(|path| RouteAction::OpenFile {
					path: path.to_string(),
				})
				.unwrap_or_else(fallback),
			_ => fallback(),
		}
	}

	/// Handles `https://ehviewer.app/open/...` links.
	fn route_app_link(&self, link: &IncomingLink) -> RouteAction {
		let path = link.path().unwrap_or_default();

		if let Some(id) = path_suffix(path, PREFIX_GALLERY) {
			RouteAction::OpenGallery { id: id.to_string() }
		} else if let Some(id) = path_suffix(path, PREFIX_NEWS) {
			RouteAction::OpenNews { id: id.to_string() }
		} else if let Some(file_type) = path_suffix(path, PREFIX_FILE) {
			RouteAction::OpenFileByType {
				file_type: file_type.to_string(),
				original_uri: link.as_str().to_string(),
			}
		} else {
			RouteAction::main_with(link.as_str())
		}
	}

	/// Builds a link that routes back to `action`.
	///
	/// News and typed file opens produce App Links, everything else uses the
	/// custom scheme. `OpenMain` yields the link it carries, if any.
	///
	/// ```rust
	/// use ehviewer_deeplink::{DeeplinkRouter, RouteAction};
	///
	/// let router = DeeplinkRouter::default();
	/// let link = router.reverse(&RouteAction::OpenSearch { query: Some("a b".into()) });
	/// assert_eq!(link.as_deref(), Some("ehviewer://search?q=a+b"));
	/// ```
	pub fn reverse(&self, action: &RouteAction) -> Option<String> {
		let url = match action {
			RouteAction::OpenGallery { id } => {
				self.custom_link(HOST_GALLERY, Some(id.as_str()), None)?
			}
			RouteAction::OpenSearch { query } => self.custom_link(
				HOST_SEARCH,
				None,
				query.as_deref().map(|q| (PARAM_QUERY, q)),
			)?,
			RouteAction::OpenDownload { id } => {
				self.custom_link(HOST_DOWNLOAD, id.as_deref(), None)?
			}
			RouteAction::OpenSettings => self.custom_link(HOST_SETTINGS, None, None)?,
			RouteAction::OpenBrowser { url } => {
				self.custom_link(HOST_BROWSER, None, Some((PARAM_URL, url.as_str())))?
			}
			RouteAction::OpenFile { path } => {
				self.custom_link(HOST_FILE, None, Some((PARAM_PATH, path.as_str())))?
			}
			RouteAction::OpenFileByType { file_type, .. } => {
				self.app_link(PREFIX_FILE, file_type)?
			}
			RouteAction::OpenNews { id } => self.app_link(PREFIX_NEWS, id)?,
			RouteAction::OpenMain { original_uri } => return original_uri.clone(),
		};

		Some(url.into())
	}

	fn custom_link(
		&self,
		host: &str,
		segment: Option<&str>,
		param: Option<(&str, &str)>,
	) -> Option<Url> {
		let mut url = Url::parse(&format!("{}://{}", self.config.custom_scheme, host)).ok()?;
		if let Some(segment) = segment {
			url.path_segments_mut().ok()?.push(segment);
		}
		if let Some((name, value)) = param {
			url.query_pairs_mut().append_pair(name, value);
		}
		Some(url)
	}

	fn app_link(&self, prefix: &str, value: &str) -> Option<Url> {
		let mut url = Url::parse(&format!(
			"{}://{}{}",
			APP_LINK_SCHEME,
			self.config.app_link_host,
			prefix.trim_end_matches('/')
		))
		.ok()?;
		url.path_segments_mut().ok()?.push(value);
		Some(url)
	}
}

/// Returns the non-empty remainder of `path` after `prefix`.
fn path_suffix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
	path.strip_prefix(prefix).filter(|s| !s.is_empty())
}
