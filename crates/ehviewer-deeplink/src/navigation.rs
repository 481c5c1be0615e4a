//! Platform-neutral navigation requests.
//!
//! A [`NavigationRequest`] describes the screen launch a [`RouteAction`]
//! stands for, in the vocabulary of an Android intent: a target screen, an
//! optional action string, a data URI, a MIME type and string extras.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::action::RouteAction;
use crate::config::DeeplinkConfig;
use crate::mime::mime_type_for_path;

/// Intent action for opening the main screen in search mode.
pub const ACTION_SEARCH: &str = "com.hippo.ehviewer.ACTION_SEARCH";
/// Intent action for opening the main screen on the download list.
pub const ACTION_VIEW_DOWNLOAD: &str = "com.hippo.ehviewer.ACTION_VIEW_DOWNLOAD";
/// Intent action for opening a file of a given type from the main screen.
pub const ACTION_OPEN_FILE: &str = "com.hippo.ehviewer.ACTION_OPEN_FILE";
/// Intent action for opening a news entry from the main screen.
pub const ACTION_VIEW_NEWS: &str = "com.hippo.ehviewer.ACTION_VIEW_NEWS";
/// System intent action for viewing data.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Extra carrying the gallery id.
pub const EXTRA_GALLERY_ID: &str = "gallery_id";
/// Extra carrying the search query.
pub const EXTRA_QUERY: &str = "query";
/// Extra carrying the download id.
pub const EXTRA_DOWNLOAD_ID: &str = "download_id";
/// Extra carrying the requested file type.
pub const EXTRA_FILE_TYPE: &str = "file_type";
/// Extra carrying the news id.
pub const EXTRA_NEWS_ID: &str = "news_id";

/// Screen a navigation request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
	/// Gallery detail screen.
	Gallery,
	/// Main screen.
	Main,
	/// Settings screen.
	Settings,
	/// In-app web view.
	WebView,
	/// Whatever viewer the system resolves for the data and MIME type.
	SystemViewer,
}

/// A screen launch, described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
	/// Screen to launch.
	pub target: NavigationTarget,

	/// Intent action, if any.
	pub action: Option<&'static str>,

	/// Data URI, if any.
	pub data: Option<String>,

	/// MIME type of the data, if any.
	pub mime_type: Option<&'static str>,

	/// Package the request is restricted to.
	pub package: Option<String>,

	/// String extras, in key order.
	pub extras: BTreeMap<&'static str, String>,
}

impl NavigationRequest {
	/// Creates an empty request for `target`.
	pub fn new(target: NavigationTarget) -> Self {
		Self {
			target,
			action: None,
			data: None,
			mime_type: None,
			package: None,
			extras: BTreeMap::new(),
		}
	}

	/// Sets the intent action.
	pub fn with_action(mut self, action: &'static str) -> Self {
		self.action = Some(action);
		self
	}

	/// Sets the data URI.
	pub fn with_data(mut self, data: impl Into<String>) -> Self {
		self.data = Some(data.into());
		self
	}

	/// Adds an extra.
	pub fn with_extra(mut self, key: &'static str, value: impl Into<String>) -> Self {
		self.extras.insert(key, value.into());
		self
	}

	/// Adds an extra if `value` is present.
	fn with_optional_extra(self, key: &'static str, value: Option<&str>) -> Self {
		match value {
			Some(value) => self.with_extra(key, value),
			None => self,
		}
	}

	/// Returns the extra stored under `key`.
	pub fn extra(&self, key: &str) -> Option<&str> {
		self.extras.get(key).map(String::as_str)
	}
}

impl RouteAction {
	/// Describes the screen launch this action stands for.
	///
	/// ```rust
	/// use ehviewer_deeplink::{DeeplinkConfig, NavigationTarget, RouteAction};
	///
	/// let request = RouteAction::OpenNews { id: "7".into() }
	///     .to_navigation(&DeeplinkConfig::default());
	/// assert_eq!(request.target, NavigationTarget::Main);
	/// assert_eq!(request.action, Some("com.hippo.ehviewer.ACTION_VIEW_NEWS"));
	/// assert_eq!(request.extra("news_id"), Some("7"));
	/// ```
	pub fn to_navigation(&self, config: &DeeplinkConfig) -> NavigationRequest {
		match self {
			Self::OpenGallery { id } => NavigationRequest::new(NavigationTarget::Gallery)
				.with_extra(EXTRA_GALLERY_ID, id.as_str()),
			Self::OpenSearch { query } => NavigationRequest::new(NavigationTarget::Main)
				.with_action(ACTION_SEARCH)
				.with_optional_extra(EXTRA_QUERY, query.as_deref()),
			Self::OpenDownload { id } => NavigationRequest::new(NavigationTarget::Main)
				.with_action(ACTION_VIEW_DOWNLOAD)
				.with_optional_extra(EXTRA_DOWNLOAD_ID, id.as_deref()),
			Self::OpenSettings => NavigationRequest::new(NavigationTarget::Settings),
			Self::OpenBrowser { url } => {
				NavigationRequest::new(NavigationTarget::WebView).with_data(url.as_str())
			}
			Self::OpenFile { path } => {
				let mut request = NavigationRequest::new(NavigationTarget::SystemViewer)
					.with_action(ACTION_VIEW)
					.with_data(format!("file://{}", path));
				request.mime_type = Some(mime_type_for_path(path));
				request.package = Some(config.package_name.clone());
				request
			}
			Self::OpenFileByType {
				file_type,
				original_uri,
			} => NavigationRequest::new(NavigationTarget::Main)
				.with_action(ACTION_OPEN_FILE)
				.with_data(original_uri.as_str())
				.with_extra(EXTRA_FILE_TYPE, file_type.as_str()),
			Self::OpenNews { id } => NavigationRequest::new(NavigationTarget::Main)
				.with_action(ACTION_VIEW_NEWS)
				.with_extra(EXTRA_NEWS_ID, id.as_str()),
			Self::OpenMain { original_uri } => {
				let request = NavigationRequest::new(NavigationTarget::Main);
				match original_uri {
					Some(uri) => request.with_data(uri.as_str()),
					None => request,
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn navigate(action: RouteAction) -> NavigationRequest {
		action.to_navigation(&DeeplinkConfig::default())
	}

	#[rstest]
	fn test_gallery_request() {
		let request = navigate(RouteAction::OpenGallery { id: "42".into() });
		assert_eq!(request.target, NavigationTarget::Gallery);
		assert_eq!(request.action, None);
		assert_eq!(request.extra(EXTRA_GALLERY_ID), Some("42"));
	}

	#[rstest]
	#[case(Some("touhou"), Some("touhou"))]
	#[case(None, None)]
	fn test_search_request(#[case] query: Option<&str>, #[case] expected: Option<&str>) {
		let request = navigate(RouteAction::OpenSearch {
			query: query.map(str::to_string),
		});
		assert_eq!(request.target, NavigationTarget::Main);
		assert_eq!(request.action, Some(ACTION_SEARCH));
		assert_eq!(request.extra(EXTRA_QUERY), expected);
	}

	#[rstest]
	fn test_download_request_without_id() {
		let request = navigate(RouteAction::OpenDownload { id: None });
		assert_eq!(request.action, Some(ACTION_VIEW_DOWNLOAD));
		assert!(request.extras.is_empty());
	}

	#[rstest]
	fn test_settings_request() {
		let request = navigate(RouteAction::OpenSettings);
		assert_eq!(request, NavigationRequest::new(NavigationTarget::Settings));
	}

	#[rstest]
	fn test_browser_request() {
		let request = navigate(RouteAction::OpenBrowser {
			url: "https://example.com".into(),
		});
		assert_eq!(request.target, NavigationTarget::WebView);
		assert_eq!(request.data.as_deref(), Some("https://example.com"));
	}

	#[rstest]
	fn test_file_request() {
		let request = navigate(RouteAction::OpenFile {
			path: "/storage/book.EPUB".into(),
		});
		assert_eq!(request.target, NavigationTarget::SystemViewer);
		assert_eq!(request.action, Some(ACTION_VIEW));
		assert_eq!(request.data.as_deref(), Some("file:///storage/book.EPUB"));
		assert_eq!(request.mime_type, Some("application/epub+zip"));
		assert_eq!(request.package.as_deref(), Some("com.hippo.ehviewer"));
	}

	#[rstest]
	fn test_file_by_type_request() {
		let request = navigate(RouteAction::OpenFileByType {
			file_type: "pdf".into(),
			original_uri: "https://ehviewer.app/open/file/pdf".into(),
		});
		assert_eq!(request.action, Some(ACTION_OPEN_FILE));
		assert_eq!(
			request.data.as_deref(),
			Some("https://ehviewer.app/open/file/pdf")
		);
		assert_eq!(request.extra(EXTRA_FILE_TYPE), Some("pdf"));
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some("https://example.com/"), Some("https://example.com/"))]
	fn test_main_request(#[case] uri: Option<&str>, #[case] expected: Option<&str>) {
		let request = navigate(RouteAction::OpenMain {
			original_uri: uri.map(str::to_string),
		});
		assert_eq!(request.target, NavigationTarget::Main);
		assert_eq!(request.action, None);
		assert_eq!(request.data.as_deref(), expected);
	}

	#[rstest]
	fn test_request_serializes_extras_in_order() {
		let request = NavigationRequest::new(NavigationTarget::Main)
			.with_extra("b", "2")
			.with_extra("a", "1");
		let json = serde_json::to_string(&request).unwrap();
		assert!(json.contains(r#""extras":{"a":"1","b":"2"}"#));
		assert!(json.contains(r#""target":"main""#));
	}
}
