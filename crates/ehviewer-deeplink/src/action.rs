//! Routing outcomes.

use serde::{Deserialize, Serialize};

use crate::DeeplinkResult;

/// The destination a link resolves to.
///
/// Exactly one variant is produced per routed link. Variants carry only the
/// values the destination needs; turning them into a screen launch is the
/// caller's job (see [`NavigationRequest`](crate::NavigationRequest)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteAction {
	/// Gallery detail screen.
	OpenGallery { id: String },

	/// Main screen in search mode, optionally pre-filled.
	OpenSearch { query: Option<String> },

	/// Main screen showing downloads, optionally focused on one entry.
	OpenDownload { id: Option<String> },

	/// Settings screen.
	OpenSettings,

	/// In-app web view.
	OpenBrowser { url: String },

	/// Local file, opened by a viewer chosen from its MIME type.
	OpenFile { path: String },

	/// Main screen asked to open a file of the given type.
	OpenFileByType {
		file_type: String,
		original_uri: String,
	},

	/// Main screen showing a news entry.
	OpenNews { id: String },

	/// Main screen, optionally carrying the link that led there.
	OpenMain { original_uri: Option<String> },
}

impl RouteAction {
	/// Main screen without a link.
	pub fn main() -> Self {
		Self::OpenMain { original_uri: None }
	}

	/// Main screen carrying `uri`.
	pub fn main_with(uri: impl Into<String>) -> Self {
		Self::OpenMain {
			original_uri: Some(uri.into()),
		}
	}

	/// Short name of the variant, as used in logs and serialized form.
	pub fn name(&self) -> &'static str {
		match self {
			Self::OpenGallery { .. } => "open_gallery",
			Self::OpenSearch { .. } => "open_search",
			Self::OpenDownload { .. } => "open_download",
			Self::OpenSettings => "open_settings",
			Self::OpenBrowser { .. } => "open_browser",
			Self::OpenFile { .. } => "open_file",
			Self::OpenFileByType { .. } => "open_file_by_type",
			Self::OpenNews { .. } => "open_news",
			Self::OpenMain { .. } => "open_main",
		}
	}

	/// Returns true for the main-screen fallback.
	pub fn is_main(&self) -> bool {
		matches!(self, Self::OpenMain { .. })
	}

	/// Serializes the action to JSON, e.g. to hand it across a JNI or IPC
	/// boundary.
	pub fn to_json(&self) -> DeeplinkResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Parses an action serialized by [`RouteAction::to_json`].
	pub fn from_json(json: &str) -> DeeplinkResult<Self> {
		Ok(serde_json::from_str(json)?)
	}
}
