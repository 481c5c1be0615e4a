//! # EhViewer links
//!
//! Deep link handling for the EhViewer reader.
//!
//! The reader is launched from two kinds of links: its own `ehviewer://`
//! scheme and verified Android App Links on `https://ehviewer.app/open/...`.
//! This crate decides which screen a link opens. Rendering the screen, and
//! everything behind it (password storage, browser registration, WebView
//! set-up, the novel library), belongs to the host application.
//!
//! ## Feature Flags
//!
//! - `deeplink` (default) - link routing, MIME inference and navigation
//!   requests, re-exported from `ehviewer-deeplink`
//!
//! ## Quick Example
//!
//! ```rust
//! use ehviewer::prelude::*;
//!
//! let router = DeeplinkRouter::default();
//! let action = router.route_str(Some("ehviewer://search?q=artist%3Ahiten"));
//! assert_eq!(action, RouteAction::OpenSearch { query: Some("artist:hiten".into()) });
//!
//! let request = action.to_navigation(router.config());
//! assert_eq!(request.target, NavigationTarget::Main);
//! ```

#[cfg(feature = "deeplink")]
pub use ehviewer_deeplink as deeplink;

#[cfg(feature = "deeplink")]
pub use ehviewer_deeplink::{
	DeeplinkConfig, DeeplinkError, DeeplinkResult, DeeplinkRouter, Dispatched, Dispatcher,
	IncomingLink, NavigationRequest, NavigationTarget, Navigator, RouteAction,
};

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "deeplink")]
	pub use ehviewer_deeplink::{
		DeeplinkConfig, DeeplinkRouter, Dispatched, Dispatcher, FallbackReason, IncomingLink,
		NavigationError, NavigationRequest, NavigationTarget, Navigator, RouteAction,
		mime_type_for_path,
	};
}
