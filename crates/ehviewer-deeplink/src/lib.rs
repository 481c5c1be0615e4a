//! Deep link routing for EhViewer.
//!
//! This crate classifies inbound links and describes the screen each one
//! should open:
//!
//! - **Custom URL scheme**: `ehviewer://gallery/<id>`, `ehviewer://search?q=...`,
//!   `ehviewer://download/<id>`, `ehviewer://settings`, `ehviewer://browser?url=...`,
//!   `ehviewer://file?path=...`
//! - **Android App Links**: `https://ehviewer.app/open/{gallery,news,file}/...`
//!
//! Routing is a pure function from link to [`RouteAction`]. Anything the
//! router does not recognise opens the main screen, so routing never fails.
//! Launching screens is left to a host-provided [`Navigator`], driven by the
//! [`Dispatcher`].
//!
//! # Quick Start
//!
//! ```rust
//! use ehviewer_deeplink::{DeeplinkConfig, DeeplinkRouter, IncomingLink, RouteAction};
//!
//! let router = DeeplinkRouter::new(DeeplinkConfig::default());
//!
//! let link = IncomingLink::parse("https://ehviewer.app/open/news/7").unwrap();
//! assert_eq!(
//!     router.route(Some(&link)),
//!     RouteAction::OpenNews { id: "7".to_string() },
//! );
//! ```
//!
//! # Dispatching
//!
//! ```rust,ignore
//! use ehviewer_deeplink::{Dispatched, Dispatcher, DeeplinkRouter};
//!
//! let mut dispatcher = Dispatcher::new(DeeplinkRouter::default(), platform_navigator);
//! if let Dispatched::Fallback { reason, .. } = dispatcher.dispatch_str(intent_data)? {
//!     show_toast(&reason.to_string());
//! }
//! ```

pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod link;
pub mod mime;
pub mod navigation;
pub mod router;

// Re-export main types for convenience
pub use action::RouteAction;
pub use config::{DeeplinkConfig, DeeplinkConfigBuilder};
pub use dispatch::{Dispatched, Dispatcher, FallbackReason, Navigator};
pub use error::{
	DeeplinkError, NavigationError, validate_host, validate_package_name, validate_scheme,
};
pub use link::IncomingLink;
pub use mime::{WILDCARD_MIME_TYPE, mime_type_for_extension, mime_type_for_path};
pub use navigation::{NavigationRequest, NavigationTarget};
pub use router::DeeplinkRouter;

/// Result type for deeplink operations.
pub type DeeplinkResult<T> = Result<T, DeeplinkError>;
