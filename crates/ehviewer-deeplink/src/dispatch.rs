//! Dispatching routed links to a navigator.
//!
//! The [`Dispatcher`] glues the pure [`DeeplinkRouter`] to a host-provided
//! [`Navigator`]. It is the only place where routing turns into a side
//! effect.

use crate::DeeplinkResult;
use crate::action::RouteAction;
use crate::error::NavigationError;
use crate::link::IncomingLink;
use crate::mime::{WILDCARD_MIME_TYPE, is_resolved};
use crate::navigation::NavigationRequest;
use crate::router::DeeplinkRouter;

/// Launches screens on behalf of the dispatcher.
///
/// Implemented by the host environment.
pub trait Navigator {
	/// Returns true if some screen or system handler accepts `request`.
	fn can_resolve(&self, request: &NavigationRequest) -> bool;

	/// Launches the screen described by `request`.
	fn navigate(&mut self, request: NavigationRequest) -> Result<(), NavigationError>;
}

/// Why a dispatch opened the main screen instead of the routed destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
	/// The file's MIME type could not be inferred from its extension.
	UnknownFileType { path: String },
	/// No viewer is available for the file.
	NoViewer { path: String, mime_type: &'static str },
}

impl std::fmt::Display for FallbackReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownFileType { path } => write!(f, "unknown file type: {}", path),
			Self::NoViewer { path, mime_type } => {
				write!(f, "no viewer for {} ({})", path, mime_type)
			}
		}
	}
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
	/// The routed destination was launched.
	Opened(RouteAction),
	/// The main screen was launched in place of `requested`.
	///
	/// Callers typically tell the user the file could not be opened.
	Fallback {
		requested: RouteAction,
		reason: FallbackReason,
	},
}

/// Routes links and hands the result to a [`Navigator`].
#[derive(Debug)]
pub struct Dispatcher<N> {
	router: DeeplinkRouter,
	navigator: N,
}

impl<N: Navigator> Dispatcher<N> {
	/// Creates a dispatcher.
	pub fn new(router: DeeplinkRouter, navigator: N) -> Self {
		Self { router, navigator }
	}

	/// Returns the router.
	pub fn router(&self) -> &DeeplinkRouter {
		&self.router
	}

	/// Returns the navigator.
	pub fn navigator(&self) -> &N {
		&self.navigator
	}

	/// Consumes the dispatcher, returning the navigator.
	pub fn into_navigator(self) -> N {
		self.navigator
	}

	/// Routes `link` and launches the resulting screen.
	///
	/// Local files whose type is unknown, or that no viewer accepts, open the
	/// main screen instead and are reported as [`Dispatched::Fallback`].
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::Navigation` if the navigator fails to launch
	/// the screen.
	pub fn dispatch(&mut self, link: Option<&IncomingLink>) -> DeeplinkResult<Dispatched> {
		let action = self.router.route(link);
		let request = action.to_navigation(self.router.config());

		let fallback = match &action {
			RouteAction::OpenFile { path } => self.file_fallback_reason(path, &request),
			_ => None,
		};

		if let Some(reason) = fallback {
			tracing::warn!("cannot open file from deep link, opening main screen: {}", reason);
			let main = match link {
				Some(link) => RouteAction::main_with(link.as_str()),
				None => RouteAction::main(),
			};
			self.navigator
				.navigate(main.to_navigation(self.router.config()))?;
			return Ok(Dispatched::Fallback {
				requested: action,
				reason,
			});
		}

		self.navigator.navigate(request)?;
		Ok(Dispatched::Opened(action))
	}

	/// Parses raw URI text, then dispatches it like [`Dispatcher::dispatch`].
	///
	/// Text that does not parse opens the main screen carrying the text.
	pub fn dispatch_str(&mut self, raw: Option<&str>) -> DeeplinkResult<Dispatched> {
		let Some(raw) = raw else {
			return self.dispatch(None);
		};

		match IncomingLink::parse(raw) {
			Ok(link) => self.dispatch(Some(&link)),
			Err(e) => {
				tracing::warn!("unparseable deep link, opening main screen: {}", e);
				let action = RouteAction::main_with(raw);
				self.navigator
					.navigate(action.to_navigation(self.router.config()))?;
				Ok(Dispatched::Opened(action))
			}
		}
	}

	fn file_fallback_reason(
		&self,
		path: &str,
		request: &NavigationRequest,
	) -> Option<FallbackReason> {
		let mime_type = request.mime_type.unwrap_or(WILDCARD_MIME_TYPE);
		if !is_resolved(mime_type) {
			return Some(FallbackReason::UnknownFileType {
				path: path.to_string(),
			});
		}
		if !self.navigator.can_resolve(request) {
			return Some(FallbackReason::NoViewer {
				path: path.to_string(),
				mime_type,
			});
		}
		None
	}
}
