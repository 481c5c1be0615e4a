//! Shared fixtures for deeplink integration tests.

#![allow(dead_code)]

use ehviewer_deeplink::{
	DeeplinkConfig, DeeplinkRouter, NavigationError, NavigationRequest, Navigator,
};
use rstest::fixture;

#[fixture]
pub fn router() -> DeeplinkRouter {
	DeeplinkRouter::default()
}

#[fixture]
pub fn custom_router() -> DeeplinkRouter {
	let config = DeeplinkConfig::builder()
		.custom_scheme("ehv")
		.app_link_host("links.example.org")
		.package_name("org.example.reader")
		.build()
		.unwrap();
	DeeplinkRouter::new(config)
}

/// Navigator that records every request and resolves only the MIME types it
/// was given.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
	pub launched: Vec<NavigationRequest>,
	pub viewable: Vec<&'static str>,
}

impl Navigator for RecordingNavigator {
	fn can_resolve(&self, request: &NavigationRequest) -> bool {
		request
			.mime_type
			.is_some_and(|mime| self.viewable.contains(&mime))
	}

	fn navigate(&mut self, request: NavigationRequest) -> Result<(), NavigationError> {
		self.launched.push(request);
		Ok(())
	}
}

#[fixture]
pub fn navigator() -> RecordingNavigator {
	RecordingNavigator {
		launched: Vec::new(),
		viewable: vec!["application/pdf", "image/jpeg", "video/mp4"],
	}
}
