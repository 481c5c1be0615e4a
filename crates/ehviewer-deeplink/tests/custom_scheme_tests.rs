//! Custom scheme routing tests
//!
//! Tests for `ehviewer://` links covering:
//! - Happy path: every recognised host
//! - Fallbacks: missing segments and parameters, unknown hosts
//! - Edge cases: encoding, repeated parameters, trailing slashes
//! - Configuration: custom scheme names

use ehviewer_deeplink::{DeeplinkRouter, IncomingLink, RouteAction};
use rstest::*;

mod fixtures;
use fixtures::*;

// ============================================================================
// Happy Path Tests (正常系)
// ============================================================================

#[rstest]
fn test_gallery_link(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://gallery/42")),
		RouteAction::OpenGallery {
			id: "42".to_string()
		}
	);
}

#[rstest]
#[case("ehviewer://search?q=foo", Some("foo"))]
#[case("ehviewer://search", None)]
fn test_search_link(router: DeeplinkRouter, #[case] raw: &str, #[case] query: Option<&str>) {
	assert_eq!(
		router.route_str(Some(raw)),
		RouteAction::OpenSearch {
			query: query.map(str::to_string)
		}
	);
}

#[rstest]
#[case("ehviewer://download/123456", Some("123456"))]
#[case("ehviewer://download", None)]
fn test_download_link(router: DeeplinkRouter, #[case] raw: &str, #[case] id: Option<&str>) {
	assert_eq!(
		router.route_str(Some(raw)),
		RouteAction::OpenDownload {
			id: id.map(str::to_string)
		}
	);
}

#[rstest]
fn test_settings_link(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://settings")),
		RouteAction::OpenSettings
	);
}

#[rstest]
fn test_browser_link(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some(
			"ehviewer://browser?url=https%3A%2F%2Fexample.com%2Fpage%3Fa%3D1"
		)),
		RouteAction::OpenBrowser {
			url: "https://example.com/page?a=1".to_string()
		}
	);
}

#[rstest]
fn test_file_link(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://file?path=/storage/emulated/0/book.pdf")),
		RouteAction::OpenFile {
			path: "/storage/emulated/0/book.pdf".to_string()
		}
	);
}

// ============================================================================
// Fallback Tests (異常系)
// ============================================================================

#[rstest]
#[case("ehviewer://gallery")]
#[case("ehviewer://gallery/")]
#[case("ehviewer://browser")]
#[case("ehviewer://browser?url=")]
#[case("ehviewer://file")]
#[case("ehviewer://file?path=")]
#[case("ehviewer://history/1")]
#[case("ehviewer:settings")]
#[case("ehviewer://unknown?q=日本 語")]
#[case("EHVIEWER://history/1#top")]
fn test_fallback_carries_link(router: DeeplinkRouter, #[case] raw: &str) {
	let link = IncomingLink::parse(raw).unwrap();
	assert_eq!(
		router.route(Some(&link)),
		RouteAction::OpenMain {
			original_uri: Some(raw.to_string())
		}
	);
}

#[rstest]
fn test_absent_link(router: DeeplinkRouter) {
	assert_eq!(
		router.route(None),
		RouteAction::OpenMain { original_uri: None }
	);
}

// ============================================================================
// Edge Cases Tests (エッジケース)
// ============================================================================

#[rstest]
fn test_gallery_uses_last_segment(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://gallery/g/123/abcdef/")),
		RouteAction::OpenGallery {
			id: "abcdef".to_string()
		}
	);
}

#[rstest]
fn test_search_query_is_decoded(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://search?q=female%3Aglasses+artist")),
		RouteAction::OpenSearch {
			query: Some("female:glasses artist".to_string())
		}
	);
}

#[rstest]
fn test_first_parameter_wins(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://search?q=one&q=two")),
		RouteAction::OpenSearch {
			query: Some("one".to_string())
		}
	);
}

#[rstest]
fn test_uppercase_scheme(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("EHVIEWER://settings")),
		RouteAction::OpenSettings
	);
}

#[rstest]
fn test_unrelated_parameters_ignored(router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehviewer://settings?tab=download")),
		RouteAction::OpenSettings
	);
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[rstest]
fn test_configured_scheme(#[from(custom_router)] router: DeeplinkRouter) {
	assert_eq!(
		router.route_str(Some("ehv://gallery/5")),
		RouteAction::OpenGallery {
			id: "5".to_string()
		}
	);
	assert!(router.route_str(Some("ehviewer://gallery/5")).is_main());
}
