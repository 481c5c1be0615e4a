//! Parsed inbound links.

use std::collections::HashMap;
use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::{DeeplinkError, DeeplinkResult};

/// An inbound URI, decomposed once into the parts the router inspects.
///
/// The value is immutable: it is built from the raw URI at the start of a
/// dispatch and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingLink {
	raw: String,
	scheme: String,
	host: Option<String>,
	path: Option<String>,
	last_segment: Option<String>,
	query: HashMap<String, String>,
}

impl IncomingLink {
	/// Parses raw URI text.
	///
	/// ```rust
	/// use ehviewer_deeplink::IncomingLink;
	///
	/// let link = IncomingLink::parse("ehviewer://search?q=touhou").unwrap();
	/// assert_eq!(link.scheme(), "ehviewer");
	/// assert_eq!(link.host(), Some("search"));
	/// assert_eq!(link.query_param("q"), Some("touhou"));
	/// ```
	///
	/// # Errors
	///
	/// Returns `DeeplinkError::InvalidUri` if the text is not an absolute URI.
	pub fn parse(raw: &str) -> DeeplinkResult<Self> {
		let raw = raw.trim();
		let url = Url::parse(raw).map_err(|source| DeeplinkError::InvalidUri {
			uri: raw.to_string(),
			source,
		})?;
		Ok(Self {
			raw: raw.to_string(),
			path: Some(decode(written_path(raw))).filter(|p| !p.is_empty()),
			..Self::from(&url)
		})
	}

	/// The URI text as received, without surrounding whitespace.
	///
	/// Links built from a [`Url`] carry its serialization instead.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// The scheme, lower-cased.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// The host, if the URI has a non-empty authority host.
	pub fn host(&self) -> Option<&str> {
		self.host.as_deref()
	}

	/// The percent-decoded path, if non-empty.
	///
	/// For parsed text this is the path as written: dot segments are kept.
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// The last non-empty path segment, percent-decoded.
	pub fn last_path_segment(&self) -> Option<&str> {
		self.last_segment.as_deref()
	}

	/// The first value of the named query parameter.
	///
	/// Parameters present with an empty value are reported as missing.
	pub fn query_param(&self, name: &str) -> Option<&str> {
		self.query
			.get(name)
			.map(String::as_str)
			.filter(|value| !value.is_empty())
	}
}

impl From<&Url> for IncomingLink {
	fn from(url: &Url) -> Self {
		let path = Some(decode(url.path())).filter(|p| !p.is_empty());

		let last_segment = url
			.path_segments()
			.and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
			.map(decode);

		let mut query = HashMap::new();
		for (name, value) in url.query_pairs() {
			query
				.entry(name.into_owned())
				.or_insert_with(|| value.into_owned());
		}

		Self {
			raw: url.as_str().to_string(),
			scheme: url.scheme().to_ascii_lowercase(),
			host: url
				.host_str()
				.filter(|h| !h.is_empty())
				.map(str::to_string),
			path,
			last_segment,
			query,
		}
	}
}

impl std::str::FromStr for IncomingLink {
	type Err = DeeplinkError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for IncomingLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

/// The path component of absolute URI text, before any normalization.
fn written_path(raw: &str) -> &str {
	let rest = raw.split_once(':').map_or(raw, |(_, rest)| rest);
	let rest = match rest.strip_prefix("//") {
		Some(authority) => authority
			.find(['/', '?', '#'])
			.map_or("", |i| &authority[i..]),
		None => rest,
	};
	rest.find(['?', '#']).map_or(rest, |i| &rest[..i])
}

fn decode(input: &str) -> String {
	percent_decode_str(input).decode_utf8_lossy().into_owned()
}
