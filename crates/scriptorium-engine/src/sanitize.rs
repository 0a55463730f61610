//! # URL sanitisation
//!
//! Every href and src the parsers discover passes through [`safe_url`] or
//! [`safe_image_src`] before it reaches a node. The classification itself is
//! [`sanitize_url`], which never fails: rejected input yields a result with
//! `is_safe == false` and the fallback `"#"`.
//!
//! ## Classification order
//!
//! 1. Empty or whitespace-only input is rejected.
//! 2. The input is percent-decoded repeatedly (at most [`MAX_DECODE_PASSES`])
//!    and control characters are stripped, so nested encodings cannot hide a
//!    scheme.
//! 3. Script-capable schemes (`javascript:`, `vbscript:`, `file:`) and
//!    non-image `data:` URIs are rejected, compared case-insensitively with
//!    all whitespace removed.
//! 4. Relative and protocol-relative references are accepted.
//! 5. Absolute URLs are accepted only for `http`, `https`, `mailto` and `tel`.
//! 6. Anything `url` cannot parse is accepted only when it looks like a plain
//!    relative path.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Replacement emitted in place of any rejected URL.
pub const FALLBACK_URL: &str = "#";

/// Upper bound on percent-decoding passes.
pub const MAX_DECODE_PASSES: usize = 5;

const DANGEROUS_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "file:"];

static SAFE_DATA_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/(png|jpeg|jpg|gif|webp|svg\+xml);base64,")
        .expect("data image pattern is valid")
});

static RELATIVE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\-._~/?#&=%+@,;!]+$").expect("relative path pattern is valid")
});

/// The scheme family of an accepted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlProtocol {
    /// `/path`, `#anchor`, `?query`, `./x`, `../x` or a bare path token.
    Relative,
    /// `//host/path`, inherits the page scheme.
    ProtocolRelative,
    Http,
    Https,
    Mailto,
    Tel,
    /// `data:image/...;base64,` only.
    Data,
}

impl UrlProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlProtocol::Relative => "relative",
            UrlProtocol::ProtocolRelative => "//",
            UrlProtocol::Http => "http:",
            UrlProtocol::Https => "https:",
            UrlProtocol::Mailto => "mailto:",
            UrlProtocol::Tel => "tel:",
            UrlProtocol::Data => "data:",
        }
    }
}

/// Why a URL was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlRejection {
    #[error("empty URL")]
    Empty,
    #[error("dangerous protocol detected: {0}")]
    DangerousProtocol(&'static str),
    #[error("data URI is not an allowed image type")]
    UnsafeDataUri,
    #[error("blocked protocol: {0}")]
    BlockedProtocol(String),
    #[error("invalid URL format")]
    InvalidFormat,
}

/// Outcome of [`sanitize_url`].
///
/// `url` is always usable as-is: the cleaned input when safe, [`FALLBACK_URL`]
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedUrl {
    pub is_safe: bool,
    pub url: String,
    pub protocol: Option<UrlProtocol>,
    pub error: Option<UrlRejection>,
}

impl SanitizedUrl {
    fn accepted(url: &str, protocol: UrlProtocol) -> Self {
        Self {
            is_safe: true,
            url: url.to_string(),
            protocol: Some(protocol),
            error: None,
        }
    }

    fn rejected(error: UrlRejection) -> Self {
        Self {
            is_safe: false,
            url: FALLBACK_URL.to_string(),
            protocol: None,
            error: Some(error),
        }
    }
}

/// Classifies and cleans a URL.
pub fn sanitize_url(input: Option<&str>) -> SanitizedUrl {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return SanitizedUrl::rejected(UrlRejection::Empty);
    };

    let decoded: String = decode_repeatedly(raw)
        .chars()
        .filter(|c| !matches!(*c, '\u{0}'..='\u{1f}'))
        .collect();
    let cleaned = decoded.trim();
    if cleaned.is_empty() {
        return SanitizedUrl::rejected(UrlRejection::Empty);
    }

    let probe: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if let Some(scheme) = DANGEROUS_SCHEMES
        .into_iter()
        .find(|scheme| probe.starts_with(scheme))
    {
        return SanitizedUrl::rejected(UrlRejection::DangerousProtocol(scheme));
    }
    if probe.starts_with("data:") {
        return if SAFE_DATA_IMAGE.is_match(&probe) {
            SanitizedUrl::accepted(cleaned, UrlProtocol::Data)
        } else {
            SanitizedUrl::rejected(UrlRejection::UnsafeDataUri)
        };
    }

    if cleaned.starts_with("//") {
        return SanitizedUrl::accepted(cleaned, UrlProtocol::ProtocolRelative);
    }
    if cleaned.starts_with(['/', '#', '?']) || cleaned.starts_with("./") || cleaned.starts_with("../")
    {
        return SanitizedUrl::accepted(cleaned, UrlProtocol::Relative);
    }

    match url::Url::parse(cleaned) {
        Ok(parsed) => match parsed.scheme() {
            "http" => SanitizedUrl::accepted(cleaned, UrlProtocol::Http),
            "https" => SanitizedUrl::accepted(cleaned, UrlProtocol::Https),
            "mailto" => SanitizedUrl::accepted(cleaned, UrlProtocol::Mailto),
            "tel" => SanitizedUrl::accepted(cleaned, UrlProtocol::Tel),
            other => SanitizedUrl::rejected(UrlRejection::BlockedProtocol(format!("{other}:"))),
        },
        Err(_) if RELATIVE_PATH.is_match(cleaned) => {
            SanitizedUrl::accepted(cleaned, UrlProtocol::Relative)
        }
        Err(_) => SanitizedUrl::rejected(UrlRejection::InvalidFormat),
    }
}

/// Returns a URL that is always safe to emit for a link target.
pub fn safe_url(input: &str) -> String {
    let result = sanitize_url(Some(input));
    if let Some(error) = &result.error {
        log::warn!("rejected link URL {input:?}: {error}");
    }
    result.url
}

/// Returns a URL that is always safe to emit for an image source.
pub fn safe_image_src(input: &str) -> String {
    let result = sanitize_url(Some(input));
    if let Some(error) = &result.error {
        log::warn!("rejected image source {input:?}: {error}");
    }
    result.url
}

fn decode_repeatedly(raw: &str) -> String {
    let mut current = raw.to_string();
    for _ in 0..MAX_DECODE_PASSES {
        match urlencoding::decode(&current) {
            Ok(next) if next != current => current = next.into_owned(),
            _ => break,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("javascript:alert(1)")]
    #[case("  JaVaScRiPt:alert(1)")]
    #[case("java\tscript:alert(1)")]
    #[case("java\u{0}script:alert(1)")]
    #[case("vbscript:msgbox(1)")]
    #[case("file:///etc/passwd")]
    #[case("data:text/html,<script>")]
    #[case("data:image/svg+xml,<svg onload=alert(1)>")]
    #[case("javascript%3Aalert(1)")]
    #[case("javascript%253Aalert(1)")]
    fn rejects_script_injection(#[case] input: &str) {
        let result = sanitize_url(Some(input));
        assert!(!result.is_safe, "{input:?} should be rejected");
        assert_eq!(result.url, "#");
        assert!(result.error.is_some());
    }

    #[rstest]
    #[case("/about", UrlProtocol::Relative)]
    #[case("#section", UrlProtocol::Relative)]
    #[case("?page=2", UrlProtocol::Relative)]
    #[case("../up/one", UrlProtocol::Relative)]
    #[case("//cdn.example.com/a.js", UrlProtocol::ProtocolRelative)]
    #[case("https://example.com", UrlProtocol::Https)]
    #[case("http://example.com/x?y=1", UrlProtocol::Http)]
    #[case("mailto:a@b.com", UrlProtocol::Mailto)]
    #[case("tel:+15551234", UrlProtocol::Tel)]
    #[case("data:image/png;base64,AAAA", UrlProtocol::Data)]
    #[case("blog/post-1", UrlProtocol::Relative)]
    fn accepts_ordinary_links(#[case] input: &str, #[case] protocol: UrlProtocol) {
        let result = sanitize_url(Some(input));
        assert!(result.is_safe, "{input:?} should be accepted");
        assert_eq!(result.url, input);
        assert_eq!(result.protocol, Some(protocol));
        assert_eq!(result.error, None);
    }

    #[test]
    fn preserves_decoded_form() {
        let result = sanitize_url(Some("/a%20b"));
        assert!(result.is_safe);
        assert_eq!(result.url, "/a b");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   \t"))]
    fn empty_input_is_unsafe(#[case] input: Option<&str>) {
        let result = sanitize_url(input);
        assert!(!result.is_safe);
        assert_eq!(result.url, "#");
        assert_eq!(result.error, Some(UrlRejection::Empty));
    }

    #[test]
    fn unknown_scheme_is_blocked() {
        let result = sanitize_url(Some("ftp://files.example.com"));
        assert!(!result.is_safe);
        assert_eq!(
            result.error,
            Some(UrlRejection::BlockedProtocol("ftp:".to_string()))
        );
    }

    #[test]
    fn unparseable_garbage_is_invalid() {
        let result = sanitize_url(Some("<not a url>"));
        assert!(!result.is_safe);
        assert_eq!(result.error, Some(UrlRejection::InvalidFormat));
    }

    #[test]
    fn accessors_never_fail() {
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(""), "#");
        assert_eq!(safe_url("/ok"), "/ok");
        assert_eq!(safe_image_src("data:image/webp;base64,UklG"), "data:image/webp;base64,UklG");
    }

    #[test]
    fn protocol_tags_render_with_colon() {
        assert_eq!(UrlProtocol::Https.as_str(), "https:");
        assert_eq!(UrlProtocol::Data.as_str(), "data:");
    }
}
