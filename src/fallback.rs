use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;
use url::Url;

/// Online converters suggested when ffmpeg isn't installed.
pub const SERVICES: [(&str, &str); 2] = [
    ("CloudConvert", "https://cloudconvert.com/"),
    ("FreeConvert", "https://www.freeconvert.com/"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackService {
    pub name: &'static str,
    pub url: String,
}

fn extension_or(path: &Path, default: &str) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| default.to_string())
}

/// Page slug such as `mov-to-mp4`, derived from the file extensions.
///
/// Only plain alphanumeric extensions are used, anything else falls back to
/// `mov`/`mp4` so the slug is always a safe relative path segment.
pub fn conversion_slug(input: &Path, output: &Path) -> String {
    format!(
        "{}-to-{}",
        extension_or(input, "mov"),
        extension_or(output, "mp4")
    )
}

fn page_url(base: &str, slug: &str) -> Result<Url> {
    Url::parse(base)
        .and_then(|base| base.join(slug))
        .with_context(|| format!("Failed to build URL from {} and {}", base, slug))
}

/// Conversion page for one service, or its bare base URL if that can't be built.
pub fn service_url(name: &str, base: &str, slug: &str) -> String {
    match page_url(base, slug) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!("Using {} base URL: {:#}", name, e);
            base.to_string()
        }
    }
}

pub fn services_for(input: &Path, output: &Path) -> Vec<FallbackService> {
    let slug = conversion_slug(input, output);

    SERVICES
        .iter()
        .map(|(name, base)| FallbackService {
            name: *name,
            url: service_url(name, base, &slug),
        })
        .collect()
}
