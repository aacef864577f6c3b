//! Client Configuration
//!
//! Read once from `<meta name=".." content="..">` tags in the host page.

use leptos::logging::warn;
use url::Url;

use leptos_dragdrop::DRAG_THRESHOLD_PX;

/// Meta tag holding the REST API base URL
pub const META_API_BASE: &str = "todo-api-base";
/// Meta tag holding the drag start threshold in pixels
pub const META_DRAG_THRESHOLD: &str = "todo-drag-threshold";

/// Used when the page origin itself is unusable (e.g. `file://`)
const FALLBACK_ORIGIN: &str = "http://127.0.0.1:8000/";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Always ends with `/` so relative joins stay under it
    pub api_base: Url,
    pub drag_threshold_px: i32,
}

impl ClientConfig {
    /// Build from the page origin plus `(meta name, content)` pairs.
    /// Unknown keys are ignored, bad values fall back to defaults.
    pub fn from_pairs<'a>(origin: &Url, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = Self {
            api_base: with_trailing_slash(origin.clone()),
            drag_threshold_px: DRAG_THRESHOLD_PX,
        };

        for (key, value) in pairs {
            let value = value.trim();
            match key {
                META_API_BASE => match origin.join(value) {
                    Ok(url) => config.api_base = with_trailing_slash(url),
                    Err(e) => warn!("[CONFIG] ignoring {}={:?}: {}", key, value, e),
                },
                META_DRAG_THRESHOLD => match value.parse::<i32>() {
                    Ok(px) if px >= 0 => config.drag_threshold_px = px,
                    _ => warn!("[CONFIG] ignoring {}={:?}: expected a non-negative integer", key, value),
                },
                _ => {}
            }
        }
        config
    }

    /// Read the configuration from the current document
    pub fn from_document() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .and_then(|o| Url::parse(&o).ok())
            .filter(|u| !u.cannot_be_a_base())
            .unwrap_or_else(|| {
                warn!("[CONFIG] page origin unusable, falling back to {}", FALLBACK_ORIGIN);
                Url::parse(FALLBACK_ORIGIN).expect("fallback origin is a valid url")
            });

        let document = web_sys::window().and_then(|w| w.document());
        let pairs: Vec<(&str, String)> = [META_API_BASE, META_DRAG_THRESHOLD]
            .into_iter()
            .filter_map(|name| {
                let selector = format!("meta[name=\"{}\"]", name);
                let content = document
                    .as_ref()?
                    .query_selector(&selector)
                    .ok()??
                    .get_attribute("content")?;
                Some((name, content))
            })
            .collect();

        Self::from_pairs(&origin, pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }

    /// Absolute URL for an API path such as `todos/5`
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.api_base.join(path.trim_start_matches('/'))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
