use web_sys::window;

/// Opens `url` in a new browsing context. When a popup blocker refuses, this
/// silently does nothing; the caller already showed its confirmation.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => log::debug!("Opened {}", url),
            Ok(None) | Err(_) => log::debug!("New tab was blocked for {}", url),
        }
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
