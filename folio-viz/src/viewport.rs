//! Viewport size and device classification.
//!
//! The layout solver and the presentation constants only ever need one
//! boolean: is this a compact (narrow/mobile) viewport? The classification is
//! a pure function over width and user agent so it can be tested natively;
//! thin helpers sample the live values from the browser.

use web_sys::Window;

/// Viewports narrower than this are compact regardless of user agent.
pub const COMPACT_MAX_WIDTH: f32 = 768.0;

/// User-agent fragments that mark a device as compact at any width.
const MOBILE_UA_NEEDLES: &[&str] = &["android", "iphone", "ipad", "ipod", "mobile"];

/// Classify the viewport. Width wins; the user agent catches wide tablets.
pub fn is_compact(width: f32, user_agent: &str) -> bool {
    if width < COMPACT_MAX_WIDTH {
        return true;
    }
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_NEEDLES.iter().any(|needle| ua.contains(needle))
}

/// Current inner viewport size in CSS pixels.
pub fn window_size(window: &Window) -> Result<(f32, f32), String> {
    let width = window
        .inner_width()
        .map_err(|e| format!("failed to read viewport width: {e:?}"))?
        .as_f64()
        .ok_or("viewport width is not a number")?;
    let height = window
        .inner_height()
        .map_err(|e| format!("failed to read viewport height: {e:?}"))?
        .as_f64()
        .ok_or("viewport height is not a number")?;
    Ok((width as f32, height as f32))
}

/// The browser's user-agent string.
pub fn user_agent(window: &Window) -> Result<String, String> {
    window
        .navigator()
        .user_agent()
        .map_err(|e| format!("failed to read user agent: {e:?}"))
}
