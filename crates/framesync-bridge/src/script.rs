//! JavaScript snippet generation for the browser side of the protocol.
//!
//! The embedded page reports its size with a small injected script; the
//! host page applies a height with another. Both ship as generated strings
//! ready for script injection. Frame ids and style values are embedded as
//! JSON string literals, so arbitrary ids cannot break out of the snippet.

use framesync_common::FrameId;

use crate::document::px;

/// Serialize a value as a JavaScript string literal. JSON string escaping
/// is valid JS, including for quotes, backslashes, and control characters.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

// =============================================================================
// SNIPPET GENERATION
// =============================================================================

/// Generate the script injected into an embedded page.
///
/// On load and on every resize it posts `{ width, height, id }` to the
/// parent document. The report targets any parent origin; the receiving
/// side enforces its own allowlist before acting on it.
pub fn report_script(frame: &FrameId) -> String {
    let id = js_string(frame.as_str());
    let mut js = String::from("(function() {\n");
    js.push_str("  var report = function() {\n");
    js.push_str("    var doc = document.documentElement;\n");
    js.push_str(&format!(
        "    window.parent.postMessage({{ width: doc.scrollWidth, height: doc.scrollHeight, id: {id} }}, '*');\n"
    ));
    js.push_str("  };\n");
    js.push_str("  window.addEventListener('load', report);\n");
    js.push_str("  window.addEventListener('resize', report);\n");
    js.push_str("})();");
    js
}

/// Generate the host-page snippet that applies a height to one frame.
///
/// Mirrors the synchronizer's style write: look up the element by id and
/// set its height, doing nothing when the element is missing.
pub fn apply_height_script(frame: &FrameId, height: f64) -> String {
    let id = js_string(frame.as_str());
    let style = js_string(&px(height));
    format!(
        "(function() {{ \
        var el = document.getElementById({id}); \
        if (el) {{ el.style.height = {style}; }} \
        }})();"
    )
}

// =============================================================================
// TESTS
// =============================================================================
