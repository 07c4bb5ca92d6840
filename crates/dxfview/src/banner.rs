//! Startup banner rendering.

/// Spaces between the frame and the title on each side.
const PADDING: usize = 2;

/// Render the banner printed when the server comes up.
///
/// The opening line is only included when the browser target differs from
/// the server root URL.
pub fn render(title: &str, server_url: &str, open_url: &str) -> String {
    let inner = title.chars().count() + PADDING * 2;
    let pad = " ".repeat(PADDING);

    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(inner)));
    out.push_str(&format!("║{pad}{title}{pad}║\n"));
    out.push_str(&format!("╚{}╝\n", "═".repeat(inner)));
    out.push('\n');
    out.push_str(&format!("Server: {server_url}\n"));
    if open_url != server_url {
        out.push_str(&format!("\nOpening: {open_url}\n"));
    }
    out.push_str("\nPress Ctrl+C to stop.\n");

    out
}
