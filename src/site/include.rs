use tracing::warn;

pub const HEADER_MOUNT: &str = r#"<div id="site-header"></div>"#;
pub const FOOTER_MOUNT: &str = r#"<div id="site-footer"></div>"#;

/// Replaces the header/footer mount points with their fragments.
/// A fragment that failed to load keeps the page's own fallback markup.
pub fn inject_fragments<E: std::fmt::Display>(
    page: &str,
    header: Result<String, E>,
    footer: Result<String, E>,
) -> String {
    let mut out = page.to_string();
    for (mount, fragment) in [(HEADER_MOUNT, header), (FOOTER_MOUNT, footer)] {
        match fragment {
            Ok(markup) => out = out.replacen(mount, &markup, 1),
            Err(e) => warn!(mount, "keeping fallback markup: {}", e),
        }
    }
    out
}
