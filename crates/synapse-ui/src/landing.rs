//! Marketing landing page.
//!
//! The page is fully static: a single self-contained HTML file with its CSS
//! inlined, embedded at compile time and served from `/`.

/// The complete landing page HTML.
pub const LANDING_HTML: &str = include_str!("../assets/landing.html");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_html_is_valid_html() {
        assert!(LANDING_HTML.starts_with("<!DOCTYPE html>"));
        assert!(LANDING_HTML.contains("<html"));
        assert!(LANDING_HTML.contains("</html>"));
    }

    #[test]
    fn landing_html_has_embedded_css() {
        assert!(LANDING_HTML.contains("<style>"));
        assert!(LANDING_HTML.contains("</style>"));
    }

    #[test]
    fn landing_html_has_hero_and_features() {
        assert!(LANDING_HTML.contains("Unlock Your Potential with AI Conversation"));
        assert!(LANDING_HTML.contains("Intelligent Assistance"));
        assert!(LANDING_HTML.contains("Secure &amp; Reliable"));
        assert!(LANDING_HTML.contains("Instant Solutions"));
    }

    #[test]
    fn landing_html_links_to_chat() {
        assert!(LANDING_HTML.contains("href=\"/chat\""));
    }

    #[test]
    fn landing_html_has_no_external_urls() {
        assert!(!LANDING_HTML.contains("https://cdn"));
        assert!(!LANDING_HTML.contains("https://fonts.googleapis"));
    }
}
