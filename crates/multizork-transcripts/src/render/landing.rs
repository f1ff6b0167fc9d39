//! Landing page.

use pulldown_cmark::{Parser, html};

use super::page::{SiteConfig, close_document, open_document};

const LANDING_MARKDOWN: &str = include_str!("landing.md");

/// Renders the static landing page.
#[must_use]
pub fn render_landing(site: &SiteConfig) -> String {
    let mut out = open_document(site, None);
    html::push_html(&mut out, Parser::new(LANDING_MARKDOWN));
    close_document(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_landing_is_a_complete_document() {
        let page = render_landing(&SiteConfig::default());

        assert!(page.starts_with("<html><head><title>multizork</title>"));
        assert!(page.contains("<h1>multizork</h1>"));
        assert!(page.contains("<strong>annotated</strong>"));
        assert!(page.ends_with("</body></html>\n\n"));
    }
}
