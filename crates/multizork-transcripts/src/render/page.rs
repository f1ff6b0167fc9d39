//! Document shell, escaping and formatting shared by every page.

use chrono::DateTime;

/// Read-only site settings every page is rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Path prefix the site is served under: empty, or `/x` without a
    /// trailing slash.
    pub base_path: String,
    /// Document title prefix.
    pub title: String,
}

impl SiteConfig {
    /// Creates a site config, normalising `base_path`.
    #[must_use]
    pub fn new(base_path: &str, title: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self {
            base_path,
            title: title.to_owned(),
        }
    }

    /// Absolute link to `path` under the base path. `path` must not start
    /// with a slash.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        format!("{}/{path}", self.base_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("", "multizork")
    }
}

const STYLE: &str = "<style>
.gameoutput { color: #222222; }
.userinput { color: #0645ad; font-weight: bold; }
.sysmessage { color: #777777; font-style: italic; }
.transcript { font-family: monospace; }
.crashed { color: #bb0000; font-weight: bold; margin-top: 1em; }
</style>
";

/// Escapes the HTML metacharacters `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Formats Unix seconds as `mm/dd/yy HH:MM:SS UTC`.
///
/// Values chrono cannot represent are printed as the raw number.
#[must_use]
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0).map_or_else(
        || secs.to_string(),
        |t| t.format("%m/%d/%y %H:%M:%S UTC").to_string(),
    )
}

/// Starts a document; the title is `site.title`, plus ` - subtitle` if given.
pub(crate) fn open_document(site: &SiteConfig, subtitle: Option<&str>) -> String {
    let mut title = escape_html(&site.title);
    if let Some(subtitle) = subtitle {
        title.push_str(" - ");
        title.push_str(&escape_html(subtitle));
    }
    format!("<html><head><title>{title}</title>\n{STYLE}</head><body>\n")
}

pub(crate) fn close_document(out: &mut String) {
    out.push_str("</body></html>\n\n");
}

/// Minimal error page naming the status line and a fixed message.
#[must_use]
pub fn error_document(site: &SiteConfig, status_line: &str, message: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>\n<p><h1>{}</h1></p>\n\n<p>{}</p>\n\n</body></html>\n",
        escape_html(&site.title),
        escape_html(status_line),
        escape_html(message),
    )
}
