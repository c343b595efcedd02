//! Server-rendered HTML views.
//!
//! Responsibilities:
//! - Render the record table and the creation form as complete documents.
//! - Escape every dynamic value before it reaches the markup.
//!
//! Does NOT handle:
//! - HTTP status codes or headers (see handlers module).

mod form;
mod list;

pub use form::render_form;
pub use list::render_list;

/// Title of the record table page.
pub const LIST_TITLE: &str = "Custom Objects Table | IWH-I Practicum";

/// Title of the creation form page.
pub const FORM_TITLE: &str = "Update Custom Object Form | Integrating With HubSpot I Practicum";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            r#"<p class="error" role="alert">{}</p>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<nav class="nav"><span class="brand">Custom Objects</span><a href="/">Records</a><a href="/update-cobj">Add record</a></nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_layout_links_stylesheet_and_title() {
        let html = layout(LIST_TITLE, "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Custom Objects Table | IWH-I Practicum</title>"));
        assert!(html.contains(r#"href="/css/style.css""#));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_error_banner() {
        assert_eq!(error_banner(None), "");
        assert!(error_banner(Some("<boom>")).contains("&lt;boom&gt;"));
    }
}
