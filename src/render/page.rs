//! Page shell

use super::escape::escape_attr;

/// Full HTML document around `contents`
pub fn page(title: &str, contents: &str, htmx_src: &str) -> String {
    format!(
        r#"<!doctype html>
<html class="no-js" lang="">
    <head>
        <meta charset="utf-8" />
        <meta http-equiv="x-ua-compatible" content="ie=edge" />
        <title>{}</title>
        <meta name="description" content="Randomly generated flags" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <link rel="stylesheet" href="site.css" />
    </head>
    <body>
        {}
        <script src="{}"></script>
    </body>
</html>
"#,
        escape_attr(title),
        contents,
        escape_attr(htmx_src),
    )
}

/// Intro HTML followed by the flag
pub fn page_body(forward: &str, flag: &str) -> String {
    format!("<main>{} {}</main>", forward, flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shell() {
        let html = page("Flag generator", "<main></main>", "/htmx.js");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Flag generator</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="site.css" />"#));
        assert!(html.contains(r#"<script src="/htmx.js"></script>"#));
        assert!(html.contains("<main></main>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_title_escaped() {
        let html = page("<b>Flags</b>", "", "/htmx.js");
        assert!(html.contains("<title>&lt;b&gt;Flags&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_page_body() {
        assert_eq!(page_body("<p>hi</p>", "<svg></svg>"), "<main><p>hi</p> <svg></svg></main>");
    }
}
