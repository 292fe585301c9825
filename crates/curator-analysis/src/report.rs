//! Standalone HTML rendering of an analysis report.

use std::fmt::Write as _;

/// Title of the rendered report document.
#[must_use]
pub fn report_title(brand_name: &str) -> String {
    format!("Brand Monitoring Analysis - {brand_name}")
}

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the report as a self-contained HTML page: the brand in the title and
/// the report text, escaped, in a single `<pre>` block.
#[must_use]
pub fn render_report_html(brand_name: &str, analysis: &str) -> String {
    let mut html = String::with_capacity(analysis.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "    <title>{}</title>",
        escape_html(&report_title(brand_name))
    );
    html.push_str(
        "    <style>
      body {
        font-family: 'Courier New', monospace;
        max-width: 800px;
        margin: 20px auto;
        padding: 20px;
        background: #f5f5f5;
        line-height: 1.6;
      }
      pre {
        background: white;
        padding: 20px;
        border-radius: 8px;
        box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        white-space: pre-wrap;
        word-wrap: break-word;
      }
    </style>
  </head>
  <body>
",
    );
    let _ = writeln!(html, "    <pre>{}</pre>", escape_html(analysis));
    html.push_str("  </body>\n</html>\n");
    html
}
