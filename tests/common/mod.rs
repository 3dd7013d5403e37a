//! Test utilities and helper functions for the tablenav test suite

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified body content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Builds a plain `<table>` from rows of cell text, all cells `<td>`
#[allow(dead_code)]
pub fn table_html(rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Elements of a parsed document matching `selector`
#[allow(dead_code)]
pub fn select<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(selector).expect("test selector is valid");
    document.select(&selector).collect()
}

/// Attribute value of an element, or the empty string
#[allow(dead_code)]
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> &'a str {
    element.value().attr(name).unwrap_or("")
}

/// Concatenated text of an element, trimmed
#[allow(dead_code)]
pub fn text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
