use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use super::params::OutputFormat;

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// Escapes the characters that are significant in HTML text.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Body of a successful generation.
pub fn paragraphs_body(format: OutputFormat, paragraphs: &[String]) -> String {
	match format {
		OutputFormat::Html => paragraphs
			.iter()
			.map(|p| format!("<p>{}</p>", escape_html(p)))
			.collect::<Vec<_>>()
			.join("\n"),
		OutputFormat::Text => paragraphs.join("\n\n"),
	}
}

/// Body of a failed generation.
pub fn error_body(format: OutputFormat, message: &str) -> String {
	match format {
		OutputFormat::Html => format!("<p>Error: {}</p>", escape_html(message)),
		OutputFormat::Text => format!("Error: {message}"),
	}
}

fn content_type(format: OutputFormat) -> &'static str {
	match format {
		OutputFormat::Html => HTML,
		OutputFormat::Text => TEXT,
	}
}

pub fn render_paragraphs(format: OutputFormat, paragraphs: &[String]) -> HttpResponse {
	HttpResponse::Ok()
		.content_type(content_type(format))
		.body(paragraphs_body(format, paragraphs))
}

pub fn render_error(format: OutputFormat, status: StatusCode, message: &str) -> HttpResponse {
	HttpResponse::build(status)
		.content_type(content_type(format))
		.body(error_body(format, message))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn html_paragraphs() {
		let paragraphs = vec!["Lorem ipsum.".to_owned(), "Dolor <sit>.".to_owned()];
		assert_eq!(
			paragraphs_body(OutputFormat::Html, &paragraphs),
			"<p>Lorem ipsum.</p>\n<p>Dolor &lt;sit&gt;.</p>"
		);
	}

	#[test]
	fn text_paragraphs() {
		let paragraphs = vec!["A.".to_owned(), "B.".to_owned()];
		assert_eq!(paragraphs_body(OutputFormat::Text, &paragraphs), "A.\n\nB.");
	}

	#[test]
	fn error_bodies() {
		assert_eq!(
			error_body(OutputFormat::Html, "Invalid language. Use en, fr or es"),
			"<p>Error: Invalid language. Use en, fr or es</p>"
		);
		assert_eq!(error_body(OutputFormat::Text, "x & y"), "Error: x & y");
		assert_eq!(error_body(OutputFormat::Html, "x & y"), "<p>Error: x &amp; y</p>");
	}
}
