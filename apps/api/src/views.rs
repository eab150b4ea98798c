//! HTML pages. Dynamic text is always escaped before it is interpolated.

use axum::response::Html;

const STYLE: &str = "body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 16rem; }
.experience { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; border-radius: 4px; }";

/// GET /: job description form.
pub fn index_page() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume Optimizer</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Resume Optimizer</h1>
<form action="/optimize" method="post">
<label for="job_description">Paste the job description:</label>
<textarea id="job_description" name="job_description" required></textarea>
<button type="submit">Optimize</button>
</form>
</body>
</html>
"#
    ))
}

/// Result page showing the tailored experience section (or a failure message).
pub fn results_page(updated_experience: &str) -> Html<String> {
    let updated_experience = escape_html(updated_experience);
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Updated Experience</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Updated Experience</h1>
<div class="experience">{updated_experience}</div>
<p><a href="/">Optimize for another job</a></p>
</body>
</html>
"#
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&#34;x&#34;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("• 30% growth"), "• 30% growth");
    }

    #[test]
    fn test_index_page_posts_job_description() {
        let Html(page) = index_page();
        assert!(page.contains(r#"action="/optimize""#));
        assert!(page.contains(r#"method="post""#));
        assert!(page.contains(r#"name="job_description""#));
    }

    #[test]
    fn test_results_page_embeds_escaped_text() {
        let Html(page) = results_page("Tableau <em>expert</em>");
        assert!(page.contains("Tableau &lt;em&gt;expert&lt;/em&gt;"));
        assert!(!page.contains("<em>"));
    }
}
