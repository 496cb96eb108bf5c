use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::ScrapedPage;

/// Character budget for content handed to the model.
pub const MAX_CONTENT_LENGTH: usize = 4000;
/// Pages yielding less text than this are considered unscrapable.
pub const MIN_CONTENT_LENGTH: usize = 200;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("extraction pattern is a valid regex")
}

// Title patterns tried in order; the first heading wins over the document
// <title>, which carries a trailing "- Wikipedia" suffix trimmed at the dash.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r#"<h1[^>]*class="firstHeading"[^>]*>([^<]+)</h1>"#),
        pattern(
            r#"<h1[^>]*>\s*<span[^>]*class="mw-page-title-main"[^>]*>([^<]+)</span>\s*</h1>"#,
        ),
        pattern(r#"<title>([^-]+)-[^<]*</title>"#),
    ]
});

// Content-region patterns tried in order: each captures the HTML between a
// recognized main-content container opening and a boundary element.
static CONTENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(
            r#"(?s)<div[^>]*id="mw-content-text"[^>]*class="mw-body-content"[^>]*>(.*?)<div[^>]*id="mw-navigation""#,
        ),
        pattern(r#"(?s)<div[^>]*id="bodyContent"[^>]*>(.*?)<div[^>]*id="footer""#),
        pattern(r#"(?s)<main[^>]*id="content"[^>]*>(.*?)</main>"#),
        pattern(r#"(?s)<div[^>]*role="main"[^>]*>(.*?)</div>"#),
    ]
});

static BODY_PATTERN: Lazy<Regex> = Lazy::new(|| pattern(r"(?s)<body[^>]*>(.*?)</body>"));

// Noise blocks removed whole: scripts, styles, citation superscripts, navbox
// and edit-section containers, and tables.
static NOISE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"(?is)<script[^>]*>.*?</script>"),
        pattern(r"(?is)<style[^>]*>.*?</style>"),
        pattern(r"(?is)<sup[^>]*>.*?</sup>"),
        pattern(r#"(?is)<div[^>]*class="[^"]*navbox[^"]*"[^>]*>.*?</div>"#),
        pattern(r#"(?is)<div[^>]*class="[^"]*mw-editsection[^"]*"[^>]*>.*?</div>"#),
        pattern(r"(?is)<table[^>]*>.*?</table>"),
    ]
});

static TEMPLATE_MARKERS: Lazy<Regex> = Lazy::new(|| pattern(r"\{\{[^}]*\}\}"));
static MARKUP_TAGS: Lazy<Regex> = Lazy::new(|| pattern(r"<[^>]+>"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| pattern(r"\s+"));
static SENTENCE_SPANS: Lazy<Regex> = Lazy::new(|| pattern(r"[^.!?]+[.!?]+"));

/// Pulls title and normalized plain text out of raw Wikipedia HTML. Returns
/// `None` when the cleaned content is too short to quiz on.
pub fn extract_article(html: &str) -> Option<ScrapedPage> {
    let title = resolve_title(html);

    let region = resolve_content_region(html).unwrap_or("");
    let content = strip_noise(region);

    if content.chars().count() < MIN_CONTENT_LENGTH {
        return None;
    }

    let content = truncate_to_sentences(&content, MAX_CONTENT_LENGTH);

    Some(ScrapedPage { title, content })
}

fn resolve_title(html: &str) -> String {
    for re in TITLE_PATTERNS.iter() {
        if let Some(captures) = re.captures(html) {
            if let Some(m) = captures.get(1) {
                return m.as_str().trim().to_string();
            }
        }
    }
    "Article".to_string()
}

fn resolve_content_region(html: &str) -> Option<&str> {
    // First matching pattern wins, but a match that captured nothing is
    // treated the same as no match at all.
    let region = CONTENT_PATTERNS
        .iter()
        .find_map(|re| re.captures(html))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|region| !region.is_empty());

    // No recognized container: fall back to the whole document body.
    region.or_else(|| {
        BODY_PATTERN
            .captures(html)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    })
}

fn strip_noise(fragment: &str) -> String {
    let mut content = fragment.to_string();

    for re in NOISE_PATTERNS.iter() {
        content = re.replace_all(&content, "").into_owned();
    }

    let content = TEMPLATE_MARKERS.replace_all(&content, "");
    let content = MARKUP_TAGS.replace_all(&content, " ");
    let content = content
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"");
    let content = WHITESPACE_RUNS.replace_all(&content, " ");

    content.trim().to_string()
}

/// Bounds content to `max_len` characters, preferring sentence boundaries.
/// Sentences are accumulated until the next one would exceed the budget; if
/// none fit, the fallback is a hard character slice of the original content.
pub fn truncate_to_sentences(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        return content.to_string();
    }

    let mut result = String::new();
    let mut result_chars = 0;

    for span in SENTENCE_SPANS.find_iter(content) {
        let sentence = span.as_str();
        let sentence_chars = sentence.chars().count();
        if result_chars + sentence_chars > max_len {
            break;
        }
        result.push_str(sentence);
        result_chars += sentence_chars;
    }

    let result = result.trim().to_string();
    if result.is_empty() {
        content.chars().take(max_len).collect()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{filler_sentences, wikipedia_page};

    #[test]
    fn extracts_title_and_content_from_standard_page() {
        let html = wikipedia_page("Ada Lovelace", &filler_sentences(30));

        let page = extract_article(&html).expect("standard page should extract");

        assert_eq!(page.title, "Ada Lovelace");
        assert!(page.content.contains("Sentence 0 of the article body."));
        assert!(!page.content.contains('<'));
    }

    #[test]
    fn first_heading_title_wins_over_document_title() {
        let html = format!(
            r#"<html><head><title>Other Name - Wikipedia</title></head><body>
            <h1 class="firstHeading">Ada Lovelace</h1>
            <div id="bodyContent"><p>{}</p></div><div id="footer"></div>
            </body></html>"#,
            filler_sentences(30)
        );

        let page = extract_article(&html).expect("page should extract");
        assert_eq!(page.title, "Ada Lovelace");
    }

    #[test]
    fn document_title_is_trimmed_at_dash() {
        let html = format!(
            r#"<html><head><title>Ada Lovelace - Wikipedia</title></head><body>
            <div id="bodyContent"><p>{}</p></div><div id="footer"></div>
            </body></html>"#,
            filler_sentences(30)
        );

        let page = extract_article(&html).expect("page should extract");
        assert_eq!(page.title, "Ada Lovelace");
    }

    #[test]
    fn title_defaults_to_article_when_nothing_matches() {
        let html = format!(
            "<html><body><div id=\"bodyContent\"><p>{}</p></div><div id=\"footer\"></div></body></html>",
            filler_sentences(30)
        );

        let page = extract_article(&html).expect("page should extract");
        assert_eq!(page.title, "Article");
    }

    #[test]
    fn falls_back_to_body_when_no_content_container_matches() {
        let html = format!(
            "<html><body><p>{}</p></body></html>",
            filler_sentences(30)
        );

        let page = extract_article(&html).expect("body fallback should extract");
        assert!(page.content.contains("Sentence 0 of the article body."));
    }

    #[test]
    fn empty_content_container_falls_back_to_body() {
        let html = format!(
            r#"<html><body><div role="main"></div><p>{}</p></body></html>"#,
            filler_sentences(30)
        );

        let page = extract_article(&html).expect("body fallback should extract");
        assert!(page.content.contains("Sentence 0 of the article body."));
    }

    #[test]
    fn short_content_is_unscrapable() {
        let html = "<html><body><div id=\"bodyContent\"><p>Too short.</p></div>\
                    <div id=\"footer\"></div></body></html>";

        assert!(extract_article(html).is_none());
    }

    #[test]
    fn noise_blocks_are_removed() {
        let body = format!(
            r#"<script>var x = 1;</script>
            <style>.a {{ color: red; }}</style>
            <p>{}</p>
            <sup class="reference">[1]</sup>
            <div class="navbox inner">Navigation links</div>
            <div class="mw-editsection">edit</div>
            <table class="infobox"><tr><td>Born 1815</td></tr></table>
            {{{{citation needed}}}}"#,
            filler_sentences(30)
        );
        let html = wikipedia_page("Ada Lovelace", &body);

        let page = extract_article(&html).expect("page should extract");

        assert!(!page.content.contains("var x"));
        assert!(!page.content.contains("color: red"));
        assert!(!page.content.contains("[1]"));
        assert!(!page.content.contains("Navigation links"));
        assert!(!page.content.contains("edit"));
        assert!(!page.content.contains("Born 1815"));
        assert!(!page.content.contains("citation needed"));
    }

    #[test]
    fn entities_are_decoded_and_whitespace_collapsed() {
        let body = format!(
            "<p>Babbage&nbsp;&amp;&nbsp;Lovelace said &quot;notes&quot;.</p>\n\n  <p>{}</p>",
            filler_sentences(30)
        );
        let html = wikipedia_page("Ada Lovelace", &body);

        let page = extract_article(&html).expect("page should extract");

        assert!(page.content.contains(r#"Babbage & Lovelace said "notes"."#));
        assert!(!page.content.contains("  "));
    }

    #[test]
    fn truncate_passes_through_content_within_budget() {
        let content = "Short enough.";
        assert_eq!(truncate_to_sentences(content, 4000), content);
    }

    #[test]
    fn truncate_ends_at_sentence_boundary_within_budget() {
        let content = filler_sentences(300);
        assert!(content.chars().count() > MAX_CONTENT_LENGTH);

        let truncated = truncate_to_sentences(&content, MAX_CONTENT_LENGTH);

        assert!(truncated.chars().count() <= MAX_CONTENT_LENGTH);
        assert!(truncated.ends_with('.'));
        // The next sentence would not have fit.
        assert!(content.starts_with(truncated.trim_end()));
    }

    #[test]
    fn truncate_hard_slices_content_without_terminators() {
        let content = "word ".repeat(2000);
        let truncated = truncate_to_sentences(&content, MAX_CONTENT_LENGTH);

        assert_eq!(truncated.chars().count(), MAX_CONTENT_LENGTH);
        assert_eq!(truncated, &content[..MAX_CONTENT_LENGTH]);
    }

    #[test]
    fn truncate_hard_slices_when_first_sentence_exceeds_budget() {
        let content = format!("{}.", "a".repeat(5000));
        let truncated = truncate_to_sentences(&content, MAX_CONTENT_LENGTH);

        assert_eq!(truncated.chars().count(), MAX_CONTENT_LENGTH);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let content = "é".repeat(10);
        let truncated = truncate_to_sentences(&content, 5);

        assert_eq!(truncated, "é".repeat(5));
    }
}
