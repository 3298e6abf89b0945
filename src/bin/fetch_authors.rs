#![forbid(unsafe_code)]

use anyhow::Result;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// The one author-search request this utility issues.
const AUTHOR_SEARCH_URL : &str = "https://openlibrary.org/search/authors.json?q=Kent+Beck";

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
/** Fetch the author search results and print them to the console.  Connect
 * failures, non-2xx statuses and body decode failures all propagate and
 * terminate the process with a nonzero exit status.
 */
#[tokio::main]
async fn main() -> Result<()> {
    let body = fetch(AUTHOR_SEARCH_URL).await?;
    println!("{}", render(&body));
    Ok(())
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// fetch:
// ---------------------------------------------------------------------------
/** Issue a single GET request and decode the response body as text.  No
 * retries; timeout and redirect handling are the client library defaults.
 */
async fn fetch(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}

// ---------------------------------------------------------------------------
// render:
// ---------------------------------------------------------------------------
/** Pretty-print JSON bodies; pass anything else through unchanged. */
fn render(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::{render, AUTHOR_SEARCH_URL};

    #[test]
    fn url_is_well_formed() {
        let url = reqwest::Url::parse(AUTHOR_SEARCH_URL).expect("author search url");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.query(), Some("q=Kent+Beck"));
    }

    #[test]
    fn render_pretty_prints_json() {
        let out = render("{\"numFound\":1}");
        assert!(out.contains("\"numFound\": 1"));
    }

    #[test]
    fn render_passes_text_through() {
        assert_eq!(render("not json"), "not json");
    }
}
