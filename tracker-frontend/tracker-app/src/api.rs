use tracker_api_types::{SearchResponse, SuggestionResult};

use cfg_if::cfg_if;

#[cfg(not(feature = "csr"))]
use crate::error::SystemError;
use crate::error::{AppError, AppResult};
use crate::navigation::encode_component;

/// `[origin]<endpoint>?q=<query>`, with the query encoded the way `encodeURIComponent` would.
pub fn search_url(origin: Option<&str>, endpoint: &str, query: &str) -> String {
    let origin = origin.map(|origin| origin.trim_end_matches('/')).unwrap_or_default();
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{origin}{endpoint}{separator}q={}", encode_component(query))
}

/// Decodes a search body, treating `success: false` as an error so every failure
/// takes the same path.
pub fn decode_response(body: &str) -> AppResult<Vec<SuggestionResult>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    if response.success {
        Ok(response.results)
    } else {
        Err(AppError::Rejected)
    }
}

cfg_if! {
    if #[cfg(feature = "csr")] {
        pub async fn fetch_suggestions(url: &str) -> AppResult<Vec<SuggestionResult>> {
            let response = gloo_net::http::Request::get(url).send().await?;
            if !response.ok() {
                return Err(AppError::Status(response.status()));
            }
            let body = response.text().await?;
            decode_response(&body)
        }
    } else if #[cfg(feature = "ssr")] {
        /// Outside the browser there is no page to resolve against, so the url
        /// must already carry the configured `origin`.
        pub async fn fetch_suggestions(url: &str) -> AppResult<Vec<SuggestionResult>> {
            if !url.contains("://") {
                return Err(SystemError::Message(format!(
                    "{url} is relative, set an origin to search outside the browser"
                ))
                .into());
            }
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(AppError::Status(status.as_u16()));
            }
            let body = response.text().await?;
            decode_response(&body)
        }
    } else {
        pub async fn fetch_suggestions(url: &str) -> AppResult<Vec<SuggestionResult>> {
            Err(SystemError::Message(format!("no http client compiled in to fetch {url}")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_encoded() {
        assert_eq!(search_url(None, "/search", "queen"), "/search?q=queen");
        assert_eq!(
            search_url(None, "/search", "guns n' roses & co"),
            "/search?q=guns%20n'%20roses%20%26%20co"
        );
        assert_eq!(
            search_url(None, "/api/search?limit=10", "ac/dc"),
            "/api/search?limit=10&q=ac%2Fdc"
        );
    }

    #[test]
    fn decode() {
        let results = decode_response(
            r#"{"success": true, "results": [{"type": "artist", "id": 1, "text": "Queen"}]}"#,
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "Queen");

        assert!(matches!(
            decode_response(r#"{"success": false, "results": []}"#),
            Err(AppError::Rejected)
        ));
        assert!(matches!(
            decode_response("Error performing search: timeout"),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn origin_makes_url_absolute() {
        assert_eq!(
            search_url(Some("http://localhost:8081/"), "/search", "queen"),
            "http://localhost:8081/search?q=queen"
        );
    }

    #[cfg(all(feature = "ssr", not(feature = "csr")))]
    #[test]
    fn native_fetch_needs_an_origin() {
        let url = search_url(None, "/search", "queen");
        let err = futures::executor::block_on(fetch_suggestions(&url)).unwrap_err();
        assert!(matches!(
            err,
            AppError::SystemError(SystemError::Message(message)) if message.contains("origin")
        ));
    }
}
