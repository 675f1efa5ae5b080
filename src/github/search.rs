use crate::error::{HuntError, Result};
use crate::github::record::RepoRecord;
use crate::session::PageRequest;
use serde_json::Value;
use std::time::Duration;

const GITHUB_API: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("repohunt/", env!("CARGO_PKG_VERSION"));

/// One fetched page of search results. `has_more` is a heuristic: a full page
/// means the API likely has more to offer. A result set whose size is an
/// exact multiple of the page size costs one extra (empty) fetch.
#[derive(Debug)]
pub struct Page {
    pub records: Vec<RepoRecord>,
    pub has_more: bool,
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(GITHUB_API, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HuntError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of repository search results.
    ///
    /// A response body that is valid JSON but carries no `items` array (for
    /// example GitHub's rate-limit error object) is treated as an empty page
    /// with `has_more = false`; HTTP status codes are not interpreted beyond
    /// that. A body that is not JSON at all surfaces as `MalformedResponse`.
    pub async fn fetch_page(&self, req: &PageRequest) -> Result<Page> {
        let url = format!("{}/search/repositories", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("q", req.query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
            ])
            .query(&[("per_page", req.page_size as u64), ("page", req.page as u64)])
            .send()
            .await
            .map_err(|e| HuntError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| HuntError::Network(e.to_string()))?;

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| HuntError::MalformedResponse(e.to_string()))?;

        let records: Vec<RepoRecord> = value
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RepoRecord::from_json).collect())
            .unwrap_or_default();

        let has_more = records.len() == req.page_size;
        Ok(Page { records, has_more })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn request(query: &str, page: u32, page_size: usize) -> PageRequest {
        PageRequest {
            generation: 0,
            query: query.to_string(),
            page,
            page_size,
        }
    }

    fn client(server: &mockito::ServerGuard) -> SearchClient {
        SearchClient::with_base_url(&server.url(), Duration::from_secs(15)).unwrap()
    }

    fn items_body(n: usize) -> String {
        let items: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"name":"repo{i}","stargazers_count":{i}}}"#))
            .collect();
        format!(r#"{{"items":[{}]}}"#, items.join(","))
    }

    #[tokio::test]
    async fn sends_query_sort_order_and_paging_params() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "termux hacking".into()),
                Matcher::UrlEncoded("sort".into(), "stars".into()),
                Matcher::UrlEncoded("order".into(), "desc".into()),
                Matcher::UrlEncoded("per_page".into(), "5".into()),
                Matcher::UrlEncoded("page".into(), "3".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(items_body(5))
            .create_async()
            .await;

        let page = client(&server)
            .fetch_page(&request("termux hacking", 3, 5))
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(page.records.len(), 5);
        assert_eq!(page.records[0].name, "repo0");
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn short_page_means_no_more() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(items_body(3))
            .create_async()
            .await;

        let page = client(&server).fetch_page(&request("x", 2, 5)).await.unwrap();
        assert_eq!(page.records.len(), 3);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn missing_items_key_degrades_to_empty_page() {
        let mut server = mockito::Server::new_async().await;
        // rate-limit errors come back as a JSON object without `items`
        let _m = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"message":"API rate limit exceeded","documentation_url":""}"#)
            .create_async()
            .await;

        let page = client(&server).fetch_page(&request("x", 1, 5)).await.unwrap();
        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = client(&server).fetch_page(&request("x", 1, 5)).await.unwrap_err();
        assert!(matches!(err, HuntError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client =
            SearchClient::with_base_url("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        let err = client.fetch_page(&request("x", 1, 5)).await.unwrap_err();
        assert!(matches!(err, HuntError::Network(_)));
    }
}
