use serde::Deserialize;

use crate::domain::mapping;
use crate::domain::models::{CatalogPage, Genre};

/// List code used when the address line carries none.
pub const DEFAULT_LIST: &str = "combined-print-fiction";

/// Failures surfaced by [`CatalogClient`]. The UI shows the display text
/// verbatim, so messages are written for end users.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
    #[error("malformed catalog data: {0}")]
    MalformedData(String),
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new client with the given base URL (e.g. "http://localhost:8000").
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        let base_url_str = base_url.into();
        tracing::debug!(base_url = %base_url_str, "creating CatalogClient");
        Ok(CatalogClient {
            base_url: base_url_str.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET /books?list={code}&offset={n}
    ///
    /// No retries, no caching; every call is a fresh round trip.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_books(&self, list: &str, offset: u32) -> Result<CatalogPage, ClientError> {
        let url = self.url("/books");
        tracing::debug!(%url, list, offset, "GET books");
        let resp = self
            .client
            .get(&url)
            .query(&[("list", list.to_string()), ("offset", offset.to_string())])
            .header("accept", "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        let parsed: BooksEnvelopeDto = parse_body(&body, "books")?;
        if parsed.error {
            return Err(ClientError::Api(parsed.message));
        }
        let data = parsed
            .data
            .ok_or_else(|| ClientError::MalformedData("books envelope has no data".into()))?;
        mapping::catalog_page_from_data(data)
    }

    /// GET /genres
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        let url = self.url("/genres");
        tracing::debug!(%url, "GET genres");
        let resp = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        let parsed: GenresEnvelopeDto = parse_body(&body, "genres")?;
        if parsed.error {
            return Err(ClientError::Api(parsed.message));
        }
        let data = parsed
            .data
            .ok_or_else(|| ClientError::MalformedData("genres envelope has no data".into()))?;
        Ok(data.into_iter().map(mapping::genre_from_dto).collect())
    }
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str, what: &str) -> Result<T, ClientError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let snippet_len = body.len().min(2000);
            let snippet = body.get(..snippet_len).unwrap_or(body);
            tracing::error!(error = %e, body_snippet = %snippet, "failed to parse {what} envelope");
            Err(ClientError::MalformedData(format!(
                "{what} response did not parse: {e}"
            )))
        }
    }
}

// ============ Wire envelope (DTOs) ============
//
// Each results entry wraps the actual book under a `book_details` array;
// mapping takes the first element.

#[derive(Debug, Deserialize, PartialEq)]
pub struct BooksEnvelopeDto {
    pub error: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<BooksDataDto>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BooksDataDto {
    pub num_results: u32,
    pub page_size: u32,
    pub results: Vec<ResultEntryDto>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ResultEntryDto {
    pub book_details: Vec<BookDto>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contributor: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub contributor_note: String,
    #[serde(deserialize_with = "de::string_from_str_or_num", default)]
    pub price: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub primary_isbn13: String,
    #[serde(default)]
    pub primary_isbn10: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct GenresEnvelopeDto {
    pub error: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<Vec<GenreDto>>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct GenreDto {
    pub code: String,
    pub display_name: String,
}

/// Internal serde helpers
pub mod de {
    use serde::{Deserialize, Deserializer};

    /// Accept a String from either a number or a string; null -> "".
    /// The upstream API serves `price` both ways.
    pub fn string_from_str_or_num<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumOrStr {
            Num(f64),
            Str(String),
        }

        let val: Option<NumOrStr> = Option::deserialize(deserializer)?;
        Ok(match val {
            None => String::new(),
            Some(NumOrStr::Num(n)) => format!("{n}"),
            Some(NumOrStr::Str(s)) => s,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_envelope_deserialize_example() {
        let json = r#"{
            "error": false,
            "message": "",
            "data": {
                "num_results": 30,
                "page_size": 20,
                "results": [
                    {
                        "book_details": [
                            {
                                "title": "IRON FLAME",
                                "description": "The second book in the Empyrean series.",
                                "contributor": "by Rebecca Yarros",
                                "author": "Rebecca Yarros",
                                "contributor_note": "",
                                "price": "0.00",
                                "age_group": "",
                                "publisher": "Red Tower",
                                "primary_isbn13": "9781649374172",
                                "primary_isbn10": "1649374178"
                            }
                        ]
                    }
                ]
            }
        }"#;

        let parsed: BooksEnvelopeDto = serde_json::from_str(json).unwrap();
        assert!(!parsed.error);
        let data = parsed.data.unwrap();
        assert_eq!(data.num_results, 30);
        assert_eq!(data.page_size, 20);
        assert_eq!(data.results.len(), 1);
        let book = &data.results[0].book_details[0];
        assert_eq!(book.title, "IRON FLAME");
        assert_eq!(book.primary_isbn10, "1649374178");
    }

    #[test]
    fn books_envelope_price_as_number() {
        let json = r#"{
            "error": false,
            "message": "",
            "data": {
                "num_results": 1,
                "page_size": 20,
                "results": [
                    { "book_details": [ { "title": "X", "price": 27.99 } ] }
                ]
            }
        }"#;

        let parsed: BooksEnvelopeDto = serde_json::from_str(json).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.results[0].book_details[0].price, "27.99");
    }

    #[test]
    fn genres_envelope_deserialize_example() {
        let json = r#"{
            "error": false,
            "message": "",
            "data": [
                { "code": "combined-print-fiction", "display_name": "Combined Print & E-Book Fiction" },
                { "code": "hardcover-nonfiction", "display_name": "Hardcover Nonfiction" }
            ]
        }"#;

        let parsed: GenresEnvelopeDto = serde_json::from_str(json).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].code, "combined-print-fiction");
        assert_eq!(data[1].display_name, "Hardcover Nonfiction");
    }

    #[test]
    fn error_envelope_carries_message() {
        let json = r#"{ "error": true, "message": "rate limited", "data": null }"#;
        let parsed: BooksEnvelopeDto = serde_json::from_str(json).unwrap();
        assert!(parsed.error);
        assert_eq!(parsed.message, "rate limited");
        assert!(parsed.data.is_none());
    }
}
