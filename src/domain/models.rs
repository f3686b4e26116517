// Domain models decoupled from the wire envelope the catalog API returns

/// A single bestseller entry as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub description: String,
    pub contributor: String,
    pub author: String,
    pub contributor_note: String,
    pub price: String,
    pub age_group: String,
    pub publisher: String,
    pub primary_isbn13: String,
    pub primary_isbn10: String,
}

impl Book {
    /// Outbound retail link for this book.
    pub fn purchase_url(&self) -> String {
        format!("https://www.amazon.com/dp/{}", self.primary_isbn10)
    }
}

/// A bestseller list category. `code` is the stable identifier used both as
/// API argument and address-line parameter; `display_name` is user-facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub code: String,
    pub display_name: String,
}

/// One fetched page of the catalog. Replaced wholesale on every successful
/// fetch; `num_results` and `page_size` are authoritative per request and may
/// differ between lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub books: Vec<Book>,
    pub num_results: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_url_uses_isbn10() {
        let book = Book {
            title: "The Midnight Library".into(),
            description: String::new(),
            contributor: String::new(),
            author: "Matt Haig".into(),
            contributor_note: String::new(),
            price: "0.00".into(),
            age_group: String::new(),
            publisher: "Viking".into(),
            primary_isbn13: "9780525559474".into(),
            primary_isbn10: "0525559477".into(),
        };
        assert_eq!(book.purchase_url(), "https://www.amazon.com/dp/0525559477");
    }
}
