// Mapping from catalog API DTOs to domain models

use crate::catalog_client::{BookDto, BooksDataDto, ClientError, GenreDto};
use super::models::{Book, CatalogPage, Genre};

pub fn genre_from_dto(dto: GenreDto) -> Genre {
    Genre {
        code: dto.code,
        display_name: dto.display_name,
    }
}

pub fn book_from_dto(dto: BookDto) -> Book {
    Book {
        title: dto.title,
        description: dto.description,
        contributor: dto.contributor,
        author: dto.author,
        contributor_note: dto.contributor_note,
        price: dto.price,
        age_group: dto.age_group,
        publisher: dto.publisher,
        primary_isbn13: dto.primary_isbn13,
        primary_isbn10: dto.primary_isbn10,
    }
}

/// Unwrap the `book_details` indirection and validate the page parameters.
/// A zero `page_size` would poison every later pagination derivation, so it
/// is rejected here at the boundary.
pub fn catalog_page_from_data(data: BooksDataDto) -> Result<CatalogPage, ClientError> {
    if data.page_size == 0 {
        return Err(ClientError::MalformedData(
            "books response reports page_size 0".into(),
        ));
    }
    let books = data
        .results
        .into_iter()
        .map(|entry| {
            entry
                .book_details
                .into_iter()
                .next()
                .map(book_from_dto)
                .ok_or_else(|| {
                    ClientError::MalformedData("results entry has empty book_details".into())
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CatalogPage {
        books,
        num_results: data.num_results,
        page_size: data.page_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_client::ResultEntryDto;

    fn book_dto(title: &str) -> BookDto {
        BookDto {
            title: title.into(),
            description: String::new(),
            contributor: String::new(),
            author: String::new(),
            contributor_note: String::new(),
            price: String::new(),
            age_group: String::new(),
            publisher: String::new(),
            primary_isbn13: String::new(),
            primary_isbn10: String::new(),
        }
    }

    #[test]
    fn takes_first_book_details_entry() {
        let data = BooksDataDto {
            num_results: 2,
            page_size: 20,
            results: vec![
                ResultEntryDto {
                    book_details: vec![book_dto("first"), book_dto("shadow duplicate")],
                },
                ResultEntryDto {
                    book_details: vec![book_dto("second")],
                },
            ],
        };
        let page = catalog_page_from_data(data).unwrap();
        assert_eq!(page.books.len(), 2);
        assert_eq!(page.books[0].title, "first");
        assert_eq!(page.books[1].title, "second");
    }

    #[test]
    fn empty_book_details_is_malformed() {
        let data = BooksDataDto {
            num_results: 1,
            page_size: 20,
            results: vec![ResultEntryDto {
                book_details: vec![],
            }],
        };
        let err = catalog_page_from_data(data).unwrap_err();
        assert!(matches!(err, ClientError::MalformedData(_)));
    }

    #[test]
    fn zero_page_size_is_malformed() {
        let data = BooksDataDto {
            num_results: 1,
            page_size: 0,
            results: vec![],
        };
        let err = catalog_page_from_data(data).unwrap_err();
        assert!(matches!(err, ClientError::MalformedData(_)));
    }
}
