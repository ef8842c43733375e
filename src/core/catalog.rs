//! Id-keyed catalog of books and members with insertion-order listing.

use hashbrown::HashMap;
use thiserror::Error;

use crate::{
    record::{Book, Member},
    types::{BookId, MemberId},
};

/// Failure modes for catalog inserts and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Insert of a book id already present.
    #[error("book {0} already exists")]
    DuplicateBook(BookId),
    /// Insert of a member id already present.
    #[error("member {0} already exists")]
    DuplicateMember(MemberId),
    /// Lookup of an unknown book id.
    #[error("book {0} not found")]
    UnknownBook(BookId),
    /// Lookup of an unknown member id.
    #[error("member {0} not found")]
    UnknownMember(MemberId),
}

/// Books and members keyed by id, listed in insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<BookId, Book>,
    book_order: Vec<BookId>,
    members: HashMap<MemberId, Member>,
    member_order: Vec<MemberId>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `book`, rejecting a duplicate id before any state changes.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.books.contains_key(&book.id) {
            return Err(CatalogError::DuplicateBook(book.id.clone()));
        }
        self.book_order.push(book.id.clone());
        self.books.insert(book.id.clone(), book);
        Ok(())
    }

    /// Inserts `member`, rejecting a duplicate id before any state changes.
    pub fn add_member(&mut self, member: Member) -> Result<(), CatalogError> {
        if self.members.contains_key(&member.id) {
            return Err(CatalogError::DuplicateMember(member.id.clone()));
        }
        self.member_order.push(member.id.clone());
        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    /// Looks up a book by id.
    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    /// Looks up a member by id.
    pub fn get_member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// Books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.book_order.iter().filter_map(|id| self.books.get(id))
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.member_order.iter().filter_map(|id| self.members.get(id))
    }

    /// Resolves both parties of a circulation command, mutably.
    ///
    /// Both lookups run before either reference is handed out, so a failed
    /// resolve leaves nothing half-checked.
    pub(crate) fn resolve_mut(
        &mut self,
        book_id: &str,
        member_id: &str,
    ) -> Result<(&mut Book, &mut Member), CatalogError> {
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| CatalogError::UnknownBook(book_id.to_string()))?;
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| CatalogError::UnknownMember(member_id.to_string()))?;
        Ok((book, member))
    }
}
