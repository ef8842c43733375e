//! Book, member, and loan-transaction records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{BookId, MemberId, Money, TxnId, FINE_PER_DAY};

/// Catalog entry for one title and its copy counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable book identifier.
    pub id: BookId,
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// ISBN text, matched verbatim by search.
    pub isbn: String,
    /// Year of publication.
    pub publication_year: i32,
    /// Copies owned by the library.
    pub total_copies: u32,
    /// Copies currently on the shelf; stays within `0..=total_copies`.
    pub available_copies: u32,
}

impl Book {
    /// Creates a catalog entry with every copy on the shelf.
    pub fn new(
        id: &str,
        title: &str,
        author: &str,
        isbn: &str,
        publication_year: i32,
        total_copies: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
            total_copies,
            available_copies: total_copies,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book: {} by {} (ID: {}, ISBN: {}, Available: {}/{})",
            self.title, self.author, self.id, self.isbn, self.available_copies, self.total_copies
        )
    }
}

/// Registered borrower and the ids of their open loans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable member identifier.
    pub id: MemberId,
    /// Member name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Open loan ids, oldest first; mutated only by issue and return.
    pub open_loans: Vec<TxnId>,
}

impl Member {
    /// Registers a member with no open loans.
    pub fn new(id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            open_loans: Vec::new(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member: {} (ID: {}, Email: {}, Phone: {}, Books Borrowed: {})",
            self.name,
            self.id,
            self.email,
            self.phone,
            self.open_loans.len()
        )
    }
}

/// One borrow/return record; kept in history forever once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable transaction identifier.
    pub id: TxnId,
    /// Borrowed book's id.
    pub book_id: BookId,
    /// Borrowing member's id.
    pub member_id: MemberId,
    /// Date the loan started.
    pub issue_date: NaiveDate,
    /// Date the loan falls due.
    pub due_date: NaiveDate,
    /// Date the loan was closed; `None` while open.
    pub return_date: Option<NaiveDate>,
}

impl Transaction {
    /// True while the book has not been returned.
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// True when the loan is open and `today` is past the due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && today > self.due_date
    }

    /// Calendar days past due as of `today`; 0 when not yet due.
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        (today - self.due_date).num_days().max(0)
    }

    /// Fine owed as of `today`; always 0 once returned or while not yet due.
    pub fn fine_as_of(&self, today: NaiveDate) -> Money {
        if self.is_overdue(today) {
            self.days_overdue(today) * FINE_PER_DAY
        } else {
            0
        }
    }
}
