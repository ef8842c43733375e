//! Front handle tying the catalog, circulation engine, and clock together.

use tracing::{debug, warn};

use crate::{
    clock::{Clock, SystemClock},
    core::{
        catalog::{Catalog, CatalogError},
        circulation::{CircError, Circulation, IssueSlip, ReturnSlip},
    },
    record::{Book, Member},
    report::{self, MemberDetail, OverdueEntry},
};

/// Circulation desk facade consumed by any presentation layer.
///
/// Owns one catalog, one circulation engine, and the clock behind every
/// date-sensitive computation. Starts empty; see [`crate::seed::populate`]
/// for the demo fixture set.
#[derive(Debug)]
pub struct Library<C: Clock = SystemClock> {
    catalog: Catalog,
    circulation: Circulation,
    clock: C,
}

impl Library<SystemClock> {
    /// Creates an empty library on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Library<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Library<C> {
    /// Creates an empty library reading dates from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            catalog: Catalog::new(),
            circulation: Circulation::new(),
            clock,
        }
    }

    /// Adds a book to the catalog.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        debug!(book_id = %book.id, title = %book.title, "add book");
        self.catalog.add_book(book)
    }

    /// Registers a member.
    pub fn add_member(&mut self, member: Member) -> Result<(), CatalogError> {
        debug!(member_id = %member.id, name = %member.name, "add member");
        self.catalog.add_member(member)
    }

    /// Issues a book dated today; see [`Circulation::issue`] for the rule
    /// order.
    pub fn issue_book(&mut self, book_id: &str, member_id: &str) -> Result<IssueSlip, CircError> {
        let today = self.clock.today();
        match self
            .circulation
            .issue(&mut self.catalog, book_id, member_id, today)
        {
            Ok(slip) => {
                debug!(book_id, member_id, txn_id = slip.txn_id, due = %slip.due_date, "issued");
                Ok(slip)
            }
            Err(err) => {
                warn!(book_id, member_id, %err, "issue rejected");
                Err(err)
            }
        }
    }

    /// Returns a book dated today; the slip carries any fine owed.
    pub fn return_book(&mut self, book_id: &str, member_id: &str) -> Result<ReturnSlip, CircError> {
        let today = self.clock.today();
        match self
            .circulation
            .return_book(&mut self.catalog, book_id, member_id, today)
        {
            Ok(slip) => {
                debug!(book_id, member_id, txn_id = slip.txn_id, fine = slip.fine, "returned");
                Ok(slip)
            }
            Err(err) => {
                warn!(book_id, member_id, %err, "return rejected");
                Err(err)
            }
        }
    }

    /// Case-insensitive substring search over title, author, and ISBN.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        report::search_books(&self.catalog, query)
    }

    /// Books with at least one copy on the shelf.
    pub fn available_books(&self) -> Vec<&Book> {
        report::available_books(&self.catalog)
    }

    /// Member identity plus open-loan state as of today.
    pub fn member_detail(&self, member_id: &str) -> Result<MemberDetail, CatalogError> {
        report::member_detail(&self.catalog, &self.circulation, member_id, self.clock.today())
    }

    /// Open, past-due loans as of today.
    pub fn overdue_report(&self) -> Vec<OverdueEntry> {
        report::overdue_report(&self.catalog, &self.circulation, self.clock.today())
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the loan history.
    pub fn circulation(&self) -> &Circulation {
        &self.circulation
    }
}
