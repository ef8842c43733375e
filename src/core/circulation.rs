//! Loan issue/return rules over an append-only transaction history.

use chrono::{Days, NaiveDate};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::catalog::{Catalog, CatalogError},
    record::Transaction,
    types::{BookId, MemberId, Money, TxnId, LOAN_PERIOD_DAYS, MAX_OPEN_LOANS},
};

/// Failure modes for issue and return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircError {
    /// Book or member lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Issue requested while no copy is on the shelf.
    #[error("no copies of book {0} available")]
    NoCopiesAvailable(BookId),
    /// Issue requested while the member holds the maximum open loans.
    #[error("member {0} has reached the borrowing limit")]
    BorrowLimitExceeded(MemberId),
    /// Return requested without a matching open loan.
    #[error("book {0} is not on loan to member {1}")]
    NotBorrowed(BookId, MemberId),
}

/// Caller-facing summary of a successful issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSlip {
    /// Id of the created transaction.
    pub txn_id: TxnId,
    /// Date the loan started.
    pub issue_date: NaiveDate,
    /// Date the loan falls due.
    pub due_date: NaiveDate,
    /// Copies still on the shelf after this issue.
    pub remaining_copies: u32,
}

/// Caller-facing summary of a successful return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSlip {
    /// Id of the closed transaction.
    pub txn_id: TxnId,
    /// Date the loan was closed.
    pub return_date: NaiveDate,
    /// Fine owed as of the return date; 0 when on time.
    pub fine: Money,
}

/// Loan history plus the business rules that grow it.
///
/// Transactions are never deleted; a return closes one in place.
#[derive(Debug, Default)]
pub struct Circulation {
    txns: HashMap<TxnId, Transaction>,
    order: Vec<TxnId>,
    next_txn_id: TxnId,
}

impl Circulation {
    /// Creates an engine with no history.
    pub fn new() -> Self {
        Self {
            next_txn_id: 1,
            ..Self::default()
        }
    }

    /// Issues `book_id` to `member_id`, dated `today`.
    ///
    /// Every rule check runs before any write; a failed issue mutates
    /// nothing.
    pub fn issue(
        &mut self,
        catalog: &mut Catalog,
        book_id: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<IssueSlip, CircError> {
        let (book, member) = catalog.resolve_mut(book_id, member_id)?;
        if book.available_copies == 0 {
            return Err(CircError::NoCopiesAvailable(book.id.clone()));
        }
        if member.open_loans.len() >= MAX_OPEN_LOANS {
            return Err(CircError::BorrowLimitExceeded(member.id.clone()));
        }

        book.available_copies -= 1;
        let id = self.take_next_txn_id();
        let due_date = today + Days::new(LOAN_PERIOD_DAYS);
        member.open_loans.push(id);

        let txn = Transaction {
            id,
            book_id: book.id.clone(),
            member_id: member.id.clone(),
            issue_date: today,
            due_date,
            return_date: None,
        };
        let slip = IssueSlip {
            txn_id: id,
            issue_date: today,
            due_date,
            remaining_copies: book.available_copies,
        };
        self.order.push(id);
        self.txns.insert(id, txn);
        Ok(slip)
    }

    /// Returns `book_id` from `member_id`, dated `today`.
    ///
    /// Closes the first matching open loan in the member's open-set order
    /// and reports the fine computed before the record is closed.
    pub fn return_book(
        &mut self,
        catalog: &mut Catalog,
        book_id: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<ReturnSlip, CircError> {
        let (book, member) = catalog.resolve_mut(book_id, member_id)?;

        let txn_id = member
            .open_loans
            .iter()
            .copied()
            .find(|id| self.txns.get(id).is_some_and(|t| t.book_id == book.id))
            .ok_or_else(|| CircError::NotBorrowed(book.id.clone(), member.id.clone()))?;
        let txn = self
            .txns
            .get_mut(&txn_id)
            .ok_or_else(|| CircError::NotBorrowed(book.id.clone(), member.id.clone()))?;

        // Fine must be read before the return date lands, or it is always 0.
        let fine = txn.fine_as_of(today);
        txn.return_date = Some(today);
        book.available_copies += 1;
        Self::remove_from_open_set(&mut member.open_loans, txn_id);

        Ok(ReturnSlip {
            txn_id,
            return_date: today,
            fine,
        })
    }

    /// Looks up one transaction by id.
    pub fn get(&self, id: TxnId) -> Option<&Transaction> {
        self.txns.get(&id)
    }

    /// Transaction history in issue order.
    pub fn history(&self) -> impl Iterator<Item = &Transaction> {
        self.order.iter().filter_map(|id| self.txns.get(id))
    }

    /// Number of transactions ever issued.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True before the first issue.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn remove_from_open_set(open: &mut Vec<TxnId>, id: TxnId) {
        if let Some(pos) = open.iter().position(|x| *x == id) {
            open.remove(pos);
        }
    }

    fn take_next_txn_id(&mut self) -> TxnId {
        let id = self.next_txn_id;
        self.next_txn_id += 1;
        id
    }
}
