//! Read-only search and report views over the catalog and loan history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        catalog::{Catalog, CatalogError},
        circulation::Circulation,
    },
    record::Book,
    types::{MemberId, Money, TxnId},
};

/// One open loan line in a member detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLine {
    /// Transaction id of the open loan.
    pub txn_id: TxnId,
    /// Borrowed book's title.
    pub title: String,
    /// Due date of the loan.
    pub due_date: NaiveDate,
    /// Fine accrued so far.
    pub fine: Money,
}

/// Member identity plus the state of each open loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDetail {
    /// Member identifier.
    pub member_id: MemberId,
    /// Member name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Open loans in issue order.
    pub loans: Vec<LoanLine>,
}

/// One row of the overdue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueEntry {
    /// Transaction id of the overdue loan.
    pub txn_id: TxnId,
    /// Borrowing member's name.
    pub member_name: String,
    /// Borrowed book's title.
    pub book_title: String,
    /// Calendar days past due.
    pub days_overdue: i64,
    /// Fine accrued so far.
    pub fine: Money,
}

/// Books whose title, author, or ISBN contains `query`, case-insensitively.
///
/// Catalog order; no match yields an empty list rather than an error.
pub fn search_books<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    catalog.books().filter(|b| matches(b, &needle)).collect()
}

fn matches(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book.isbn.to_lowercase().contains(needle)
}

/// Books with at least one copy on the shelf, catalog order.
pub fn available_books(catalog: &Catalog) -> Vec<&Book> {
    catalog.books().filter(|b| b.available_copies > 0).collect()
}

/// Member identity and per-loan due date and fine, as of `today`.
pub fn member_detail(
    catalog: &Catalog,
    circulation: &Circulation,
    member_id: &str,
    today: NaiveDate,
) -> Result<MemberDetail, CatalogError> {
    let member = catalog
        .get_member(member_id)
        .ok_or_else(|| CatalogError::UnknownMember(member_id.to_string()))?;

    let loans = member
        .open_loans
        .iter()
        .filter_map(|id| circulation.get(*id))
        .map(|txn| LoanLine {
            txn_id: txn.id,
            title: book_title(catalog, &txn.book_id),
            due_date: txn.due_date,
            fine: txn.fine_as_of(today),
        })
        .collect();

    Ok(MemberDetail {
        member_id: member.id.clone(),
        name: member.name.clone(),
        email: member.email.clone(),
        phone: member.phone.clone(),
        loans,
    })
}

/// Open, past-due loans as of `today`, in issue order.
pub fn overdue_report(
    catalog: &Catalog,
    circulation: &Circulation,
    today: NaiveDate,
) -> Vec<OverdueEntry> {
    circulation
        .history()
        .filter(|txn| txn.is_overdue(today))
        .map(|txn| OverdueEntry {
            txn_id: txn.id,
            member_name: catalog
                .get_member(&txn.member_id)
                .map_or_else(|| txn.member_id.clone(), |m| m.name.clone()),
            book_title: book_title(catalog, &txn.book_id),
            days_overdue: txn.days_overdue(today),
            fine: txn.fine_as_of(today),
        })
        .collect()
}

// Books are never deleted, so the raw-id fallback is unreachable in practice.
fn book_title(catalog: &Catalog, book_id: &str) -> String {
    catalog
        .get_book(book_id)
        .map_or_else(|| book_id.to_string(), |b| b.title.clone())
}
