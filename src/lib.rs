//! In-memory library circulation: catalog, loans, fines, and reports.
//!
//! # Examples
//!
//! Issue and return against a fixed date:
//! ```
//! use chrono::NaiveDate;
//! use circdesk::{
//!     clock::ManualClock,
//!     library::Library,
//!     record::{Book, Member},
//! };
//!
//! let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"));
//! let mut library = Library::with_clock(clock.clone());
//! library
//!     .add_book(Book::new("B001", "Effective Java", "Joshua Bloch", "978-0134685991", 2018, 3))
//!     .expect("add book");
//! library
//!     .add_member(Member::new("M001", "John Smith", "john@email.com", "1234567890"))
//!     .expect("add member");
//!
//! let slip = library.issue_book("B001", "M001").expect("issue");
//! assert_eq!(slip.remaining_copies, 2);
//! assert_eq!(slip.due_date, NaiveDate::from_ymd_opt(2024, 3, 15).expect("date"));
//!
//! clock.advance_days(20);
//! let receipt = library.return_book("B001", "M001").expect("return");
//! assert_eq!(receipt.fine, 30); // six days late at 5/day
//! ```
#![deny(missing_docs)]

/// Calendar time source abstraction.
pub mod clock;
/// Catalog store and circulation engine.
pub mod core;
/// Library facade consumed by the presentation shell.
pub mod library;
/// Book, member, and transaction records.
pub mod record;
/// Read-only search and report views.
pub mod report;
/// Demo fixture data.
pub mod seed;
/// Shared id aliases and policy constants.
pub mod types;
