//! Shared identifier aliases and circulation policy constants.

/// Unique book identifier, e.g. `"B001"`.
pub type BookId = String;
/// Unique member identifier, e.g. `"M001"`.
pub type MemberId = String;
/// Monotonic loan transaction identifier.
pub type TxnId = u64;
/// Fine amount in whole currency units.
pub type Money = i64;

/// Maximum open loans a member may hold at once.
pub const MAX_OPEN_LOANS: usize = 3;
/// Loan period applied to every issue, in days.
pub const LOAN_PERIOD_DAYS: u64 = 14;
/// Flat fine per calendar day a loan is overdue.
pub const FINE_PER_DAY: Money = 5;
