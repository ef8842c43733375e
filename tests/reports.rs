use chrono::NaiveDate;

use circdesk::{clock::ManualClock, library::Library, seed};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn seeded_library(start: NaiveDate) -> (Library<ManualClock>, ManualClock) {
    let clock = ManualClock::new(start);
    let mut library = Library::with_clock(clock.clone());
    seed::populate(&mut library).expect("seed");
    (library, clock)
}

fn ids(books: &[&circdesk::record::Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn seed_data_loads_in_catalog_order() {
    let (library, _clock) = seeded_library(date(2024, 3, 1));
    assert_eq!(library.catalog().books().count(), 10);
    assert_eq!(library.catalog().members().count(), 5);
    assert_eq!(ids(&library.search_books(""))[..3], ["B001", "B002", "B003"]);
}

#[test]
fn search_matches_author_case_insensitively() {
    let (library, _clock) = seeded_library(date(2024, 3, 1));
    let hits = library.search_books("orwell");
    assert_eq!(ids(&hits), vec!["B004", "B010"]);
    assert_eq!(hits[0].title, "1984");
    assert_eq!(hits[1].title, "Animal Farm");
}

#[test]
fn search_matches_title_and_isbn() {
    let (library, _clock) = seeded_library(date(2024, 3, 1));
    assert_eq!(ids(&library.search_books("CLEAN")), vec!["B002"]);
    assert_eq!(ids(&library.search_books("978-0544003415")), vec!["B008"]);
}

#[test]
fn search_without_match_yields_empty_list() {
    let (library, _clock) = seeded_library(date(2024, 3, 1));
    assert!(library.search_books("no such thing").is_empty());
}

#[test]
fn available_books_excludes_exhausted_titles() {
    let (mut library, _clock) = seeded_library(date(2024, 3, 1));

    // Drain both copies of Clean Code.
    library.issue_book("B002", "M001").unwrap();
    library.issue_book("B002", "M002").unwrap();

    let available = ids(&library.available_books());
    assert_eq!(available.len(), 9);
    assert!(!available.contains(&"B002".to_string()));
    // Catalog order is preserved around the gap.
    assert_eq!(available[..3], ["B001", "B003", "B004"]);
}

#[test]
fn member_detail_lists_open_loans_with_fines() {
    let (mut library, clock) = seeded_library(date(2024, 3, 1));
    library.issue_book("B001", "M001").unwrap();
    library.issue_book("B003", "M001").unwrap();

    clock.advance_days(16);
    let detail = library.member_detail("M001").unwrap();
    assert_eq!(detail.name, "John Smith");
    assert_eq!(detail.email, "john@email.com");
    assert_eq!(detail.loans.len(), 2);
    assert_eq!(detail.loans[0].title, "Effective Java");
    assert_eq!(detail.loans[1].title, "To Kill a Mockingbird");
    for loan in &detail.loans {
        assert_eq!(loan.due_date, date(2024, 3, 15));
        assert_eq!(loan.fine, 10); // two days late at 5/day
    }
}

#[test]
fn member_detail_of_unknown_member_fails() {
    let (library, _clock) = seeded_library(date(2024, 3, 1));
    let err = library.member_detail("M999").unwrap_err();
    assert_eq!(
        err,
        circdesk::core::catalog::CatalogError::UnknownMember("M999".to_string())
    );
}

#[test]
fn overdue_report_lists_open_past_due_loans_in_issue_order() {
    let (mut library, clock) = seeded_library(date(2024, 3, 1));

    let first = library.issue_book("B001", "M001").unwrap(); // due 2024-03-15
    clock.advance_days(3);
    let second = library.issue_book("B002", "M002").unwrap(); // due 2024-03-18

    // 2024-03-17: only the first loan is past due.
    clock.advance_days(13);
    let report = library.overdue_report();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].txn_id, first.txn_id);
    assert_eq!(report[0].member_name, "John Smith");
    assert_eq!(report[0].book_title, "Effective Java");
    assert_eq!(report[0].days_overdue, 2);
    assert_eq!(report[0].fine, 10);

    // 2024-03-22: both overdue, issue order preserved.
    clock.advance_days(5);
    let report = library.overdue_report();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].txn_id, first.txn_id);
    assert_eq!(report[0].days_overdue, 7);
    assert_eq!(report[0].fine, 35);
    assert_eq!(report[1].txn_id, second.txn_id);
    assert_eq!(report[1].member_name, "Jane Doe");
    assert_eq!(report[1].days_overdue, 4);
    assert_eq!(report[1].fine, 20);

    // Returning the first loan drops it from the report.
    library.return_book("B001", "M001").unwrap();
    let report = library.overdue_report();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].txn_id, second.txn_id);
}
