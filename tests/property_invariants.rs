use chrono::NaiveDate;
use proptest::prelude::*;

use circdesk::{
    clock::{Clock, ManualClock},
    library::Library,
    record::{Book, Member},
    types::MAX_OPEN_LOANS,
};

#[derive(Debug, Clone)]
enum Action {
    AddBook { idx: u8, copies: u8 },
    AddMember { idx: u8 },
    Issue { book: u8, member: u8 },
    Return { book: u8, member: u8 },
    AdvanceDays { days: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12, 0u8..4).prop_map(|(idx, copies)| Action::AddBook { idx, copies }),
        (0u8..6).prop_map(|idx| Action::AddMember { idx }),
        (0u8..12, 0u8..6).prop_map(|(book, member)| Action::Issue { book, member }),
        (0u8..12, 0u8..6).prop_map(|(book, member)| Action::Return { book, member }),
        (0u8..10).prop_map(|days| Action::AdvanceDays { days }),
    ]
}

fn book_id(idx: u8) -> String {
    format!("B{idx:03}")
}

fn member_id(idx: u8) -> String {
    format!("M{idx:03}")
}

proptest! {
    #[test]
    fn random_sequences_preserve_circulation_invariants(
        actions in prop::collection::vec(action_strategy(), 1..200)
    ) {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
        let mut library = Library::with_clock(clock.clone());

        for action in actions {
            match action {
                Action::AddBook { idx, copies } => {
                    let id = book_id(idx);
                    let _ = library.add_book(Book::new(
                        &id,
                        &format!("Title {id}"),
                        "Author",
                        &format!("isbn-{id}"),
                        2000,
                        u32::from(copies),
                    ));
                }
                Action::AddMember { idx } => {
                    let id = member_id(idx);
                    let _ = library.add_member(Member::new(
                        &id,
                        &format!("Member {id}"),
                        "m@email.com",
                        "5550000",
                    ));
                }
                Action::Issue { book, member } => {
                    let _ = library.issue_book(&book_id(book), &member_id(member));
                }
                Action::Return { book, member } => {
                    let _ = library.return_book(&book_id(book), &member_id(member));
                }
                Action::AdvanceDays { days } => clock.advance_days(u64::from(days)),
            }

            for book in library.catalog().books() {
                prop_assert!(book.available_copies <= book.total_copies);
                let open = library
                    .circulation()
                    .history()
                    .filter(|t| t.is_open() && t.book_id == book.id)
                    .count();
                prop_assert_eq!(
                    book.total_copies as usize - book.available_copies as usize,
                    open
                );
            }

            for member in library.catalog().members() {
                prop_assert!(member.open_loans.len() <= MAX_OPEN_LOANS);
                for id in &member.open_loans {
                    let txn = library.circulation().get(*id);
                    prop_assert!(txn.is_some_and(|t| t.is_open() && t.member_id == member.id));
                }
            }

            for txn in library.circulation().history() {
                prop_assert!(txn.due_date > txn.issue_date);
                prop_assert!(txn.fine_as_of(clock.today()) >= 0);
                if let Some(returned) = txn.return_date {
                    prop_assert!(returned >= txn.issue_date);
                }
            }
        }
    }
}
