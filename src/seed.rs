//! Demo fixture data; the core itself always starts empty.

use crate::{
    clock::Clock,
    core::catalog::CatalogError,
    library::Library,
    record::{Book, Member},
};

/// The ten demo catalog titles.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("B001", "Effective Java", "Joshua Bloch", "978-0134685991", 2018, 3),
        Book::new("B002", "Clean Code", "Robert Martin", "978-0132350884", 2008, 2),
        Book::new("B003", "To Kill a Mockingbird", "Harper Lee", "978-0446310789", 1960, 4),
        Book::new("B004", "1984", "George Orwell", "978-0451524935", 1949, 3),
        Book::new("B005", "The Alchemist", "Paulo Coelho", "978-0062315007", 1988, 2),
        Book::new("B006", "Pride and Prejudice", "Jane Austen", "978-0141439518", 1813, 2),
        Book::new("B007", "The Catcher in the Rye", "J.D. Salinger", "978-0316769488", 1951, 3),
        Book::new("B008", "Lord of the Rings", "J.R.R. Tolkien", "978-0544003415", 1954, 2),
        Book::new("B009", "Java Concurrency", "Brian Goetz", "978-0321349606", 2006, 2),
        Book::new("B010", "Animal Farm", "George Orwell", "978-0451526342", 1945, 3),
    ]
}

/// The five demo members.
pub fn sample_members() -> Vec<Member> {
    vec![
        Member::new("M001", "John Smith", "john@email.com", "1234567890"),
        Member::new("M002", "Jane Doe", "jane@email.com", "0987654321"),
        Member::new("M003", "Alice Johnson", "alice@email.com", "5555555555"),
        Member::new("M004", "Bob Wilson", "bob@email.com", "4444444444"),
        Member::new("M005", "Emma Brown", "emma@email.com", "3333333333"),
    ]
}

/// Loads the demo books and members into `library`.
pub fn populate<C: Clock>(library: &mut Library<C>) -> Result<(), CatalogError> {
    for book in sample_books() {
        library.add_book(book)?;
    }
    for member in sample_members() {
        library.add_member(member)?;
    }
    Ok(())
}
