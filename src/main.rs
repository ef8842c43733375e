//! Line-oriented console menu over the circulation core.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use circdesk::{
    library::Library,
    record::{Book, Member},
    seed,
};

type Input = io::Lines<io::StdinLock<'static>>;

#[derive(Debug, Parser)]
#[command(name = "circdesk", about = "Library circulation desk")]
struct Args {
    /// Start with an empty catalog instead of the demo data.
    #[arg(long)]
    empty: bool,
    /// Log debug detail for every command.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut library = Library::new();
    if !args.empty {
        seed::populate(&mut library).map_err(io::Error::other)?;
    }
    tracing::info!(seeded = !args.empty, "circulation desk ready");

    let mut input = io::stdin().lock().lines();

    loop {
        print_menu();
        let Some(choice) = read_line(&mut input, "\nEnter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_book(&mut library, &mut input)?,
            "2" => add_member(&mut library, &mut input)?,
            "3" => issue_book(&mut library, &mut input)?,
            "4" => return_book(&mut library, &mut input)?,
            "5" => search_books(&library, &mut input)?,
            "6" => member_details(&library, &mut input)?,
            "7" => display_available(&library),
            "8" => overdue_report(&library),
            "9" => {
                println!("Thank you for using the library circulation desk!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circdesk=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("circdesk=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn print_menu() {
    println!("\n=== LIBRARY CIRCULATION DESK ===");
    println!("1. Add Book");
    println!("2. Add Member");
    println!("3. Issue Book");
    println!("4. Return Book");
    println!("5. Search Books");
    println!("6. View Member Details");
    println!("7. Display Available Books");
    println!("8. Overdue Report");
    println!("9. Exit");
}

/// Prompts and reads one trimmed line; `None` on end of input.
fn read_line(input: &mut Input, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn add_book(library: &mut Library, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_line(input, "Enter Book ID: ")? else {
        return Ok(());
    };
    let Some(title) = read_line(input, "Enter Title: ")? else {
        return Ok(());
    };
    let Some(author) = read_line(input, "Enter Author: ")? else {
        return Ok(());
    };
    let Some(isbn) = read_line(input, "Enter ISBN: ")? else {
        return Ok(());
    };
    let Some(year) = read_line(input, "Enter Publication Year: ")? else {
        return Ok(());
    };
    let Some(copies) = read_line(input, "Enter Total Copies: ")? else {
        return Ok(());
    };

    let (Ok(year), Ok(copies)) = (year.parse::<i32>(), copies.parse::<u32>()) else {
        println!("Error: publication year and total copies must be numbers");
        return Ok(());
    };

    match library.add_book(Book::new(&id, &title, &author, &isbn, year, copies)) {
        Ok(()) => println!("Book added successfully!"),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn add_member(library: &mut Library, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_line(input, "Enter Member ID: ")? else {
        return Ok(());
    };
    let Some(name) = read_line(input, "Enter Name: ")? else {
        return Ok(());
    };
    let Some(email) = read_line(input, "Enter Email: ")? else {
        return Ok(());
    };
    let Some(phone) = read_line(input, "Enter Phone Number: ")? else {
        return Ok(());
    };

    match library.add_member(Member::new(&id, &name, &email, &phone)) {
        Ok(()) => println!("Member added successfully!"),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn issue_book(library: &mut Library, input: &mut Input) -> io::Result<()> {
    println!("\n=== ISSUE BOOK ===");
    let Some(member_id) = read_line(input, "Enter Member ID: ")? else {
        return Ok(());
    };
    let Some(book_id) = read_line(input, "Enter Book ID: ")? else {
        return Ok(());
    };

    match library.issue_book(&book_id, &member_id) {
        Ok(slip) => {
            println!("Book issued successfully!");
            if let Some(member) = library.catalog().get_member(&member_id) {
                println!("Member: {} ({})", member.name, member.email);
            }
            if let Some(book) = library.catalog().get_book(&book_id) {
                println!("Book: \"{}\" by {}", book.title, book.author);
            }
            println!("Issue Date: {}", slip.issue_date);
            println!("Due Date: {}", slip.due_date);
            println!("Remaining copies: {}", slip.remaining_copies);
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn return_book(library: &mut Library, input: &mut Input) -> io::Result<()> {
    println!("\n=== RETURN BOOK ===");
    let Some(member_id) = read_line(input, "Enter Member ID: ")? else {
        return Ok(());
    };
    let Some(book_id) = read_line(input, "Enter Book ID: ")? else {
        return Ok(());
    };

    match library.return_book(&book_id, &member_id) {
        Ok(slip) => {
            println!("Book returned successfully!");
            if slip.fine > 0 {
                println!("Fine incurred: {}", slip.fine);
            }
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn search_books(library: &Library, input: &mut Input) -> io::Result<()> {
    let Some(query) = read_line(input, "Enter search query (title/author/ISBN): ")? else {
        return Ok(());
    };
    println!("\nSearch Results:");
    for book in library.search_books(&query) {
        println!("{book}");
    }
    Ok(())
}

fn member_details(library: &Library, input: &mut Input) -> io::Result<()> {
    let Some(member_id) = read_line(input, "Enter Member ID: ")? else {
        return Ok(());
    };
    match library.member_detail(&member_id) {
        Ok(detail) => {
            println!("\nMember Details:");
            println!(
                "Member: {} (ID: {}, Email: {}, Phone: {}, Books Borrowed: {})",
                detail.name,
                detail.member_id,
                detail.email,
                detail.phone,
                detail.loans.len()
            );
            println!("Borrowed Books:");
            for loan in &detail.loans {
                println!("- {} (Due: {}, Fine: {})", loan.title, loan.due_date, loan.fine);
            }
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn display_available(library: &Library) {
    println!("\nAvailable Books:");
    for book in library.available_books() {
        println!("{book}");
    }
}

fn overdue_report(library: &Library) {
    println!("\nOverdue Books Report:");
    for entry in library.overdue_report() {
        println!(
            "Member: {}, Book: {}, Overdue by: {} days, Fine: {}",
            entry.member_name, entry.book_title, entry.days_overdue, entry.fine
        );
    }
}
