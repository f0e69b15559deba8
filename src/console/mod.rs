//! Interactive console: login prompt, menus, and dispatch
//!
//! The console owns the session for the duration of a login and checks the
//! command's required role before dispatching to a service. Operation
//! failures are printed and control returns to the menu; only terminal I/O
//! failures end the loop.

pub mod command;

use std::io::{self, Write};

use crate::{
    error::{AppError, AppResult},
    models::{
        account::Role,
        book::{Book, CreateBook},
        reader::{CreateReader, Reader},
        session::Session,
    },
    services::{auth, Services},
};

use command::{BookCommand, LoanCommand, MainCommand, ReaderCommand};

enum MenuOutcome {
    Logout,
    Quit,
}

pub struct Console {
    services: Services,
}

impl Console {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// Run the console until the user quits.
    pub async fn run(&self) -> io::Result<()> {
        loop {
            let session = match self.login().await? {
                Some(session) => session,
                None => break,
            };

            match self.main_menu(&session).await? {
                MenuOutcome::Logout => {
                    self.services.auth.logout(session);
                    println!("Session closed.");
                }
                MenuOutcome::Quit => break,
            }
        }

        println!("Leaving the system. Goodbye!");
        Ok(())
    }

    /// Prompt for credentials until a session is established or the user
    /// gives up. The password is read without echo.
    async fn login(&self) -> io::Result<Option<Session>> {
        loop {
            clear_screen();
            println!("--- LOGIN ---");
            let username = prompt("Username: ")?;
            let password = rpassword::prompt_password("Password: ")?;

            match self.services.auth.login(&username, &password).await {
                Ok(session) => {
                    println!("Welcome, {} (role: {}).", session.username, session.role);
                    pause()?;
                    return Ok(Some(session));
                }
                Err(e) => {
                    println!("{}", e.user_message());
                    let retry = prompt("Try again? (y/n): ")?;
                    if !retry.eq_ignore_ascii_case("y") {
                        return Ok(None);
                    }
                }
            }
        }
    }

    async fn main_menu(&self, session: &Session) -> io::Result<MenuOutcome> {
        loop {
            clear_screen();
            println!("===== LIBRARY SYSTEM (user: {}) =====", session.username);
            println!("1. Book management");
            println!("2. Reader management");
            println!("3. Loan management");
            println!("4. Log out");
            println!("5. Quit");
            let choice = prompt("Select an option: ")?;

            match MainCommand::parse(&choice) {
                Some(MainCommand::Books) => self.books_menu(session).await?,
                Some(MainCommand::Readers) => self.readers_menu(session).await?,
                Some(MainCommand::Loans) => self.loans_menu(session).await?,
                Some(MainCommand::Logout) => return Ok(MenuOutcome::Logout),
                Some(MainCommand::Quit) => return Ok(MenuOutcome::Quit),
                None => {
                    println!("Invalid option.");
                    pause()?;
                }
            }
        }
    }

    async fn books_menu(&self, session: &Session) -> io::Result<()> {
        loop {
            clear_screen();
            println!("--- BOOKS MENU ---");
            println!("1. Register book (admin)");
            println!("2. List books");
            println!("3. Search books");
            println!("4. Back to main menu");
            let choice = prompt("Select an option: ")?;

            let Some(cmd) = BookCommand::parse(&choice) else {
                println!("Invalid option.");
                pause()?;
                continue;
            };
            if cmd == BookCommand::Back {
                return Ok(());
            }
            if !self.authorized(session, cmd.required_role()) {
                pause()?;
                continue;
            }

            match cmd {
                BookCommand::Register => self.register_book(session).await?,
                BookCommand::List => self.list_books().await?,
                BookCommand::Search => self.search_books().await?,
                BookCommand::Back => unreachable!(),
            }
            pause()?;
        }
    }

    async fn readers_menu(&self, session: &Session) -> io::Result<()> {
        loop {
            clear_screen();
            println!("--- READERS MENU ---");
            println!("1. Register reader (admin)");
            println!("2. List readers");
            println!("3. Search readers");
            println!("4. Back to main menu");
            let choice = prompt("Select an option: ")?;

            let Some(cmd) = ReaderCommand::parse(&choice) else {
                println!("Invalid option.");
                pause()?;
                continue;
            };
            if cmd == ReaderCommand::Back {
                return Ok(());
            }
            if !self.authorized(session, cmd.required_role()) {
                pause()?;
                continue;
            }

            match cmd {
                ReaderCommand::Register => self.register_reader(session).await?,
                ReaderCommand::List => self.list_readers().await?,
                ReaderCommand::Search => self.search_readers().await?,
                ReaderCommand::Back => unreachable!(),
            }
            pause()?;
        }
    }

    async fn loans_menu(&self, session: &Session) -> io::Result<()> {
        loop {
            clear_screen();
            println!("--- LOANS MENU ---");
            println!("1. Register loan (admin)");
            println!("2. Return book (admin)");
            println!("3. List active loans");
            println!("4. Back to main menu");
            let choice = prompt("Select an option: ")?;

            let Some(cmd) = LoanCommand::parse(&choice) else {
                println!("Invalid option.");
                pause()?;
                continue;
            };
            if cmd == LoanCommand::Back {
                return Ok(());
            }
            if !self.authorized(session, cmd.required_role()) {
                pause()?;
                continue;
            }

            match cmd {
                LoanCommand::Register => self.register_loan(session).await?,
                LoanCommand::Return => self.return_loan(session).await?,
                LoanCommand::ListActive => self.list_active_loans().await?,
                LoanCommand::Back => unreachable!(),
            }
            pause()?;
        }
    }

    /// Gate a command on its required role. Prints the denial.
    fn authorized(&self, session: &Session, required: Option<Role>) -> bool {
        let Some(required) = required else {
            return true;
        };
        if auth::has_permission(Some(session), required) {
            true
        } else {
            report(Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            )));
            false
        }
    }

    async fn register_book(&self, session: &Session) -> io::Result<()> {
        println!("--- REGISTER NEW BOOK ---");
        let title = prompt("Title: ")?;
        let author = prompt("Author: ")?;
        let year = prompt("Year: ")?;

        let outcome = match year.parse::<i32>() {
            Err(_) => Err(AppError::Validation("Year must be a number".to_string())),
            Ok(year) => self
                .services
                .books
                .register(session, CreateBook { title, author, year })
                .await
                .map(|book| println!("Book registered with id {}.", book.id)),
        };
        report(outcome);
        Ok(())
    }

    async fn list_books(&self) -> io::Result<()> {
        println!("--- BOOK LIST ---");
        report(self.services.books.list().await.map(|books| {
            if books.is_empty() {
                println!("No books registered.");
            }
            for book in &books {
                print_book(book);
            }
        }));
        Ok(())
    }

    async fn search_books(&self) -> io::Result<()> {
        println!("--- SEARCH BOOKS ---");
        let term = prompt("Search by title or author: ")?;
        report(self.services.books.search(&term).await.map(|books| {
            if books.is_empty() {
                println!("No books found.");
            }
            for book in &books {
                print_book(book);
            }
        }));
        Ok(())
    }

    async fn register_reader(&self, session: &Session) -> io::Result<()> {
        println!("--- REGISTER NEW READER ---");
        let name = prompt("Name: ")?;
        let category = prompt("Category (student / teacher / other): ")?;

        report(
            self.services
                .readers
                .register(session, CreateReader { name, category })
                .await
                .map(|reader| println!("Reader registered with id {}.", reader.id)),
        );
        Ok(())
    }

    async fn list_readers(&self) -> io::Result<()> {
        println!("--- READER LIST ---");
        report(self.services.readers.list().await.map(|readers| {
            if readers.is_empty() {
                println!("No readers registered.");
            }
            for reader in &readers {
                print_reader(reader);
            }
        }));
        Ok(())
    }

    async fn search_readers(&self) -> io::Result<()> {
        println!("--- SEARCH READERS ---");
        let term = prompt("Search by name: ")?;
        report(self.services.readers.search(&term).await.map(|readers| {
            if readers.is_empty() {
                println!("No readers found.");
            }
            for reader in &readers {
                print_reader(reader);
            }
        }));
        Ok(())
    }

    async fn register_loan(&self, session: &Session) -> io::Result<()> {
        println!("--- REGISTER NEW LOAN ---");
        let reader_id = prompt("Reader id: ")?;
        let book_id = prompt("Book id: ")?;

        let outcome = match (reader_id.parse::<i64>(), book_id.parse::<i64>()) {
            (Ok(reader_id), Ok(book_id)) => self
                .services
                .loans
                .create_loan(session, reader_id, book_id)
                .await
                .map(|loan_id| println!("Loan registered with id {}.", loan_id)),
            _ => Err(AppError::Validation("Ids must be numbers".to_string())),
        };
        report(outcome);
        Ok(())
    }

    async fn return_loan(&self, session: &Session) -> io::Result<()> {
        println!("--- RETURN BOOK ---");
        let loan_id = prompt("Loan id to return: ")?;

        let outcome = match loan_id.parse::<i64>() {
            Err(_) => Err(AppError::Validation("Id must be a number".to_string())),
            Ok(loan_id) => self
                .services
                .loans
                .return_loan(session, loan_id)
                .await
                .map(|()| println!("Book returned.")),
        };
        report(outcome);
        Ok(())
    }

    async fn list_active_loans(&self) -> io::Result<()> {
        println!("--- ACTIVE LOANS ---");
        report(self.services.loans.list_active().await.map(|loans| {
            if loans.is_empty() {
                println!("No active loans.");
            }
            for loan in &loans {
                println!(
                    "[{}] {} -> {} (since {})",
                    loan.id, loan.reader_name, loan.book_title, loan.loan_date
                );
            }
        }));
        Ok(())
    }
}

/// Print an operation failure; successes already printed their outcome.
fn report(outcome: AppResult<()>) {
    if let Err(e) = outcome {
        println!("Error: {}", e.user_message());
    }
}

fn print_book(book: &Book) {
    println!(
        "[{}] {} - {} ({}) - {}",
        book.id,
        book.title,
        book.author,
        book.year,
        book.availability_label()
    );
}

fn print_reader(reader: &Reader) {
    println!("[{}] {} - {}", reader.id, reader.name, reader.category);
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

fn pause() -> io::Result<()> {
    let _ = prompt("\nPress Enter to continue...")?;
    Ok(())
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
