//! Interactive console front end
//!
//! Reads menu choices and record fields line by line and reports outcomes in
//! plain text. Generic over its input and output so it can be driven by
//! in-memory buffers as well as stdin/stdout.

use std::io::{BufRead, Write};

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    services::books::BookService,
};

const INVALID_ISBN: &str = "Invalid ISBN. Must be 13 digits.";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    List,
    View,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::List),
            "5" => Some(Self::View),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    service: BookService,
    banner: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(service: BookService, banner: impl Into<String>, input: R, output: W) -> Self {
        Self {
            service,
            banner: banner.into(),
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// A failing action is logged and reported, and the loop carries on.
    /// Only errors writing the menu itself end the loop.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Console input closed");
                return Ok(());
            };

            let result = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice) => self.dispatch(choice).await,
                None => writeln!(self.output, "Invalid option.").map_err(AppError::from),
            };

            if let Err(e) = result {
                tracing::error!("An unhandled error occurred: {}", e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
    }

    /// Consume the console and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> AppResult<()> {
        tracing::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::Add => self.add_book().await,
            MenuChoice::Update => self.update_book().await,
            MenuChoice::Delete => self.delete_book().await,
            MenuChoice::List => self.list_books().await,
            MenuChoice::View => self.view_book().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== {} =====", self.banner)?;
        writeln!(self.output, "1. Add a new book")?;
        writeln!(self.output, "2. Update an existing book")?;
        writeln!(self.output, "3. Delete a book")?;
        writeln!(self.output, "4. List all books")?;
        writeln!(self.output, "5. View details of a specific book")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    async fn add_book(&mut self) -> AppResult<()> {
        let title = self.prompt("Title: ")?;
        let author = self.prompt("Author: ")?;
        let isbn = self.prompt("ISBN (13 digits): ")?;
        let year = parse_year(&self.prompt("Year: ")?);

        let book = Book::new(title, author, isbn, year);
        let added = self.service.add(book).await?;

        if added {
            writeln!(self.output, "Book added successfully!")?;
        } else {
            writeln!(self.output, "{}", INVALID_ISBN)?;
        }
        Ok(())
    }

    async fn update_book(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter Book ID to update: ")? else {
            return Ok(());
        };

        let Some(mut book) = self.service.get_by_id(id).await? else {
            writeln!(self.output, "Book not found.")?;
            return Ok(());
        };

        book.title = self.prompt("New Title: ")?;
        book.author = self.prompt("New Author: ")?;
        book.isbn = self.prompt("New ISBN (13 digits): ")?;
        book.published_year = parse_year(&self.prompt("New Year: ")?);

        if self.service.update(book).await? {
            writeln!(self.output, "Book updated successfully!")?;
        } else {
            writeln!(self.output, "{}", INVALID_ISBN)?;
        }
        Ok(())
    }

    async fn delete_book(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter Book ID to delete: ")? else {
            return Ok(());
        };

        if self.service.delete(id).await? {
            writeln!(self.output, "Book deleted successfully.")?;
        } else {
            writeln!(self.output, "Book not found. Deletion failed.")?;
        }
        Ok(())
    }

    async fn list_books(&mut self) -> AppResult<()> {
        let books = self.service.list_all().await?;
        if books.is_empty() {
            writeln!(self.output, "No books in the catalogue.")?;
        }
        for book in books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    async fn view_book(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter Book ID: ")? else {
            return Ok(());
        };

        match self.service.get_by_id(id).await? {
            Some(book) => {
                writeln!(self.output)?;
                writeln!(self.output, "Title: {}", book.title)?;
                writeln!(self.output, "Author: {}", book.author)?;
                writeln!(self.output, "ISBN: {}", book.isbn)?;
                writeln!(self.output, "Year: {}", book.published_year)?;
            }
            None => writeln!(self.output, "Book not found.")?,
        }
        Ok(())
    }

    /// Print `label` and read one line. End of input reads as empty.
    fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompt for a book ID, printing `Invalid ID.` when it does not parse
    fn prompt_id(&mut self, label: &str) -> AppResult<Option<Uuid>> {
        let raw = self.prompt(label)?;
        match Uuid::parse_str(raw.trim()) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                tracing::debug!("Rejected book ID {:?}: {}", raw, e);
                writeln!(self.output, "Invalid ID.")?;
                Ok(None)
            }
        }
    }

    /// Next input line without its line terminator, `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.strip_suffix('\n').unwrap_or(&*line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

/// Year as typed, or 0 when it is not a number
fn parse_year(input: &str) -> i32 {
    input.trim().parse().unwrap_or(0)
}
