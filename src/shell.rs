//! Interactive menu loop.
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so it can be
//! driven by a terminal or by scripted input. End of input quits.
use crate::error::QueryError;
use crate::format::{write_book_list, write_chapter, write_hits, write_verse};
use crate::resolve::parse_index;
use crate::session::{Session, VerseView, View};
use rand::Rng;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nOptions:
1. List all books
2. Search for a verse
3. Open a book and chapter
4. Show bookmarks
5. Show search history
6. Verse of the day
7. Quit";

pub struct Shell<'s, G, I, O> {
    session: &'s mut Session<G>,
    input: I,
    out: O,
}

impl<'s, G: Rng, I: BufRead, O: Write> Shell<'s, G, I, O> {
    pub fn new(session: &'s mut Session<G>, input: I, out: O) -> Self {
        Self {
            session,
            input,
            out,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Terminal Verse Reader ===")?;
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt("\nEnter your choice (1-7): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.list_books()?,
                "2" => self.search()?,
                "3" => self.open()?,
                "4" => self.show_bookmarks()?,
                "5" => self.show_history()?,
                "6" => self.verse_of_the_day()?,
                "7" => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice! Please choose 1-7.")?,
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an index; blank input, end of input, or bad input yield `None`.
    fn prompt_index(&mut self, message: &str) -> io::Result<Option<usize>> {
        let Some(answer) = self.prompt(message)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_index(&answer) {
            Ok(n) => Ok(Some(n)),
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &QueryError) -> io::Result<()> {
        write_error(&mut self.out, err)
    }

    fn write_books(&mut self) -> io::Result<()> {
        let names = self.session.list_books();
        write_book_list(&mut self.out, &names)
    }

    fn list_books(&mut self) -> io::Result<()> {
        self.write_books()?;
        let Some(book) = self.prompt_index(
            "\nEnter a book number to view its chapters (or press Enter to go back): ",
        )?
        else {
            return Ok(());
        };
        let Some(chapter) = self.prompt_chapter(book)? else {
            return Ok(());
        };
        self.show_chapter(book, chapter)
    }

    /// Announce the book and ask for one of its chapters.
    fn prompt_chapter(&mut self, book: usize) -> io::Result<Option<usize>> {
        let summary = self.session.book_name(book).map(str::to_string).and_then(|name| {
            let count = self.session.chapter_count(book)?;
            Ok((name, count))
        });
        let (name, count) = match summary {
            Ok(summary) => summary,
            Err(err) => {
                self.report(&err)?;
                return Ok(None);
            }
        };
        writeln!(self.out, "\nYou selected: {name}")?;
        writeln!(self.out, "This book has {count} chapters.")?;
        self.prompt_index(&format!("Enter a chapter number (1-{count}): "))
    }

    fn show_chapter(&mut self, book: usize, chapter: usize) -> io::Result<()> {
        match self.session.resolve_and_show(book, chapter, None) {
            Ok(View::Chapter(view)) => write_chapter(&mut self.out, &view),
            Ok(View::Verse(view)) => write_verse(&mut self.out, &view),
            Err(err) => write_error(&mut self.out, &err),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(keyword) = self.prompt("Enter a word or phrase to search for: ")? else {
            return Ok(());
        };
        let hits = match self.session.search(&keyword) {
            Ok(hits) => hits,
            Err(QueryError::EmptyQuery) => {
                return writeln!(self.out, "Please enter a keyword.");
            }
            Err(err) => return self.report(&err),
        };
        writeln!(self.out, "\nSearching for: '{keyword}' ...")?;
        write_hits(&mut self.out, &hits)?;
        if hits.is_empty() {
            return Ok(());
        }

        let Some(pick) = self.prompt_index(
            "\nEnter the number of the verse you want to open (or press Enter to cancel): ",
        )?
        else {
            return Ok(());
        };
        let Some(hit) = pick.checked_sub(1).and_then(|idx| hits.get(idx)) else {
            return writeln!(
                self.out,
                "Error: result number {pick} is out of range (1-{})",
                hits.len()
            );
        };
        let at = hit.coordinates;
        let view = VerseView {
            reference: hit.reference.clone(),
            text: hit.text.clone(),
            coordinates: at,
        };
        writeln!(self.out, "\nYou chose: {}", view.reference)?;
        writeln!(self.out, "\"{}\"", view.text)?;
        self.show_chapter(at.book, at.chapter)?;
        self.offer_bookmark(&view)
    }

    fn open(&mut self) -> io::Result<()> {
        self.write_books()?;
        let Some(book) = self.prompt_index("\nEnter book number: ")? else {
            return Ok(());
        };
        let Some(chapter) = self.prompt_chapter(book)? else {
            return Ok(());
        };
        let verse_count = match self.session.verse_count(book, chapter) {
            Ok(count) => count,
            Err(err) => return self.report(&err),
        };
        let Some(answer) = self.prompt(&format!(
            "Enter a verse number (1-{verse_count}, or press Enter for the whole chapter): "
        ))?
        else {
            return Ok(());
        };
        if answer.is_empty() {
            return self.show_chapter(book, chapter);
        }
        let view = match parse_index(&answer)
            .and_then(|verse| self.session.show_verse(book, chapter, verse))
        {
            Ok(view) => view,
            Err(err) => return self.report(&err),
        };
        write_verse(&mut self.out, &view)?;
        self.offer_bookmark(&view)
    }

    fn offer_bookmark(&mut self, view: &VerseView) -> io::Result<()> {
        let Some(answer) = self.prompt("Bookmark this verse? (y/N): ")? else {
            return Ok(());
        };
        if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
            return Ok(());
        }
        let reference = view.reference.to_string();
        if self.session.bookmark(reference.clone(), view.text.clone()) {
            writeln!(self.out, "Updated bookmark {reference}.")
        } else {
            writeln!(self.out, "Bookmarked {reference}.")
        }
    }

    fn show_bookmarks(&mut self) -> io::Result<()> {
        let entries: Vec<(String, String)> = self
            .session
            .list_bookmarks()
            .map(|(reference, text)| (reference.to_string(), text.to_string()))
            .collect();
        if entries.is_empty() {
            return writeln!(self.out, "No bookmarks yet.");
        }
        writeln!(self.out, "\n=== BOOKMARKS ===")?;
        for (reference, text) in entries {
            writeln!(self.out, "{reference} - {text}")?;
        }
        Ok(())
    }

    fn show_history(&mut self) -> io::Result<()> {
        let keywords: Vec<String> = self.session.search_history().map(str::to_string).collect();
        if keywords.is_empty() {
            return writeln!(self.out, "No searches yet.");
        }
        writeln!(self.out, "\n=== RECENT SEARCHES ===")?;
        for (idx, keyword) in keywords.iter().enumerate() {
            writeln!(self.out, "{}. {keyword}", idx + 1)?;
        }
        Ok(())
    }

    fn verse_of_the_day(&mut self) -> io::Result<()> {
        let Some(view) = self.session.verse_of_the_day() else {
            return writeln!(self.out, "The corpus has no verses.");
        };
        writeln!(self.out, "\n=== VERSE OF THE DAY ===")?;
        write_verse(&mut self.out, &view)?;
        self.offer_bookmark(&view)
    }
}

/// Log a rejected request and show it to the user.
fn write_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    tracing::debug!(error = %err, "request rejected");
    writeln!(out, "Error: {err}")
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
