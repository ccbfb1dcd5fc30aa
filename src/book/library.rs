use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};

use super::codec::guesser::EncodingGuesser;
use super::types::error::{BookError, Result};
use super::types::models::{Book, Guess};

/// File extension of the books a library picks up.
const BOOK_EXTENSION: &str = "txt";

/// A directory of plain-text books.
///
/// The book list is built once on [`open`](Library::open) and refreshed with
/// [`reload`](Library::reload). Content is read lazily, one book at a time,
/// and decoded through the library's [`EncodingGuesser`].
#[derive(Debug)]
pub struct Library {
    root: PathBuf,
    books: Vec<Book>,
    guesser: EncodingGuesser,
}

impl Library {
    /// Opens the library at `root`, creating the directory if it is missing.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `root` exists but is not a directory
    /// - The directory cannot be created or listed
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        info!("Opening book library: {}", root.display());

        if root.exists() && !root.is_dir() {
            return Err(BookError::NotADirectory(root));
        }
        fs::create_dir_all(&root)?;

        let books = scan(&root)?;
        info!("Book library opened: {} books", books.len());

        Ok(Self {
            root,
            books,
            guesser: EncodingGuesser::default(),
        })
    }

    /// Replaces the guesser used to decode book content.
    pub fn with_guesser(mut self, guesser: EncodingGuesser) -> Self {
        self.guesser = guesser;
        self
    }

    pub fn guesser(&self) -> &EncodingGuesser {
        &self.guesser
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Books in the library, sorted by title.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Rescans the directory, picking up files added or removed externally.
    pub fn reload(&mut self) -> Result<()> {
        self.books = scan(&self.root)?;
        debug!("Book library reloaded: {} books", self.books.len());
        Ok(())
    }

    /// Reads a book and decodes it with the best-guess encoding.
    ///
    /// Falls back to the guesser's fallback text when no candidate decodes.
    pub fn read_content(&self, book: &Book) -> Result<String> {
        let bytes = read_bytes(book)?;
        Ok(self.guesser.decode(&bytes))
    }

    /// Like [`read_content`](Library::read_content), but returns the full
    /// guess including the chosen encoding and its score.
    pub fn read_guess(&self, book: &Book) -> Result<Guess> {
        let bytes = read_bytes(book)?;
        Ok(self.guesser.guess(&bytes))
    }

    /// Removes a book from the library and deletes its file.
    ///
    /// Returns `Ok(None)` if no book has this id. A file already gone from
    /// disk is not an error. If the file cannot be deleted the book stays
    /// listed.
    pub fn remove(&mut self, id: &str) -> Result<Option<Book>> {
        let Some(index) = self.books.iter().position(|book| book.id == id) else {
            return Ok(None);
        };
        let path = &self.books[index].path;
        if path.exists() {
            fs::remove_file(path)?;
            debug!("Deleted book file: {}", path.display());
        }
        let book = self.books.remove(index);
        info!("Removed book: {}", book.id);
        Ok(Some(book))
    }
}

fn read_bytes(book: &Book) -> Result<Vec<u8>> {
    if !book.path.is_file() {
        return Err(BookError::NotFound(book.path.clone()));
    }
    let bytes = fs::read(&book.path)?;
    debug!("Read {} bytes from {}", bytes.len(), book.path.display());
    Ok(bytes)
}

fn scan(root: &Path) -> Result<Vec<Book>> {
    let mut books = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_book = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == BOOK_EXTENSION);
        if is_book {
            let book = Book::from_file(&path);
            debug!("Loaded book: {}", book.title);
            books.push(book);
        }
    }
    books.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(books)
}
