use std::fs;
use std::path::{Path, PathBuf};

use txt_reader::{BookError, Charset, EncodingGuesser, Guess, GuesserConfig, Library};

const WAR_AND_PEACE: &str =
    "Война и мир\nЛев Николаевич Толстой\n\nЕщё Генуя и Лукка - поместья фамилии Буонапарте.\n";

fn fixture_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect()
}

/// A fresh scratch directory holding copies of the given fixtures.
fn scratch_library(test_name: &str, fixtures: &[(&str, &str)]) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(test_name);
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("create scratch dir");
    for (source, target) in fixtures {
        fs::copy(fixture_path(source), dir.join(target)).expect("copy fixture");
    }
    dir
}

#[test]
fn open_scans_only_txt_files() {
    let dir = scratch_library(
        "open_scans_only_txt_files",
        &[
            ("utf8.txt", "Война_и_мир.txt"),
            ("ascii.txt", "Notes.txt"),
            ("notes.md", "readme.md"),
        ],
    );
    fs::create_dir_all(dir.join("nested.txt")).expect("create nested dir");

    let library = Library::open(&dir).expect("open library");
    let titles: Vec<&str> = library.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Notes", "Война_и_мир"]);

    let book = library.find("Война_и_мир").expect("book by id");
    assert_eq!(book.id, book.title);
    assert_eq!(book.description, "Импортированная книга: Война_и_мир");
    assert_eq!(book.path, dir.join("Война_и_мир.txt"));
}

#[test]
fn open_creates_missing_directory() {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("open_creates_missing_directory");
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear scratch dir");
    }
    let library = Library::open(&dir).expect("open library");
    assert!(dir.is_dir());
    assert!(library.books().is_empty());
}

#[test]
fn open_rejects_a_file_root() {
    let dir = scratch_library("open_rejects_a_file_root", &[("ascii.txt", "book.txt")]);
    match Library::open(dir.join("book.txt")) {
        Err(BookError::NotADirectory(path)) => assert_eq!(path, dir.join("book.txt")),
        other => panic!("expected NotADirectory, got {:?}", other),
    }
}

#[test]
fn read_content_detects_encoding_per_book() {
    let dir = scratch_library(
        "read_content_detects_encoding_per_book",
        &[("cp1251.txt", "cp.txt"), ("utf8.txt", "u8.txt")],
    );
    let library = Library::open(&dir).expect("open library");

    for id in ["cp", "u8"] {
        let book = library.find(id).expect("book");
        let content = library.read_content(book).expect("read content");
        assert_eq!(content, WAR_AND_PEACE, "content mismatch for {}", id);
    }

    let guess = library
        .read_guess(library.find("u8").expect("book"))
        .expect("read guess");
    assert_eq!(guess.candidate().map(|c| c.charset), Some(Charset::Utf8));
}

#[test]
fn custom_guesser_is_used_for_reads() {
    let dir = scratch_library("custom_guesser_is_used_for_reads", &[("koi8r.txt", "koi.txt")]);
    let library = Library::open(&dir)
        .expect("open library")
        .with_guesser(EncodingGuesser::new(GuesserConfig::forced(Charset::Koi8R)));
    let book = library.find("koi").expect("book");
    assert_eq!(library.read_content(book).expect("read"), WAR_AND_PEACE);
}

#[test]
fn read_content_reports_missing_file() {
    let dir = scratch_library("read_content_reports_missing_file", &[("ascii.txt", "gone.txt")]);
    let library = Library::open(&dir).expect("open library");
    let book = library.find("gone").expect("book").clone();
    fs::remove_file(&book.path).expect("delete behind the library's back");

    match library.read_content(&book) {
        Err(BookError::NotFound(path)) => assert_eq!(path, book.path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn remove_deletes_book_and_file() {
    let dir = scratch_library(
        "remove_deletes_book_and_file",
        &[("ascii.txt", "keep.txt"), ("utf8.txt", "drop.txt")],
    );
    let mut library = Library::open(&dir).expect("open library");

    let removed = library.remove("drop").expect("remove").expect("book existed");
    assert_eq!(removed.title, "drop");
    assert!(!dir.join("drop.txt").exists());
    assert!(library.find("drop").is_none());
    assert_eq!(library.books().len(), 1);

    assert!(library.remove("drop").expect("second remove").is_none());
}

#[test]
fn reload_picks_up_new_files() {
    let dir = scratch_library("reload_picks_up_new_files", &[("ascii.txt", "a.txt")]);
    let mut library = Library::open(&dir).expect("open library");
    assert_eq!(library.books().len(), 1);

    fs::copy(fixture_path("cp1251.txt"), dir.join("b.txt")).expect("copy fixture");
    library.reload().expect("reload");
    let ids: Vec<&str> = library.books().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn failed_delete_keeps_book_listed() {
    let dir = scratch_library("failed_delete_keeps_book_listed", &[("ascii.txt", "x.txt")]);
    let mut library = Library::open(&dir).expect("open library");

    // A directory in place of the file makes the delete fail.
    fs::remove_file(dir.join("x.txt")).expect("remove fixture copy");
    fs::create_dir(dir.join("x.txt")).expect("create blocking dir");

    let result = library.remove("x");
    assert!(matches!(result, Err(BookError::Io(_))), "got {:?}", result);
    assert!(library.find("x").is_some(), "book dropped although deletion failed");
    assert!(dir.join("x.txt").exists());
}

#[test]
fn read_guess_uses_library_guesser_fallback() {
    let dir = scratch_library("read_guess_uses_library_guesser_fallback", &[("cp1251.txt", "cp.txt")]);
    let library = Library::open(&dir).expect("open library").with_guesser(EncodingGuesser::new(
        GuesserConfig::forced(Charset::Utf8)
            .with_strict(true)
            .with_fallback_text("unreadable"),
    ));
    let book = library.find("cp").expect("book");

    assert_eq!(library.read_guess(book).expect("read guess"), Guess::Undecodable);
    assert_eq!(library.guesser().config().fallback_text, "unreadable");
    assert_eq!(library.read_content(book).expect("read content"), "unreadable");
}
