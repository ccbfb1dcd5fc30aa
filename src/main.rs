use std::env;
use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;
use txt_reader::book::utils::{parse_charset, parse_charset_list};
use txt_reader::{Candidate, EncodingGuesser, Guess, GuesserConfig, Library};

const USAGE: &str = "\
Usage: txt-reader <path-to-txt-file> [--encoding <LABEL>] [--candidates <L1,L2,..>] [--strict] [--scores]
       txt-reader --library <DIR> [--remove <BOOK_ID>] [--read <BOOK_ID>]";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        fail(USAGE);
    }

    if let Some(dir) = flag_value(&args, "--library") {
        run_library(
            &dir,
            flag_value(&args, "--remove").as_deref(),
            flag_value(&args, "--read").as_deref(),
        );
    } else {
        run_file(&args);
    }
}

fn run_file(args: &[String]) {
    let path = &args[0];
    if path.starts_with("--") {
        fail(USAGE);
    }

    let mut config = GuesserConfig::default().with_strict(args.iter().any(|a| a == "--strict"));
    if let Some(labels) = flag_value(args, "--candidates") {
        match parse_charset_list(&labels) {
            Ok(list) => config = config.with_candidates(list),
            Err(e) => fail(&format!("ERROR: {}", e)),
        }
    }
    // A forced encoding takes priority over a candidate list.
    if let Some(label) = flag_value(args, "--encoding") {
        match parse_charset(&label) {
            Ok(charset) => config = config.with_candidates([charset]),
            Err(e) => fail(&format!("ERROR: {}", e)),
        }
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => fail(&format!("ERROR: Failed to read {}: {}", path, e)),
    };
    let guesser = EncodingGuesser::new(config);

    let candidates: Vec<Candidate> = guesser.candidates(&bytes).collect();
    if args.iter().any(|a| a == "--scores") {
        println!("Candidates:");
        for candidate in &candidates {
            if candidate.decoded {
                println!("  {:<14} {:.4}", candidate.charset.name(), candidate.score);
            } else {
                println!("  {:<14} failed", candidate.charset.name());
            }
        }
        println!("{}", "=".repeat(60));
    }

    print_guess(guesser.select(candidates), &guesser.config().fallback_text);
}

fn print_guess(guess: Guess, fallback_text: &str) {
    match guess {
        Guess::Decoded(best) => {
            println!("Encoding: {} (score {:.4})", best.charset.name(), best.score);
            println!("{}", "=".repeat(60));
            println!("{}", best.text);
        }
        Guess::Undecodable => {
            println!("Encoding: none");
            println!("{}", "=".repeat(60));
            println!("{}", fallback_text);
        }
    }
}

fn run_library(dir: &str, remove: Option<&str>, read: Option<&str>) {
    let mut library = match Library::open(dir) {
        Ok(library) => library,
        Err(e) => fail(&format!("ERROR: Failed to open library\n  {}", e)),
    };

    if let Some(id) = remove {
        match library.remove(id) {
            Ok(Some(book)) => println!("Removed: {}", book.title),
            Ok(None) => fail(&format!("ERROR: No book with id {:?}", id)),
            Err(e) => fail(&format!("ERROR: Failed to remove {}\n  {}", id, e)),
        }
    }

    if let Some(id) = read {
        let Some(book) = library.find(id) else {
            fail(&format!("ERROR: No book with id {:?}", id));
        };
        println!("Book: {} ({})", book.title, book.path.display());
        match library.read_guess(book) {
            Ok(guess) => print_guess(guess, &library.guesser().config().fallback_text),
            Err(e) => fail(&format!("ERROR: Failed to read {}\n  {}", id, e)),
        }
        return;
    }

    println!("Library: {}", library.root().display());
    println!("{}", "=".repeat(60));
    for (i, book) in library.books().iter().enumerate() {
        println!("  {}. [{}] {} ({})", i + 1, book.id, book.title, book.path.display());
    }
    println!("Total books: {}", library.books().len());
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|arg| arg == flag)?;
    match args.get(idx + 1) {
        Some(value) if !value.starts_with("--") => Some(value.clone()),
        _ => fail(&format!("ERROR: {} flag requires an argument.", flag)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
