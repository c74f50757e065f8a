//! Bookshelf CLI
//!
//! Command-line interface for the personal-library catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bookshelf::{Config, Inventory};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Personal-library catalog backed by a JSON file")]
#[command(version)]
struct Args {
    /// Backing data file
    #[arg(short, long, default_value = "library_data.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a record to the catalog
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// ISBN (free text, not validated)
        isbn: String,
    },

    /// Search titles by case-insensitive substring
    Search {
        /// Keyword to match against titles
        keyword: String,
    },

    /// Look up a record by exact ISBN
    Find {
        /// ISBN to look up
        isbn: String,
    },

    /// List all records in insertion order
    List,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookshelf=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder().data_path(&args.data_file).build();
    let mut inventory = Inventory::open(config);

    match args.command {
        Commands::Add {
            title,
            author,
            isbn,
        } => {
            inventory.add(title.clone(), author, isbn);
            println!("added: {}", title);
        }

        Commands::Search { keyword } => {
            let matches = inventory.search_by_title(&keyword);
            if matches.is_empty() {
                println!("no titles match '{}'", keyword);
            } else {
                for book in matches {
                    println!("{} by {} [{}]", book.title, book.author, book.isbn);
                }
            }
        }

        Commands::Find { isbn } => match inventory.find_by_isbn(&isbn) {
            Some(book) => println!("{} by {} [{}]", book.title, book.author, book.isbn),
            None => {
                println!("no record with ISBN {}", isbn);
                std::process::exit(1);
            }
        },

        Commands::List => {
            for book in inventory.display_all() {
                println!("{} by {} [{}]", book.title, book.author, book.isbn);
            }
            println!("{} record(s)", inventory.len());
        }
    }
}
