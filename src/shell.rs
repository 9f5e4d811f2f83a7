//! Interactive shell
//!
//! The menu loop that drives a [`Session`](crate::session::Session) from
//! stdin. Rendering is split into plain functions returning `String` so
//! the output can be tested without a terminal. One command runs to
//! completion before the next prompt is shown.

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, error, info, warn};

use crate::cache::CacheStats;
use crate::catalog::{InfoOutcome, ResponseSource, SearchOutcome};
use crate::error::ClientError;
use crate::formatting::format_price;
use crate::order::PurchaseOutcome;
use crate::session::Session;

/// Run the menu loop until the user quits or stdin closes
pub async fn run(session: &Session) -> Result<()> {
    println!("{}", banner());

    let (catalog_replicas, order_replicas) = session.replica_counts();
    println!(
        "{}",
        format!(
            "Connected to {} catalog and {} order replica(s).",
            catalog_replicas, order_replicas
        )
        .dimmed()
    );

    loop {
        println!("{}", menu());

        let Some(choice) = read_line(&"Choose an option (1-5): ".magenta().to_string()).await?
        else {
            println!("\n{}", goodbye());
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(topic) = read_line(&"Enter the topic: ".yellow().to_string()).await?
                else {
                    println!("\n{}", goodbye());
                    return Ok(());
                };
                match session.search(&topic).await {
                    Ok(outcome) => println!("{}", render_search(&outcome)),
                    Err(err) => report_error(&err),
                }
            }
            "2" => {
                let Some(item) =
                    read_line(&"Enter the item number of the book: ".yellow().to_string()).await?
                else {
                    println!("\n{}", goodbye());
                    return Ok(());
                };
                match session.info(&item).await {
                    Ok(outcome) => println!("{}", render_info(&outcome)),
                    Err(err) => report_error(&err),
                }
            }
            "3" => {
                let Some(item) =
                    read_line(&"Enter the item number to purchase: ".yellow().to_string()).await?
                else {
                    println!("\n{}", goodbye());
                    return Ok(());
                };
                match session.purchase(&item).await {
                    Ok(outcome) => println!("{}", render_purchase(&outcome)),
                    Err(err) => report_error(&err),
                }
            }
            "4" => {
                let stats = session.cache_stats().await;
                println!("{}", render_stats(&stats));
            }
            "5" | "q" | "quit" | "exit" => {
                println!("\n{}", goodbye());
                return Ok(());
            }
            "" => {}
            _ => println!("{}", "Invalid option. Try again.".bright_red()),
        }
    }
}

/// Print the prompt, then read one line from stdin off the async runtime
///
/// Returns None once stdin reaches end of file.
async fn read_line(prompt: &str) -> Result<Option<String>> {
    use std::io::Write;

    print!("{}", prompt);
    std::io::stdout().flush()?;

    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => Err(anyhow::Error::from(e)),
        }
    })
    .await?
}

/// Log the failure at its own severity, then show it to the user
fn report_error(err: &ClientError) {
    let level = err.log_level();
    if level == tracing::Level::ERROR {
        error!("{}", err);
    } else if level == tracing::Level::WARN {
        warn!("{}", err);
    } else if level == tracing::Level::INFO {
        info!("{}", err);
    } else {
        debug!("{}", err);
    }

    println!("{} {}", "Error:".bright_red().bold(), err);
}

fn banner() -> String {
    // Pad before coloring so the box stays aligned when ANSI codes are on
    let title = format!("{:<36}", "Welcome to BAZAR.COM").cyan().bold();
    let tagline = format!("{:<36}", "Your gateway to the world of books!").bright_green();

    format!(
        "{}\n{}  {}  {}\n{}  {}  {}\n{}",
        "╭────────────────────────────────────────╮".magenta(),
        "│".magenta(),
        title,
        "│".magenta(),
        "│".magenta(),
        tagline,
        "│".magenta(),
        "╰────────────────────────────────────────╯".magenta(),
    )
}

fn menu() -> String {
    format!(
        "{}\n{} Search for books by topic\n{} Get info about a book\n{} Purchase a book\n{} Show cache statistics\n{} Exit",
        "What would you like to do?".yellow().bold(),
        "1.".cyan(),
        "2.".cyan(),
        "3.".cyan(),
        "4.".cyan(),
        "5.".cyan(),
    )
}

fn goodbye() -> String {
    "Thank you for visiting Bazar.com!".bright_green().to_string()
}

fn source_phrase(source: &ResponseSource) -> String {
    match source {
        ResponseSource::Cache { age, .. } => format!("from cache, {}s old", age.as_secs()),
        ResponseSource::Replica(endpoint) => format!("from {}", endpoint),
    }
}

fn render_search(outcome: &SearchOutcome) -> String {
    if outcome.books.is_empty() {
        return format!("No books found ({}).", source_phrase(&outcome.source))
            .yellow()
            .to_string();
    }

    let mut out = format!(
        "{}\n",
        format!("Books found ({}):", source_phrase(&outcome.source)).bright_green()
    );
    out.push_str(&format!("  {:<6} {}\n", "Item", "Title"));
    for book in &outcome.books {
        out.push_str(&format!("  {:<6} {}\n", book.item_number, book.title));
    }
    out.pop();
    out
}

fn render_info(outcome: &InfoOutcome) -> String {
    let book = &outcome.book;
    format!(
        "{}\n  {:<13} {}\n  {:<13} {}\n  {:<13} {}\n  {:<13} {}\n  {:<13} {}",
        format!("Book info ({}):", source_phrase(&outcome.source)).bright_cyan(),
        "Item number:",
        book.item_number,
        "Title:",
        book.title,
        "Topic:",
        book.topic,
        "Price:",
        format_price(book.price),
        "Stock:",
        book.stock,
    )
}

fn render_purchase(outcome: &PurchaseOutcome) -> String {
    let mut out = outcome.confirmation.message.as_str().green().bold().to_string();
    for key in &outcome.invalidated {
        out.push('\n');
        out.push_str(
            &format!("Cache cleared successfully for \"{}\"", key)
                .bright_yellow()
                .to_string(),
        );
    }
    out.push('\n');
    out.push_str(&format!("Ordered from {}", outcome.replica).dimmed().to_string());
    out
}

fn render_stats(stats: &CacheStats) -> String {
    format!(
        "{}\n  {:<10} {}\n  {:<10} {}\n  {:<10} {}\n  {:<10} {:.1}%",
        "Cache statistics".yellow().bold(),
        "Entries:",
        stats.entry_count,
        "Hits:",
        stats.hits,
        "Misses:",
        stats.misses,
        "Hit rate:",
        stats.hit_rate,
    )
}
