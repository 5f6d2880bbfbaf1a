//! Canteen CLI — Menu-driven snack inventory and sales for a small canteen.

mod menu;
mod prompt;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use log::{info, LevelFilter};

use canteen_core::config::{CanteenConfig, DEFAULT_DB_PATH};
use canteen_core::sales::SalesRecord;
use canteen_core::session::Session;

use crate::prompt::Prompter;

#[derive(Parser)]
#[command(
    name = "canteen",
    about = "Canteen - Track snack stock and record sales"
)]
struct Cli {
    /// Inventory file to load at startup and save after every change
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Refuse to start if the inventory file is unreadable or corrupt
    #[arg(long)]
    strict: bool,

    /// Log every inventory change to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = CanteenConfig {
        db_path: cli.db,
        strict_load: cli.strict,
    };

    let mut session = match Session::open(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    if let Err(e) = menu::run(&mut session, &mut prompter) {
        eprintln!("{} terminal I/O failed: {e}", style("Error:").red().bold());
        std::process::exit(1);
    }

    print_summary(session.sales());
}

fn init_logger(verbose: bool) {
    let our_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, LevelFilter::Warn)
        .filter(Some("canteen_core"), our_level)
        .filter(Some("canteen"), our_level)
        .parse_default_env()
        .init();
}

fn print_summary(sales: &SalesRecord) {
    info!("session ended with {} sales", sales.len());
    if sales.is_empty() {
        return;
    }
    println!(
        "\n{}  Sales this session: {}",
        style("✓").green().bold(),
        style(sales.len()).bold()
    );
    for line in sale_lines(sales) {
        println!("{line}");
    }
    println!("  {:<14} {:.2}", "Total:", sales.total());
}

/// One line per sale: UTC time, id, name and price.
fn sale_lines(sales: &SalesRecord) -> Vec<String> {
    sales
        .iter()
        .map(|sale| {
            format!(
                "  {}  #{:<6} {:<20} {:.2}",
                sale.sold_at.format("%H:%M:%S UTC"),
                sale.snack.id,
                sale.snack.name,
                sale.snack.price
            )
        })
        .collect()
}
