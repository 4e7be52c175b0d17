use clap::Parser;
use menutree::core::config::{self, CliOverrides};
use menutree::{demo, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "menutree", about = "Paginated hierarchical menus for the terminal")]
struct Args {
    /// Always show one item per row
    #[arg(long)]
    single_column: bool,

    /// Items per page (fixed for the session)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Hide the application title bar
    #[arg(long)]
    no_title: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("menutree.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            config::MenuConfig::default()
        }
    };
    let cli = CliOverrides {
        single_column: args.single_column,
        page_size: args.page_size,
        no_title: args.no_title,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "menutree starting (page size {}, dual column {})",
        resolved.page_size,
        resolved.dual_column
    );

    tui::run(resolved, demo::main_menu(), demo::root_title())
}
