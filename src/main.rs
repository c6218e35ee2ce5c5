use anyhow::Result;
use clap::Parser;
use tui_snake::app::App;
use tui_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic Snake for the terminal")]
struct Cli {
    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new(GameConfig::default(), cli.seed);
    app.run().await
}
