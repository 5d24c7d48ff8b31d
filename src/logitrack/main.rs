use colored::Colorize;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
