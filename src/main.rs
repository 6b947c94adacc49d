use aptcrawl::cli;

#[tokio::main]
async fn main() {
    // Diagnostics are printed by the CLI; every failure exits with 1.
    if cli::Cli::run().await.is_err() {
        std::process::exit(1);
    }
}
