#[tokio::main]
async fn main() {
    if let Err(e) = algorand_reputation::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
