#[tokio::main]
async fn main() {
    if let Err(e) = postbook::run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
