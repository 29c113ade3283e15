mod app;

#[tokio::main]
async fn main() {
    if let Err(err) = app::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
