#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordloop_backend::run().await
}
