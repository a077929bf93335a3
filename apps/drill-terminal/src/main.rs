#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    drill_terminal::run().await
}
