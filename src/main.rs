// Headless entry point: `advision-desktop [field=value ...]`

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advision_desktop_lib::run(std::env::args().skip(1).collect()).await
}
