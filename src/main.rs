use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = moodlog::commands::Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/moodlog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("moodlog debug log started — tail -f /tmp/moodlog-debug.log");
    }

    moodlog::commands::run(cli)
}
