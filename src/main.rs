use clap::Parser;
use hello_config::utils::logger;
use hello_config::{App, ConfigLocation};

#[derive(Debug, Parser)]
#[command(name = "hello-config")]
#[command(version)]
#[command(about = "Print the message stored in ../config/config.yaml next to this program")]
struct Args {}

fn main() {
    let _args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger();

    let result = App::new(ConfigLocation::ProgramDir).and_then(|mut app| {
        tracing::info!("Loading configuration from: {}", app.config_path().display());
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        app.run(&mut out)
    });

    if let Err(e) = result {
        tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
