use std::process::ExitCode;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, info, warn};

use university_records::config::AppConfig;
use university_records::runtime::{lifetime, logging};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    let _guard = logging::init_logging(config);

    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Environment: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = match lifetime::startup::prepare_startup().await {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    match startup.storage.count_records().await {
        Ok(counts) => {
            info!(
                "Records: {} course(s), {} teacher(s), {} group(s), {} student(s)",
                counts.courses, counts.teachers, counts.groups, counts.students
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to count records: {}", e);
            ExitCode::FAILURE
        }
    }
}
