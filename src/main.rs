use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use skin_tone::FaceBox;
use tonecast::api;
use tonecast::models::{self, AnalyzeRequest, AnalyzeResponse, AppConfig, FaceBoxInput};
use tonecast::server;
use tonecast::services::{AcquiredImage, Provenance};

#[derive(Parser)]
#[command(name = "tonecast")]
#[command(about = "Tonecast - seasonal color analysis from face photographs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze one image and print the result as JSON
    Analyze {
        /// Local image file (PNG, JPEG, ...)
        #[arg(required_unless_present = "url", conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Fetch the image from this URL instead of a file
        #[arg(long)]
        url: Option<String>,

        /// Face box as x,y,width,height in image pixels
        #[arg(long, allow_hyphen_values = true)]
        face: Option<FaceBoxInput>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tonecast API",
        description = "Seasonal color analysis from face photographs",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_analyze),
    components(schemas(
        models::AnalyzeRequest,
        models::FaceBoxInput,
        models::AnalyzeResponse,
        models::RgbValue,
        models::LabValue,
        models::Scores,
        models::ErrorResponse,
    )),
    tags(
        (name = "Analysis", description = "Skin-tone and seasonal palette analysis")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Analyze {
            file,
            url,
            face,
            pretty,
        }) => run_analyze_command(file, url, face, pretty).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Analyze a single image from the command line (no server needed)
async fn run_analyze_command(
    file: Option<PathBuf>,
    url: Option<String>,
    face: Option<FaceBoxInput>,
    pretty: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonecast=warn,skin_tone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(AppConfig::from_env());
    let state = server::create_app_state(config)?;

    let result = match (file, url) {
        (Some(path), _) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let image = AcquiredImage::new(bytes, Provenance::File(path));
            state
                .analysis
                .analyze_image(image, face.map(FaceBox::from))
                .await
                .map(|analysis| AnalyzeResponse::from(&analysis))
        }
        (None, Some(url)) => {
            let request = AnalyzeRequest {
                image_url: Some(url),
                face_box: face,
                ..Default::default()
            };
            state.analysis.analyze(request).await
        }
        (None, None) => anyhow::bail!("either FILE or --url is required"),
    };

    let print = |response: &AnalyzeResponse| -> anyhow::Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(response)?
        } else {
            serde_json::to_string(response)?
        };
        println!("{json}");
        Ok(())
    };

    match result {
        Ok(response) => print(&response),
        Err(e) => {
            // Mirror the HTTP contract: server-side failures still emit a
            // complete payload before exiting non-zero.
            if !e.is_client_error() {
                print(&AnalyzeResponse::safe_default(e.to_string()))?;
            }
            Err(e.into())
        }
    }
}

/// Print version, environment, and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Tonecast v{VERSION}");
    println!("Seasonal color analysis from face photographs\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_file.as_deref().map(std::path::Path::new));
    let listen = bind_addr.unwrap_or_else(|| config.server.bind_addr.clone());

    println!("\nConfiguration:");
    println!("  Source:         {config_source}");
    println!("  Listen:         {listen}");
    println!("  Fetch timeout:  {}s", config.fetch.timeout_secs);
    println!("  Fetch limit:    {} bytes", config.fetch.max_bytes);
    println!("  Max dimension:  {}px", config.analysis.max_dimension);

    println!("\nCommands:");
    println!("  tonecast serve             Start the HTTP server");
    println!("  tonecast analyze <FILE>    Analyze a local image");
    println!("  tonecast analyze --url U   Analyze a remote image");
    println!("\nRun 'tonecast --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonecast=debug,skin_tone=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(AppConfig::from_env());
    let bind_addr = config.server.bind_addr.clone();

    let state = server::create_app_state(config)?;

    // OpenAPI documentation is served by the binary only
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Tonecast server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
