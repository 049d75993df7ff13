use clap::{Parser, Subcommand};
use nodeview_api::{Viewer, ViewerApi};
use nodeview_client::{ClientConfig, HttpResourceClient};
use nodeview_core::{
    DirectHrefs, NavigationController, Notifications, ViewerConfig, DEFAULT_BASE_URL,
    DEFAULT_INITIAL_NODE,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Browse graph database nodes and relationships over REST
#[derive(Parser, Debug)]
#[command(name = "nodeview")]
#[command(about = "A small viewer for graph database REST resources", long_about = None)]
struct Args {
    /// Graph store REST root; nodes live at <base-url>/node/<id>
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 10_000, global = true)]
    timeout_ms: u64,

    /// Render relationships without inline expand controls
    #[arg(long, global = true)]
    no_inline: bool,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the viewer page on localhost
    Serve {
        /// Node shown at start-up
        #[arg(long, default_value = DEFAULT_INITIAL_NODE)]
        initial_node: String,

        /// Viewer HTTP port
        #[arg(long, default_value_t = 7475)]
        port: u16,
    },
    /// Render a single node as an HTML fragment on stdout
    Render {
        /// Node id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client_config = ClientConfig {
        timeout: Duration::from_millis(args.timeout_ms),
    };

    match args.command {
        Command::Serve { initial_node, port } => {
            let config = ViewerConfig {
                base_url: args.base_url,
                initial_node_id: initial_node,
                inline_expansion: !args.no_inline,
            };
            config.validate()?;
            serve(config, client_config, port).await
        }
        Command::Render { id } => {
            let config = ViewerConfig {
                base_url: args.base_url,
                initial_node_id: id,
                inline_expansion: !args.no_inline,
            };
            config.validate()?;
            render(config, client_config).await
        }
    }
}

async fn serve(config: ViewerConfig, client_config: ClientConfig, port: u16) -> anyhow::Result<()> {
    info!("Starting nodeview v{}", env!("CARGO_PKG_VERSION"));
    info!("Graph store: {}", config.base_url);
    info!("Initial node: {}", config.initial_node_id);

    let http_handle = std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            let client = match HttpResourceClient::new(client_config) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("HTTP client error: {}", e);
                    return;
                }
            };
            let viewer = Arc::new(Viewer::new(client, config));
            let controller = viewer.controller();
            info!("Loading {}", controller.config().initial_node_url());
            if let Err(e) = controller.load_initial().await {
                warn!("Initial node load failed: {}", e);
            }

            info!("Starting viewer on port {}", port);
            if let Err(e) = ViewerApi::start(viewer, port).await {
                eprintln!("Viewer server error: {}", e);
            }
        })
    });

    info!("Viewer: http://localhost:{}/", port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("Viewer server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

async fn render(config: ViewerConfig, client_config: ClientConfig) -> anyhow::Result<()> {
    let client = HttpResourceClient::new(client_config)?;
    let notifications = Arc::new(Notifications::new());
    let controller = NavigationController::new(client, config, notifications.clone());

    let outcome = controller.load_initial().await;
    print!("{}", controller.render_html(&DirectHrefs));

    for notification in notifications.drain() {
        eprintln!("{}", notification.message);
    }
    outcome?;
    Ok(())
}
