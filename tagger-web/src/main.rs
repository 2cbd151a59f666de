use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use structopt::StructOpt;
use tagger_serve::{download_file, Predictor, LABELS};

mod error;
mod routes;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "tagger-web",
    about = "HTTP service tagging images with a trained multi-label classifier"
)]
struct CmdArgs {
    /// Remote URL of the trained model artifact
    #[structopt(
        long,
        env = "TAGGER_MODEL_URL",
        default_value = "https://content.leoauri.com/models/tagger_v0.1.0.pb"
    )]
    model_url: String,

    /// Directory holding the local model cache
    #[structopt(long, env = "TAGGER_MODEL_DIR", default_value = ".", parse(from_os_str))]
    model_dir: PathBuf,

    /// Local filename of the model artifact
    #[structopt(long, env = "TAGGER_MODEL_FILE", default_value = "tagger_v0.1.0.pb")]
    model_file: String,

    /// Probability cutoff for tag membership
    #[structopt(long, env = "TAGGER_THRESHOLD", default_value = "0.2")]
    threshold: f32,

    /// Answer with the single best tag when nothing passes the threshold
    #[structopt(long)]
    fallback_top_tag: bool,

    /// Listen address
    #[structopt(long, env = "TAGGER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port
    #[structopt(long, env = "TAGGER_PORT", default_value = "5000")]
    port: u16,

    /// Largest accepted upload in bytes
    #[structopt(long, default_value = "10485760")]
    body_limit: usize,

    #[structopt(subcommand)]
    command: Option<Command>,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Bind the listen address and serve requests
    Serve,
}

/// State shared by every request handler. The predictor is read-only
/// after bootstrap, so no locking is needed around inference.
pub struct AppState {
    predictor: Predictor,
    threshold: f32,
    fallback_top_tag: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = CmdArgs::from_args();

    // Bootstrap gates the accept loop: fetch and load must both succeed
    // before a single connection is accepted, and any failure here exits
    // the process through `?`.
    let dest = args.model_dir.join(&args.model_file);
    download_file(&args.model_url, &dest).await?;
    let predictor = Predictor::load(&dest, LABELS.len())?;
    info!("model ready, vocabulary of {} tags", LABELS.len());

    match args.command {
        Some(Command::Serve) => serve(args, predictor).await,
        None => {
            info!("bootstrap complete; pass the `serve` subcommand to accept requests");
            Ok(())
        }
    }
}

async fn serve(args: CmdArgs, predictor: Predictor) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        predictor,
        threshold: args.threshold,
        fallback_top_tag: args.fallback_top_tag,
    });

    let app = Router::new()
        .route("/", get(routes::homepage))
        .route("/health", get(routes::health))
        .route("/analyze", post(routes::analyze))
        .layer(DefaultBodyLimit::max(args.body_limit))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
