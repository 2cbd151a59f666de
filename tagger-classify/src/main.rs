use std::error::Error;
use std::fs;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;
use tagger_serve::{classify, Predictor, Tagging, LABELS};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "tagger-classify",
    about = "CLI app to tag a local image with the trained multi-label classifier"
)]
struct CmdArgs {
    #[structopt(help = "Path to the frozen-graph model artifact", parse(from_os_str))]
    model_path: PathBuf,

    #[structopt(help = "Path to the image to tag", parse(from_os_str))]
    image_path: PathBuf,

    #[structopt(long, help = "Probability cutoff for tag membership", default_value = "0.2")]
    threshold: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CmdArgs::from_args();

    let predictor = Predictor::load(&args.model_path, LABELS.len())?;
    info!("model ready, vocabulary of {} tags", LABELS.len());

    let data = fs::read(&args.image_path)?;
    let probabilities = predictor.predict(&data)?;
    let tagging = Tagging {
        result: classify(&probabilities, &LABELS, args.threshold),
    };

    println!("{}", serde_json::to_string(&tagging)?);

    Ok(())
}
