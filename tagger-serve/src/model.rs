//! Frozen-graph predictor: loaded once at bootstrap, scored by every
//! request thereafter.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use log::debug;
use tensorflow::{
    Graph, ImportGraphDefOptions, Session, SessionOptions, SessionRunArgs, Status, Tensor,
};

use crate::error::TaggerError;
use crate::timer::Timer;

/// Input geometry the network was trained with.
const INPUT_WIDTH: u32 = 224;
const INPUT_HEIGHT: u32 = 224;

/// Operation names baked into the exported graph.
const INPUT_OP: &str = "serving_default_input_1";
const OUTPUT_OP: &str = "StatefulPartitionedCall";

/// The loaded model. Read-only after `load`, safe to share across
/// concurrent request handlers without locking.
pub struct Predictor {
    graph: Graph,
    session: Session,
}

impl Predictor {
    /// Load the frozen-graph artifact and verify it against the vocabulary.
    ///
    /// Runs one all-zero inference before returning, so a graph that
    /// cannot execute on this host, or whose output arity disagrees with
    /// `expected_labels`, fails here instead of on the first live request.
    pub fn load(path: &Path, expected_labels: usize) -> Result<Self, TaggerError> {
        let timer = Timer::start("loading model");

        let proto = fs::read(path)
            .map_err(|e| TaggerError::Load(format!("{}: {}", path.display(), e)))?;

        let mut graph = Graph::new();
        graph
            .import_graph_def(&proto, &ImportGraphDefOptions::new())
            .map_err(load_status)?;
        let session = Session::new(&SessionOptions::new(), &graph).map_err(load_status)?;

        let predictor = Predictor { graph, session };

        let zeros = vec![0.0; (INPUT_WIDTH * INPUT_HEIGHT * 3) as usize];
        let scores = predictor.run(&zeros).map_err(load_status)?;
        if scores.len() != expected_labels {
            return Err(TaggerError::LabelMismatch {
                labels: expected_labels,
                outputs: scores.len(),
            });
        }

        timer.stop();
        Ok(predictor)
    }

    /// Score raw uploaded bytes.
    ///
    /// Bytes that do not decode as an image are the client's fault and
    /// surface as [`TaggerError::Decode`].
    pub fn predict(&self, data: &[u8]) -> Result<Vec<f32>, TaggerError> {
        let img = decode_image(data)?;
        self.predict_image(&img)
    }

    /// Score an already-decoded image.
    pub fn predict_image(&self, img: &DynamicImage) -> Result<Vec<f32>, TaggerError> {
        let timer = Timer::start("inference");

        let pixels = preprocess(img);
        let scores = self
            .run(&pixels)
            .map_err(|status| TaggerError::Inference(status.to_string()))?;

        timer.stop();
        debug!("scored {} labels", scores.len());
        Ok(scores)
    }

    fn run(&self, pixels: &[f32]) -> Result<Vec<f32>, Status> {
        let input = Tensor::new(&[1, u64::from(INPUT_HEIGHT), u64::from(INPUT_WIDTH), 3])
            .with_values(pixels)?;

        let mut args = SessionRunArgs::new();
        args.add_feed(
            &self.graph.operation_by_name_required(INPUT_OP)?,
            0,
            &input,
        );
        let fetch = args.request_fetch(&self.graph.operation_by_name_required(OUTPUT_OP)?, 0);
        self.session.run(&mut args)?;

        let output: Tensor<f32> = args.fetch(fetch)?;
        Ok(output.iter().copied().collect())
    }
}

/// Decode uploaded bytes into an image.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, TaggerError> {
    Ok(image::load_from_memory(data)?)
}

/// 224x224 RGB, channels last, scaled to [0,1] the way the network was
/// trained.
fn preprocess(img: &DynamicImage) -> Vec<f32> {
    let rgb = img.to_rgb8();
    let resized = image::imageops::resize(
        &rgb,
        INPUT_WIDTH,
        INPUT_HEIGHT,
        image::imageops::FilterType::Triangle,
    );

    resized
        .into_raw()
        .iter()
        .map(|x| f32::from(*x) / 255.0)
        .collect()
}

/// Single translation point for load-time status inspection.
///
/// A graph exported with explicit GPU device placement fails with a
/// device-assignment status on CPU-only builds and deserves an actionable
/// message; everything else stays a generic load failure.
fn load_status(status: Status) -> TaggerError {
    let message = status.to_string();
    if message.contains("GPU") || message.contains("Cannot assign a device") {
        TaggerError::IncompatibleModel
    } else {
        TaggerError::Load(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensorflow::Code;

    #[test]
    fn preprocess_emits_network_geometry() {
        let img = DynamicImage::new_rgb8(64, 48);
        let pixels = preprocess(&img);

        assert_eq!(pixels.len(), (INPUT_WIDTH * INPUT_HEIGHT * 3) as usize);
        assert!(pixels.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, TaggerError::Decode(_)));
    }

    #[test]
    fn gpu_placement_becomes_incompatible_model() {
        let status = Status::new_set_lossy(
            Code::InvalidArgument,
            "Cannot assign a device for operation conv1: node requires GPU",
        );
        assert!(matches!(load_status(status), TaggerError::IncompatibleModel));
    }

    #[test]
    fn other_statuses_stay_load_errors() {
        let status = Status::new_set_lossy(Code::DataLoss, "truncated protobuf");
        assert!(matches!(load_status(status), TaggerError::Load(_)));
    }
}
