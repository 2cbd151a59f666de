use thiserror::Error;

/// Failures across the model lifecycle.
///
/// The first four variants can only occur during bootstrap and are fatal:
/// the process must not serve without a working model. `Decode` and
/// `Inference` occur per request and stay confined to that request.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// The artifact could not be retrieved from the remote URL.
    #[error("failed to fetch model artifact: {0}")]
    Fetch(String),

    /// The artifact carries GPU-only device placement and cannot execute
    /// on a CPU-only host.
    #[error(
        "this model was exported with GPU device placement and cannot run \
         on a CPU-only host; re-export the model for CPU execution and \
         replace the artifact"
    )]
    IncompatibleModel,

    /// Any other deserialization or graph construction failure.
    #[error("failed to load model artifact: {0}")]
    Load(String),

    /// The model's output arity disagrees with the compiled-in vocabulary.
    #[error("model emits {outputs} scores but the vocabulary defines {labels} labels")]
    LabelMismatch { labels: usize, outputs: usize },

    /// The uploaded bytes are not a decodable image.
    #[error("could not decode uploaded bytes as an image: {0}")]
    Decode(#[from] image::ImageError),

    /// The model failed on a well-formed input.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl TaggerError {
    /// True for errors that are the client's fault rather than ours.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TaggerError::Decode(_))
    }
}
