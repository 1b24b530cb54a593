use encoding_rs::{Encoding, UTF_8};
use tracing::info;

/// How many bytes of a file the detector samples.
pub const DETECTION_SAMPLE_BYTES: usize = 10_000;

/// Best-guess encoding for a byte sample, with detector confidence.
#[derive(Debug, Clone)]
pub struct EncodingGuess {
    /// Detected encoding label (e.g. "utf-8", "windows-1252").
    pub label: String,
    /// Detector confidence in [0, 1].
    pub confidence: f32,
}

impl EncodingGuess {
    fn utf8_default() -> Self {
        Self {
            label: "utf-8".to_string(),
            confidence: 0.0,
        }
    }
}

/// Statistically detect the encoding of a byte sample.
///
/// Advisory only: an unrecognized byte distribution degrades to utf-8 with
/// zero confidence rather than failing.
pub fn resolve(sample: &[u8]) -> EncodingGuess {
    let sample = &sample[..sample.len().min(DETECTION_SAMPLE_BYTES)];
    let (charset, confidence, _language) = chardet::detect(sample);

    if charset.is_empty() {
        return EncodingGuess::utf8_default();
    }

    let label = chardet::charset2encoding(&charset).to_string();
    info!(
        "encoding: detected {} (confidence: {:.2})",
        label, confidence
    );
    EncodingGuess { label, confidence }
}

/// Ordered candidate decoders for a file: the detector's guess first, then
/// the fixed fallback chain, deduplicated by resolved encoding.
///
/// Under WHATWG labels "latin1" and "cp1252" both resolve to windows-1252,
/// so the chain holds at most three distinct decoders.
pub fn candidate_encodings(guess: &EncodingGuess) -> Vec<&'static Encoding> {
    let labels = [guess.label.as_str(), "utf-8", "latin1", "cp1252"];
    let mut candidates: Vec<&'static Encoding> = Vec::new();
    for label in labels {
        let encoding = Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8);
        if !candidates.iter().any(|c| *c == encoding) {
            candidates.push(encoding);
        }
    }
    candidates
}
