//! The fixed tag vocabulary.
//!
//! Position i names the model's output score i. The ordering is the
//! class order the network was trained against; reordering this list
//! silently mislabels every prediction, so it only ever changes together
//! with a new model artifact.

pub const LABELS: [&str; 146] = [
    "abstract",
    "acoustic",
    "alien",
    "ambiance",
    "ambience",
    "ambient",
    "analog",
    "anxious",
    "artificial",
    "atmo",
    "atmos",
    "atmosphere",
    "atmospheric",
    "background",
    "background-sound",
    "bass",
    "beat",
    "bird",
    "birds",
    "birdsong",
    "bpm",
    "calm",
    "car",
    "chord",
    "cinematic",
    "city",
    "click",
    "club",
    "computer",
    "creepy",
    "dance",
    "dark",
    "deep",
    "delay",
    "digital",
    "drama",
    "dramatic",
    "drone",
    "drop",
    "drum",
    "drums",
    "echo",
    "eerie",
    "effect",
    "electric",
    "electro",
    "electronic",
    "engine",
    "english",
    "experimental",
    "fear",
    "female",
    "field-recording",
    "film",
    "forest",
    "future",
    "futuristic",
    "fx",
    "game",
    "general-noise",
    "ghost",
    "girl",
    "glitch",
    "guitar",
    "haunted",
    "hit",
    "holland",
    "horror",
    "house",
    "human",
    "impact",
    "industrial",
    "insects",
    "intro",
    "kick",
    "lo-fi",
    "loop",
    "machine",
    "male",
    "mechanical",
    "melody",
    "metal",
    "metallic",
    "minimal",
    "mood",
    "motor",
    "movie",
    "music",
    "nature",
    "night",
    "nightmare",
    "noise",
    "pad",
    "people",
    "percussion",
    "phantom",
    "piano",
    "processed",
    "radio",
    "rave",
    "retro",
    "reverb",
    "rhythm",
    "robot",
    "sample",
    "scary",
    "sci-fi",
    "scifi",
    "sfx",
    "short",
    "sinister",
    "snare",
    "sound",
    "sound-design",
    "sound-effect",
    "soundeffect",
    "soundscape",
    "space",
    "spaceship",
    "speech",
    "spooky",
    "spring",
    "stereo",
    "strange",
    "street",
    "strings",
    "summer",
    "suspense",
    "synth",
    "synthesizer",
    "talk",
    "techno",
    "terrifying",
    "terror",
    "thrill",
    "traffic",
    "trailer",
    "trance",
    "video-game",
    "vocal",
    "voice",
    "water",
    "weird",
    "white-noise",
    "wind",
    "woman",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_labels() {
        let mut seen = std::collections::HashSet::new();
        for label in LABELS.iter() {
            assert!(seen.insert(label), "duplicate label: {}", label);
        }
    }

    #[test]
    fn labels_are_lowercase_and_nonempty() {
        for label in LABELS.iter() {
            assert!(!label.is_empty());
            assert_eq!(**label, label.to_lowercase());
        }
    }
}
