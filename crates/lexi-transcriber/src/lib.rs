mod pipeline;

pub use pipeline::{RunOptions, RunSummary, Transcription, run, transcribe_words, transducer_for};

#[cfg(test)]
mod tests;
