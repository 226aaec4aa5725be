use crate::core::{Hint, HintSink};

/// Renders a hint as the single envelope line the hosting tutorial platform
/// scans for, preceded by a blank line so it survives interleaved runner
/// output.
pub fn envelope(hint: &Hint) -> String {
    format!(
        "\nTECHIO> message --channel \"{}\" \"{}\"",
        hint.channel, hint.message
    )
}

/// Production sink: envelope lines on stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl HintSink for StdoutSink {
    fn emit(&mut self, hint: &Hint) {
        println!("{}", envelope(hint));
    }
}

/// Recording sink for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    hints: Vec<Hint>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn into_hints(self) -> Vec<Hint> {
        self.hints
    }
}

impl HintSink for MemorySink {
    fn emit(&mut self, hint: &Hint) {
        self.hints.push(hint.clone());
    }
}
