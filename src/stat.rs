use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub rounds: usize,
    pub accepted_rounds: usize,
    pub expanded_rooms: usize,
    pub paths: usize,
    pub steps: usize,
    pub time_us: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Steps {:?} Paths {:?} Time(microseconds) {:?} Rounds {:?} (accepted {:?}) Expanded rooms {:?}",
            self.steps, self.paths, self.time_us, self.rounds, self.accepted_rounds, self.expanded_rooms
        );
    }

    pub fn write_json(&self, path: &str) -> anyhow::Result<()> {
        let file = File::create(path).with_context(|| format!("cannot create stats file: {path}"))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
