// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Planner CLI - Per-Month JSONL Time Series

use std::io::Write;
use std::path::Path;

use tokenomics_engine::SimulationMonth;

/// One JSON object per simulated month.
pub fn write_jsonl(path: &Path, months: &[SimulationMonth]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for month in months {
        let line = serde_json::to_string(month)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    file.flush()
}
