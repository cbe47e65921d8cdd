use anyhow::{Context, Result};
use iris_frames::dataset::{self, iris};

fn main() -> Result<()> {
    env_logger::init();

    let output_path = dataset::DEFAULT_OUTPUT;
    let rows = dataset::materialize(output_path)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {rows} samples ({} features + {}) to {output_path}",
        iris::FEATURE_NAMES.len(),
        iris::TARGET_COLUMN
    );
    Ok(())
}
