use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::info;

use maxrects::io::ext_repr::ExtInstance;
use maxrects::io::svg::bin_to_svg;
use maxrects::io::{export, import};
use maxrects::packer;

use crate::config::PackConfig;
use crate::io::output::PackOutput;

/// Configuration of a packing run
pub mod config;

/// Reading instances, writing solutions and setting up logging
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Packs `ext_instance` and writes `sol_<input_stem>.json` (and one `sol_<input_stem>_<bin>.svg`
/// per bin, if enabled) to `output_folder`.
pub fn run(
    ext_instance: ExtInstance,
    config: PackConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<PackOutput> {
    let start = Instant::now();
    let pieces = import::import_pieces(&ext_instance.pieces)?;
    let result = packer::allocate(pieces, ext_instance.bin_width, ext_instance.bin_height)?;
    let run_time = start.elapsed();

    info!(
        "[MAIN] packed {} pieces in {} bins (density: {:.3}%) in {}ms",
        result.n_placed(),
        result.n_bins(),
        result.density() * 100.0,
        run_time.as_millis()
    );

    if config.write_svg {
        for bin in &result.bins {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", bin.id));
            let svg = bin_to_svg(bin, config.svg_draw_options, &ext_instance.name);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    let output = PackOutput {
        instance: ext_instance,
        solution: export::export_solution(&result, run_time),
        config,
    };

    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(output)
}
