#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use anyhow::Result;
    use test_case::test_case;

    use maxrects_cli::config::PackConfig;
    use maxrects_cli::io;
    use maxrects_cli::io::output::PackOutput;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn output_folder(name: &str) -> Result<PathBuf> {
        let folder = std::env::temp_dir().join("maxrects_cli_tests").join(name);
        fs::create_dir_all(&folder)?;
        Ok(folder)
    }

    #[test_case("../assets/rectangles.txt", 16; "rectangles")]
    #[test_case("../assets/holes.json", 8; "holes")]
    fn pack_instance(instance_path: &str, n_pieces: usize) -> Result<()> {
        init_logger();
        let path = Path::new(instance_path);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap();
        let ext_instance = io::read_instance(path)?;
        assert_eq!(ext_instance.name, stem);
        assert_eq!(ext_instance.pieces.len(), n_pieces);

        let folder = output_folder(stem)?;
        let output = maxrects_cli::run(ext_instance, PackConfig::default(), stem, &folder)?;

        let n_placed = output
            .solution
            .bins
            .iter()
            .map(|b| b.placed_pieces.len())
            .sum::<usize>();
        assert_eq!(n_placed, n_pieces);
        assert_eq!(output.solution.n_bins, output.solution.bins.len());

        //the JSON file carries the instance, the solution and the config
        let written = fs::read_to_string(folder.join(format!("sol_{stem}.json")))?;
        let parsed: PackOutput = serde_json::from_str(&written)?;
        assert_eq!(parsed.instance, output.instance);
        for (parsed_bin, bin) in parsed.solution.bins.iter().zip(&output.solution.bins) {
            assert_eq!(parsed_bin.placed_pieces, bin.placed_pieces);
        }
        assert_eq!(parsed.config, PackConfig::default());

        for bin in &output.solution.bins {
            let svg_path = folder.join(format!("sol_{stem}_{}.svg", bin.id));
            assert!(svg_path.exists(), "missing {}", svg_path.display());
        }
        Ok(())
    }

    #[test]
    fn svg_output_can_be_disabled() -> Result<()> {
        init_logger();
        let path = Path::new("../assets/rectangles.txt");
        let folder = output_folder("no_svg")?;
        let config = PackConfig {
            write_svg: false,
            ..PackConfig::default()
        };
        maxrects_cli::run(io::read_instance(path)?, config, "no_svg", &folder)?;

        assert!(folder.join("sol_no_svg.json").exists());
        assert!(!folder.join("sol_no_svg_0.svg").exists());
        Ok(())
    }

    #[test]
    fn config_defaults_fill_missing_fields() -> Result<()> {
        let config: PackConfig = serde_json::from_str(r#"{"svg_draw_options": {"free_rects": true}}"#)?;
        assert!(config.write_svg);
        assert!(config.svg_draw_options.free_rects);
        assert!(config.svg_draw_options.labels);

        let themed: PackConfig = serde_json::from_str(
            r##"{"write_svg": false, "svg_draw_options": {"theme": {"stroke_width_multiplier": 1.0, "bin_fill": "#FFFFFF", "piece_fill": "#000000", "free_rect_stroke": "#00ff00"}}}"##,
        )?;
        assert!(!themed.write_svg);
        assert_eq!(
            themed.svg_draw_options.theme.free_rect_stroke.to_string(),
            "#00FF00"
        );
        Ok(())
    }

    #[test]
    fn malformed_instance_is_reported() -> Result<()> {
        let folder = output_folder("malformed")?;
        let path = folder.join("malformed.txt");
        fs::write(&path, "10 10\n2\n3 3\n")?;

        let err = io::read_instance(&path).unwrap_err();
        assert!(format!("{err:#}").contains("malformed input"));
        Ok(())
    }
}
