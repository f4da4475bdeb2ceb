use env_logger::Env;
use hexvisor::{
    DetectionRect, FrameMasker, GeometryFormat, MasksToGeoJson, VisorConfig, VisorError,
    read_detections, write_masks_csv,
};
use log::info;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: hexvisor [config.json] [detections.csv output.(csv|geojson)]";

/// What the binary was asked to do.
#[derive(Debug, PartialEq)]
struct Invocation {
    config: Option<PathBuf>,
    replay: Option<Replay>,
}

#[derive(Debug, PartialEq)]
struct Replay {
    detections: PathBuf,
    output: PathBuf,
}

/// Zero arguments run the sample, one names a config, three add a replay. Two arguments
/// leave either the config or the output ambiguous and are rejected.
fn parse_args(args: &[String]) -> Result<Invocation, VisorError> {
    match args {
        [] => Ok(Invocation {
            config: None,
            replay: None,
        }),
        [config] => Ok(Invocation {
            config: Some(PathBuf::from(config)),
            replay: None,
        }),
        [config, detections, output] => Ok(Invocation {
            config: Some(PathBuf::from(config)),
            replay: Some(Replay {
                detections: PathBuf::from(detections),
                output: PathBuf::from(output),
            }),
        }),
        [_, detections] => Err(VisorError::ConfigError(format!(
            "no output path for detections {}; {}",
            detections, USAGE
        ))),
        _ => Err(VisorError::ConfigError(format!(
            "too many arguments; {}",
            USAGE
        ))),
    }
}

fn is_geojson(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "geojson" || ext == "json")
}

fn main() -> Result<(), VisorError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;

    let config = match &invocation.config {
        Some(path) => VisorConfig::from_json_file(path)?,
        None => VisorConfig::default(),
    };
    let grid = config.build_grid()?;
    info!(
        "canvas {}x{}, radius {}: {} columns, {} rows",
        config.canvas_width,
        config.canvas_height,
        config.radius,
        grid.columns(),
        grid.rows()
    );

    let masker = FrameMasker::new(&grid).with_policy(config.selection);

    match invocation.replay {
        Some(Replay { detections, output }) => {
            let frames = read_detections(&detections)?;
            let masks = masker.mask_frames(&frames);
            let filled: usize = masks.iter().map(|mask| mask.len()).sum();
            info!("{} frames, {} hexagons filled", masks.len(), filled);

            if is_geojson(&output) {
                masks.to_geojson_file(&output, config.rounding)?;
            } else {
                write_masks_csv(&masks, &output, Some(GeometryFormat::Wkt), config.rounding)?;
            }
            info!("masks written to {}", output.display());
        }
        None => {
            let face = DetectionRect::new(100, 100, 200, 200);
            let mask = masker.mask(0, &[face]);

            println!("Detection: {:?}", face);
            for (hexagon, vertices) in mask.hexagons.iter().zip(mask.polygons(config.rounding)) {
                println!(
                    "Hexagon ({}, {}) at ({}, {}): {:?}",
                    hexagon.col,
                    hexagon.row,
                    hexagon.center_x(),
                    hexagon.center_y(),
                    vertices
                );
            }
        }
    }

    Ok(())
}
