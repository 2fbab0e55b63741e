use argh::FromArgs;
use std::path::PathBuf;

use simbox::annotate::scene::SceneSnapshot;
use simbox::annotate::visualize::{draw_overlay, OverlayMode};
use simbox::annotate::{AnnotatorConfig, FrameAnnotator};
use simbox::image::{Image, ImageSize};
use simbox::imgproc::color;
use simbox::imgproc::segmentation::SegmentationFrame;
use simbox::io::{json, png};

#[derive(FromArgs)]
/// Annotate a recorded simulator frame with 2d and 3d bounding boxes
struct Args {
    /// path to the scene snapshot (.json)
    #[argh(option, short = 's')]
    scene: PathBuf,

    /// path to the instance segmentation image (.png, rgba8)
    #[argh(option, short = 'i')]
    instance: PathBuf,

    /// path to the camera image to draw on (.png, rgba8)
    #[argh(option, short = 'r')]
    rgb: Option<PathBuf>,

    /// directory where the json record and the overlay are written
    #[argh(option, short = 'o', default = "PathBuf::from(\"out\")")]
    output_dir: PathBuf,

    /// overlay mode, 2d or 3d
    #[argh(option, default = "OverlayMode::Boxes2D")]
    mode: OverlayMode,

    /// maximum distance to the ego vehicle in meters
    #[argh(option, default = "100.0")]
    max_distance: f64,

    /// only annotate actors whose blueprint id contains this pattern
    #[argh(option, default = "String::from(\"vehicle\")")]
    actor_filter: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let scene: SceneSnapshot = json::read_json(&args.scene)?;
    log::info!(
        "frame {}: {} actors, camera {}x{}",
        scene.frame_id,
        scene.actors.len(),
        scene.camera.width,
        scene.camera.height
    );

    // the png stores RGBA, the decoder expects the raw BGRA layout
    let instance_rgba = png::read_image_png_rgba8(&args.instance)?;
    let mut instance_bgra = Image::<u8, 4>::from_size_val(instance_rgba.size(), 0)?;
    color::bgra_from_rgba(&instance_rgba, &mut instance_bgra)?;
    let segmentation = SegmentationFrame::decode(&instance_bgra)?;

    let annotator = FrameAnnotator::new(AnnotatorConfig {
        max_distance: args.max_distance,
        actor_filter: args.actor_filter,
    });
    let frame = annotator.annotate(&scene, &segmentation)?;

    let mut canvas = match &args.rgb {
        Some(path) => {
            let rgba = png::read_image_png_rgba8(path)?;
            let mut rgb = Image::<u8, 3>::from_size_val(rgba.size(), 0)?;
            color::rgb_from_rgba(&rgba, &mut rgb)?;
            rgb
        }
        None => Image::<u8, 3>::from_size_val(
            ImageSize {
                width: scene.camera.width as usize,
                height: scene.camera.height as usize,
            },
            0,
        )?,
    };
    draw_overlay(&mut canvas, &frame.boxes, args.mode);

    std::fs::create_dir_all(&args.output_dir)?;

    let record_path = args.output_dir.join(format!("{}.json", scene.frame_id));
    json::write_json(&record_path, &frame.record)?;
    log::info!("wrote {}", record_path.display());

    let overlay_path = args.output_dir.join(format!("{}.png", scene.frame_id));
    png::write_image_png_rgb8(&overlay_path, &canvas)?;
    log::info!("wrote {}", overlay_path.display());

    println!(
        "frame {}: annotated {} actors ({} visible in the segmentation)",
        scene.frame_id,
        frame.record.objects.len(),
        frame.boxes.iter().filter(|b| b.bbox_2d.is_some()).count()
    );

    Ok(())
}
