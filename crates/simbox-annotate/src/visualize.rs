use std::str::FromStr;

use simbox_image::Image;
use simbox_imgproc::draw::{draw_line, draw_rect};
use simbox_imgproc::semantic::semantic_class;

use crate::annotator::ActorBoxes;

const LINE_THICKNESS: usize = 2;

/// Which boxes to render on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    /// Segmentation rectangles
    #[default]
    Boxes2D,
    /// Projected cuboid wireframes
    Boxes3D,
}

impl FromStr for OverlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(OverlayMode::Boxes2D),
            "3d" => Ok(OverlayMode::Boxes3D),
            other => Err(format!("unknown overlay mode `{other}`, expected 2d or 3d")),
        }
    }
}

fn label_color(label: u8) -> [u8; 3] {
    semantic_class(label)
        .map(|class| class.color)
        .unwrap_or([255, 255, 255])
}

/// Draw the 2d rectangles of the visible actors.
pub fn draw_bboxes_2d(image: &mut Image<u8, 3>, boxes: &[ActorBoxes]) {
    for bbox in boxes.iter().filter_map(|b| b.bbox_2d.as_ref()) {
        draw_rect(
            image,
            (bbox.xmin as i64, bbox.ymin as i64),
            (bbox.xmax as i64, bbox.ymax as i64),
            label_color(bbox.semantic_label),
            LINE_THICKNESS,
        );
    }
}

/// Draw the projected wireframes of the actors.
pub fn draw_bboxes_3d(image: &mut Image<u8, 3>, boxes: &[ActorBoxes]) {
    for bbox in boxes.iter().map(|b| &b.bbox_3d) {
        let color = label_color(bbox.semantic_label);
        for segment in bbox.projection.iter() {
            draw_line(
                image,
                (segment.x0, segment.y0),
                (segment.x1, segment.y1),
                color,
                LINE_THICKNESS,
            );
        }
    }
}

/// Draw the boxes selected by `mode`.
pub fn draw_overlay(image: &mut Image<u8, 3>, boxes: &[ActorBoxes], mode: OverlayMode) {
    match mode {
        OverlayMode::Boxes2D => draw_bboxes_2d(image, boxes),
        OverlayMode::Boxes3D => draw_bboxes_3d(image, boxes),
    }
}
