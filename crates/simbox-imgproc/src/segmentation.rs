use serde::{Deserialize, Serialize};
use simbox_image::{Image, ImageError, ImageSize};

/// Axis aligned bounding rectangle of an actor in pixel coordinates.
///
/// The bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox2D {
    /// Id of the actor owning the pixels
    pub actor_id: u32,
    /// Semantic label of the actor
    pub semantic_label: u8,
    /// Minimum column
    pub xmin: usize,
    /// Minimum row
    pub ymin: usize,
    /// Maximum column
    pub xmax: usize,
    /// Maximum row
    pub ymax: usize,
}

/// Decode a raw instance segmentation buffer.
///
/// The buffer is in the simulator raw BGRA layout: channel 2 holds the semantic
/// label and the actor id is packed as `channel0 << 8 | channel1`.
///
/// # Arguments
///
/// * `raw` - The raw 4 channel buffer.
///
/// # Returns
///
/// The per pixel semantic labels and actor ids.
///
/// Example:
///
/// ```
/// use simbox_image::{Image, ImageSize};
/// use simbox_imgproc::segmentation::decode_instance_segmentation;
///
/// let raw = Image::<u8, 4>::new(ImageSize { width: 1, height: 1 }, vec![1, 2, 14, 255]).unwrap();
/// let (labels, ids) = decode_instance_segmentation(&raw).unwrap();
/// assert_eq!(labels.as_slice(), &[14]);
/// assert_eq!(ids.as_slice(), &[258]);
/// ```
pub fn decode_instance_segmentation(
    raw: &Image<u8, 4>,
) -> Result<(Image<u8, 1>, Image<u16, 1>), ImageError> {
    let labels = raw.channel(2)?;

    let actor_ids = raw
        .as_slice()
        .chunks_exact(4)
        .map(|pixel| (u16::from(pixel[0]) << 8) | u16::from(pixel[1]))
        .collect();

    Ok((labels, Image::new(raw.size(), actor_ids)?))
}

/// Compute the bounding rectangle of the pixels belonging to an actor.
///
/// The semantic label is read from the first matching pixel in row-major
/// order. Label uniformity within the mask is not checked.
///
/// # Arguments
///
/// * `actor_ids` - The per pixel actor ids.
/// * `labels` - The per pixel semantic labels.
/// * `actor_id` - The actor to look for.
///
/// # Returns
///
/// `None` if no pixel belongs to the actor.
///
/// # Errors
///
/// Returns an error if the two images do not have the same size.
pub fn bbox_2d_for_actor(
    actor_ids: &Image<u16, 1>,
    labels: &Image<u8, 1>,
    actor_id: u32,
) -> Result<Option<BBox2D>, ImageError> {
    if actor_ids.size() != labels.size() {
        return Err(ImageError::InvalidImageSize(
            actor_ids.width(),
            actor_ids.height(),
            labels.width(),
            labels.height(),
        ));
    }

    let width = actor_ids.width();
    let mut bbox: Option<BBox2D> = None;

    for (idx, &id) in actor_ids.as_slice().iter().enumerate() {
        if u32::from(id) != actor_id {
            continue;
        }

        let (x, y) = (idx % width, idx / width);

        match bbox.as_mut() {
            Some(b) => {
                b.xmin = b.xmin.min(x);
                b.xmax = b.xmax.max(x);
                b.ymax = y;
            }
            None => {
                bbox = Some(BBox2D {
                    actor_id,
                    semantic_label: labels.as_slice()[idx],
                    xmin: x,
                    ymin: y,
                    xmax: x,
                    ymax: y,
                })
            }
        }
    }

    Ok(bbox)
}

/// A decoded instance segmentation frame.
///
/// Holds the semantic labels and actor ids of one camera tick with matching sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationFrame {
    labels: Image<u8, 1>,
    actor_ids: Image<u16, 1>,
}

impl SegmentationFrame {
    /// Decode a raw BGRA instance segmentation buffer.
    pub fn decode(raw: &Image<u8, 4>) -> Result<Self, ImageError> {
        let (labels, actor_ids) = decode_instance_segmentation(raw)?;
        Ok(Self { labels, actor_ids })
    }

    /// Build a frame from already decoded planes.
    ///
    /// # Errors
    ///
    /// Returns an error if the two images do not have the same size.
    pub fn from_planes(labels: Image<u8, 1>, actor_ids: Image<u16, 1>) -> Result<Self, ImageError> {
        if labels.size() != actor_ids.size() {
            return Err(ImageError::InvalidImageSize(
                labels.width(),
                labels.height(),
                actor_ids.width(),
                actor_ids.height(),
            ));
        }
        Ok(Self { labels, actor_ids })
    }

    /// The frame size in pixels.
    pub fn size(&self) -> ImageSize {
        self.labels.size()
    }

    /// The per pixel semantic labels.
    pub fn labels(&self) -> &Image<u8, 1> {
        &self.labels
    }

    /// The per pixel actor ids.
    pub fn actor_ids(&self) -> &Image<u16, 1> {
        &self.actor_ids
    }

    /// The bounding rectangle of an actor, `None` if it is not visible.
    pub fn bbox_2d(&self, actor_id: u32) -> Option<BBox2D> {
        // sizes are checked on construction
        bbox_2d_for_actor(&self.actor_ids, &self.labels, actor_id)
            .ok()
            .flatten()
    }
}
