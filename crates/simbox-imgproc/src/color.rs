use simbox_image::{Image, ImageError};

/// Swap the red and blue channels of a four channel image.
///
/// The operation is its own inverse, so it converts RGBA to BGRA and back.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output BGRA image.
///
/// # Errors
///
/// Returns an error if the images do not have the same size.
pub fn bgra_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .chunks_exact_mut(4)
        .zip(src.as_slice().chunks_exact(4))
        .for_each(|(out, inp)| {
            out[0] = inp[2];
            out[1] = inp[1];
            out[2] = inp[0];
            out[3] = inp[3];
        });

    Ok(())
}

/// Drop the alpha channel of an RGBA image.
///
/// # Errors
///
/// Returns an error if the images do not have the same size.
pub fn rgb_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .chunks_exact_mut(3)
        .zip(src.as_slice().chunks_exact(4))
        .for_each(|(out, inp)| out.copy_from_slice(&inp[..3]));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simbox_image::ImageSize;

    #[test]
    fn test_bgra_from_rgba() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let rgba = Image::<u8, 4>::new(size, vec![1, 2, 3, 4, 5, 6, 7, 8])?;
        let mut bgra = Image::<u8, 4>::from_size_val(size, 0)?;
        bgra_from_rgba(&rgba, &mut bgra)?;
        assert_eq!(bgra.as_slice(), &[3, 2, 1, 4, 7, 6, 5, 8]);

        let mut back = Image::<u8, 4>::from_size_val(size, 0)?;
        bgra_from_rgba(&bgra, &mut back)?;
        assert_eq!(back, rgba);
        Ok(())
    }

    #[test]
    fn test_rgb_from_rgba() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let rgba = Image::<u8, 4>::new(size, vec![1, 2, 3, 4, 5, 6, 7, 8])?;
        let mut rgb = Image::<u8, 3>::from_size_val(size, 0)?;
        rgb_from_rgba(&rgba, &mut rgb)?;
        assert_eq!(rgb.as_slice(), &[1, 2, 3, 5, 6, 7]);

        let mut wrong = Image::<u8, 3>::from_size_val([1, 1].into(), 0)?;
        assert!(rgb_from_rgba(&rgba, &mut wrong).is_err());
        Ok(())
    }
}
