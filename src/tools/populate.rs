use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::metadata::{MetadataError, MetadataStore, StoreAccessors};
use crate::schema::{DimensionOrder, PixelType, Property};

use super::{create_lsid, zct_coords};

/// Core pixel geometry of one image, as a format reader knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelsDescription {
    /// Image name; empty names are not written
    pub name: String,
    /// Source file, used for the default acquisition date
    pub file: Option<PathBuf>,
    /// Byte order of the pixel data
    pub little_endian: bool,
    /// Rasterization order of the planes
    pub dimension_order: DimensionOrder,
    /// Sample type
    pub pixel_type: PixelType,
    /// Width in pixels
    pub size_x: usize,
    /// Height in pixels
    pub size_y: usize,
    /// Number of focal planes
    pub size_z: usize,
    /// Number of samples across all channels
    pub size_c: usize,
    /// Number of time points
    pub size_t: usize,
    /// Samples per pixel of each channel (3 for RGB)
    pub samples_per_pixel: usize,
}

impl Default for PixelsDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            file: None,
            little_endian: true,
            dimension_order: DimensionOrder::Xyczt,
            pixel_type: PixelType::Uint8,
            size_x: 1,
            size_y: 1,
            size_z: 1,
            size_c: 1,
            size_t: 1,
            samples_per_pixel: 1,
        }
    }
}

impl PixelsDescription {
    /// Number of logical channels once samples are grouped per pixel
    pub fn effective_size_c(&self) -> usize {
        if self.samples_per_pixel == 0 {
            0
        } else {
            self.size_c / self.samples_per_pixel
        }
    }

    /// Number of planes in the image
    pub fn plane_count(&self) -> usize {
        self.size_z * self.effective_size_c() * self.size_t
    }
}

/// Optional parts of [`populate_pixels`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateOptions {
    /// Write Z/C/T coordinates for every plane
    pub planes: bool,
    /// Write a default acquisition date for every image
    pub acquisition_dates: bool,
}

fn to_i32(property: Property, n: usize) -> Result<i32, MetadataError> {
    i32::try_from(n).map_err(|_| MetadataError::InvalidValue {
        property,
        reason: format!("{n} does not fit a 32-bit integer"),
    })
}

/// Write the minimum pixel metadata for each described image.
///
/// Image `i` gets `Image:i` and `Pixels:i` identifiers, its sizes, type,
/// dimension order and endianness, and one `Channel:i:c` entry per logical
/// channel.
pub fn populate_pixels<S>(
    store: &mut S,
    images: &[PixelsDescription],
    options: PopulateOptions,
) -> Result<(), MetadataError>
where
    S: MetadataStore + ?Sized,
{
    for (image, pixels) in images.iter().enumerate() {
        if pixels.samples_per_pixel == 0 {
            return Err(MetadataError::InvalidValue {
                property: Property::ChannelSamplesPerPixel,
                reason: "samples per pixel must be positive".to_string(),
            });
        }

        store.set_image_id(create_lsid("Image", &[image]), image)?;
        if !pixels.name.is_empty() {
            store.set_image_name(pixels.name.as_str(), image)?;
        }
        if options.acquisition_dates {
            set_default_acquisition_date(store, pixels.file.as_deref(), image)?;
        }

        store.set_pixels_id(create_lsid("Pixels", &[image]), image)?;
        store.set_pixels_big_endian(!pixels.little_endian, image)?;
        store.set_pixels_dimension_order(pixels.dimension_order, image)?;
        store.set_pixels_type(pixels.pixel_type, image)?;
        store.set_pixels_size_x(to_i32(Property::PixelsSizeX, pixels.size_x)?, image)?;
        store.set_pixels_size_y(to_i32(Property::PixelsSizeY, pixels.size_y)?, image)?;
        store.set_pixels_size_z(to_i32(Property::PixelsSizeZ, pixels.size_z)?, image)?;
        store.set_pixels_size_c(to_i32(Property::PixelsSizeC, pixels.size_c)?, image)?;
        store.set_pixels_size_t(to_i32(Property::PixelsSizeT, pixels.size_t)?, image)?;

        let samples = to_i32(Property::ChannelSamplesPerPixel, pixels.samples_per_pixel)?;
        for channel in 0..pixels.effective_size_c() {
            store.set_channel_id(create_lsid("Channel", &[image, channel]), image, channel)?;
            store.set_channel_samples_per_pixel(samples, image, channel)?;
        }

        if options.planes {
            let size_c = pixels.effective_size_c();
            for plane in 0..pixels.plane_count() {
                let [z, c, t] = zct_coords(
                    pixels.dimension_order,
                    pixels.size_z,
                    size_c,
                    pixels.size_t,
                    plane,
                )?;
                store.set_plane_the_z(to_i32(Property::PlaneTheZ, z)?, image, plane)?;
                store.set_plane_the_c(to_i32(Property::PlaneTheC, c)?, image, plane)?;
                store.set_plane_the_t(to_i32(Property::PlaneTheT, t)?, image, plane)?;
            }
        }

        debug!(
            "Populated image {} ({}x{}, {} planes)",
            image,
            pixels.size_x,
            pixels.size_y,
            pixels.plane_count()
        );
    }

    info!("Populated pixel metadata for {} image(s)", images.len());
    Ok(())
}

/// Set the acquisition date of `image` to the modification time of `file`,
/// or to the current time when there is no readable file.
pub fn set_default_acquisition_date<S>(
    store: &mut S,
    file: Option<&Path>,
    image: usize,
) -> Result<(), MetadataError>
where
    S: MetadataStore + ?Sized,
{
    let modified = file.and_then(|path| match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => Some(DateTime::<Utc>::from(time)),
        Err(e) => {
            warn!("No modification time for {}: {}", path.display(), e);
            None
        }
    });
    store.set_image_acquisition_date(modified.unwrap_or_else(Utc::now), image)
}
