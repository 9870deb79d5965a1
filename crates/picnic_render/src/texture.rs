//! Texture images and GPU upload
//!
//! [`TextureImage`] is a CPU-side RGBA8 image, either decoded from disk or
//! synthesized. The table's gingham check is generated procedurally when the
//! configured file is missing, so the repo runs without binary assets.

use std::fs;
use std::io;
use std::path::Path;

/// Error loading a texture file
#[derive(Debug)]
pub enum TextureError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Decode error (unsupported or corrupt image data)
    Decode(image::ImageError),
}

impl From<io::Error> for TextureError {
    fn from(e: io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "IO error: {}", e),
            TextureError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for TextureError {}

/// A CPU-side RGBA8 image
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, `4 * width * height` bytes
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Load and decode an image file into RGBA8
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let bytes = fs::read(path)?;
        let decoded = image::load_from_memory(&bytes)?;
        let rgba = decoded.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    /// A single white pixel (bound for untextured materials)
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![255, 255, 255, 255],
        }
    }

    /// Synthesize a gingham check pattern
    ///
    /// The classic picnic-cloth weave: a white base, half-tone stripes where
    /// one colored band crosses the base, and full-tone squares where two
    /// bands overlap.
    pub fn gingham(size: u32, checks: u32, color: [u8; 4]) -> Self {
        let checks = checks.max(1);
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        let half = |c: u8| -> u8 { ((c as u16 + 255) / 2) as u8 };

        for y in 0..size {
            for x in 0..size {
                let band_x = (x * checks / size) % 2 == 1;
                let band_y = (y * checks / size) % 2 == 1;
                let texel = match (band_x, band_y) {
                    (true, true) => color,
                    (true, false) | (false, true) => {
                        [half(color[0]), half(color[1]), half(color[2]), 255]
                    }
                    (false, false) => [255, 255, 255, 255],
                };
                pixels.extend_from_slice(&texel);
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// Bytes per row (tightly packed)
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }
}

/// A texture uploaded to the GPU together with its bind group
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    /// Upload an RGBA8 image and create its sampler bind group
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        image: &TextureImage,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene_texture"),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.bytes_per_row()),
                rows_per_image: Some(image.height),
            },
            wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_texture_bind_group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
            ],
        });

        Self {
            texture,
            view,
            bind_group,
        }
    }
}
