//! Image decoding and the wgpu texture backend.

use std::collections::HashMap;

use image::{DynamicImage, GenericImageView, RgbaImage, imageops::FilterType};

use crate::{
    data_structures::texture::{TextureBackend, TextureHandle},
    error::{Result, SceneError},
};

/// Color layout of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    pub fn count(self) -> u8 {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// A decoded 8-bit RGB or RGBA image, rows tightly packed.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Decodes an encoded image file (PNG, JPEG, ...).
    ///
    /// Grayscale images, with or without alpha, are rejected.
    pub fn from_bytes(bytes: &[u8], label: &str, flip_vertically: bool) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|source| SceneError::Decode {
            label: label.to_string(),
            source,
        })?;
        Self::from_image(img, label, flip_vertically)
    }

    pub fn from_image(img: DynamicImage, label: &str, flip_vertically: bool) -> Result<Self> {
        let channels = match img.color().channel_count() {
            3 => Channels::Rgb,
            4 => Channels::Rgba,
            channels => {
                log::warn!("{label}: images with {channels} channels are not supported");
                return Err(SceneError::UnsupportedChannels {
                    label: label.to_string(),
                    channels,
                });
            }
        };
        let img = if flip_vertically { img.flipv() } else { img };
        let (width, height) = img.dimensions();
        let data = match channels {
            Channels::Rgb => img.to_rgb8().into_raw(),
            Channels::Rgba => img.to_rgba8().into_raw(),
        };
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// The image expanded to RGBA, opaque where the source had no alpha.
    pub fn to_rgba(&self) -> RgbaImage {
        let rgba = match self.channels {
            Channels::Rgba => self.data.clone(),
            Channels::Rgb => self
                .data
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
                .collect(),
        };
        RgbaImage::from_raw(self.width, self.height, rgba)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Level 0 followed by every halved level down to 1x1.
    pub fn mip_chain(&self) -> Vec<RgbaImage> {
        let mut levels = Vec::with_capacity(mip_level_count(self.width, self.height) as usize);
        levels.push(self.to_rgba());
        loop {
            let (width, height) = levels[levels.len() - 1].dimensions();
            if width <= 1 && height <= 1 {
                break;
            }
            let next = image::imageops::resize(
                &levels[levels.len() - 1],
                (width / 2).max(1),
                (height / 2).max(1),
                FilterType::Triangle,
            );
            levels.push(next);
        }
        levels
    }
}

/// Number of levels in a full mip chain for a `width` x `height` image.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

#[derive(Debug)]
struct GpuTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

/// [`TextureBackend`] on top of wgpu.
///
/// Keeps a slot table with one entry per texture unit; [`bind_group`]
/// exposes the slots to a pipeline, with a white placeholder in every unit
/// nothing was bound to.
///
/// [`bind_group`]: Self::bind_group
#[derive(Debug)]
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: HashMap<TextureHandle, GpuTexture>,
    next_handle: u32,
    units: Vec<Option<TextureHandle>>,
    placeholder: GpuTexture,
    sampler: wgpu::Sampler,
}

impl WgpuTextures {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, units: usize) -> Self {
        let white = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        let placeholder = create_texture(device, queue, &[white], "placeholder texture");
        Self {
            device: device.clone(),
            queue: queue.clone(),
            textures: HashMap::new(),
            next_handle: 1,
            units: vec![None; units],
            placeholder,
            sampler: create_default_sampler(device),
        }
    }

    pub fn view(&self, handle: TextureHandle) -> Option<&wgpu::TextureView> {
        self.textures.get(&handle).map(|t| &t.view)
    }

    /// The handle bound to `unit`, if any.
    pub fn bound(&self, unit: u32) -> Option<TextureHandle> {
        self.units.get(unit as usize).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// One 2D texture binding per unit (bindings `0..units`) and a filtering
    /// sampler at binding `units`.
    pub fn bind_group_layout(&self) -> wgpu::BindGroupLayout {
        let mut entries: Vec<wgpu::BindGroupLayoutEntry> = (0..self.units.len() as u32)
            .map(|binding| wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            })
            .collect();
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: self.units.len() as u32,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        });
        self.device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &entries,
                label: Some("scene_texture_units_layout"),
            })
    }

    pub fn bind_group(&self, layout: &wgpu::BindGroupLayout) -> wgpu::BindGroup {
        let views: Vec<&wgpu::TextureView> = self
            .units
            .iter()
            .map(|slot| {
                slot.and_then(|handle| self.view(handle))
                    .unwrap_or(&self.placeholder.view)
            })
            .collect();
        let mut entries: Vec<wgpu::BindGroupEntry> = views
            .iter()
            .enumerate()
            .map(|(binding, view)| wgpu::BindGroupEntry {
                binding: binding as u32,
                resource: wgpu::BindingResource::TextureView(view),
            })
            .collect();
        entries.push(wgpu::BindGroupEntry {
            binding: self.units.len() as u32,
            resource: wgpu::BindingResource::Sampler(&self.sampler),
        });
        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &entries,
            label: Some("scene_texture_units"),
        })
    }
}

impl TextureBackend for WgpuTextures {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle> {
        if image.width == 0 || image.height == 0 {
            anyhow::bail!("texture {label} has no pixels");
        }
        let levels = image.mip_chain();
        let texture = create_texture(&self.device, &self.queue, &levels, label);
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.textures.insert(handle, texture);
        Ok(handle)
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        match self.units.get_mut(unit as usize) {
            Some(slot) => *slot = Some(handle),
            None => log::warn!("texture unit {unit} does not exist, {handle:?} not bound"),
        }
    }

    fn release(&mut self, handle: TextureHandle) {
        if let Some(gpu) = self.textures.remove(&handle) {
            gpu.texture.destroy();
        }
        for slot in self.units.iter_mut() {
            if *slot == Some(handle) {
                *slot = None;
            }
        }
    }
}

fn create_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    levels: &[RgbaImage],
    label: &str,
) -> GpuTexture {
    let (width, height) = levels
        .first()
        .map(|level| level.dimensions())
        .unwrap_or((1, 1));
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let mip_levels = mip_level_count(width, height);
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: mip_levels,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: WgpuTextures::FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (mip_level, level) in levels.iter().take(mip_levels as usize).enumerate() {
        let (width, height) = level.dimensions();
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: mip_level as u32,
                origin: wgpu::Origin3d::ZERO,
            },
            level.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    GpuTexture { texture, view }
}

pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("scene texture sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}
