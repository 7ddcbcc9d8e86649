#![allow(dead_code)]

use std::{
    cell::RefCell,
    io::Cursor,
    path::{Path, PathBuf},
    rc::Rc,
};

use image::{DynamicImage, ImageFormat};
use scene_ngin::{
    cgmath::{Matrix4, Vector2, Vector3, Vector4},
    context::Context,
    data_structures::texture::{TextureBackend, TextureHandle},
    pipelines::shader::{ShaderUniforms, UniformValue},
    resources::{mesh::MeshKind, mesh::Meshes, texture::DecodedImage},
};

/// Everything the scene did to its collaborators, in call order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Uniform(String, UniformValue),
    Load(MeshKind),
    Draw(MeshKind),
}

impl Event {
    pub(crate) fn uniform_name(&self) -> Option<&str> {
        match self {
            Event::Uniform(name, _) => Some(name),
            _ => None,
        }
    }
}

pub(crate) type Log = Rc<RefCell<Vec<Event>>>;

pub(crate) struct RecordingShader {
    log: Log,
}

impl RecordingShader {
    fn record(&mut self, name: &str, value: UniformValue) {
        self.log
            .borrow_mut()
            .push(Event::Uniform(name.to_string(), value));
    }
}

impl ShaderUniforms for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.record(name, UniformValue::Mat4(value));
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        self.record(name, UniformValue::Sampler(unit));
    }
}

pub(crate) struct RecordingMeshes {
    log: Log,
}

impl Meshes for RecordingMeshes {
    fn load(&mut self, kind: MeshKind) {
        self.log.borrow_mut().push(Event::Load(kind));
    }

    fn draw(&mut self, kind: MeshKind) {
        self.log.borrow_mut().push(Event::Draw(kind));
    }
}

/// Texture backend that hands out sequential handles and remembers every call.
#[derive(Default)]
pub(crate) struct FakeTextures {
    pub(crate) next: u32,
    pub(crate) uploads: Vec<(String, u32, u32)>,
    pub(crate) bound: Vec<(u32, TextureHandle)>,
    pub(crate) released: Vec<TextureHandle>,
    pub(crate) fail_uploads: bool,
}

impl FakeTextures {
    /// A backend whose every upload fails.
    pub(crate) fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Default::default()
        }
    }
}

impl TextureBackend for FakeTextures {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle> {
        if self.fail_uploads {
            anyhow::bail!("out of texture memory");
        }
        self.next += 1;
        self.uploads
            .push((label.to_string(), image.width, image.height));
        Ok(TextureHandle(100 + self.next))
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.bound.push((unit, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}

/// Recording doubles for all three scene collaborators sharing one log.
pub(crate) struct Harness {
    pub(crate) log: Log,
    pub(crate) shader: RecordingShader,
    pub(crate) meshes: RecordingMeshes,
    pub(crate) textures: FakeTextures,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        Self {
            shader: RecordingShader { log: log.clone() },
            meshes: RecordingMeshes { log: log.clone() },
            textures: FakeTextures::default(),
            log,
        }
    }

    pub(crate) fn ctx(&mut self) -> Context<'_> {
        Context::new(&mut self.shader, &mut self.meshes, &mut self.textures)
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub(crate) fn uniform_names(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| event.uniform_name().map(str::to_string))
            .collect()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn rgb_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::new_rgb8(width, height)
}

pub(crate) fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, format)
        .expect("test image should encode");
    bytes.into_inner()
}

pub(crate) fn png(img: &DynamicImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

pub(crate) fn decoded_rgb(width: u32, height: u32) -> DecodedImage {
    DecodedImage::from_image(rgb_image(width, height), "test", false)
        .expect("rgb images decode")
}

/// A scratch asset directory under the system temp dir, removed on drop.
pub(crate) struct TempAssets {
    root: PathBuf,
}

impl TempAssets {
    pub(crate) fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "scene-ngin-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).expect("temp asset dir should be creatable");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn write(&self, file_name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("asset subdir should be creatable");
        }
        std::fs::write(&path, bytes).expect("asset should be writable");
        path
    }
}

impl Drop for TempAssets {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
