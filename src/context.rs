use crate::{
    data_structures::texture::TextureBackend, pipelines::shader::ShaderUniforms,
    resources::mesh::Meshes,
};

/// The collaborators a scene talks to while preparing and rendering.
///
/// All three carry GPU binding state that outlives a single call.
pub struct Context<'a> {
    pub shader: &'a mut dyn ShaderUniforms,
    pub meshes: &'a mut dyn Meshes,
    pub textures: &'a mut dyn TextureBackend,
}

impl<'a> Context<'a> {
    pub fn new(
        shader: &'a mut dyn ShaderUniforms,
        meshes: &'a mut dyn Meshes,
        textures: &'a mut dyn TextureBackend,
    ) -> Self {
        Self {
            shader,
            meshes,
            textures,
        }
    }
}
