use cgmath::Angle;

use crate::{
    data_structures::light::{Attenuation, LightColors, LightSetup},
    error::{Result, SceneError},
    pipelines::shader::{self, ShaderUniforms, UniformValue},
};

/// Size of the `pointLights` array in the lighting shader.
pub const MAX_POINT_LIGHTS: usize = 8;

const DIRECTIONAL: &str = "directionalLight";
const SPOT: &str = "spotLight";
const POINTS: &str = "pointLights";

fn point_light(index: usize, field: &str) -> String {
    format!("{POINTS}[{index}].{field}")
}

fn write_colors(shader: &mut dyn ShaderUniforms, prefix: &str, colors: &LightColors) {
    shader.set_vec3(&format!("{prefix}.ambient"), colors.ambient);
    shader.set_vec3(&format!("{prefix}.diffuse"), colors.diffuse);
    shader.set_vec3(&format!("{prefix}.specular"), colors.specular);
}

fn write_attenuation(shader: &mut dyn ShaderUniforms, prefix: &str, attenuation: &Attenuation) {
    shader.set_float(&format!("{prefix}.constant"), attenuation.constant);
    shader.set_float(&format!("{prefix}.linear"), attenuation.linear);
    shader.set_float(&format!("{prefix}.quadratic"), attenuation.quadratic);
}

/// Writes the whole light topology into shader state.
///
/// Point-light slots past the configured lights are switched off, so running
/// this again with a different setup never leaves stale lights behind. Nothing
/// is written if the setup has more point lights than the shader has slots.
pub fn configure_lights(setup: &LightSetup, shader: &mut dyn ShaderUniforms) -> Result<()> {
    if setup.point_lights.len() > MAX_POINT_LIGHTS {
        return Err(SceneError::TooManyPointLights {
            count: setup.point_lights.len(),
            max: MAX_POINT_LIGHTS,
        });
    }

    shader.set_bool(shader::USE_LIGHTING, setup.use_lighting);

    let sun = &setup.directional;
    shader.set_vec3(&format!("{DIRECTIONAL}.direction"), sun.direction);
    write_colors(shader, DIRECTIONAL, &sun.colors);
    shader.set_bool(&format!("{DIRECTIONAL}.bActive"), sun.active);

    for index in 0..MAX_POINT_LIGHTS {
        match setup.point_lights.get(index) {
            Some(light) => {
                let prefix = format!("{POINTS}[{index}]");
                shader.set_vec3(&point_light(index, "position"), light.position);
                write_colors(shader, &prefix, &light.colors);
                if let Some(attenuation) = &light.attenuation {
                    write_attenuation(shader, &prefix, attenuation);
                }
                shader.set_bool(&point_light(index, "bActive"), light.active);
            }
            None => shader.set_bool(&point_light(index, "bActive"), false),
        }
    }

    let spot = &setup.spot;
    shader.set_vec3(&format!("{SPOT}.position"), spot.position);
    shader.set_vec3(&format!("{SPOT}.direction"), spot.direction);
    write_colors(shader, SPOT, &spot.colors);
    write_attenuation(shader, SPOT, &spot.attenuation);
    shader.set_float(&format!("{SPOT}.cutOff"), spot.inner_cutoff.cos());
    shader.set_float(&format!("{SPOT}.outerCutOff"), spot.outer_cutoff.cos());
    shader.set_bool(&format!("{SPOT}.bActive"), spot.active);

    log::info!(
        "configured lighting: 1 directional, {} point, 1 spot",
        setup.point_lights.len()
    );
    Ok(())
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightRaw {
    pub direction: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    _padding: u32,
    pub diffuse: [f32; 3],
    _padding2: u32,
    pub specular: [f32; 3],
    _padding3: u32,
}

impl DirectionalLightRaw {
    fn apply(&mut self, field: &str, value: UniformValue) -> Option<()> {
        match field {
            "direction" => value.as_vec3().map(|v| self.direction = v),
            "ambient" => value.as_vec3().map(|v| self.ambient = v),
            "diffuse" => value.as_vec3().map(|v| self.diffuse = v),
            "specular" => value.as_vec3().map(|v| self.specular = v),
            "bActive" => value.as_bool().map(|v| self.active = v as u32),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
}

impl PointLightRaw {
    fn apply(&mut self, field: &str, value: UniformValue) -> Option<()> {
        match field {
            "position" => value.as_vec3().map(|v| self.position = v),
            "ambient" => value.as_vec3().map(|v| self.ambient = v),
            "diffuse" => value.as_vec3().map(|v| self.diffuse = v),
            "specular" => value.as_vec3().map(|v| self.specular = v),
            "constant" => value.as_float().map(|v| self.constant = v),
            "linear" => value.as_float().map(|v| self.linear = v),
            "quadratic" => value.as_float().map(|v| self.quadratic = v),
            "bActive" => value.as_bool().map(|v| self.active = v as u32),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightRaw {
    pub position: [f32; 3],
    pub active: u32,
    pub direction: [f32; 3],
    pub cut_off: f32,
    pub ambient: [f32; 3],
    pub outer_cut_off: f32,
    pub diffuse: [f32; 3],
    pub constant: f32,
    pub specular: [f32; 3],
    pub linear: f32,
    pub quadratic: f32,
    _padding: [u32; 3],
}

impl SpotLightRaw {
    fn apply(&mut self, field: &str, value: UniformValue) -> Option<()> {
        match field {
            "position" => value.as_vec3().map(|v| self.position = v),
            "direction" => value.as_vec3().map(|v| self.direction = v),
            "ambient" => value.as_vec3().map(|v| self.ambient = v),
            "diffuse" => value.as_vec3().map(|v| self.diffuse = v),
            "specular" => value.as_vec3().map(|v| self.specular = v),
            "constant" => value.as_float().map(|v| self.constant = v),
            "linear" => value.as_float().map(|v| self.linear = v),
            "quadratic" => value.as_float().map(|v| self.quadratic = v),
            "cutOff" => value.as_float().map(|v| self.cut_off = v),
            "outerCutOff" => value.as_float().map(|v| self.outer_cut_off = v),
            "bActive" => value.as_bool().map(|v| self.active = v as u32),
            _ => None,
        }
    }
}

/// All light uniforms as they are laid out in the light uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub directional: DirectionalLightRaw,
    pub point_lights: [PointLightRaw; MAX_POINT_LIGHTS],
    pub spot: SpotLightRaw,
    pub use_lighting: u32,
    _padding: [u32; 3],
}

impl LightsUniform {
    /// Writes `value` into the light field addressed by `name`, e.g.
    /// `pointLights[2].diffuse` or `spotLight.cutOff`.
    pub fn apply(&mut self, name: &str, value: UniformValue) -> bool {
        if name == shader::USE_LIGHTING {
            return value
                .as_bool()
                .map(|on| self.use_lighting = on as u32)
                .is_some();
        }
        let Some((head, field)) = name.split_once('.') else {
            return false;
        };
        match head {
            DIRECTIONAL => self.directional.apply(field, value),
            SPOT => self.spot.apply(field, value),
            _ => parse_point_index(head)
                .and_then(|index| self.point_lights.get_mut(index))
                .and_then(|light| light.apply(field, value)),
        }
        .is_some()
    }
}

fn parse_point_index(head: &str) -> Option<usize> {
    head.strip_prefix(POINTS)?
        .strip_prefix('[')?
        .strip_suffix(']')?
        .parse()
        .ok()
}
