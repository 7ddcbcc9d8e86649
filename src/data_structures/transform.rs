//! Model transforms.
//!
//! A draw is placed by a scale, three Euler angles in degrees and a
//! translation. They are always composed as
//! `translation * rot_z * rot_y * rot_x * scale`: the object is scaled first,
//! then rotated around X, Y and Z (in that order), then moved. Every scene
//! description depends on this order, changing it moves every object.

use cgmath::{Deg, Matrix4, Vector3};

/// Placement of a single draw. Lives only as long as the draw it describes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    /// Rotation around X, Y and Z in degrees.
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    /// Identity transform (unit scale, no rotation, at the origin).
    pub fn new() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn from_parts(scale: [f32; 3], rotation_deg: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            scale: scale.into(),
            rotation: rotation_deg.into(),
            position: position.into(),
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        compute_model_matrix(
            self.scale,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/// Builds the model matrix `T * Rz * Ry * Rx * S` from degrees.
pub fn compute_model_matrix(
    scale: Vector3<f32>,
    x_deg: f32,
    y_deg: f32,
    z_deg: f32,
    translation: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(translation)
        * Matrix4::from_angle_z(Deg(z_deg))
        * Matrix4::from_angle_y(Deg(y_deg))
        * Matrix4::from_angle_x(Deg(x_deg))
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
