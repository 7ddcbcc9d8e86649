use std::fmt;

/// The primitive shapes a scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    Sphere,
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshKind::Plane => "plane",
            MeshKind::Box => "box",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Sphere => "sphere",
        };
        f.write_str(name)
    }
}

/// Geometry provider for the primitive shapes.
///
/// `load` uploads a shape's vertex and index data and is called at most once
/// per kind. `draw` issues a draw call with whatever transform, texture and
/// material state the shader currently holds.
pub trait Meshes {
    fn load(&mut self, kind: MeshKind);
    fn draw(&mut self, kind: MeshKind);
}
