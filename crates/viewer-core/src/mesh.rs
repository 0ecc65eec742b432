//! Flattening a binary glTF into a single drawable triangle list.

use crate::asset::AssetError;
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere through the corners.
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Debug)]
pub struct ModelMesh {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
}

impl ModelMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Parse a GLB container and bake every triangle primitive of the default
    /// scene into world space.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, AssetError> {
        let gltf = gltf::Gltf::from_slice(bytes).map_err(|e| AssetError::Parse(e.to_string()))?;

        let mut buffers: Vec<&[u8]> = Vec::new();
        for buffer in gltf.buffers() {
            match buffer.source() {
                gltf::buffer::Source::Bin => {
                    let blob = gltf.blob.as_deref().ok_or(AssetError::MissingBinaryChunk)?;
                    buffers.push(blob);
                }
                gltf::buffer::Source::Uri(uri) => {
                    return Err(AssetError::ExternalBuffer(uri.to_string()));
                }
            }
        }

        let mut out = ModelMesh {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: Aabb::empty(),
        };
        let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
        match scene {
            Some(scene) => {
                for node in scene.nodes() {
                    out.append_node(&node, Mat4::IDENTITY, &buffers);
                }
            }
            None => {
                for mesh in gltf.meshes() {
                    out.append_mesh(&mesh, Mat4::IDENTITY, &buffers);
                }
            }
        }

        if out.indices.is_empty() {
            return Err(AssetError::NoGeometry);
        }
        Ok(out)
    }

    fn append_node(&mut self, node: &gltf::Node<'_>, parent: Mat4, buffers: &[&[u8]]) {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            self.append_mesh(&mesh, world, buffers);
        }
        for child in node.children() {
            self.append_node(&child, world, buffers);
        }
    }

    fn append_mesh(&mut self, mesh: &gltf::Mesh<'_>, world: Mat4, buffers: &[&[u8]]) {
        let normal_matrix = {
            let m = Mat3::from_mat4(world);
            if m.determinant().abs() > f32::EPSILON {
                m.inverse().transpose()
            } else {
                Mat3::IDENTITY
            }
        };
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!(
                    "[asset] skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    mesh.name()
                );
                continue;
            }
            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).copied());
            let positions: Vec<Vec3> = match reader.read_positions() {
                Some(iter) => iter.map(Vec3::from_array).collect(),
                None => continue,
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(read) => read.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            if indices.iter().any(|i| *i as usize >= positions.len()) {
                log::warn!("[asset] primitive index out of range in mesh {:?}", mesh.name());
                continue;
            }
            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(iter) => iter.map(Vec3::from_array).collect(),
                None => vertex_normals(&positions, &indices),
            };
            let color = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();

            let base = self.vertices.len() as u32;
            for (i, p) in positions.iter().enumerate() {
                let wp = world.transform_point3(*p);
                let n = normals.get(i).copied().unwrap_or(Vec3::Y);
                let wn = (normal_matrix * n).normalize_or_zero();
                self.bounds.extend(wp);
                self.vertices.push(ModelVertex {
                    position: wp.to_array(),
                    normal: wn.to_array(),
                    color,
                });
            }
            // Drop any trailing partial triangle.
            let whole = indices.len() - indices.len() % 3;
            self.indices.extend(indices[..whole].iter().map(|i| base + *i));
        }
    }
}

/// Area-weighted smooth normals for an indexed triangle list.
pub fn vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        // Cross product length is twice the triangle area, which gives the weighting.
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                Vec3::Y
            } else {
                n
            }
        })
        .collect()
}
