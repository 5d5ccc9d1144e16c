//! Mesh storage and model file parsing.
//!
//! A [`Mesh`] owns the vertex positions and face index lists parsed from a
//! Wavefront OBJ file (the `v`/`f` subset). Meshes are immutable once
//! constructed, so one mesh can back any number of render passes without
//! synchronization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::math::vec3::Vec3;

/// Errors that can occur while loading a mesh.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The model file could not be opened or read.
    #[error("failed to read model file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `v` or `f` record is missing tokens or holds a non-numeric token.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A face references a vertex the mesh does not contain.
    ///
    /// The reported index is zero-based, after the one-based correction.
    #[error("face index {index} on line {line} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

/// A polygon face: an ordered ring of indices into the vertex list.
///
/// Three or more indices is the canonical case, but one- and two-index
/// faces are legal and rasterize as degenerate rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Vertex positions plus the faces connecting them.
#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Load a mesh from an OBJ file.
    ///
    /// An unreadable file is an error up front; rendering never sees a mesh
    /// that only looks valid because it is empty.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Parse OBJ text into a mesh.
    ///
    /// Each line is whitespace-tokenized. `v` records append a vertex from
    /// their first three coordinates (trailing tokens ignored), `f` records
    /// append a face from the numeric prefix of each token (the part before
    /// an optional `/`, one-based in the source format). Every other record
    /// kind is skipped.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        // Raw zero-based indices, kept with their source line so range
        // errors can name it. Validation waits until the vertex count is
        // final, since a face may precede the vertices it references.
        let mut raw_faces: Vec<(usize, Vec<i64>)> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let mut triple = [0.0f32; 3];
                    for slot in triple.iter_mut() {
                        let token =
                            tokens.next().ok_or_else(|| LoadError::MalformedRecord {
                                line: line_no,
                                reason: "vertex record needs 3 coordinates".into(),
                            })?;
                        *slot = token.parse().map_err(|_| LoadError::MalformedRecord {
                            line: line_no,
                            reason: format!("invalid vertex coordinate `{token}`"),
                        })?;
                    }
                    vertices.push(Vec3::new(triple[0], triple[1], triple[2]));
                }
                Some("f") => {
                    let mut indices = Vec::new();
                    for token in tokens {
                        // The prefix before the first `/` is the vertex
                        // index; texture and normal references after it are
                        // ignored.
                        let prefix = token.split('/').next().unwrap_or(token);
                        let one_based: i64 =
                            prefix.parse().map_err(|_| LoadError::MalformedRecord {
                                line: line_no,
                                reason: format!("invalid face index `{token}`"),
                            })?;
                        indices.push(one_based - 1);
                    }
                    if indices.is_empty() {
                        return Err(LoadError::MalformedRecord {
                            line: line_no,
                            reason: "face record needs at least one index".into(),
                        });
                    }
                    raw_faces.push((line_no, indices));
                }
                _ => {}
            }
        }

        let mut faces = Vec::with_capacity(raw_faces.len());
        for (line, indices) in raw_faces {
            let mut face = Vec::with_capacity(indices.len());
            for index in indices {
                if index < 0 || index as usize >= vertices.len() {
                    return Err(LoadError::IndexOutOfRange {
                        line,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
                face.push(index as usize);
            }
            faces.push(Face::new(face));
        }

        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_vertices_and_faces() {
        let mesh = Mesh::parse("v 0.5 -0.25 1.0\nv 1 2 3\nv 0 0 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_relative_eq!(mesh.vertices()[0].x, 0.5);
        assert_relative_eq!(mesh.vertices()[0].y, -0.25);
        assert_relative_eq!(mesh.vertices()[0].z, 1.0);
        assert_eq!(mesh.faces()[0].indices(), &[0, 1, 2]);
    }

    #[test]
    fn face_tokens_keep_only_the_vertex_index() {
        let source = "v 0 0 0\nv 0 0 0\nv 0 0 0\nv 0 0 0\nv 0 0 0\nf 5/2/1 1/1 2//3\n";
        let mesh = Mesh::parse(source).unwrap();
        assert_eq!(mesh.faces()[0].indices(), &[4, 0, 1]);
    }

    #[test]
    fn extra_vertex_tokens_are_ignored() {
        let mesh = Mesh::parse("v 1 2 3 0.5 255 0 0\n").unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_relative_eq!(mesh.vertices()[0].z, 3.0);
    }

    #[test]
    fn unknown_records_are_ignored() {
        let source = "# comment\nvn 0 0 1\nvt 0.5 0.5\ng body\n\nv 0 0 0\n";
        let mesh = Mesh::parse(source).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn single_index_face_is_accepted() {
        let mesh = Mesh::parse("v 0 0 0\nf 1\n").unwrap();
        assert_eq!(mesh.faces()[0].indices(), &[0]);
    }

    #[test]
    fn vertex_with_too_few_coordinates_is_malformed() {
        let err = Mesh::parse("v 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn non_numeric_vertex_coordinate_is_malformed() {
        let err = Mesh::parse("v 0 0 0\nv 1 x 3\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn non_numeric_face_index_is_malformed() {
        let err = Mesh::parse("v 0 0 0\nf a\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn bare_face_record_is_malformed() {
        let err = Mesh::parse("v 0 0 0\nf\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn face_index_past_the_vertex_list_is_rejected() {
        let err = Mesh::parse("v 0 0 0\nf 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::IndexOutOfRange {
                line: 2,
                index: 1,
                vertex_count: 1,
            }
        ));
    }

    #[test]
    fn zero_index_is_rejected() {
        // The source format is one-based, so 0 has no referent.
        let err = Mesh::parse("v 0 0 0\nf 0\n").unwrap_err();
        assert!(matches!(err, LoadError::IndexOutOfRange { index: -1, .. }));
    }

    #[test]
    fn faces_may_precede_their_vertices() {
        let mesh = Mesh::parse("f 1 2\nv 0 0 0\nv 1 1 1\n").unwrap();
        assert_eq!(mesh.faces()[0].indices(), &[0, 1]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Mesh::from_obj("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
