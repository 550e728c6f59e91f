///
/// Identifies a vertex buffer held by a renderer
///
/// Buffer IDs are assigned by whatever generates the render actions; renderers keep
/// buffers across frames until a `FreeVertexBuffer` action releases them, so a
/// caller can reuse an ID to replace a buffer's contents.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VertexBufferId(pub usize);
