///
/// Errors that can occur while bringing up a renderer
///
/// These indicate a configuration or driver problem discovered before anything is
/// drawn; once a renderer is constructed, rendering itself does not fail.
///
#[derive(Clone, PartialEq, Debug)]
pub enum RenderInitError {
    /// The surface reports no texture format the renderer can draw to
    UnsupportedSurface,
}
