use thiserror::Error;

/// All the ways the front end can fail.
///
/// The game model itself never fails; everything here comes from the window, the event loop, or
/// the GPU surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Creating, resizing or presenting the pixel buffer failed.
    #[error("Pixel buffer error")]
    Pixels(#[from] pixels::Error),
    /// The event loop could not be created or exited abnormally.
    #[error("Event loop error")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The window could not be created.
    #[error("Unable to create window")]
    Window(#[from] winit::error::OsError),
}
