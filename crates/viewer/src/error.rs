//! Error types for the SDL2 presentation adapter

use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("SDL could not initialize: {0}")]
    SdlInit(String),

    #[error("video subsystem unavailable: {0}")]
    Video(String),

    #[error("window could not be created: {0}")]
    Window(#[from] WindowBuildError),

    #[error("renderer could not be created: {0}")]
    Renderer(#[from] IntegerOrSdlError),

    #[error("event pump unavailable: {0}")]
    EventPump(String),
}
