use crate::errors::*;

pub struct SdlSetup {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
}

// sdl reports failures as plain strings, which convert straight into our `Error`.
pub fn init() -> Result<SdlSetup> {

    let sdl_context: sdl2::Sdl = sdl2::init()
        .map_err(|e| format!("Failed to init sdl: {}", e))?;
    let video_subsystem: sdl2::VideoSubsystem = sdl_context.video()
        .map_err(|e| format!("Failed to init the sdl video subsystem: {}", e))?;

    Ok(SdlSetup {
        sdl_context,
        video_subsystem,
    })
}
