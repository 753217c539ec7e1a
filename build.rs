use std::env;

fn main() {

    // Only the `sdl` feature links against the SDL2 C libraries.
    // Assume libsdl2*-dev etc. are installed with the package manager on unix family systems.
    // On a windows OS we look for the C built sdl2 libraries in ./sdl_libs unless SDL_LIBS_DIR says otherwise.
    if env::var_os("CARGO_FEATURE_SDL").is_none() || !cfg!(target_family = "windows") {
        return;
    }

    let libs_dir = env::var("SDL_LIBS_DIR")
        .ok()
        .or_else(|| env::var("CARGO_MANIFEST_DIR").ok().map(|root| format!("{}/sdl_libs", root)));

    if let Some(libs) = libs_dir {
        println!("cargo:rustc-link-search=native={}", libs);
    }
}
