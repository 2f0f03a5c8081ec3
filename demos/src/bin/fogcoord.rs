//! Explicit fog coordinates versus depth-based fog.
//!
//! Keys:
//! * `c`: fog by fragment depth
//! * `C`: fog by explicit fog coordinates
//! * `1`, `2`, `3`: raise the fog coordinate of a vertex
//! * `8`, `9`, `0`: lower the fog coordinate of a vertex
//! * `f`, `b`: move the camera forward or backward
//! * Esc: quit
//!
//! Set `RUST_LOG=debug` to log every state change.

use env_logger::Env;

use fc_front::{dims::SQUARE_500, minifb::Window};
use fogcoord_demos::Scene;

fn main() -> Result<(), minifb::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let mut win = Window::builder()
        .title("fogcoord")
        .dims(SQUARE_500)
        .resizable(true)
        .build()?;

    log::info!("c/C: depth/explicit fog, 1-3/8-0: fog coordinates, f/b: move, Esc: quit");

    let mut scene = Scene::new();
    win.run(&mut scene)?;

    log::info!("bye");
    Ok(())
}
