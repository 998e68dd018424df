//! # Voxel Interaction Entry Point
//!
//! This is the entry point for the native binary. It simply calls into the
//! library's `run()` function, which plays a short headless session against
//! a generated world.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_interaction::run();
}
