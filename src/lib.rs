pub use utils::Pos;
mod utils;

pub use world::{Cell, HashedWorld, World};
pub mod world;

pub use sim::Sim;
pub mod sim;

pub use loader::{FsSource, LoadError, Loader, Source};
pub mod loader;
