pub mod accompaniment;
pub mod melody;

pub use accompaniment::{render_accompaniment, Accompaniment};
pub use melody::MelodyTrack;
