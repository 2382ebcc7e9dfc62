pub mod density;

pub use density::{DENSITY_ATTRIBUTE, Density, DensityAction, DensityToggle, DocumentRoot, PresentationSink};
