// Application layer - Use case interactors

pub mod container;
pub mod inspect_interactor;
pub mod trim_interactor;

#[cfg(test)]
pub(crate) mod testing;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use inspect_interactor::InspectInteractor;
pub use trim_interactor::{TrimInteractor, TrimRequest, TrimResponse};
