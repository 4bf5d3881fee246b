pub mod public;
mod router;
pub use router::{channels_router, router};
