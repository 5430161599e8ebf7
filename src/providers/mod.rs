//! Action providers.

pub mod metaplex;
pub mod pumpfun;

pub use metaplex::MetaplexActionProvider;
pub use pumpfun::PumpfunActionProvider;
