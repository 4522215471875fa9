mod league;
mod scorer;
mod season;

pub use league::*;
pub use scorer::*;
pub use season::*;
