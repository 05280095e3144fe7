pub mod pairs;

pub use pairs::pair_mut;
