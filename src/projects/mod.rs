pub mod card;
pub mod filter;
pub mod icon;
pub mod rank;
pub mod stats;
