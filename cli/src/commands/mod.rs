pub mod collect;
pub mod epoch;
