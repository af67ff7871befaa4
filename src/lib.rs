pub mod engine;
pub mod error;
pub mod io;
pub mod ledger;
pub mod report;
pub mod sample;
pub mod transaction;
