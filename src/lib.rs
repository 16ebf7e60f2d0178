// m3utrim library - Core modules for the IPTV playlist reducer
// The selection pass is pure; everything touching disk lives at the edges

pub mod config;   // settings: category rules, caps, default paths
pub mod playlist; // entry parsing, the selection pass, file glue
pub mod report;   // run summary for humans and machines

// Export the stuff callers actually use
pub use config::Config;
pub use playlist::{CategoryRule, PlaylistEntry, Reduction, Selector, SourceError};
pub use report::ReductionReport;
