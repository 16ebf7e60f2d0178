pub mod entry;
pub mod selector;
pub mod source;

pub use entry::PlaylistEntry;
pub use selector::{CategoryRule, Reduction, Selector};
pub use source::SourceError;

/// First line of every playlist this tool reads or writes.
pub const PLAYLIST_HEADER: &str = "#EXTM3U";

/// Marker that opens a channel record; the next line is its stream URL.
pub const ENTRY_MARKER: &str = "#EXTINF";
