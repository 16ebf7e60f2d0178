use regex::Regex;

/// One channel record: an #EXTINF metadata line plus the stream URL below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub metadata: String,
    pub url: String,
}

impl PlaylistEntry {
    pub fn new(metadata: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            url: url.into(),
        }
    }

    /// Quality gate: "FHD" anywhere, or "HD" without an "SD" marker.
    /// Case-sensitive, unlike category matching - the markers are
    /// uppercase tags in the feeds this tool targets.
    pub fn is_qualified(&self) -> bool {
        let is_fhd = self.metadata.contains("FHD");
        let is_hd = self.metadata.contains("HD") && !self.metadata.contains("SD");
        is_fhd || is_hd
    }

    /// Entries whose URL line is missing or not an http(s) link are useless.
    pub fn has_stream_url(&self) -> bool {
        self.url.starts_with("http")
    }
}

/// Pulls display names out of #EXTINF metadata lines.
pub struct NameExtractor {
    // Trailing text after the last comma; missing when the line has none.
    pattern: Option<Regex>,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r",([^,]*)$").ok(),
        }
    }

    /// Trimmed text after the last comma of the metadata line.
    /// Empty string when there is no comma - such entries still take part
    /// in deduplication under the empty name.
    pub fn display_name(&self, metadata: &str) -> String {
        self.pattern
            .as_ref()
            .and_then(|re| re.captures(metadata))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_markers() {
        let fhd = PlaylistEntry::new("#EXTINF:-1,Globo FHD", "http://a");
        assert!(fhd.is_qualified());

        let hd = PlaylistEntry::new("#EXTINF:-1,Globo HD", "http://a");
        assert!(hd.is_qualified());

        // SD marker disqualifies even when HD is also present
        let hd_sd = PlaylistEntry::new("#EXTINF:-1,Globo HD SD", "http://a");
        assert!(!hd_sd.is_qualified());

        let plain = PlaylistEntry::new("#EXTINF:-1,Globo", "http://a");
        assert!(!plain.is_qualified());

        // Lowercase markers never qualify
        let lowercase = PlaylistEntry::new("#EXTINF:-1,Globo hd", "http://a");
        assert!(!lowercase.is_qualified());
    }

    #[test]
    fn test_stream_url_check() {
        assert!(PlaylistEntry::new("#EXTINF:-1,X HD", "http://a").has_stream_url());
        assert!(PlaylistEntry::new("#EXTINF:-1,X HD", "https://a").has_stream_url());
        assert!(!PlaylistEntry::new("#EXTINF:-1,X HD", "rtmp://a").has_stream_url());
        assert!(!PlaylistEntry::new("#EXTINF:-1,X HD", "").has_stream_url());
    }

    #[test]
    fn test_display_name_after_last_comma() {
        let names = NameExtractor::new();

        assert_eq!(names.display_name("#EXTINF:-1,Globo HD"), "Globo HD");
        assert_eq!(
            names.display_name("#EXTINF:-1 tvg-name=\"x\",  SBT FHD  "),
            "SBT FHD"
        );
        // Multiple commas: only the text after the last one is the name
        assert_eq!(
            names.display_name("#EXTINF:-1 group-title=\"A,B\",Record HD"),
            "Record HD"
        );
    }

    #[test]
    fn test_display_name_missing_comma() {
        let names = NameExtractor::new();
        assert_eq!(names.display_name("#EXTINF:-1 Globo HD"), "");
    }
}
