//! HTTP Range header parsing.
//!
//! Single-range `bytes` parsing per RFC 7233, used when serving bundled
//! assets directly (media files in particular benefit from seeking).

/// Parsed Range request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRequest {
    /// Start byte position
    pub start: usize,
    /// End byte position, None means until end of the asset
    pub end: Option<usize>,
}

impl RangeRequest {
    /// Calculate actual end position for an asset of `total_size` bytes
    #[inline]
    pub fn end_position(&self, total_size: usize) -> usize {
        self.end.unwrap_or_else(|| total_size.saturating_sub(1))
    }

    /// Calculate content length (for test validation only)
    #[cfg(test)]
    pub fn content_length(&self, total_size: usize) -> usize {
        let end = self.end_position(total_size);
        end.saturating_sub(self.start) + 1
    }
}

/// Range header parse result
#[derive(Debug)]
pub enum RangeParseResult {
    /// Valid range request
    Valid(RangeRequest),
    /// Range not satisfiable (start >= `total_size`) - should return 416
    NotSatisfiable,
    /// No Range header or malformed (ignore, return full content)
    None,
}

/// Parse HTTP Range header (single range only, bytes unit)
///
/// Supported formats:
/// - `bytes=start-end` - Specific range
/// - `bytes=start-` - From start to end
/// - `bytes=-suffix` - Last suffix bytes
///
/// Multi-range requests and non-bytes units are ignored (full content).
pub fn parse_range_header(range_header: Option<&str>, total_size: usize) -> RangeParseResult {
    let Some(header) = range_header else {
        return RangeParseResult::None;
    };

    let Some(header) = header.strip_prefix("bytes=") else {
        return RangeParseResult::None; // Not bytes unit, ignore
    };

    // Only support single range (not multi-range)
    if header.contains(',') {
        return RangeParseResult::None;
    }

    let parts: Vec<&str> = header.split('-').collect();
    if parts.len() != 2 {
        return RangeParseResult::None;
    }

    let (start_str, end_str) = (parts[0].trim(), parts[1].trim());

    // Suffix range: "-500" means last 500 bytes
    if start_str.is_empty() {
        return parse_suffix_range(end_str, total_size);
    }

    // Standard range: "start-" or "start-end"
    parse_standard_range(start_str, end_str, total_size)
}

/// Parse suffix range (e.g., "-500")
fn parse_suffix_range(suffix_str: &str, total_size: usize) -> RangeParseResult {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    // A zero-byte asset has no satisfiable suffix
    if suffix == 0 || total_size == 0 {
        return RangeParseResult::NotSatisfiable;
    }

    // Suffix larger than the asset is valid, just serve the whole thing
    let start = total_size.saturating_sub(suffix);
    RangeParseResult::Valid(RangeRequest {
        start,
        end: Some(total_size - 1),
    })
}

/// Parse standard range (e.g., "0-99" or "100-")
fn parse_standard_range(start_str: &str, end_str: &str, total_size: usize) -> RangeParseResult {
    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    // Start beyond the asset size is not satisfiable
    if start >= total_size {
        return RangeParseResult::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        None // Open-ended range
    } else {
        let Ok(e) = end_str.parse::<usize>() else {
            return RangeParseResult::None;
        };
        // Clamp end to total_size - 1
        Some(e.min(total_size - 1))
    };

    // Validate: start <= end
    if let Some(e) = end {
        if start > e {
            return RangeParseResult::NotSatisfiable;
        }
    }

    RangeParseResult::Valid(RangeRequest { start, end })
}
