//! Extraction of platform handles from free-form profile links.

use crate::platform::Platform;

/// Path component that precedes the handle in LeetCode's `/u/<handle>` URLs.
const LEETCODE_USER_MARKER: &str = "u";

/// Resolve a platform handle from a profile URL or bare handle.
///
/// Whitespace and trailing slashes are trimmed first. Input without any `/`
/// or `.` is treated as an already-bare handle. Otherwise the input is split
/// on `/` and the platform-specific segment is chosen: the segment after a
/// literal `u` component for LeetCode, the last segment everywhere else.
///
/// Returns `None` for empty input and for a LeetCode link whose `u`
/// component is not followed by a handle. When no other usable segment can
/// be selected, the trimmed input is returned unchanged.
#[must_use]
pub fn resolve_handle(raw: &str, platform: Platform) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains('/') && !trimmed.contains('.') {
        return Some(trimmed.to_string());
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    let last = parts.last().copied();
    let segment = match platform {
        Platform::Github => last
            .filter(|s| !s.is_empty())
            .or_else(|| parts.iter().rev().nth(1).copied()),
        Platform::Leetcode => {
            match parts.iter().position(|p| *p == LEETCODE_USER_MARKER) {
                // A marker with nothing usable after it names no user.
                Some(i) => {
                    return parts
                        .get(i + 1)
                        .filter(|s| !s.is_empty())
                        .map(|s| (*s).to_string());
                }
                None => last,
            }
        }
        Platform::Codeforces | Platform::Codechef | Platform::Hackerrank | Platform::Gfg => last,
    };

    match segment.filter(|s| !s.is_empty()) {
        Some(handle) => Some(handle.to_string()),
        None => Some(trimmed.to_string()),
    }
}
