//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for shortening Solana wallet addresses for display:
//! - [`format_address`] - Keep the first N and last M characters around an ellipsis
//! - [`display_address`] - The `first6...last4` form shown on the connect button
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! ```

/// Number of leading characters kept by [`display_address`].
pub const DISPLAY_PREFIX_LEN: usize = 6;

/// Number of trailing characters kept by [`display_address`].
pub const DISPLAY_SUFFIX_LEN: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
/// Counting is done in characters, so a non-ASCII string never splits inside a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an address to `first6...last4` for the header button.
///
/// ```rust
/// use shared::utils::display_address;
///
/// assert_eq!(display_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Qgi...JKAL");
/// ```
pub fn display_address(address: &str) -> String {
    format_address(address, DISPLAY_PREFIX_LEN, DISPLAY_SUFFIX_LEN)
}
