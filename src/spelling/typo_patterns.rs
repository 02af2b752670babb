//! Keyboard-aware typo patterns for spelling correction.
//!
//! Substituting a key for one of its physical QWERTY neighbours is a far more
//! common typing error than an arbitrary substitution, so it is charged less.

/// Cost of substituting a character for itself (ignoring case).
pub const SAME_KEY_COST: usize = 0;

/// Cost of substituting a character for a neighbouring key.
pub const NEARBY_KEY_COST: usize = 1;

/// Cost of any other substitution.
pub const DISTANT_KEY_COST: usize = 2;

/// Common typo patterns for keyboard-based errors.
pub struct TypoPatterns;

impl TypoPatterns {
    /// Get the keys surrounding `ch` on a QWERTY keyboard.
    ///
    /// Covers the digit row, letters, `-`, `[`, `;`, `.` and `,`. The table is
    /// not symmetric: `'1'` lists `'q'`, but `'q'` does not list `'1'`.
    pub fn nearby_keys(ch: char) -> &'static str {
        match ch.to_ascii_lowercase() {
            '1' => "q",
            '2' => "qw",
            '3' => "we",
            '4' => "er",
            '5' => "rt",
            '6' => "ty",
            '7' => "yu",
            '8' => "ui",
            '9' => "io",
            '0' => "op",
            '-' => "p",
            'q' => "wsa",
            'w' => "qeasd",
            'e' => "wrsdf",
            'r' => "etdfg",
            't' => "ryfgh",
            'y' => "tughj",
            'u' => "yihjk",
            'i' => "uojkl",
            'o' => "ipkl",
            'p' => "ol",
            '[' => "p",
            'a' => "qwszx",
            's' => "qweadzx",
            'd' => "wersfxc",
            'f' => "ertdgcv",
            'g' => "rtyfhvb",
            'h' => "tyugjbn",
            'j' => "yuihknm",
            'k' => "uiojlm",
            'l' => "iopk",
            ';' => "olp",
            'z' => "asx",
            'x' => "zsdc",
            'c' => "xdfv",
            'v' => "cfgb",
            'b' => "vghn",
            'n' => "bhjm",
            'm' => "njk",
            '.' => "klm",
            ',' => "l",
            _ => "",
        }
    }

    /// Whether `to` is listed as a neighbour of `from`.
    pub fn is_nearby(from: char, to: char) -> bool {
        Self::nearby_keys(from).contains(to.to_ascii_lowercase())
    }

    /// Cost of substituting `from` (a source character) with `to` (a target
    /// character).
    pub fn substitution_cost(from: char, to: char) -> usize {
        if from == to || from.to_lowercase().eq(to.to_lowercase()) {
            SAME_KEY_COST
        } else if Self::is_nearby(from, to) {
            NEARBY_KEY_COST
        } else {
            DISTANT_KEY_COST
        }
    }
}
