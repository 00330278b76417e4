// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels.

extern crate alloc;

use alloc::string::String;

/// Formats an integer with `,` thousands separators (`14100` becomes `"14,100"`).
pub fn group_thousands(value: u64) -> String {
    let digits = alloc::format!("{value}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(894), "894");
        assert_eq!(group_thousands(6_600), "6,600");
        assert_eq!(group_thousands(14_500), "14,500");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
