/// Prefixes that make up the published dataset. Edit here to regenerate with
/// different ranges; the blocks must stay disjoint because merging does not
/// deduplicate.
pub const DATASET_PREFIXES: [i64; 2] = [37, 49];

/// Number of codes in one prefix block.
pub const BLOCK_SIZE: i64 = 1000;

/// Returns the 1000 zero-padded five-digit codes for `prefix` in ascending
/// order, covering `prefix * 1000` through `prefix * 1000 + 999`.
///
/// No validation is performed on the prefix. A prefix above 99 yields codes
/// longer than five digits and they are emitted as-is, without truncation.
pub fn generate_codes(prefix: i64) -> Vec<String> {
    let start = prefix * BLOCK_SIZE;
    (start..start + BLOCK_SIZE)
        .map(|code| format!("{:05}", code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_has_exactly_1000_codes() {
        assert_eq!(generate_codes(37).len(), 1000);
    }

    #[test]
    fn block_covers_prefix_range_in_order() {
        let codes = generate_codes(37);
        assert_eq!(codes.first().unwrap(), "37000");
        assert_eq!(codes.last().unwrap(), "37999");
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(code, &format!("{:05}", 37_000 + i as i64));
        }
    }

    #[test]
    fn second_dataset_block_covers_its_range() {
        let codes = generate_codes(49);
        assert_eq!(codes.first().unwrap(), "49000");
        assert_eq!(codes.last().unwrap(), "49999");
    }

    #[test]
    fn small_prefix_zero_pads_to_five_digits() {
        let codes = generate_codes(0);
        assert_eq!(codes.first().unwrap(), "00000");
        assert_eq!(codes.last().unwrap(), "00999");
        assert!(codes.iter().all(|c| c.len() == 5));
    }

    #[test]
    fn oversized_prefix_is_not_clamped() {
        let codes = generate_codes(100);
        assert_eq!(codes.first().unwrap(), "100000");
        assert_eq!(codes.last().unwrap(), "100999");
        assert!(codes.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn dataset_blocks_merge_sorted_without_duplicates() {
        let mut merged: Vec<String> = generate_codes(49)
            .into_iter()
            .chain(generate_codes(37))
            .collect();
        merged.sort();
        assert_eq!(merged.len(), 2000);
        assert_eq!(merged.first().unwrap(), "37000");
        assert_eq!(merged.last().unwrap(), "49999");
        merged.dedup();
        assert_eq!(merged.len(), 2000);
    }
}
