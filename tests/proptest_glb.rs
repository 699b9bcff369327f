//! Property-based tests for container framing
//!
//! Random corruption of any single header field must always fail before any
//! chunk is read, and well-formed containers must always decode regardless
//! of payload contents.

mod common;

use common::{glb, glb_with};
use libglb::{Error, GlbFile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn corrupted_magic_always_fails(magic in any::<u32>()) {
        prop_assume!(magic != common::MAGIC);
        let mut data = glb("{}");
        data[0..4].copy_from_slice(&magic.to_le_bytes());
        prop_assert!(matches!(
            GlbFile::from_slice(&data),
            Err(Error::InvalidContainer(_))
        ));
    }

    #[test]
    fn corrupted_version_always_fails(version in any::<u32>()) {
        prop_assume!(version != common::VERSION);
        let mut data = glb("{}");
        data[4..8].copy_from_slice(&version.to_le_bytes());
        prop_assert!(matches!(
            GlbFile::from_slice(&data),
            Err(Error::InvalidContainer(_))
        ));
    }

    #[test]
    fn corrupted_length_always_fails(length in any::<u32>()) {
        let mut data = glb("{}");
        prop_assume!(length as usize != data.len());
        data[8..12].copy_from_slice(&length.to_le_bytes());
        prop_assert!(matches!(
            GlbFile::from_slice(&data),
            Err(Error::InvalidContainer(_))
        ));
    }

    #[test]
    fn arbitrary_bin_payload_round_trips(payload in prop::collection::vec(any::<u8>(), 0..512)) {
        let data = glb_with("{}", &payload);
        let file = GlbFile::from_slice(&data).unwrap();
        prop_assert_eq!(file.bin_bytes(), payload.as_slice());
    }

    #[test]
    fn truncation_never_reads_past_the_end(cut in 0usize..30) {
        // Any prefix of a valid container is itself invalid, because the
        // declared length no longer matches.
        let data = glb_with("{}", b"12345678");
        prop_assume!(cut < data.len());
        let truncated = &data[..data.len() - cut - 1];
        prop_assert!(GlbFile::from_slice(truncated).is_err());
    }
}
