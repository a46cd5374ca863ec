use std::fs;
use std::path::{Path, PathBuf};

use filecmp::{compare, compare_detailed, Verdict};
use proptest::prelude::*;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn chunk_sizes(len: usize) -> [usize; 4] {
    [1, 4096, len.max(1), len + 1]
}

#[test]
fn spec_examples() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a", b"hello");
    let b = write(dir.path(), "b", b"hello");
    let c = write(dir.path(), "c", b"hellO");
    let e1 = write(dir.path(), "e1", b"");
    let e2 = write(dir.path(), "e2", b"");

    assert!(compare(&a, &b, 4096).unwrap());
    assert!(!compare(&a, &c, 4096).unwrap());
    assert!(compare(&e1, &e2, 4096).unwrap());
}

#[test]
fn file_equals_itself_across_chunk_boundaries() {
    let dir = TempDir::new().unwrap();
    // Spans several default-sized chunks and ends mid-chunk.
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let a = write(dir.path(), "a", &data);
    for chunk in [1, 7, 4096, 10_000, 10_001, 1 << 20] {
        assert!(compare(&a, &a, chunk).unwrap(), "chunk {chunk}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identity(data in proptest::collection::vec(any::<u8>(), 0..2048), chunk in 1usize..600) {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a", &data);
        let b = write(dir.path(), "b", &data);
        prop_assert!(compare(&a, &a, chunk).unwrap());
        prop_assert!(compare(&a, &b, chunk).unwrap());
    }

    #[test]
    fn symmetry(
        left in proptest::collection::vec(any::<u8>(), 0..512),
        right in proptest::collection::vec(any::<u8>(), 0..512),
        chunk in 1usize..128,
    ) {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a", &left);
        let b = write(dir.path(), "b", &right);
        prop_assert_eq!(compare(&a, &b, chunk).unwrap(), compare(&b, &a, chunk).unwrap());
        prop_assert_eq!(compare(&a, &b, chunk).unwrap(), left == right);
    }

    #[test]
    fn longer_file_with_same_prefix_differs(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        extra in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let dir = TempDir::new().unwrap();
        let mut longer = data.clone();
        longer.extend_from_slice(&extra);
        let a = write(dir.path(), "a", &data);
        let b = write(dir.path(), "b", &longer);

        let c = compare_detailed(&a, &b, 4096).unwrap();
        prop_assert_eq!(
            c.verdict,
            Verdict::SizeMismatch { left: data.len() as u64, right: longer.len() as u64 }
        );
        prop_assert_eq!(c.bytes_compared, 0);
    }

    #[test]
    fn single_flipped_byte_is_found_with_any_chunk_size(
        data in proptest::collection::vec(any::<u8>(), 1..2048),
        pos in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let at = pos.index(data.len());
        let mut other = data.clone();
        other[at] ^= flip;

        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a", &data);
        let b = write(dir.path(), "b", &other);

        for chunk in chunk_sizes(data.len()) {
            let c = compare_detailed(&a, &b, chunk).unwrap();
            prop_assert_eq!(c.verdict, Verdict::ContentMismatch { offset: at as u64 });
            prop_assert!(!compare(&b, &a, chunk).unwrap());
        }
    }

    #[test]
    fn result_does_not_depend_on_chunk_size(
        left in proptest::collection::vec(0u8..4, 0..700),
        right in proptest::collection::vec(0u8..4, 0..700),
    ) {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a", &left);
        let b = write(dir.path(), "b", &right);

        let expected = compare(&a, &b, 4096).unwrap();
        for chunk in chunk_sizes(left.len()) {
            prop_assert_eq!(compare(&a, &b, chunk).unwrap(), expected);
        }
    }
}
