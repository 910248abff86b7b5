//! Deterministic byte copy.

/// Copies up to `size` bytes from `src` into `dst`, one byte at a time.
///
/// The loop runs in time proportional to `size` and does not call into a
/// bulk-copy routine. An absent source or destination makes this a no-op;
/// reporting that as an error is the caller's job. The copy is clamped to
/// the shorter of the two slices, so it never indexes out of bounds.
///
/// # Examples
///
/// ```
/// use planck_queue::bytes::copy_bytes;
///
/// let src = [1u8, 2, 3, 4];
/// let mut dst = [0u8; 4];
/// copy_bytes(Some(&mut dst), Some(&src), 3);
/// assert_eq!(dst, [1, 2, 3, 0]);
///
/// copy_bytes(None, Some(&src), 4);
/// ```
pub fn copy_bytes(dst: Option<&mut [u8]>, src: Option<&[u8]>, size: u16) {
    let (Some(dst), Some(src)) = (dst, src) else {
        return;
    };

    for (d, s) in dst.iter_mut().zip(src).take(usize::from(size)) {
        *d = *s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_exact_size() {
        let src = [9u8, 8, 7, 6, 5];
        let mut dst = [0u8; 5];
        copy_bytes(Some(&mut dst), Some(&src), 5);
        assert_eq!(dst, src);
    }

    #[test]
    fn absent_pointers_are_noops() {
        let src = [1u8; 4];
        let mut buf = [0u8; 4];
        copy_bytes(None, Some(&src), 4);
        copy_bytes(Some(&mut buf), None, 4);
        copy_bytes(None, None, 4);
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn zero_size_copies_nothing() {
        let src = [1u8; 4];
        let mut dst = [0u8; 4];
        copy_bytes(Some(&mut dst), Some(&src), 0);
        assert_eq!(dst, [0; 4]);
    }

    #[test]
    fn clamps_to_shorter_slice() {
        let src = [1u8, 2];
        let mut dst = [0u8; 4];
        copy_bytes(Some(&mut dst), Some(&src), 4);
        assert_eq!(dst, [1, 2, 0, 0]);

        let src = [5u8; 8];
        let mut dst = [0u8; 3];
        copy_bytes(Some(&mut dst), Some(&src), 8);
        assert_eq!(dst, [5; 3]);
    }
}
