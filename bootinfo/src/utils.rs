// Callers check the buffer length against the layout's total size before
// reading, so the accessors themselves are infallible.
pub(crate) trait SliceExt {
    fn u32_at(&self, offset: usize) -> u32;
    fn u64_at(&self, offset: usize) -> u64;
    fn array_at<const N: usize>(&self, offset: usize) -> [u8; N];
}

impl SliceExt for [u8] {
    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes(self[offset..offset + 4].try_into().unwrap())
    }

    fn u64_at(&self, offset: usize) -> u64 {
        u64::from_le_bytes(self[offset..offset + 8].try_into().unwrap())
    }

    fn array_at<const N: usize>(&self, offset: usize) -> [u8; N] {
        self[offset..offset + N].try_into().unwrap()
    }
}

pub(crate) fn trim_end(data: &[u8]) -> &[u8] {
    &data[..data.iter().position(|&b| b == 0).unwrap_or(data.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_end_stops_at_first_nul() {
        assert_eq!(trim_end(b"boot\0img\0"), b"boot");
    }

    #[test]
    fn trim_end_keeps_unterminated_data() {
        assert_eq!(trim_end(b"ANDROID!"), b"ANDROID!");
    }

    #[test]
    fn slice_reads_are_little_endian() {
        let data = [0x5a, 0x01, 0x03, 0x0e, 0xff, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(data.u32_at(0), 0x0e03015a);
        assert_eq!(data.u64_at(4), 0xff);
    }
}
