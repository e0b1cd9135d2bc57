//! Shared helpers for benchmark drivers.

pub const BENCH_SIZES: [usize; 5] = [1 << 10, 1 << 14, 1 << 16, 1 << 20, 1 << 22];
pub const BENCH_SHIFTS: [usize; 5] = [0, 1, 1200, usize::MAX / 3, usize::MAX];
pub const BENCH_LEN: usize = 1 << 16;

pub fn create_test_sequence(len: usize) -> Vec<u64> {
    (0..len as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

pub fn shift_to_string(shift: usize) -> String {
    match shift {
        usize::MAX => "MAX".to_string(),
        s if s == usize::MAX / 3 => "MAX_DIV_3".to_string(),
        s => s.to_string(),
    }
}
