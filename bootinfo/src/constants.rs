pub const BOOT_MAGIC_SIZE: usize = 8;
pub const BOOT_NAME_SIZE: usize = 16;
pub const BOOT_ARGS_SIZE: usize = 512;
pub const BOOT_EXTRA_ARGS_SIZE: usize = 1024;
// number of 32-bit words in the id field
pub const BOOT_ID_SIZE: usize = 8;

pub const BOOT_MAGIC: &[u8] = b"ANDROID!";
