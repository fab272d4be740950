use paste::paste;

use crate::constants::{
    BOOT_ARGS_SIZE, BOOT_EXTRA_ARGS_SIZE, BOOT_ID_SIZE, BOOT_MAGIC_SIZE, BOOT_NAME_SIZE,
};

macro_rules! field_size {
    (u32) => {
        4
    };
    (u64) => {
        8
    };
    ($sz:expr) => {
        $sz
    };
}

macro_rules! define_layout_offsets {
    ($name:ident $t:tt $(,)?) => {
        paste! {
            pub(crate) const total_size: usize = [<offset_ $name>] + field_size! { $t };
        }
    };
    ($name1:ident $t1:tt, $name2:ident $t2:tt $(,$name:ident $t:tt)* $(,)?) => {
        paste! {
            pub(crate) const [<offset_ $name2>]: usize = [<offset_ $name1>] + field_size! { $t1 };
            define_layout_offsets! { $name2 $t2 $(,$name $t)* }
        }
    };
}

// Field offsets are the running sum of the declared sizes: the on-disk
// layout is packed, with no alignment padding. An extending version starts
// where its base ends.
macro_rules! define_header_layout {
    (
        $mod_name:ident,
        initial_offset $initial_offset:tt,
        structure {$name1:ident $t1:tt $(,$name:ident $t:tt)* $(,)?} $(,)?
    ) => {
        paste! {
            #[allow(non_upper_case_globals, dead_code)]
            pub(crate) mod $mod_name {
                use super::*;
                pub(crate) const [<offset_ $name1>]: usize = $initial_offset;
                define_layout_offsets! { $name1 $t1 $(,$name $t)* }
            }
        }
    };
}

define_header_layout! {
    v0,
    initial_offset 0,
    structure {
        magic BOOT_MAGIC_SIZE,
        kernel_size u32,
        kernel_addr u32,
        ramdisk_size u32,
        ramdisk_addr u32,
        second_size u32,
        second_addr u32,
        tags_addr u32,
        page_size u32,
        unused u32,
        os_version u32,
        name BOOT_NAME_SIZE,
        cmdline BOOT_ARGS_SIZE,
        id (BOOT_ID_SIZE * size_of::<u32>()),
        extra_cmdline BOOT_EXTRA_ARGS_SIZE,
    },
}

define_header_layout! {
    v1,
    initial_offset (v0::total_size),
    structure {
        recovery_dtbo_size u32,
        recovery_dtbo_offset u64,
        header_size u32,
    },
}

define_header_layout! {
    v2,
    initial_offset (v1::total_size),
    structure {
        dtb_size u32,
        dtb_addr u64,
    },
}

pub const HEADER_V0_SIZE: usize = v0::total_size;
pub const HEADER_V1_SIZE: usize = v1::total_size;
pub const HEADER_V2_SIZE: usize = v2::total_size;

/// Buffer size a version's header occupies, `None` for unknown versions.
pub fn total_size(version: u32) -> Option<usize> {
    match version {
        0 => Some(HEADER_V0_SIZE),
        1 => Some(HEADER_V1_SIZE),
        2 => Some(HEADER_V2_SIZE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sizes_match_the_on_disk_format() {
        assert_eq!(HEADER_V0_SIZE, 1632);
        assert_eq!(HEADER_V1_SIZE, 1648);
        assert_eq!(HEADER_V2_SIZE, 1660);
    }

    #[test]
    fn v0_offsets_are_running_sums() {
        assert_eq!(v0::offset_magic, 0);
        assert_eq!(v0::offset_kernel_size, 8);
        assert_eq!(v0::offset_tags_addr, 32);
        assert_eq!(v0::offset_page_size, 36);
        assert_eq!(v0::offset_unused, 40);
        assert_eq!(v0::offset_os_version, 44);
        assert_eq!(v0::offset_name, 48);
        assert_eq!(v0::offset_cmdline, 64);
        assert_eq!(v0::offset_id, 576);
        assert_eq!(v0::offset_extra_cmdline, 608);
    }

    #[test]
    fn extending_versions_start_at_their_base_end() {
        assert_eq!(v1::offset_recovery_dtbo_size, HEADER_V0_SIZE);
        assert_eq!(v1::offset_recovery_dtbo_offset, 1636);
        assert_eq!(v1::offset_header_size, 1644);
        assert_eq!(v2::offset_dtb_size, HEADER_V1_SIZE);
        assert_eq!(v2::offset_dtb_addr, 1652);
    }

    #[test]
    fn unknown_versions_have_no_size() {
        assert_eq!(total_size(2), Some(1660));
        assert_eq!(total_size(3), None);
    }
}
