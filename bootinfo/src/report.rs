use crate::constants::BOOT_ID_SIZE;
use crate::error::{HeaderError, HeaderResult};
use crate::parser::{HeaderV0, HeaderV1, HeaderV2};
use crate::utils::trim_end;
use crate::validate::{
    check_dtb_addr, check_recovery_dtbo_offset, check_second_addr, check_tags_addr, check_unused,
};
use crate::version::{decode_os_version, decode_patch_level};

/// One display line of the header report. `value` is fully formatted;
/// rendering (colors, layout) is up to the consumer. `emphasis` marks the
/// records the original tool highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub label: &'static str,
    pub value: String,
    pub warning: Option<&'static str>,
    pub emphasis: bool,
}

impl FieldRecord {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            warning: None,
            emphasis: false,
        }
    }

    fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }

    fn with_warning(mut self, warning: Option<&'static str>) -> Self {
        self.warning = warning;
        self
    }
}

fn fmt_size(bytes: u32) -> String {
    format!(
        "{} bytes ({:.1} KB / {:.1} MB)",
        bytes,
        bytes as f64 / 1024.0,
        bytes as f64 / 1048576.0
    )
}

fn fmt_addr(addr: u32) -> String {
    format!("0x{addr:x}")
}

fn fmt_addr64(addr: u64) -> String {
    format!("0x{addr:x}")
}

// Bounded ASCII, cut at the first NUL; the format never guarantees
// termination.
fn fmt_text(data: &[u8]) -> String {
    String::from_utf8_lossy(trim_end(data)).into_owned()
}

fn fmt_id(id: &[u32; BOOT_ID_SIZE]) -> String {
    let words: String = id.iter().map(|word| format!("{word:08x}")).collect();
    format!("0x{words}")
}

/// Decode, validate and format the header of the requested version.
///
/// Reports for extending versions are the full report of their base followed
/// by the version's own fields, so a v2 report starts with exactly the v0
/// record list over the embedded base.
pub fn report(version: u32, data: &[u8]) -> HeaderResult<Vec<FieldRecord>> {
    match version {
        0 => Ok(report_v0(&HeaderV0::parse(data)?)),
        1 => Ok(report_v1(&HeaderV1::parse(data)?)),
        2 => Ok(report_v2(&HeaderV2::parse(data)?)),
        other => Err(HeaderError::InvalidVersion(other)),
    }
}

pub fn report_v0(header: &HeaderV0) -> Vec<FieldRecord> {
    vec![
        FieldRecord::new("Product name", fmt_text(&header.name)).emphasized(),
        FieldRecord::new("Magic", fmt_text(&header.magic)),
        FieldRecord::new("ID", fmt_id(&header.id)),
        FieldRecord::new("Unused field", fmt_addr(header.unused))
            .with_warning(check_unused(header.unused)),
        FieldRecord::new(
            "OS version",
            decode_os_version(header.os_version).to_string(),
        )
        .emphasized(),
        FieldRecord::new(
            "Security patch version",
            decode_patch_level(header.os_version).to_string(),
        ),
        FieldRecord::new("Kernel", fmt_addr(header.kernel_addr)).emphasized(),
        FieldRecord::new("Kernel tags", fmt_addr(header.tags_addr))
            .with_warning(check_tags_addr(header.tags_addr)),
        FieldRecord::new("Kernel size", fmt_size(header.kernel_size)),
        FieldRecord::new("Cmdline", fmt_text(&header.cmdline)).emphasized(),
        FieldRecord::new("Extra cmdline", fmt_text(&header.extra_cmdline)),
        FieldRecord::new("Ramdisk", fmt_addr(header.ramdisk_addr)).emphasized(),
        FieldRecord::new("Ramdisk size", fmt_size(header.ramdisk_size)),
        FieldRecord::new("Second", fmt_addr(header.second_addr))
            .emphasized()
            .with_warning(check_second_addr(header.second_size, header.second_addr)),
        FieldRecord::new("Second size", fmt_size(header.second_size)),
        FieldRecord::new("Flash page size", fmt_size(header.page_size)).emphasized(),
    ]
}

pub fn report_v1(header: &HeaderV1) -> Vec<FieldRecord> {
    let mut records = report_v0(&header.base);
    records.push(
        FieldRecord::new("Recovery DTBO size", fmt_size(header.recovery_dtbo_size)).emphasized(),
    );
    records.push(
        FieldRecord::new(
            "Recovery DTBO offset",
            fmt_addr64(header.recovery_dtbo_offset),
        )
        .with_warning(check_recovery_dtbo_offset(
            header.recovery_dtbo_size,
            header.recovery_dtbo_offset,
        )),
    );
    records.push(FieldRecord::new("Header size", fmt_size(header.header_size)).emphasized());
    records
}

pub fn report_v2(header: &HeaderV2) -> Vec<FieldRecord> {
    let mut records = report_v1(&header.base);
    records.push(FieldRecord::new("DTBO image", fmt_size(header.dtb_size)).emphasized());
    records.push(
        FieldRecord::new("DTBO image address", fmt_addr64(header.dtb_addr))
            .with_warning(check_dtb_addr(header.dtb_size, header.dtb_addr)),
    );
    records
}
