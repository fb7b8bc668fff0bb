//! Reader for the build-info blob the Go linker embeds in every binary.
//!
//! Layout (Go 1.18+): a 16-byte-aligned 32-byte header starting with
//! `\xff Go buildinf:`, pointer size at byte 14, flags at byte 15. With the
//! inline flag set, two uvarint-prefixed strings follow: the toolchain
//! version and the module info text. Older binaries store pointers instead
//! and are reported as unreadable.

use godev_core::domain::BuildInfo;

const MAGIC: &[u8] = b"\xff Go buildinf:";
const HEADER_LEN: usize = 32;
const FLAG_VERSION_INLINE: u8 = 0x2;

/// Extract build info from the raw bytes of an executable.
///
/// Every occurrence of the magic is tried, aligned ones first, since the
/// same bytes can also appear in unrelated data.
pub fn parse_build_info(data: &[u8]) -> Option<BuildInfo> {
    let found_at = |i: &usize| data[*i..].starts_with(MAGIC);
    let aligned = (0..data.len()).step_by(16).filter(found_at);
    let unaligned = (0..data.len()).filter(|i| i % 16 != 0).filter(found_at);
    aligned
        .chain(unaligned)
        .find_map(|start| parse_header_at(data, start))
}

fn parse_header_at(data: &[u8], start: usize) -> Option<BuildInfo> {
    let header = data.get(start..start + HEADER_LEN)?;
    if header[15] & FLAG_VERSION_INLINE == 0 {
        return None;
    }

    let rest = &data[start + HEADER_LEN..];
    let (go_version, rest) = read_string(rest)?;
    let (module_info, _) = read_string(rest)?;

    if go_version.is_empty() {
        return None;
    }

    Some(BuildInfo {
        go_version: go_version.to_owned(),
        main_version: main_module_version(strip_sentinels(module_info))
            .unwrap_or("unknown")
            .to_owned(),
    })
}

fn read_uvarint(data: &[u8]) -> Option<(u64, &[u8])> {
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate().take(10) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, &data[i + 1..]));
        }
    }
    None
}

fn read_string(data: &[u8]) -> Option<(&str, &[u8])> {
    let (len, rest) = read_uvarint(data)?;
    let len = usize::try_from(len).ok()?;
    let bytes = rest.get(..len)?;
    Some((std::str::from_utf8(bytes).ok()?, &rest[len..]))
}

/// Module info is wrapped in two 16-byte sentinels.
fn strip_sentinels(info: &str) -> &str {
    let bytes = info.as_bytes();
    if bytes.len() >= 33 && bytes[bytes.len() - 17] == b'\n' {
        info.get(16..info.len() - 16).unwrap_or(info)
    } else {
        info
    }
}

/// `mod\t<path>\t<version>\t<sum>` → `<version>`
fn main_module_version(info: &str) -> Option<&str> {
    info.lines()
        .find_map(|line| line.strip_prefix("mod\t"))
        .and_then(|rest| rest.split('\t').nth(1))
        .filter(|v| !v.is_empty())
}
