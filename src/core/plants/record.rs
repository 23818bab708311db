//! Plant record format for EEPROM storage
//!
//! This module defines the binary layout of one plant slot. Every slot has the
//! same width, and slot `i` starts at byte `i * RECORD_WIDTH`.
//!
//! ```text
//! offset  size  field
//!      0   128  name (UTF-8, NUL padded)
//!    128     1  validity flag (0 = empty)
//!    129     3  reserved (zero)
//!    132     4  first_registered (u32 LE, epoch seconds)
//!    136     4  last_watered     (u32 LE, epoch seconds)
//!    140     4  interval_secs    (u32 LE)
//!    144     4  CRC32 over bytes 0..144 (u32 LE)
//! ```

use crc::{Crc, CRC_32_ISO_HDLC};

use super::plant::{Plant, PlantName};
use super::MAX_PLANTS;

/// Maximum name length in bytes
pub const NAME_LEN: usize = 128;

/// Offset of the name field
pub const OFFSET_NAME: usize = 0;
/// Offset of the validity flag
pub const OFFSET_IS_VALID: usize = OFFSET_NAME + NAME_LEN;
/// Offset of the first-registered timestamp
pub const OFFSET_FIRST_REGISTERED: usize = OFFSET_IS_VALID + 4;
/// Offset of the last-watered timestamp
pub const OFFSET_LAST_WATERED: usize = OFFSET_FIRST_REGISTERED + 4;
/// Offset of the watering interval
pub const OFFSET_INTERVAL: usize = OFFSET_LAST_WATERED + 4;
/// Offset of the record checksum
pub const OFFSET_CRC: usize = OFFSET_INTERVAL + 4;

/// Total width of one record in bytes
pub const RECORD_WIDTH: usize = OFFSET_CRC + 4;

/// Bytes needed to hold every slot
pub const STORE_SIZE: usize = MAX_PLANTS * RECORD_WIDTH;

/// Flag value written for occupied slots
const VALID_MARKER: u8 = 1;

/// Record checksum (CRC-32/ISO-HDLC, as used by zip and Ethernet)
const RECORD_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Store offset of the record for `slot`
pub const fn slot_offset(slot: usize) -> u32 {
    (slot * RECORD_WIDTH) as u32
}

/// Store offset of the validity flag for `slot`
pub const fn validity_offset(slot: usize) -> u32 {
    (slot * RECORD_WIDTH + OFFSET_IS_VALID) as u32
}

/// Decoded plant record
///
/// Mirrors the on-medium fields one to one. `crc` is the stored checksum, and
/// may disagree with the content if the record is corrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRecord {
    /// Plant name
    pub name: PlantName,
    /// Raw validity flag
    pub is_valid: u8,
    /// Creation time (epoch seconds)
    pub first_registered: u32,
    /// Last watering time (epoch seconds)
    pub last_watered: u32,
    /// Watering cadence in seconds
    pub interval_secs: u32,
    /// Stored checksum
    pub crc: u32,
    /// Checksum of the bytes the record was decoded from
    computed_crc: u32,
}

impl PlantRecord {
    /// Byte image of an empty (deleted) slot
    pub const EMPTY: [u8; RECORD_WIDTH] = [0u8; RECORD_WIDTH];

    /// Serialize a plant into its fixed-width record
    ///
    /// The name is truncated to [`NAME_LEN`] bytes and NUL padded; the validity
    /// flag is always set.
    pub fn encode(plant: &Plant) -> [u8; RECORD_WIDTH] {
        let mut buf = [0u8; RECORD_WIDTH];

        let name = plant.name.as_bytes();
        let name_len = name.len().min(NAME_LEN);
        buf[OFFSET_NAME..OFFSET_NAME + name_len].copy_from_slice(&name[..name_len]);

        buf[OFFSET_IS_VALID] = VALID_MARKER;
        buf[OFFSET_FIRST_REGISTERED..OFFSET_FIRST_REGISTERED + 4]
            .copy_from_slice(&plant.first_registered.to_le_bytes());
        buf[OFFSET_LAST_WATERED..OFFSET_LAST_WATERED + 4]
            .copy_from_slice(&plant.last_watered.to_le_bytes());
        buf[OFFSET_INTERVAL..OFFSET_INTERVAL + 4]
            .copy_from_slice(&plant.interval_secs.to_le_bytes());

        let crc = checksum(&buf);
        buf[OFFSET_CRC..RECORD_WIDTH].copy_from_slice(&crc.to_le_bytes());

        buf
    }

    /// Deserialize a record
    ///
    /// Returns `None` only if `buf` is shorter than [`RECORD_WIDTH`]. The name
    /// ends at the first NUL byte; a trailing invalid UTF-8 sequence is dropped.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < RECORD_WIDTH {
            return None;
        }

        let raw_name = &buf[OFFSET_NAME..OFFSET_NAME + NAME_LEN];
        let name_len = raw_name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let name_str = match core::str::from_utf8(&raw_name[..name_len]) {
            Ok(s) => s,
            Err(e) => {
                // Prefix up to the error is valid UTF-8 by definition
                core::str::from_utf8(&raw_name[..e.valid_up_to()]).unwrap_or("")
            }
        };
        let mut name = PlantName::new();
        let _ = name.push_str(name_str);

        Some(Self {
            name,
            is_valid: buf[OFFSET_IS_VALID],
            first_registered: read_u32(buf, OFFSET_FIRST_REGISTERED),
            last_watered: read_u32(buf, OFFSET_LAST_WATERED),
            interval_secs: read_u32(buf, OFFSET_INTERVAL),
            crc: read_u32(buf, OFFSET_CRC),
            computed_crc: checksum(buf),
        })
    }

    /// True if the slot is marked occupied
    pub fn is_valid(&self) -> bool {
        self.is_valid != 0
    }

    /// True if the stored checksum matches the record content
    pub fn checksum_ok(&self) -> bool {
        self.crc == self.computed_crc
    }

    /// Materialize the in-memory entity for `slot`
    pub fn into_plant(self, slot: usize) -> Plant {
        Plant {
            slot,
            name: self.name,
            first_registered: self.first_registered,
            last_watered: self.last_watered,
            interval_secs: self.interval_secs,
        }
    }
}

/// Checksum over everything in front of the CRC field
fn checksum(buf: &[u8]) -> u32 {
    RECORD_CRC.checksum(&buf[..OFFSET_CRC])
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Plant {
        Plant::new(3, "Sansevieria", 1_637_611_741, 814_210)
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(OFFSET_IS_VALID, 128);
        assert_eq!(OFFSET_FIRST_REGISTERED, 132);
        assert_eq!(OFFSET_LAST_WATERED, 136);
        assert_eq!(OFFSET_INTERVAL, 140);
        assert_eq!(RECORD_WIDTH, 148);
        assert_eq!(STORE_SIZE, 8 * 148);
        assert_eq!(slot_offset(2), 296);
        assert_eq!(validity_offset(1), 148 + 128);
    }

    #[test]
    fn test_encode_decode_preserves_fields() {
        let mut plant = sample();
        plant.last_watered = 1_637_700_000;

        let bytes = PlantRecord::encode(&plant);
        let record = PlantRecord::decode(&bytes).unwrap();

        assert!(record.is_valid());
        assert!(record.checksum_ok());
        assert_eq!(record.clone().into_plant(3), plant);
        assert_eq!(record.first_registered, 1_637_611_741);
        assert_eq!(record.last_watered, 1_637_700_000);
        assert_eq!(record.interval_secs, 814_210);
    }

    #[test]
    fn test_encode_layout_is_little_endian() {
        let plant = Plant::new(0, "A", 0x0102_0304, 0x0A0B_0C0D);
        let bytes = PlantRecord::encode(&plant);

        assert_eq!(bytes[0], b'A');
        assert!(bytes[1..NAME_LEN].iter().all(|&b| b == 0));
        assert_eq!(bytes[OFFSET_IS_VALID], 1);
        assert_eq!(&bytes[OFFSET_IS_VALID + 1..OFFSET_FIRST_REGISTERED], &[0, 0, 0]);
        assert_eq!(
            &bytes[OFFSET_FIRST_REGISTERED..OFFSET_FIRST_REGISTERED + 4],
            &[0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            &bytes[OFFSET_INTERVAL..OFFSET_INTERVAL + 4],
            &[0x0D, 0x0C, 0x0B, 0x0A]
        );
        assert!(PlantRecord::decode(&bytes).unwrap().checksum_ok());
    }

    #[test]
    fn test_full_length_name_has_no_terminator() {
        let long = "n".repeat(300);
        let plant = Plant::new(0, &long, 10, 20);
        let bytes = PlantRecord::encode(&plant);

        let record = PlantRecord::decode(&bytes).unwrap();
        assert_eq!(record.name.len(), NAME_LEN);
        assert_eq!(record.interval_secs, 20);
    }

    #[test]
    fn test_empty_record_is_invalid() {
        let record = PlantRecord::decode(&PlantRecord::EMPTY).unwrap();
        assert!(!record.is_valid());
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_decode_short_buffer() {
        assert!(PlantRecord::decode(&[0u8; RECORD_WIDTH - 1]).is_none());
    }

    #[test]
    fn test_decode_detects_corruption() {
        let mut bytes = PlantRecord::encode(&sample());
        bytes[OFFSET_LAST_WATERED] ^= 0xFF;

        let record = PlantRecord::decode(&bytes).unwrap();
        assert!(record.is_valid());
        assert!(!record.checksum_ok());
    }

    #[test]
    fn test_decode_drops_invalid_utf8_tail() {
        let mut bytes = PlantRecord::encode(&Plant::new(0, "Aloe", 1, 2));
        bytes[4] = 0xC3; // lead byte without continuation

        let record = PlantRecord::decode(&bytes).unwrap();
        assert_eq!(record.name.as_str(), "Aloe");
    }

    #[test]
    fn test_checksum_matches_iso_hdlc() {
        let plant = Plant::new(0, "Basil", 7, 86_400);
        let bytes = PlantRecord::encode(&plant);

        let stored = PlantRecord::decode(&bytes).unwrap().crc;
        assert_eq!(stored, RECORD_CRC.checksum(&bytes[..OFFSET_CRC]));
        assert_eq!(RECORD_CRC.checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_name_with_nul_survives_store() {
        let plant = Plant::new(0, "Aloe\0vera", 1, 2);
        assert_eq!(plant.name.as_str(), "Aloe");

        let record = PlantRecord::decode(&PlantRecord::encode(&plant)).unwrap();
        assert_eq!(record.into_plant(0), plant);
    }
}
