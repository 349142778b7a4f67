//! Direction packet sent to the host.
//!
//! Two 16-bit words, header first. On the wire the words are little-endian,
//! which is the Cortex-M native layout; the host unpacks them as `<HH`.

/// Marks the start of every packet.
pub const HEADER: u16 = 0xAAAB;
/// Encoded size of a packet.
pub const PACKET_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub const fn code(self) -> u16 {
        match self {
            Direction::Forward => 0xCCCF,
            Direction::Reverse => 0xFFFC,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub struct Packet {
    direction: Direction,
}

impl Packet {
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub const fn header(&self) -> u16 {
        HEADER
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn words(&self) -> [u16; 2] {
        [HEADER, self.direction.code()]
    }

    /// Packs both words into one 32-bit value, header in the low half.
    pub const fn to_word(&self) -> u32 {
        (HEADER as u32) | ((self.direction.code() as u32) << 16)
    }

    pub const fn to_bytes(&self) -> [u8; PACKET_LEN] {
        self.to_word().to_le_bytes()
    }
}
