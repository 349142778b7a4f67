//! Register access helpers and the LSM303DLHC accelerometer.

use crate::error::SensorError;

/// LSM303DLHC linear acceleration block.
pub const ACCEL_ADDR: u8 = 0x19;

const CTRL_REG1_A: u8 = 0x20;
const CTRL_REG4_A: u8 = 0x23;
const OUT_X_L_A: u8 = 0x28;
const OUT_Y_L_A: u8 = 0x2A;
const OUT_Z_L_A: u8 = 0x2C;

/// 10 Hz ODR, normal power, X/Y/Z enabled.
const CTRL_REG1_A_VALUE: u8 = 0x27;
/// Block data update, high resolution.
const CTRL_REG4_A_VALUE: u8 = 0x88;

/// Sub-address bit that enables register auto-increment.
const AUTO_INCREMENT: u8 = 0x80;

/// Byte-level register bus (I2C in the firmware).
pub trait RegisterBus {
    type Error;

    fn write(&mut self, device: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    fn write_read(&mut self, device: u8, bytes: &[u8], buf: &mut [u8]) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "firmware", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn register(self) -> u8 {
        match self {
            Axis::X => OUT_X_L_A,
            Axis::Y => OUT_Y_L_A,
            Axis::Z => OUT_Z_L_A,
        }
    }
}

/// Register address to put on the bus for a read of `len` bytes.
///
/// The accelerometer only walks consecutive registers when bit 7 of the
/// sub-address is set.
pub fn sub_address(device: u8, reg: u8, len: usize) -> u8 {
    if len > 1 && device == ACCEL_ADDR {
        reg | AUTO_INCREMENT
    } else {
        reg
    }
}

pub fn write_register<B: RegisterBus>(
    bus: &mut B,
    device: u8,
    reg: u8,
    value: u8,
) -> Result<(), B::Error> {
    bus.write(device, &[reg, value])
}

pub fn read_registers<B: RegisterBus>(
    bus: &mut B,
    device: u8,
    reg: u8,
    buf: &mut [u8],
) -> Result<(), B::Error> {
    let sub = sub_address(device, reg, buf.len());
    bus.write_read(device, &[sub], buf)
}

pub struct Accelerometer<B> {
    bus: B,
}

impl<B: RegisterBus> Accelerometer<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn init(&mut self) -> Result<(), SensorError<B::Error>> {
        write_register(&mut self.bus, ACCEL_ADDR, CTRL_REG1_A, CTRL_REG1_A_VALUE)?;
        write_register(&mut self.bus, ACCEL_ADDR, CTRL_REG4_A, CTRL_REG4_A_VALUE)?;
        Ok(())
    }

    /// Raw left-justified reading of one axis.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, SensorError<B::Error>> {
        let mut raw = [0u8; 2];
        read_registers(&mut self.bus, ACCEL_ADDR, axis.register(), &mut raw)?;
        Ok(i16::from_le_bytes(raw))
    }

    pub fn release(self) -> B {
        self.bus
    }
}
