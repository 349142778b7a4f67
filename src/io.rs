//! Board peripherals behind the core library's traits.

use embassy_stm32::gpio::{AnyPin, Level, Output};
use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::peripherals::{DMA1_CH0, DMA1_CH7, I2C1};
use tiltlink::indicator::OutputLine;
use tiltlink::sensor::RegisterBus;
use tiltlink::transmit::PacketSink;

use crate::usb::UsbSerial;

pub type SensorI2c = I2c<'static, I2C1, DMA1_CH7, DMA1_CH0>;

/// I2C1 as seen by the accelerometer driver.
pub struct SensorBus(SensorI2c);

impl SensorBus {
    pub fn new(i2c: SensorI2c) -> Self {
        Self(i2c)
    }
}

impl RegisterBus for SensorBus {
    type Error = I2cError;

    fn write(&mut self, device: u8, bytes: &[u8]) -> Result<(), I2cError> {
        self.0.blocking_write(device, bytes)
    }

    fn write_read(&mut self, device: u8, bytes: &[u8], buf: &mut [u8]) -> Result<(), I2cError> {
        self.0.blocking_write_read(device, bytes, buf)
    }
}

pub struct Led(Output<'static, AnyPin>);

impl Led {
    pub fn new(pin: Output<'static, AnyPin>) -> Self {
        Self(pin)
    }
}

impl OutputLine for Led {
    fn set_level(&mut self, high: bool) {
        self.0.set_level(Level::from(high));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum LinkError {
    /// Host has not opened the port (DTR low).
    NoHost,
    Endpoint,
}

/// CDC-ACM serial as a packet transport.
pub struct UsbPacketSink(UsbSerial<'static>);

impl UsbPacketSink {
    pub fn new(serial: UsbSerial<'static>) -> Self {
        Self(serial)
    }
}

impl PacketSink for UsbPacketSink {
    type Error = LinkError;

    async fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if !self.0.dtr() {
            return Err(LinkError::NoHost);
        }
        self.0
            .write_packet(bytes)
            .await
            .map_err(|_| LinkError::Endpoint)
    }
}
