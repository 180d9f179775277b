//! ST7789 display driver: 320×170 LCD over SPI with DMA.

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};
use mipidsi::options::{
    ColorInversion,
    Orientation,
    Rotation,
};

use crate::{
    DisplayResources,
    screen,
};

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge's ST7789 panel, an `embedded-graphics` draw target.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

/// DMA and mipidsi command buffer size. A full frame is split into chunks of
/// this many bytes.
const TRANSFER_BYTES: usize = 32000;

/// The panel's columns are offset by this much inside the ST7789's 240-wide RAM.
const COLUMN_OFFSET: u16 = 35;

const SPI_FREQUENCY_MHZ: u32 = 80;

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(TRANSFER_BYTES);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default()
                .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; TRANSFER_BYTES], [0_u8; TRANSFER_BYTES]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        // Native orientation is portrait 170×320; rotate into landscape.
        mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(screen::HEIGHT as u16, screen::WIDTH as u16)
            .invert_colors(ColorInversion::Inverted)
            .orientation(Orientation::new().rotate(Rotation::Deg90))
            .display_offset(COLUMN_OFFSET, 0)
            .init(&mut delay)
            .unwrap()
    }
}
