#![no_main]
#![no_std]

use core::fmt::Write;
use cortex_m_rt::entry;
use panic_write::PanicHandler;
use stm32f4xx_hal as hal;

use crate::hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};

use lowpass::{double_low_pass, int_low_pass, BiasFilter, BiasInit, FilterConfig};

#[entry]
fn main() -> ! {
    if let (Some(dp), Some(_cp)) = (
        pac::Peripherals::take(),
        cortex_m::peripheral::Peripherals::take(),
    ) {
        let gpioa = dp.GPIOA.split();

        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.sysclk(48.MHz()).freeze();

        // Set up uart tx
        let tx_pin = gpioa.pa2.into_alternate();
        let serial = Serial::tx(
            dp.USART2,
            tx_pin,
            Config::default()
                .baudrate(115200.bps())
                .wordlength_8()
                .parity_none(),
            &clocks,
        )
        .unwrap();

        let mut tx = PanicHandler::new(serial);
        writeln!(tx, "lowpass self check\r").unwrap();

        let mut int_bias = 0i16;
        let r = int_low_pass(&mut int_bias, 1024);
        assert_eq!(r, 1023, "\rint residual {r} != expected 1023");
        assert_eq!(int_bias, 1, "\rint bias {int_bias} != expected 1");

        let mut int_bias = 0i16;
        let r = int_low_pass(&mut int_bias, 500);
        assert_eq!(r, 500, "\rint residual {r} != expected 500");
        assert_eq!(int_bias, 0, "\rint bias moved inside the deadband");

        let mut float_bias = 0.0f64;
        let r = double_low_pass(&mut float_bias, 1024.0);
        assert_eq!(r, 1023.0, "\rfloat residual {r} != expected 1023.0");
        assert_eq!(float_bias, 1.0, "\rfloat bias {float_bias} != expected 1.0");

        let mut float_bias = 0.0f64;
        for _ in 0..1024 {
            double_low_pass(&mut float_bias, 2048.0);
        }
        assert!(
            float_bias > 1294.9 && float_bias < 1295.0,
            "\rfloat bias {float_bias} off the closed form"
        );

        let config = FilterConfig::default().with_init(BiasInit::FirstSample);
        let mut filter = BiasFilter::<i16>::new(config);
        let r = filter.update(-1200);
        assert_eq!(r, 0, "\rseeded residual {r} != expected 0");
        assert_eq!(filter.bias(), -1200, "\rfilter did not seed from first sample");

        writeln!(tx, "lowpass filter tests passed\r").unwrap();
        loop {}
    }

    panic!("\rperipheral acquisition failed")
}
