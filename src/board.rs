//! Peripheral bring-up for the nRF52840 and the board-side implementations
//! of the [`hal`](crate::hal) traits.
//!
//! Called once from `main` before the render loop and the edge task start.
//! Any failing step is fatal.

use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin as _, Pull};
use embassy_nrf::peripherals::{PWM0, TWISPI0};
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_nrf::saadc::{self, ChannelConfig, Resolution, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, Peripherals};

use crate::config::{ADC_MAX, DISPLAY_I2C_KHZ, PWM_CLOCK_DIVIDER, PWM_PERIOD};
use crate::board_logic::{duty_for, prescaler_divider, twim_khz};
use crate::display::panel::{self, Display};
use crate::error::Error;
use crate::hal::{AdcChannel, AxisAdc, LedPwm};
use crate::joystick::Brightness;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<TWISPI0>;
});

/// PWM output channel of the red LED (driven by the X axis).
const PWM_CH_RED: usize = 0;
/// PWM output channel of the blue LED (driven by the Y axis).
const PWM_CH_BLUE: usize = 1;

/// Everything `main` hands to the render loop and the edge task.
pub struct Board {
    pub axes: SaadcAxes,
    pub leds: LedPair,
    pub display: Display<Twim<'static, TWISPI0>>,
    pub mode_select: Input<'static>,
    pub action_button: Input<'static>,
    pub status_led: Output<'static>,
}

/// Bring up every peripheral, in wiring order.
pub async fn init(p: Peripherals) -> Result<Board, Error> {
    // I²C for the display.
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim_frequency(DISPLAY_I2C_KHZ);
    i2c_config.sda_pullup = true;
    i2c_config.scl_pullup = true;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    info!("Board: I2C up");

    // Joystick axes and push switch.
    let axes = SaadcAxes::new(p.SAADC, p.P0_03, p.P0_04).await;
    let mode_select = Input::new(p.P0_11.degrade(), Pull::Up);
    info!("Board: joystick up");

    // Red and blue LEDs on PWM.
    let leds = LedPair::new(p.PWM0, p.P1_10, p.P1_12);
    info!("Board: PWM up");

    // Button A and the green status LED.
    let action_button = Input::new(p.P0_12.degrade(), Pull::Up);
    let status_led = Output::new(p.P1_11.degrade(), Level::Low, OutputDrive::Standard);

    let display = panel::init(i2c)?;
    info!("Board: display up");

    Ok(Board {
        axes,
        leds,
        display,
        mode_select,
        action_button,
        status_led,
    })
}

/// Two-channel SAADC behind the select-then-read interface.
///
/// The SAADC converts all configured channels in one shot, so `read`
/// samples both and returns the selected one.
pub struct SaadcAxes {
    saadc: Saadc<'static, 2>,
    selected: usize,
}

impl SaadcAxes {
    async fn new(
        saadc: embassy_nrf::peripherals::SAADC,
        vry: embassy_nrf::peripherals::P0_03,
        vrx: embassy_nrf::peripherals::P0_04,
    ) -> Self {
        let mut config = saadc::Config::default();
        config.resolution = Resolution::_12BIT;

        // Array position is the channel index: Y on 0, X on 1.
        let channels = [ChannelConfig::single_ended(vry), ChannelConfig::single_ended(vrx)];

        let saadc = Saadc::new(saadc, Irqs, config, channels);
        saadc.calibrate().await;

        Self { saadc, selected: 0 }
    }
}

impl AxisAdc for SaadcAxes {
    fn select(&mut self, channel: AdcChannel) {
        self.selected = usize::from(channel.0).min(1);
    }

    async fn read(&mut self) -> u16 {
        let mut buf = [0i16; 2];
        self.saadc.sample(&mut buf).await;
        // Single-ended conversions can dip slightly below zero.
        buf[self.selected].clamp(0, ADC_MAX as i16) as u16
    }
}

/// Red and blue LEDs on two channels of one PWM instance.
pub struct LedPair {
    pwm: SimplePwm<'static, PWM0>,
}

impl LedPair {
    fn new(
        pwm: PWM0,
        red: embassy_nrf::peripherals::P1_10,
        blue: embassy_nrf::peripherals::P1_12,
    ) -> Self {
        let mut pwm = SimplePwm::new_2ch(pwm, red, blue);
        pwm.set_prescaler(prescaler(prescaler_divider(PWM_CLOCK_DIVIDER)));
        pwm.set_max_duty(PWM_PERIOD);
        pwm.set_duty(PWM_CH_RED, duty_for(0));
        pwm.set_duty(PWM_CH_BLUE, duty_for(0));
        Self { pwm }
    }
}

impl LedPwm for LedPair {
    fn set_levels(&mut self, levels: Brightness) {
        self.pwm.set_duty(PWM_CH_RED, duty_for(levels.red));
        self.pwm.set_duty(PWM_CH_BLUE, duty_for(levels.blue));
    }
}

/// Hardware prescaler for a divider already rounded by
/// [`prescaler_divider`].
fn prescaler(divider: u8) -> Prescaler {
    match divider {
        1 => Prescaler::Div1,
        2 => Prescaler::Div2,
        4 => Prescaler::Div4,
        8 => Prescaler::Div8,
        16 => Prescaler::Div16,
        32 => Prescaler::Div32,
        64 => Prescaler::Div64,
        _ => Prescaler::Div128,
    }
}

fn twim_frequency(khz: u32) -> twim::Frequency {
    match twim_khz(khz) {
        100 => twim::Frequency::K100,
        250 => twim::Frequency::K250,
        _ => twim::Frequency::K400,
    }
}
