//! Scarper - Evasive Alarm Clock Robot Firmware
//!
//! Main firmware binary for the RP2040-based desk robot. Shows the wall
//! clock on a 20x4 character LCD, takes clock and alarm edits from a
//! three-button pad, and when the alarm fires drives off the moment a
//! hand gets within reach of the ultrasonic ranger.
//!
//! # Board wiring
//!
//! | Device            | Pins                          |
//! |-------------------|-------------------------------|
//! | I2C0 (LCD + RTC)  | SCL 17, SDA 16                |
//! | LCD expander      | address 0x27                  |
//! | Buttons           | 2 select, 3 down, 4 up        |
//! | Left motor        | EN 13 (PWM6B), IN 12/11       |
//! | Right motor       | EN 18 (PWM1A), IN 19/20       |
//! | Buzzer            | 22 (PWM3A)                    |
//! | Ultrasonic ranger | TRIG 15, ECHO 14              |

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use scarper_core::controller::{AlarmController, ControlError, Robot};
use scarper_core::traits::CharacterDisplay;
use scarper_drivers::buttons::ButtonPad;
use scarper_drivers::buzzer::PwmBuzzer;
use scarper_drivers::display::{self, ExpanderBus, Geometry, Hd44780};
use scarper_drivers::motor::HBridge;
use scarper_drivers::rtc::Ds1307;
use scarper_drivers::ultrasonic::HcSr04;
use scarper_hal::I2cConfig;
use scarper_hal_rp2040::{i2c, InPin, OutPin, PwmOutput, SystemClock};

/// Pause between control loop iterations
const TICK_INTERVAL_MS: u64 = 10;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Scarper firmware starting...");

    let p = embassy_rp::init(Default::default());

    // One blocking I2C bus carries both the LCD expander and the RTC
    let i2c_bus = RefCell::new(I2c::new_blocking(
        p.I2C0,
        p.PIN_17,
        p.PIN_16,
        i2c::config(I2cConfig::STANDARD),
    ));

    let lcd_bus = ExpanderBus::new(
        i2c::SharedI2c::new(&i2c_bus),
        display::i2c::DEFAULT_ADDRESS,
        Delay,
    );
    let lcd = Hd44780::new(lcd_bus, Geometry::Cols20Rows4, Delay);
    let rtc = Ds1307::new(i2c::SharedI2c::new(&i2c_bus));

    let buttons = ButtonPad::new(
        [
            InPin::new(Input::new(p.PIN_2, Pull::Down)),
            InPin::new(Input::new(p.PIN_3, Pull::Down)),
            InPin::new(Input::new(p.PIN_4, Pull::Down)),
        ],
        Delay,
    );

    let left_motor = HBridge::new(
        OutPin::new(Output::new(p.PIN_12, Level::Low)),
        OutPin::new(Output::new(p.PIN_11, Level::Low)),
        PwmOutput::new_b(Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, PwmConfig::default())),
    );
    let right_motor = HBridge::new(
        OutPin::new(Output::new(p.PIN_19, Level::Low)),
        OutPin::new(Output::new(p.PIN_20, Level::Low)),
        PwmOutput::new_a(Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, PwmConfig::default())),
    );
    let buzzer = PwmBuzzer::new(PwmOutput::new_a(Pwm::new_output_a(
        p.PWM_SLICE3,
        p.PIN_22,
        PwmConfig::default(),
    )));

    let ranger = HcSr04::new(
        OutPin::new(Output::new(p.PIN_15, Level::Low)),
        InPin::new(Input::new(p.PIN_14, Pull::None)),
        SystemClock,
        Delay,
    );

    let mut robot = Robot {
        display: lcd,
        buttons,
        rtc,
        ranger,
        left_motor,
        right_motor,
        buzzer,
        delay: Delay,
    };

    if let Err(err) = robot.display.init() {
        error!("LCD init failed: {}", err);
        defmt::panic!("display unreachable");
    }
    info!("Hardware initialized");

    let mut controller = AlarmController::new();
    loop {
        // Bus failures have no recovery path; log and reset via panic
        if let Err(err) = controller.tick(&mut robot) {
            match err {
                ControlError::Display(e) => error!("display bus failure: {}", e),
                ControlError::Rtc(e) => error!("RTC bus failure: {}", e),
            }
            defmt::panic!("i2c bus failure");
        }
        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}
