#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive},
    peripherals,
    uarte::{self, Uarte},
};
use {defmt_rtt as _, panic_halt as _};

use hc05_configurator::board::{self, TimerDelay, UarteLink};
use hc05_configurator::{engage_key_pin, Configurator, ConfiguratorConfig};

// Defmt timestamp provider using embassy-time
defmt::timestamp!("{=u64:us}", { embassy_time::Instant::now().as_micros() });

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    UARTE1 => uarte::InterruptHandler<peripherals::UARTE1>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("HC-05 configurator starting");
    let p = embassy_nrf::init(Default::default());
    let config = ConfiguratorConfig::default();
    unwrap!(config.validate());

    // KEY pin (P0.03) high before anything talks to the module
    let mut key_pin = Output::new(p.P0_03, Level::Low, OutputDrive::Standard);
    unwrap!(engage_key_pin(&mut key_pin));

    // LED1 (P0.13) flashes while commands go out to the module
    let module_tx_led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);

    // Operator terminal on the J-Link virtual COM port
    let operator_uart_config = unwrap!(board::uart_config(config.operator_baud_rate));
    let operator_uarte = Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, operator_uart_config);
    let (operator_tx, operator_rx) = operator_uarte.split();

    // HC-05 on UARTE1 at its command mode rate
    let module_uart_config = unwrap!(board::uart_config(config.module_baud_rate));
    let module_uarte = Uarte::new(p.UARTE1, Irqs, p.P1_14, p.P1_15, module_uart_config);
    let (module_tx, module_rx) = module_uarte.split();
    info!("✅ Peripherals configured");

    unwrap!(spawner.spawn(board::operator_rx_task(operator_rx)));
    unwrap!(spawner.spawn(board::module_rx_task(module_rx)));

    let operator = UarteLink::new(operator_tx, &board::OPERATOR_RX);
    let module = UarteLink::new(module_tx, &board::MODULE_RX).with_tx_led(module_tx_led);

    let mut configurator = Configurator::new(operator, module, TimerDelay, config);
    info!("Entering menu loop");
    configurator.run().await
}
