//! Axis sampling over a multiplexed ADC.

use embedded_hal_async::delay::DelayNs;

use super::AxisSample;
use crate::config::{ADC_CHANNEL_X, ADC_CHANNEL_Y, ADC_SETTLE_US};
use crate::hal::{AdcChannel, AxisAdc};

/// Read X (channel 1) then Y (channel 0), letting the input settle for
/// `ADC_SETTLE_US` after each switch. Readings are passed through as-is.
pub async fn sample_axes<A, D>(adc: &mut A, delay: &mut D) -> AxisSample
where
    A: AxisAdc,
    D: DelayNs,
{
    adc.select(AdcChannel(ADC_CHANNEL_X));
    delay.delay_us(ADC_SETTLE_US).await;
    let x = adc.read().await;

    adc.select(AdcChannel(ADC_CHANNEL_Y));
    delay.delay_us(ADC_SETTLE_US).await;
    let y = adc.read().await;

    AxisSample { x, y }
}
