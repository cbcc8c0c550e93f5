use super::{sleep, SerialPort};
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

pub const INPUT_CAPACITY: usize = 64;

/// Raw operator line as read from the terminal.
pub type InputLine = Vec<u8, INPUT_CAPACITY>;

/// Drain every byte the port has buffered into `out`.
///
/// The visible value ends at the first `\n`: the terminator and anything
/// after it, as well as bytes that do not fit, are consumed and dropped.
/// When the port runs dry the reader waits one `settle` gap and keeps
/// draining if more bytes showed up. A zero gap makes it strictly
/// non-blocking. Returns the number of bytes consumed from the port.
pub async fn read_available<P, D, const N: usize>(
    port: &mut P,
    delay: &mut D,
    settle: Duration,
    out: &mut Vec<u8, N>,
) -> usize
where
    P: SerialPort,
    D: DelayNs,
{
    let mut consumed = 0;
    let mut terminated = false;

    loop {
        while let Some(byte) = port.read_byte() {
            consumed += 1;
            if terminated {
                continue;
            }
            if byte == b'\n' {
                terminated = true;
                continue;
            }
            if out.push(byte).is_err() {
                debug!("Reply overflow, dropping byte {=u8:#x}", byte);
            }
        }

        if settle.as_ticks() == 0 {
            break;
        }
        sleep(delay, settle).await;
        if port.bytes_available() == 0 {
            break;
        }
    }

    consumed
}

/// Read one operator line into `out`, returning the number of bytes stored.
///
/// Bytes are taken until a `\n` has been consumed or the port stays idle for
/// one `byte_gap`. Once `out` is full the rest of the line is consumed and
/// dropped, leaving a buffer without terminator for the normalizer to reject.
/// A `\n` arriving right after a `\r` that filled the buffer takes the `\r`'s
/// slot, so a full-length value from a CRLF terminal still fits.
pub async fn read_operator_line<P, D>(
    port: &mut P,
    delay: &mut D,
    byte_gap: Duration,
    out: &mut InputLine,
) -> usize
where
    P: SerialPort,
    D: DelayNs,
{
    out.clear();
    // the \r that filled the buffer, if it was the last byte taken
    let mut cr_at_end = false;

    loop {
        while let Some(byte) = port.read_byte() {
            let stored = out.push(byte).is_ok();
            if byte == b'\n' {
                if !stored && cr_at_end {
                    out.pop();
                    let _ = out.push(b'\n');
                }
                return out.len();
            }
            cr_at_end = stored && byte == b'\r' && out.is_full();
        }

        sleep(delay, byte_gap).await;
        if port.bytes_available() == 0 {
            return out.len();
        }
    }
}
