//! The two canned demo programs: an integer queue and a log-record queue.

use anyhow::{Context, Result, bail};
use planck_queue::{QueueError, RawQueue, Status, api};
use tracing::{debug, warn};

use crate::cli::{BasicArgs, LogArgs};

/// Width of one log record in bytes.
pub const LOG_ENTRY_SIZE: u16 = 32;

/// Pushes `args.value` into an integer queue, pops it back, and returns the
/// line to print.
pub fn basic(args: &BasicArgs) -> Result<String> {
    let element_size = u16::try_from(size_of::<i32>())?;
    let mut storage = vec![0u8; usize::from(element_size) * usize::from(args.capacity)];
    let mut queue = RawQueue::new(&mut storage, element_size, args.capacity)
        .with_context(|| format!("creating integer queue of capacity {}", args.capacity))?;

    queue.push(&args.value.to_ne_bytes())?;
    debug!(len = queue.len(), "pushed {}", args.value);

    let mut out = [0u8; 4];
    queue.pop(&mut out)?;
    Ok(format!("Read value: {}", i32::from_ne_bytes(out)))
}

/// Encodes `msg` as a zero-padded record, truncating it to
/// [`LOG_ENTRY_SIZE`] bytes.
pub fn encode_record(msg: &str) -> [u8; LOG_ENTRY_SIZE as usize] {
    let mut record = [0u8; LOG_ENTRY_SIZE as usize];
    for (dst, src) in record.iter_mut().zip(msg.bytes()) {
        *dst = src;
    }
    record
}

/// Decodes a record up to its first zero byte.
pub fn decode_record(record: &[u8]) -> String {
    let end = record.iter().position(|&b| b == 0).unwrap_or(record.len());
    String::from_utf8_lossy(&record[..end]).into_owned()
}

/// Queues every message as a log record, then drains the queue one pop
/// past its contents. Returns the lines to print.
pub fn log(args: &LogArgs) -> Result<Vec<String>> {
    let mut storage = vec![0u8; usize::from(LOG_ENTRY_SIZE) * usize::from(args.capacity)];
    let mut queue = RawQueue::unbound();
    let status = api::init(
        Some(&mut queue),
        Some(&mut storage),
        LOG_ENTRY_SIZE,
        args.capacity,
    );
    if !status.is_ok() {
        bail!("log queue init failed: {status}");
    }

    for msg in &args.messages {
        let record = encode_record(msg);
        match api::push(Some(&mut queue), Some(&record)) {
            Status::Ok => debug!(len = queue.len(), "queued {msg:?}"),
            Status::Full => warn!("log queue full, dropping {msg:?}"),
            other => other.into_result().context("pushing log record")?,
        }
    }

    let mut lines = Vec::new();
    let mut record = [0u8; LOG_ENTRY_SIZE as usize];
    for _ in 0..=args.messages.len() {
        match queue.pop(&mut record) {
            Ok(()) => lines.push(format!("LOG: {}", decode_record(&record))),
            Err(QueueError::Empty) => debug!("log queue drained"),
            Err(e) => return Err(e).context("popping log record"),
        }
    }
    Ok(lines)
}
