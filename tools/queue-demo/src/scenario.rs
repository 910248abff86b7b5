//! TOML-scripted scenarios run against a byte queue.
//!
//! A scenario names an initial layout and a list of steps. Each step calls
//! one entry point of `planck_queue::api` and may state the status and
//! value it expects:
//!
//! ```toml
//! element_size = 4
//! capacity = 3
//!
//! [[step]]
//! op = "push"
//! value = 10
//!
//! [[step]]
//! op = "pop"
//! expect_value = 10
//! ```

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use planck_queue::{RawQueue, Status, api};
use serde::Deserialize;
use tracing::{debug, warn};

/// A parsed scenario file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Bytes per element for the initial binding.
    pub element_size: u16,
    /// Elements for the initial binding.
    pub capacity: u16,
    /// Steps, in order.
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One scripted call.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Which entry point to call.
    pub op: Op,
    /// Integer payload for `push`, little-endian.
    pub value: Option<i64>,
    /// Text payload for `push`, zero-padded.
    pub text: Option<String>,
    /// Pass an absent item/output reference.
    #[serde(default)]
    pub absent: bool,
    /// New element size for `init`.
    pub element_size: Option<u16>,
    /// New capacity for `init`.
    pub capacity: Option<u16>,
    /// Expected status. Defaults to `ok`.
    pub expect: Option<Expect>,
    /// Expected popped value, decoded little-endian.
    pub expect_value: Option<i64>,
}

/// Entry point selected by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Re-bind the queue to a fresh buffer.
    Init,
    /// Push one element.
    Push,
    /// Pop one element.
    Pop,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::Push => f.write_str("push"),
            Self::Pop => f.write_str("pop"),
        }
    }
}

/// Status spelling used in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expect {
    /// [`Status::Ok`]
    Ok,
    /// [`Status::Full`]
    Full,
    /// [`Status::Empty`]
    Empty,
    /// [`Status::InvalidArgument`]
    InvalidArgument,
}

impl From<Expect> for Status {
    fn from(e: Expect) -> Self {
        match e {
            Expect::Ok => Self::Ok,
            Expect::Full => Self::Full,
            Expect::Empty => Self::Empty,
            Expect::InvalidArgument => Self::InvalidArgument,
        }
    }
}

/// What happened at one step.
#[derive(Debug)]
pub struct StepReport {
    /// Zero-based step number.
    pub index: usize,
    /// Entry point called.
    pub op: Op,
    /// Status returned.
    pub status: Status,
    /// Value popped, if any.
    pub value: Option<i64>,
    /// Failed expectations.
    pub failures: Vec<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<3} {:<5} -> {}", self.index, self.op, self.status)?;
        if let Some(v) = self.value {
            write!(f, " ({v})")?;
        }
        for failure in &self.failures {
            write!(f, "\n      FAILED: {failure}")?;
        }
        Ok(())
    }
}

/// Outcome of a whole scenario.
#[derive(Debug, Default)]
pub struct Report {
    /// One entry per step.
    pub steps: Vec<StepReport>,
}

impl Report {
    /// Number of steps with at least one failed expectation.
    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| !s.failures.is_empty()).count()
    }
}

impl Scenario {
    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Parses scenario TOML and checks each step is well-formed.
    pub fn parse(text: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(text)?;
        for (i, step) in scenario.steps.iter().enumerate() {
            match step.op {
                Op::Push if !step.absent && step.value.is_none() && step.text.is_none() => {
                    bail!("step {i}: push needs `value`, `text` or `absent = true`");
                }
                Op::Push if step.value.is_some() && step.text.is_some() => {
                    bail!("step {i}: push takes `value` or `text`, not both");
                }
                Op::Init | Op::Pop if step.value.is_some() || step.text.is_some() => {
                    bail!("step {i}: {} takes no payload", step.op);
                }
                _ => {}
            }
        }
        Ok(scenario)
    }

    /// Byte length of every buffer the run will bind, initial one first.
    fn buffer_sizes(&self) -> Vec<usize> {
        let mut layout = (self.element_size, self.capacity);
        let mut sizes = vec![byte_len(layout)];
        for step in self.steps.iter().filter(|s| s.op == Op::Init) {
            layout = (
                step.element_size.unwrap_or(layout.0),
                step.capacity.unwrap_or(layout.1),
            );
            sizes.push(byte_len(layout));
        }
        sizes
    }

    /// Runs every step and collects a report.
    ///
    /// Each `init` step binds a fresh, zeroed buffer. Every buffer is
    /// allocated up front because the queue borrows them for its whole
    /// lifetime.
    pub fn run(&self) -> Result<Report> {
        let mut buffers: Vec<Vec<u8>> = self
            .buffer_sizes()
            .into_iter()
            .map(|len| vec![0u8; len])
            .collect();
        let mut fresh = buffers.iter_mut().map(Vec::as_mut_slice);

        let mut queue = RawQueue::unbound();
        let status = api::init(
            Some(&mut queue),
            fresh.next(),
            self.element_size,
            self.capacity,
        );
        if !status.is_ok() {
            bail!(
                "initial layout {}x{} rejected: {status}",
                self.element_size,
                self.capacity
            );
        }
        let mut layout = (self.element_size, self.capacity);

        let mut report = Report::default();
        for (index, step) in self.steps.iter().enumerate() {
            let (status, value) = match step.op {
                Op::Init => {
                    layout = (
                        step.element_size.unwrap_or(layout.0),
                        step.capacity.unwrap_or(layout.1),
                    );
                    let buffer = fresh.next().filter(|_| !step.absent);
                    (api::init(Some(&mut queue), buffer, layout.0, layout.1), None)
                }
                Op::Push => {
                    let item = encode(step, queue.element_size());
                    let item = item.as_deref().filter(|_| !step.absent);
                    (api::push(Some(&mut queue), item), None)
                }
                Op::Pop => {
                    let mut out = vec![0u8; usize::from(queue.element_size())];
                    let target = Some(out.as_mut_slice()).filter(|_| !step.absent);
                    let status = api::pop(Some(&mut queue), target);
                    (status, status.is_ok().then(|| decode(&out)))
                }
            };
            debug!(index, op = %step.op, %status, len = queue.len(), "step");

            let failures = check(step, status, value);
            for failure in &failures {
                warn!(index, "{failure}");
            }
            report.steps.push(StepReport {
                index,
                op: step.op,
                status,
                value,
                failures,
            });
        }
        Ok(report)
    }
}

fn byte_len((element_size, capacity): (u16, u16)) -> usize {
    usize::from(element_size) * usize::from(capacity)
}

fn check(step: &Step, status: Status, value: Option<i64>) -> Vec<String> {
    let mut failures = Vec::new();
    let expected = step.expect.map_or(Status::Ok, Status::from);
    if status != expected {
        failures.push(format!("expected status {expected}, got {status}"));
    }
    if let Some(want) = step.expect_value {
        match value {
            Some(got) if got == want => {}
            Some(got) => failures.push(format!("expected value {want}, got {got}")),
            None => failures.push(format!("expected value {want}, nothing popped")),
        }
    }
    failures
}

/// Builds the `element_size`-byte payload of a push step.
fn encode(step: &Step, element_size: u16) -> Option<Vec<u8>> {
    let size = usize::from(element_size);
    if let Some(v) = step.value {
        let fill = if v < 0 { 0xFF } else { 0x00 };
        let mut bytes = vec![fill; size];
        for (dst, src) in bytes.iter_mut().zip(v.to_le_bytes()) {
            *dst = src;
        }
        return Some(bytes);
    }
    step.text.as_ref().map(|text| {
        let mut bytes = vec![0u8; size];
        for (dst, src) in bytes.iter_mut().zip(text.bytes()) {
            *dst = src;
        }
        bytes
    })
}

/// Reads up to eight little-endian bytes as a sign-extended integer.
fn decode(bytes: &[u8]) -> i64 {
    let width = bytes.len().min(8);
    if width == 0 {
        return 0;
    }
    let negative = bytes[width - 1] & 0x80 != 0;
    let mut raw = if negative { [0xFF; 8] } else { [0x00; 8] };
    raw[..width].copy_from_slice(&bytes[..width]);
    i64::from_le_bytes(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALKTHROUGH: &str = r#"
        element_size = 4
        capacity = 3

        [[step]]
        op = "push"
        value = 10
        [[step]]
        op = "push"
        value = 20
        [[step]]
        op = "push"
        value = 30
        [[step]]
        op = "push"
        value = 99
        expect = "full"
        [[step]]
        op = "pop"
        expect_value = 10
        [[step]]
        op = "pop"
        expect_value = 20
        [[step]]
        op = "push"
        value = 40
        [[step]]
        op = "pop"
        expect_value = 30
        [[step]]
        op = "pop"
        expect_value = 40
        [[step]]
        op = "pop"
        expect = "empty"
        [[step]]
        op = "init"
        capacity = 0
        expect = "invalid-argument"
    "#;

    #[test]
    fn walkthrough_passes() {
        let scenario = Scenario::parse(WALKTHROUGH).unwrap();
        let report = scenario.run().unwrap();
        assert_eq!(report.steps.len(), 11);
        assert_eq!(report.failed(), 0, "{:#?}", report.steps);
        assert_eq!(report.steps[4].value, Some(10));
    }

    #[test]
    fn mismatches_are_reported() {
        let scenario = Scenario::parse(
            r#"
            element_size = 2
            capacity = 1
            [[step]]
            op = "push"
            value = 7
            [[step]]
            op = "pop"
            expect_value = 8
            [[step]]
            op = "pop"
            "#,
        )
        .unwrap();
        let report = scenario.run().unwrap();
        assert_eq!(report.failed(), 2);
        assert_eq!(report.steps[1].failures, ["expected value 8, got 7"]);
        assert_eq!(report.steps[2].status, Status::Empty);
    }

    #[test]
    fn init_binds_a_fresh_buffer() {
        let scenario = Scenario::parse(
            r#"
            element_size = 1
            capacity = 1
            [[step]]
            op = "push"
            value = 1
            [[step]]
            op = "init"
            element_size = 8
            capacity = 2
            [[step]]
            op = "pop"
            expect = "empty"
            [[step]]
            op = "push"
            value = -5
            [[step]]
            op = "pop"
            expect_value = -5
            "#,
        )
        .unwrap();
        assert_eq!(scenario.buffer_sizes(), [1, 16]);
        assert_eq!(scenario.run().unwrap().failed(), 0);
    }

    #[test]
    fn absent_references_are_invalid() {
        let scenario = Scenario::parse(
            r#"
            element_size = 4
            capacity = 2
            [[step]]
            op = "push"
            absent = true
            expect = "invalid-argument"
            [[step]]
            op = "pop"
            absent = true
            expect = "invalid-argument"
            [[step]]
            op = "init"
            absent = true
            expect = "invalid-argument"
            "#,
        )
        .unwrap();
        assert_eq!(scenario.run().unwrap().failed(), 0);
    }

    #[test]
    fn text_payloads_round_trip() {
        let scenario = Scenario::parse(
            r#"
            element_size = 8
            capacity = 2
            [[step]]
            op = "push"
            text = "AB"
            [[step]]
            op = "pop"
            expect_value = 0x4241
            "#,
        )
        .unwrap();
        assert_eq!(scenario.run().unwrap().failed(), 0);
    }

    #[test]
    fn malformed_steps_are_rejected() {
        assert!(Scenario::parse("element_size = 4\ncapacity = 1\n[[step]]\nop = \"push\"\n").is_err());
        assert!(
            Scenario::parse("element_size = 4\ncapacity = 1\n[[step]]\nop = \"pop\"\nvalue = 1\n")
                .is_err()
        );
        assert!(Scenario::parse("element_size = 4\ncapacity = 1\nbogus = 1\n").is_err());
    }

    #[test]
    fn zero_initial_layout_is_an_error() {
        let scenario = Scenario::parse("element_size = 0\ncapacity = 4\n").unwrap();
        assert!(scenario.run().is_err());
    }

    #[test]
    fn decode_sign_extends() {
        assert_eq!(decode(&[0xFF, 0xFF]), -1);
        assert_eq!(decode(&[0x34, 0x12]), 0x1234);
        assert_eq!(decode(&[]), 0);
        assert_eq!(decode(&[1, 0, 0, 0, 0, 0, 0, 0, 0xAA]), 1);
    }
}
