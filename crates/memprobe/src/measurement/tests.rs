use std::io;

use pretty_assertions::assert_eq;

use super::*;
use crate::native;
use crate::Inspect;

#[derive(Inspect)]
struct Pair {
    left: u32,
    right: String,
}

fn pair() -> Pair {
    Pair {
        left: 1,
        right: "xy".to_string(),
    }
}

/// A sink that refuses every write.
struct Closed;

impl io::Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn measure_uses_defaults() {
    let measurement = measure(&pair());
    assert_eq!(
        measurement.total(),
        std::mem::size_of::<Pair>() + 4 + 2 * native::CHAR_UNIT
    );
    assert_eq!(measurement.breakdown(), None);
    assert_eq!(measurement.trace(), "");
}

#[test]
fn display_is_the_total() {
    assert_eq!(measure(&0u64).to_string(), "8 bytes");
}

#[test]
fn quiet_json_is_null() {
    assert_eq!(measure(&pair()).to_json().unwrap(), "null");
}

#[test]
fn verbose_tree_renders_json() {
    let measurement = measure_with(&pair(), Options::new().verbose(true)).unwrap();
    let expected = format!(
        "{{\n    \"Pair\": {{\n        \"left\": 4,\n        \"right\": {}\n    }}\n}}",
        2 * native::CHAR_UNIT
    );
    assert_eq!(measurement.render().unwrap(), expected);
    assert_eq!(measurement.trace(), "");
}

#[test]
fn verbose_text_renders_trace() {
    let measurement = measure_with(
        &pair(),
        Options::new()
            .verbose(true)
            .report_format(ReportFormat::Text),
    )
    .unwrap();

    assert_eq!(measurement.breakdown(), None);
    assert_eq!(
        measurement.render().unwrap(),
        format!(
            "(tests::Pair):\n\tleft: u32 [4]\n\tright: string [{}]\n",
            2 * native::CHAR_UNIT
        )
    );
}

#[test]
fn trace_is_written_to_the_sink() {
    let mut sink: Vec<u8> = Vec::new();
    let measurement = measure_with(
        &pair(),
        Options::new()
            .verbose(true)
            .report_format(ReportFormat::Text)
            .output_sink(&mut sink),
    )
    .unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), measurement.trace());
}

#[test]
fn sink_failure_is_surfaced() {
    let mut sink = Closed;
    let result = measure_with(&1.5f64, Options::new().output_sink(&mut sink));
    assert!(matches!(result, Err(MeasureError::Sink(_))));
}

#[test]
fn verbosity_does_not_change_the_total() {
    let quiet = measure(&pair()).total();
    for format in [ReportFormat::Tree, ReportFormat::Text] {
        let options = Options::new().verbose(true).report_format(format);
        assert_eq!(measure_with(&pair(), options).unwrap().total(), quiet);
    }
}
