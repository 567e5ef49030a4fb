use ct_core::{DisplaySink, TypeClass};
use pretty_assertions::assert_eq;

fn render(write: impl FnOnce(&mut DisplaySink<&mut Vec<u8>>)) -> String {
    let mut buffer = Vec::new();
    let mut sink = DisplaySink::new(&mut buffer);
    write(&mut sink);
    String::from_utf8(buffer).unwrap()
}

macro_rules! scalar_case {
    ($name:ident, $label:expr, $value:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let actual = render(|sink| sink.scalar($label, $value).unwrap());
            assert_eq!(actual, $expected);
        }
    };
}

macro_rules! sequence_case {
    ($name:ident, $label:expr, [$($value:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let values: Vec<i64> = vec![$($value),*];
            let actual = render(|sink| sink.sequence($label, values).unwrap());
            assert_eq!(actual, $expected);
        }
    };
}

scalar_case!(
    scalar_pads_label_to_field_width,
    "Const square(4)",
    16,
    "Const square(4)                  : 16\n"
);
scalar_case!(
    scalar_renders_empty_value,
    "Other type",
    "",
    "Other type                       : \n"
);
sequence_case!(
    sequence_joins_elements_with_single_spaces,
    "Const squares table",
    [0, 1, 4, 9, 16],
    "Const squares table              : 0 1 4 9 16\n"
);
sequence_case!(
    sequence_renders_empty_sequence,
    "Empty",
    [],
    "Empty                            : \n"
);

#[test]
fn width_override_changes_the_field() {
    let mut buffer = Vec::new();
    let mut sink = DisplaySink::new(&mut buffer).with_width(8);
    sink.scalar("label", 7).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "label    : 7\n");
}

#[test]
fn sink_counts_the_lines_it_writes() {
    let mut buffer = Vec::new();
    let mut sink = DisplaySink::new(&mut buffer);
    assert_eq!(sink.lines_written(), 0);
    sink.scalar("one", 1).unwrap();
    sink.sequence("two", vec![1i64, 2]).unwrap();
    assert_eq!(sink.lines_written(), 2);
}

#[test]
fn integral_values_take_the_integral_path() {
    let actual = render(|sink| 42i64.describe(sink).unwrap());
    assert_eq!(actual, "Integral                         : 42\n");
}

#[test]
fn non_integral_values_take_the_other_path() {
    let actual = render(|sink| 3.14f64.describe(sink).unwrap());
    assert_eq!(actual, "Other type                       : \n");
}

#[test]
fn strings_are_not_integral() {
    let actual = render(|sink| "hello".describe(sink).unwrap());
    assert_eq!(actual, "Other type                       : \n");
}
