//! End-to-end scenarios: config file → slider → events → derived view.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use twinrange_core::{
    Commit, CommitResult, DoubleRangeSlider, Rejection, SliderConfig, SliderSet, Thumb,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn low_thumb_typed_past_high_is_reverted() {
    let mut slider = DoubleRangeSlider::new(&SliderConfig::new("sample", 0, 80, 25, 50));

    slider.focus(Thumb::Low);
    slider.type_text(Thumb::Low, "6");
    slider.type_text(Thumb::Low, "60");
    assert_eq!(slider.view().low.draft, "60");

    let result = slider.press_enter(Thumb::Low);
    assert_eq!(
        result,
        CommitResult::Rejected(Rejection::SeparationViolation {
            thumb: Thumb::Low,
            value: 60,
            limit: 49,
        })
    );

    let view = slider.view();
    assert_eq!(view.low.value, 25);
    assert_eq!(view.low.draft, "25");
    assert!(approx(view.low.percent, 31.25));
}

#[test]
fn high_thumb_out_of_domain_beats_separation() {
    let mut slider =
        DoubleRangeSlider::new(&SliderConfig::new("p", 0, 100, 40, 50).with_min_range(5));
    let result = slider.drag(Thumb::High, 200);
    assert!(matches!(
        result.rejection(),
        Some(Rejection::OutOfDomain { value: Some(200), .. })
    ));
    assert_eq!(slider.state().high(), 50);
}

#[test]
fn drag_session_reports_every_commit() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut slider = DoubleRangeSlider::with_listener(
        &SliderConfig::new("sampleMin", 10, 50, 15, 40).with_min_range(5),
        move |low: i64, high: i64| sink.borrow_mut().push(Commit { low, high }),
    );

    for v in 16..=36 {
        slider.drag(Thumb::Low, v);
    }
    // 36 would leave only 4 between the thumbs.
    assert_eq!(slider.state().low(), 35);
    assert_eq!(changes.borrow().len(), 20);
    assert_eq!(changes.borrow().last(), Some(&Commit { low: 35, high: 40 }));

    let view = slider.view();
    assert!(view.low.active);
    assert!(approx(view.track_left_percent, 62.5));
    assert!(approx(view.track_width_percent, 12.5));
}

#[test]
fn unit_slider_tooltip_tracks_draft_length() {
    let set = SliderSet::samples();
    let config = set.get("sampleUnit").expect("sample present");
    let mut slider = DoubleRangeSlider::new(config);

    assert_eq!(slider.view().low.tooltip_width_px, 53);
    slider.type_text(Thumb::Low, "");
    assert_eq!(slider.view().low.tooltip_width_px, 46);
    slider.type_text(Thumb::Low, "120");
    assert_eq!(slider.view().low.tooltip_width_px, 60);

    // Blur with an invalid value restores the committed text and width.
    let result = slider.blur(Thumb::Low);
    assert!(matches!(result, Some(CommitResult::Rejected(_))));
    assert_eq!(slider.view().low.draft, "55");
    assert_eq!(slider.view().low.tooltip_width_px, 53);
}

#[test]
fn slider_set_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[slider]]
id = "age"
min = 18
max = 99
low_value = 30
high_value = 31
min_range = 10

[[slider]]
id = "height"
min = 25
max = 150
low_value = 55
high_value = 100
unit = "cm"
"#
    )
    .unwrap();

    let set = SliderSet::from_file(file.path()).unwrap();
    assert_eq!(set.len(), 2);

    let age = DoubleRangeSlider::new(set.get("age").unwrap());
    assert_eq!((age.state().low(), age.state().high()), (21, 31));

    let height = DoubleRangeSlider::new(set.get("height").unwrap());
    assert_eq!(height.unit(), "cm");
}

#[test]
fn missing_file_is_read_error() {
    let err = SliderSet::from_file(std::path::Path::new("/nonexistent/sliders.toml")).unwrap_err();
    assert!(err.to_string().starts_with("read config /nonexistent/sliders.toml"));
}

#[test]
fn view_serializes_to_json() {
    let slider = DoubleRangeSlider::new(&SliderConfig::new("sample", 0, 80, 25, 50));
    let json = serde_json::to_value(slider.view()).unwrap();
    assert_eq!(json["low"]["value"], 25);
    assert_eq!(json["high"]["draft"], "50");
    assert_eq!(json["active"], "none");
    assert!(json["low"]["z_index"].is_null());
}
