//! Integration tests for the TextTool API against a scripted surface.
//!
//! The mock surface records every registered label, the active object, and
//! how many redraws were requested, so the tests can observe the policy the
//! tool applies without any real rendering.

use std::collections::HashMap;

use easel::geometry::{Point, Size};
use easel::style::{FontWeight, Origin, StylePatch, TextAlign, TextStyle};
use easel::{AddSettings, EaselError, ObjectId, Surface, TextLabel, TextTool};

#[derive(Debug, Clone)]
struct StoredLabel {
    content: String,
    style: TextStyle,
    position: Point,
    padding: f32,
    origin: Origin,
}

/// In-memory surface double. Backdrop size is fixed at 300x200, so the
/// backdrop center is (150, 100).
struct MockSurface {
    backdrop: Option<Size>,
    next_id: u64,
    labels: HashMap<ObjectId, StoredLabel>,
    active: Option<ObjectId>,
    redraw_count: usize,
}

impl MockSurface {
    fn new() -> Self {
        Self {
            backdrop: Some(Size::new(300.0, 200.0)),
            next_id: 0,
            labels: HashMap::new(),
            active: None,
            redraw_count: 0,
        }
    }

    fn without_backdrop() -> Self {
        Self {
            backdrop: None,
            ..Self::new()
        }
    }

    fn label(&self, id: ObjectId) -> &StoredLabel {
        self.labels.get(&id).expect("label should be registered")
    }
}

impl Surface for MockSurface {
    fn add_text(&mut self, label: &TextLabel<'_>) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId::new(self.next_id);
        self.labels.insert(
            id,
            StoredLabel {
                content: label.content().to_string(),
                style: label.style().clone(),
                position: label.position(),
                padding: label.padding(),
                origin: label.origin(),
            },
        );
        id
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn set_active_object(&mut self, id: ObjectId) -> Result<(), EaselError> {
        if !self.labels.contains_key(&id) {
            return Err(EaselError::ObjectNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    fn backdrop_center(&self) -> Option<Point> {
        self.backdrop.map(Size::center)
    }

    fn style_of(&self, id: ObjectId) -> Result<TextStyle, EaselError> {
        self.labels
            .get(&id)
            .map(|label| label.style.clone())
            .ok_or(EaselError::ObjectNotFound(id))
    }

    fn set_content(&mut self, id: ObjectId, text: &str) -> Result<(), EaselError> {
        let label = self
            .labels
            .get_mut(&id)
            .ok_or(EaselError::ObjectNotFound(id))?;
        label.content = text.to_string();
        Ok(())
    }

    fn apply_style(&mut self, id: ObjectId, patch: &StylePatch) -> Result<(), EaselError> {
        let label = self
            .labels
            .get_mut(&id)
            .ok_or(EaselError::ObjectNotFound(id))?;
        label.style.apply(patch);
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.redraw_count += 1;
    }
}

#[test]
fn test_add_merges_overrides_over_defaults() {
    let mut tool = TextTool::new(MockSurface::new());
    let red = easel::color::Color::new("#ff0000").unwrap();

    let id = tool
        .add(
            "hello",
            AddSettings::new().with_styles(StylePatch::new().with_fill(red)),
        )
        .expect("add should succeed");

    let label = tool.surface().label(id);
    // Caller value wins for fill; untouched defaults survive.
    assert_eq!(label.style.fill(), red);
    assert_eq!(label.style.font_family(), "sans-serif");
    assert_eq!(label.padding, easel::DEFAULT_PADDING);
    assert_eq!(label.origin, Origin::default());
    assert_eq!(label.content, "hello");
}

#[test]
fn test_add_does_not_disturb_defaults_style() {
    let mut tool = TextTool::new(MockSurface::new());
    let red = easel::color::Color::new("#ff0000").unwrap();

    tool.add(
        "x",
        AddSettings::new().with_styles(StylePatch::new().with_fill(red)),
    )
    .expect("add should succeed");

    // Overrides are per-creation; the defaults record keeps its base style.
    assert_eq!(
        tool.defaults().style().fill(),
        easel::color::Color::default()
    );
}

#[test]
fn test_add_defaults_position_to_backdrop_center() {
    let mut tool = TextTool::new(MockSurface::new());

    let id = tool.add("x", AddSettings::default()).expect("add should succeed");

    assert_eq!(tool.surface().label(id).position, Point::new(150.0, 100.0));
}

#[test]
fn test_explicit_position_is_used_and_carried_over() {
    let mut tool = TextTool::new(MockSurface::new());

    let first = tool
        .add("x", AddSettings::new().with_position(Point::new(10.0, 20.0)))
        .expect("add should succeed");
    assert_eq!(tool.surface().label(first).position, Point::new(10.0, 20.0));

    // The resolved position is stored on the defaults record...
    assert_eq!(tool.defaults().position(), Some(Point::new(10.0, 20.0)));

    // ...and a position-less creation reuses it instead of the center.
    let second = tool.add("y", AddSettings::default()).expect("add should succeed");
    assert_eq!(tool.surface().label(second).position, Point::new(10.0, 20.0));
}

#[test]
fn test_add_without_any_position_source_fails() {
    let mut tool = TextTool::new(MockSurface::without_backdrop());

    let err = tool.add("x", AddSettings::default()).unwrap_err();
    assert!(matches!(err, EaselError::NoBackdrop));

    // An explicit position still works without a backdrop.
    let id = tool
        .add("x", AddSettings::new().with_position(Point::new(5.0, 5.0)))
        .expect("explicit position should not need a backdrop");
    assert_eq!(tool.surface().label(id).position, Point::new(5.0, 5.0));
}

#[test]
fn test_add_activates_only_when_nothing_is_active() {
    let mut tool = TextTool::new(MockSurface::new());

    let first = tool.add("first", AddSettings::default()).expect("add");
    assert_eq!(tool.surface().active_object(), Some(first));

    let second = tool.add("second", AddSettings::default()).expect("add");
    assert_ne!(first, second);
    // Selection is unchanged by the second creation.
    assert_eq!(tool.surface().active_object(), Some(first));
}

#[test]
fn test_change_replaces_content_and_always_redraws() {
    let mut tool = TextTool::new(MockSurface::new());
    let id = tool.add("before", AddSettings::default()).expect("add");

    tool.change(id, "same").expect("change should succeed");
    tool.change(id, "same").expect("change should succeed");

    assert_eq!(tool.surface().label(id).content, "same");
    // No short-circuit on unchanged content.
    assert_eq!(tool.surface().redraw_count, 2);
}

#[test]
fn test_change_unknown_object_is_an_error() {
    let mut tool = TextTool::new(MockSurface::new());
    let bogus = ObjectId::new(999);

    let err = tool.change(bogus, "text").unwrap_err();
    assert!(matches!(err, EaselError::ObjectNotFound(id) if id == bogus));
    // The failed call must not request a redraw.
    assert_eq!(tool.surface().redraw_count, 0);
}

#[test]
fn test_set_style_applies_new_value() {
    let mut tool = TextTool::new(MockSurface::new());
    let id = tool.add("x", AddSettings::default()).expect("add");

    tool.set_style(id, StylePatch::new().with_font_weight(FontWeight::Bold))
        .expect("set_style should succeed");

    assert_eq!(tool.surface().label(id).style.font_weight(), FontWeight::Bold);
}

#[test]
fn test_set_style_toggle_resets_to_baseline() {
    let mut tool = TextTool::new(MockSurface::new());
    let id = tool.add("x", AddSettings::default()).expect("add");

    tool.set_style(id, StylePatch::new().with_font_weight(FontWeight::Bold))
        .expect("set_style should succeed");
    // Re-applying bold to already-bold text un-bolds it.
    tool.set_style(id, StylePatch::new().with_font_weight(FontWeight::Bold))
        .expect("set_style should succeed");

    assert_eq!(
        tool.surface().label(id).style.font_weight(),
        FontWeight::Normal
    );
}

#[test]
fn test_set_style_batch_is_one_redraw() {
    let mut tool = TextTool::new(MockSurface::new());
    let id = tool.add("x", AddSettings::default()).expect("add");

    tool.set_style(
        id,
        StylePatch::new()
            .with_font_weight(FontWeight::Bold)
            .with_text_align(TextAlign::Center),
    )
    .expect("set_style should succeed");

    let label = tool.surface().label(id);
    assert_eq!(label.style.font_weight(), FontWeight::Bold);
    assert_eq!(label.style.text_align(), TextAlign::Center);
    assert_eq!(tool.surface().redraw_count, 1);
}

#[test]
fn test_set_style_unknown_object_is_an_error() {
    let mut tool = TextTool::new(MockSurface::new());
    let bogus = ObjectId::new(42);

    let err = tool
        .set_style(bogus, StylePatch::new().with_font_weight(FontWeight::Bold))
        .unwrap_err();
    assert!(matches!(err, EaselError::ObjectNotFound(id) if id == bogus));
}

#[test]
fn test_empty_text_is_accepted() {
    let mut tool = TextTool::new(MockSurface::new());

    let id = tool.add("", AddSettings::default()).expect("empty text is valid");
    assert_eq!(tool.surface().label(id).content, "");

    tool.change(id, "").expect("empty content is valid");
    assert_eq!(tool.surface().label(id).content, "");
}
