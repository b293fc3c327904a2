//! Example: Annotating an in-memory scene
//!
//! This example demonstrates how to embed the text tool: implement
//! [`Surface`] over your scene graph, hand it to [`TextTool`], and drive
//! labels through the tool's API.

use std::collections::HashMap;

use easel::{
    AddSettings, EaselError, ObjectId, Surface, TextLabel, TextTool,
    color::Color,
    geometry::{Point, Size},
    style::{FontWeight, StylePatch, TextStyle},
};

/// A toy scene graph standing in for a real canvas.
#[derive(Default)]
struct Scene {
    backdrop: Option<Size>,
    next_id: u64,
    labels: HashMap<ObjectId, (String, TextStyle, Point)>,
    active: Option<ObjectId>,
    redraws: usize,
}

impl Surface for Scene {
    fn add_text(&mut self, label: &TextLabel<'_>) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId::new(self.next_id);
        self.labels.insert(
            id,
            (
                label.content().to_string(),
                label.style().clone(),
                label.position(),
            ),
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
            .map(|(_, style, _)| style.clone())
            .ok_or(EaselError::ObjectNotFound(id))
    }

    fn set_content(&mut self, id: ObjectId, text: &str) -> Result<(), EaselError> {
        let (content, _, _) = self
            .labels
            .get_mut(&id)
            .ok_or(EaselError::ObjectNotFound(id))?;
        *content = text.to_string();
        Ok(())
    }

    fn apply_style(&mut self, id: ObjectId, patch: &StylePatch) -> Result<(), EaselError> {
        let (_, style, _) = self
            .labels
            .get_mut(&id)
            .ok_or(EaselError::ObjectNotFound(id))?;
        style.apply(patch);
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

fn main() -> Result<(), EaselError> {
    env_logger::init();

    let scene = Scene {
        backdrop: Some(Size::new(800.0, 600.0)),
        ..Scene::default()
    };
    let mut tool = TextTool::new(scene);

    // First label: defaults, placed at the backdrop center, auto-selected.
    let title = tool.add("Vacation 2026", AddSettings::default())?;

    // Second label: explicit position and a red fill override.
    let red = Color::new("#ff0000").expect("valid color");
    let caption = tool.add(
        "Day one",
        AddSettings::new()
            .with_position(Point::new(120.0, 540.0))
            .with_styles(StylePatch::new().with_fill(red)),
    )?;

    // Toggle bold on the title, twice: on, then back to normal.
    tool.set_style(title, StylePatch::new().with_font_weight(FontWeight::Bold))?;
    tool.set_style(title, StylePatch::new().with_font_weight(FontWeight::Bold))?;

    // Edit the caption text.
    tool.change(caption, "Day one, beach")?;

    let scene = tool.into_surface();
    println!("labels on scene: {}", scene.labels.len());
    println!("redraws requested: {}", scene.redraws);
    for (id, (content, style, position)) in &scene.labels {
        println!(
            "{id}: {content:?} fill={} weight={} at ({}, {})",
            style.fill(),
            style.font_weight(),
            position.x(),
            position.y(),
        );
    }

    Ok(())
}
