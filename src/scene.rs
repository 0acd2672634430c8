//! Scene files - a canvas plus a list of stamps, loaded from JSON
//!
//! ```json
//! {
//!   "width": 400, "height": 300,
//!   "items": [
//!     { "kind": "grid", "spacing": 25, "dash": [2, 2] },
//!     { "kind": "elbow", "start": {"x": 20, "y": 20}, "end": {"x": 300, "y": 200},
//!       "orientation": "vertical", "end_arrow": {"filled": true} }
//!   ]
//! }
//! ```
//!
//! Anything an item leaves out comes from [`Settings`]. Rectangle-bound
//! items cover the whole canvas unless they give `position`/`size`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StampError;
use crate::geometry::{Color, Point, Rect};
use crate::settings::Settings;
use crate::stamps::{
    BoxedConnector, BoxedStamp, Bullseye, CartesianCoordinates, ConnectorStyle, DottedLine,
    ElbowConnector, Grid, HexagonalGrid, LineConnector, Orientation, PolarCoordinates, RuledLines,
};
use crate::style::{ArrowStyle, StrokeStyle};
use crate::surface::{Surface, SvgSurface};

/// Errors that can occur while loading or building a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scene: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Item {index} ({kind:?}): {source}")]
    InvalidItem {
        index: usize,
        kind: ItemKind,
        #[source]
        source: StampError,
    },

    #[error("Canvas: {0}")]
    InvalidCanvas(StampError),
}

/// Which stamp a scene item describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Grid,
    Lines,
    HexGrid,
    Cartesian,
    Bullseye,
    Polar,
    Dots,
    Line,
    Elbow,
}

/// One entry of a scene file, as written
///
/// Unknown keys are rejected so a misspelt field is not silently replaced
/// by the settings default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemConfig {
    pub kind: ItemKind,

    // Where
    pub position: Option<Point>,
    pub size: Option<(f64, f64)>,
    pub start: Option<Point>,
    pub end: Option<Point>,

    // Stroke
    pub color: Option<Color>,
    pub line_width: Option<f64>,
    #[serde(default)]
    pub dash: Vec<f64>,

    // Tilings
    pub spacing: Option<f64>,
    pub radius: Option<f64>,
    #[serde(default)]
    pub overflow: bool,
    pub dot_size: Option<f64>,

    // Connectors
    #[serde(default)]
    pub orientation: Orientation,
    pub elbow_fraction: Option<f64>,
    pub start_arrow: Option<ArrowStyle>,
    pub end_arrow: Option<ArrowStyle>,
}

impl ItemConfig {
    /// An item of `kind` with every optional field left to the settings
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            position: None,
            size: None,
            start: None,
            end: None,
            color: None,
            line_width: None,
            dash: Vec::new(),
            spacing: None,
            radius: None,
            overflow: false,
            dot_size: None,
            orientation: Orientation::default(),
            elbow_fraction: None,
            start_arrow: None,
            end_arrow: None,
        }
    }

    fn stroke(&self, settings: &Settings) -> StrokeStyle {
        StrokeStyle::new(
            self.color.unwrap_or(settings.color),
            self.line_width.unwrap_or(settings.line_width),
        )
        .with_dash(self.dash.clone())
    }

    fn connector_style(&self, settings: &Settings) -> ConnectorStyle {
        ConnectorStyle {
            stroke: self.stroke(settings),
            start_arrow: self.start_arrow,
            end_arrow: self.end_arrow,
        }
    }

    fn rect(&self, canvas: Rect) -> Rect {
        let position = self.position.unwrap_or(Point::new(canvas.x, canvas.y));
        let size = self.size.unwrap_or((canvas.width, canvas.height));
        Rect::from_position_size(position, size)
    }

    fn endpoints(&self) -> Result<(Point, Point), StampError> {
        let start = self
            .start
            .ok_or_else(|| StampError::invalid("start", "is required for connectors"))?;
        let end = self
            .end
            .ok_or_else(|| StampError::invalid("end", "is required for connectors"))?;
        Ok((start, end))
    }

    /// Validate the item and turn it into a drawable
    pub fn build(&self, settings: &Settings, canvas: Rect) -> Result<SceneItem, StampError> {
        let spacing = self.spacing.unwrap_or(settings.spacing);

        let stamp: BoxedStamp = match self.kind {
            ItemKind::Grid => Box::new(Grid::new(spacing, self.stroke(settings))?),
            ItemKind::Lines => Box::new(RuledLines::new(spacing, self.stroke(settings))?),
            ItemKind::HexGrid => Box::new(HexagonalGrid::new(
                self.radius.unwrap_or(settings.hex_radius),
                self.stroke(settings),
            )?),
            ItemKind::Cartesian => Box::new(CartesianCoordinates::new(self.stroke(settings))?),
            ItemKind::Bullseye => {
                Box::new(Bullseye::new(spacing, self.overflow, self.stroke(settings))?)
            }
            ItemKind::Polar => {
                Box::new(PolarCoordinates::new(spacing, self.overflow, self.stroke(settings))?)
            }
            ItemKind::Dots => Box::new(DottedLine::new(
                self.dot_size.unwrap_or(settings.dot_size),
                spacing,
                self.color.unwrap_or(settings.color),
            )?),
            ItemKind::Line | ItemKind::Elbow => {
                let (start, end) = self.endpoints()?;
                start.validate("start")?;
                end.validate("end")?;
                let style = self.connector_style(settings);
                let connector: BoxedConnector = if self.kind == ItemKind::Line {
                    Box::new(LineConnector::new(style)?)
                } else {
                    Box::new(ElbowConnector::new(
                        style,
                        self.orientation,
                        self.elbow_fraction.unwrap_or(settings.elbow_fraction),
                    )?)
                };
                return Ok(SceneItem::Connector {
                    connector,
                    start,
                    end,
                });
            }
        };

        let rect = self.rect(canvas).validate()?;
        Ok(SceneItem::Stamp { stamp, rect })
    }
}

/// A scene file, as written
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background: Option<Color>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl SceneConfig {
    /// Load a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loaded scene from {}", path.display());
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every item, failing on the first bad one
    ///
    /// Nothing is drawn until the whole scene has been built, so a bad item
    /// never leaves a half-rendered scene behind.
    pub fn build(&self, settings: &Settings) -> Result<Scene, SceneError> {
        let width = self.width.unwrap_or(settings.canvas_width);
        let height = self.height.unwrap_or(settings.canvas_height);
        let canvas = Rect::new(0.0, 0.0, width, height)
            .validate()
            .map_err(SceneError::InvalidCanvas)?;
        let background = match self.background.or(settings.background) {
            Some(color) => Some(color.validate().map_err(SceneError::InvalidCanvas)?),
            None => None,
        };

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.build(settings, canvas)
                    .map_err(|source| SceneError::InvalidItem {
                        index,
                        kind: item.kind,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            canvas,
            background,
            items,
        })
    }
}

/// A validated, ready-to-draw item
pub enum SceneItem {
    Stamp { stamp: BoxedStamp, rect: Rect },
    Connector {
        connector: BoxedConnector,
        start: Point,
        end: Point,
    },
}

impl SceneItem {
    pub fn name(&self) -> &str {
        match self {
            SceneItem::Stamp { stamp, .. } => stamp.name(),
            SceneItem::Connector { connector, .. } => connector.name(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), StampError> {
        match self {
            SceneItem::Stamp { stamp, rect } => stamp.draw(surface, *rect),
            SceneItem::Connector {
                connector,
                start,
                end,
            } => connector.draw(surface, *start, *end),
        }
    }
}

/// A validated scene
pub struct Scene {
    canvas: Rect,
    background: Option<Color>,
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Draw every item in file order
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), StampError> {
        for item in &self.items {
            log::debug!("Drawing {}", item.name());
            item.draw(surface)?;
        }
        Ok(())
    }

    /// Render the scene into an SVG document
    pub fn to_svg(&self) -> Result<String, StampError> {
        let mut surface = SvgSurface::new(self.canvas.width, self.canvas.height);
        if let Some(color) = self.background {
            surface = surface.with_background(color);
        }
        self.render(&mut surface)?;
        log::info!(
            "Rendered {} items into {} SVG paths",
            self.items.len(),
            surface.element_count()
        );
        Ok(surface.to_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    const SCENE: &str = r#"{
        "width": 200, "height": 100,
        "items": [
            { "kind": "grid", "spacing": 50 },
            { "kind": "polar", "spacing": 20, "overflow": true, "position": {"x": 100, "y": 0}, "size": [100, 100] },
            { "kind": "dots", "dot_size": 2, "spacing": 10, "color": {"r": 0, "g": 0, "b": 0, "a": 1} },
            { "kind": "elbow", "start": {"x": 10, "y": 10}, "end": {"x": 190, "y": 90},
              "orientation": "vertical", "end_arrow": {"filled": true} }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let config = SceneConfig::from_json(SCENE).unwrap();
        assert_eq!(config.items.len(), 4);
        assert_eq!(config.items[3].orientation, Orientation::Vertical);

        let scene = config.build(&Settings::default()).unwrap();
        assert_eq!(scene.canvas(), Rect::new(0.0, 0.0, 200.0, 100.0));
        let names: Vec<&str> = scene.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Grid", "PolarCoordinates", "Dots", "Elbow"]);
    }

    #[test]
    fn test_items_default_to_canvas() {
        let config = SceneConfig::from_json(SCENE).unwrap();
        let scene = config.build(&Settings::default()).unwrap();
        match &scene.items()[0] {
            SceneItem::Stamp { rect, .. } => assert_eq!(*rect, scene.canvas()),
            SceneItem::Connector { .. } => panic!("expected a stamp"),
        }
        match &scene.items()[1] {
            SceneItem::Stamp { rect, .. } => assert_eq!(*rect, Rect::new(100.0, 0.0, 100.0, 100.0)),
            SceneItem::Connector { .. } => panic!("expected a stamp"),
        }
    }

    #[test]
    fn test_render_balanced() {
        let scene = SceneConfig::from_json(SCENE)
            .unwrap()
            .build(&Settings::default())
            .unwrap();
        let mut surface = RecordingSurface::new();
        scene.render(&mut surface).unwrap();
        assert_eq!(surface.depth(), 0);
        assert!(surface.strokes().count() >= 4);
        assert_eq!(surface.fills().count(), 1);
    }

    #[test]
    fn test_invalid_item_reports_index() {
        let json = r#"{ "items": [ { "kind": "grid" }, { "kind": "hex_grid", "radius": -1 } ] }"#;
        let err = SceneConfig::from_json(json)
            .unwrap()
            .build(&Settings::default())
            .err()
            .unwrap();
        match err {
            SceneError::InvalidItem { index, kind, source } => {
                assert_eq!(index, 1);
                assert_eq!(kind, ItemKind::HexGrid);
                assert_eq!(source.parameter(), "radius");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_connector_requires_endpoints() {
        let item = ItemConfig::new(ItemKind::Line);
        let err = item
            .build(&Settings::default(), Rect::new(0.0, 0.0, 10.0, 10.0))
            .err()
            .unwrap();
        assert_eq!(err.parameter(), "start");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            SceneConfig::from_json(r#"{ "items": [ { "kind": "spiral" } ] }"#),
            Err(SceneError::ParseError(_))
        ));
    }

    #[test]
    fn test_misspelt_field_rejected() {
        let err = SceneConfig::from_json(r#"{ "items": [ { "kind": "grid", "spacng": 5 } ] }"#)
            .unwrap_err();
        assert!(matches!(err, SceneError::ParseError(_)));
        assert!(err.to_string().contains("spacng"));
    }

    #[test]
    fn test_bad_canvas() {
        let config = SceneConfig::from_json(r#"{ "width": -5 }"#).unwrap();
        assert!(matches!(
            config.build(&Settings::default()),
            Err(SceneError::InvalidCanvas(_))
        ));
    }

    #[test]
    fn test_demo_scene_renders() {
        let config = SceneConfig::from_json(include_str!("../demos/guides.json")).unwrap();
        let scene = config.build(&Settings::default()).unwrap();
        assert_eq!(scene.items().len(), 6);
        assert_eq!(scene.canvas(), Rect::new(0.0, 0.0, 600.0, 400.0));

        let svg = scene.to_svg().unwrap();
        assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
    }

    #[test]
    fn test_to_svg_parses() {
        let scene = SceneConfig::from_json(SCENE)
            .unwrap()
            .build(&Settings::default())
            .unwrap();
        let svg = scene.to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("stroke-dasharray=\"2 8\""));

        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        assert!(!tree.root().children().is_empty());
    }
}
