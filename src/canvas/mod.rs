//! # Canvas Interaction
//!
//! Translates pointer input into element position, size, selection and
//! inline-edit changes over a bounded canvas.
//!
//! ```
//! use conserje::canvas::{Canvas, CanvasEditor, PointerPos};
//! use conserje::page::ElementKind;
//!
//! let mut editor = CanvasEditor::new(Canvas::new(400.0, 300.0));
//! let id = editor.add_element(ElementKind::Text, 10.0, 10.0).id.clone();
//!
//! editor.start_drag(&id, PointerPos::new(60.0, 20.0));
//! editor.pointer_move(PointerPos::new(500.0, 500.0));
//! editor.end_drag();
//!
//! let el = editor.element(&id).unwrap();
//! assert_eq!((el.x, el.y), (200.0, 260.0)); // clamped to the canvas
//! ```
//!
//! ## State machine
//!
//! Per canvas: `Idle → Selected → Dragging → Selected`, and independently
//! `Selected → Editing → Selected` (inline edit, text/heading only — an
//! `event` element raises [`CanvasEvent::OpenEventEditor`] for the owning
//! UI instead). Resizing shares the drag phases via the corner/edge grips.
//!
//! ## Intents, not callbacks
//!
//! Every mutation pushes a [`CanvasEvent`] intent into an internal queue
//! the single owner drains with [`CanvasEditor::drain_events`]. The
//! element collection is only ever mutated here; re-rendering is a pure
//! function of the resulting collection. No back-references between UI
//! nodes and data.

use serde::Serialize;

use crate::page::{Content, Element, ElementKind};

/// Smallest width/height a resize grip can shrink an element to.
pub const MIN_ELEMENT_SIZE: f64 = 16.0;

/// The fixed-size 2D surface elements are positioned on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    /// The simulated TV surface, 1200×675.
    fn default() -> Self {
        Self::new(1200.0, 675.0)
    }
}

/// A pointer position in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Malformed pointer input (NaN, infinities) must never reach element
    /// positions.
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Which resize grip is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Bottom-right corner: both axes.
    SouthEast,
    /// Bottom edge: height only.
    South,
    /// Right edge: width only.
    East,
}

/// Intent emitted by the editor for the owning UI layer to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasEvent {
    ElementAdded { id: String },
    ElementMoved { id: String, x: f64, y: f64 },
    ElementResized { id: String, width: f64, height: f64 },
    ElementUpdated { id: String },
    ElementDeleted { id: String },
    SelectionChanged { id: Option<String> },
    /// Double-click on an `event` element: the owner opens its event
    /// editor dialog; the canvas never edits event payloads inline.
    OpenEventEditor { id: String },
}

/// Partial update over one element, applied by the collection owner.
/// Fields left `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<Content>,
    pub styles: Option<std::collections::BTreeMap<String, String>>,
}

/// In-progress pointer interaction.
#[derive(Debug, Clone, PartialEq)]
enum Interaction {
    Idle,
    Dragging {
        id: String,
        /// Pointer offset from the element's top-left at drag start; keeps
        /// the grab point stable under the cursor.
        offset_x: f64,
        offset_y: f64,
    },
    Resizing {
        id: String,
        handle: ResizeHandle,
    },
}

/// Owns the element collection of one canvas page and every interaction
/// over it.
#[derive(Debug)]
pub struct CanvasEditor {
    canvas: Canvas,
    elements: Vec<Element>,
    selected: Option<String>,
    editing: Option<String>,
    interaction: Interaction,
    events: Vec<CanvasEvent>,
}

impl CanvasEditor {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            elements: Vec::new(),
            selected: None,
            editing: None,
            interaction: Interaction::Idle,
            events: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.interaction, Interaction::Idle)
    }

    /// Take every intent emitted since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Collection
    // ------------------------------------------------------------------

    /// Add a palette-default element of the given kind at a position
    /// (clamped into the canvas). Ids are generated here, so uniqueness
    /// within the collection holds by construction.
    pub fn add_element(&mut self, kind: ElementKind, x: f64, y: f64) -> &Element {
        let mut element = Element::new(kind, x, y);
        clamp_into(self.canvas, &mut element);
        self.events.push(CanvasEvent::ElementAdded {
            id: element.id.clone(),
        });
        self.elements.push(element);
        self.elements.last().expect("just pushed")
    }

    /// Replace the whole collection (page load). Clears selection, edit
    /// and drag state; positions are clamped into the canvas.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        let canvas = self.canvas;
        for element in &mut self.elements {
            clamp_into(canvas, element);
        }
        self.selected = None;
        self.editing = None;
        self.interaction = Interaction::Idle;
    }

    /// Merge a partial update into the matching element, leaving others
    /// untouched. Position and size are re-clamped so the bounds
    /// invariant survives form-driven edits too.
    pub fn update(&mut self, id: &str, update: ElementUpdate) {
        let canvas = self.canvas;
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return;
        };
        if let Some(width) = update.width {
            element.width = width.max(MIN_ELEMENT_SIZE);
        }
        if let Some(height) = update.height {
            element.height = height.max(MIN_ELEMENT_SIZE);
        }
        if let Some(x) = update.x {
            element.x = x;
        }
        if let Some(y) = update.y {
            element.y = y;
        }
        if let Some(content) = update.content {
            element.content = content;
        }
        if let Some(styles) = update.styles {
            element.styles = styles;
        }
        element.x = clamp_axis(element.x, element.width, canvas.width);
        element.y = clamp_axis(element.y, element.height, canvas.height);
        self.events.push(CanvasEvent::ElementUpdated { id: id.to_string() });
    }

    /// Remove an element. If it was selected, selection becomes none; if
    /// it was mid-edit, the pending text is discarded without committing.
    pub fn delete(&mut self, id: &str) {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.elements.len() == before {
            return;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            self.events.push(CanvasEvent::SelectionChanged { id: None });
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        if let Interaction::Dragging { id: drag_id, .. }
        | Interaction::Resizing { id: drag_id, .. } = &self.interaction
        {
            if drag_id == id {
                self.interaction = Interaction::Idle;
            }
        }
        self.events.push(CanvasEvent::ElementDeleted { id: id.to_string() });
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Click on an element: single selection. A pending inline edit on
    /// another element is committed first (save-on-blur).
    pub fn select(&mut self, id: &str) {
        if self.element(id).is_none() {
            return;
        }
        if let Some(editing) = self.editing.clone() {
            if editing != id {
                // Deterministic choice: switching selection saves the
                // edit in progress, matching blur behavior.
                self.editing = None;
            }
        }
        if self.selected.as_deref() != Some(id) {
            self.selected = Some(id.to_string());
            self.events.push(CanvasEvent::SelectionChanged {
                id: Some(id.to_string()),
            });
        }
    }

    /// Click on empty canvas: commit any pending edit, then deselect.
    pub fn clear_selection(&mut self) {
        self.editing = None;
        if self.selected.is_some() {
            self.selected = None;
            self.events.push(CanvasEvent::SelectionChanged { id: None });
        }
    }

    // ------------------------------------------------------------------
    // Drag
    // ------------------------------------------------------------------

    /// Begin dragging an element. Captures the pointer's offset from the
    /// element's top-left so the grab point stays under the cursor. A
    /// no-op while another drag or resize is active, or for malformed
    /// pointer input.
    pub fn start_drag(&mut self, id: &str, pointer: PointerPos) {
        if !matches!(self.interaction, Interaction::Idle) || !pointer.is_finite() {
            return;
        }
        let Some(element) = self.element(id) else {
            return;
        };
        let offset_x = pointer.x - element.x;
        let offset_y = pointer.y - element.y;
        self.select(id);
        self.interaction = Interaction::Dragging {
            id: id.to_string(),
            offset_x,
            offset_y,
        };
    }

    /// Begin resizing via a grip. Shares [`pointer_move`]/[`end_drag`]
    /// with dragging.
    ///
    /// [`pointer_move`]: CanvasEditor::pointer_move
    /// [`end_drag`]: CanvasEditor::end_drag
    pub fn start_resize(&mut self, id: &str, handle: ResizeHandle, pointer: PointerPos) {
        if !matches!(self.interaction, Interaction::Idle) || !pointer.is_finite() {
            return;
        }
        if self.element(id).is_none() {
            return;
        }
        self.select(id);
        self.interaction = Interaction::Resizing {
            id: id.to_string(),
            handle,
        };
    }

    /// Pointer moved while a drag or resize is active. Each axis clamps
    /// independently so the element never leaves the canvas no matter how
    /// far outside the pointer travels. Non-finite input is ignored.
    pub fn pointer_move(&mut self, pointer: PointerPos) {
        if !pointer.is_finite() {
            return;
        }
        let canvas = self.canvas;
        match self.interaction.clone() {
            Interaction::Idle => {}
            Interaction::Dragging {
                id,
                offset_x,
                offset_y,
            } => {
                let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
                    return;
                };
                let x = clamp_axis(pointer.x - offset_x, element.width, canvas.width);
                let y = clamp_axis(pointer.y - offset_y, element.height, canvas.height);
                if (x, y) != (element.x, element.y) {
                    element.x = x;
                    element.y = y;
                    self.events.push(CanvasEvent::ElementMoved { id, x, y });
                }
            }
            Interaction::Resizing { id, handle } => {
                let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
                    return;
                };
                let mut width = element.width;
                let mut height = element.height;
                if matches!(handle, ResizeHandle::SouthEast | ResizeHandle::East) {
                    width = (pointer.x - element.x)
                        .max(MIN_ELEMENT_SIZE)
                        .min(canvas.width - element.x);
                }
                if matches!(handle, ResizeHandle::SouthEast | ResizeHandle::South) {
                    height = (pointer.y - element.y)
                        .max(MIN_ELEMENT_SIZE)
                        .min(canvas.height - element.y);
                }
                if (width, height) != (element.width, element.height) {
                    element.width = width;
                    element.height = height;
                    self.events.push(CanvasEvent::ElementResized { id, width, height });
                }
            }
        }
    }

    /// Pointer released. Releasing outside any target is the same as a
    /// normal release; there is no special abort path.
    pub fn end_drag(&mut self) {
        self.interaction = Interaction::Idle;
    }

    // ------------------------------------------------------------------
    // Inline edit
    // ------------------------------------------------------------------

    /// Double-click dispatch: text/heading enter inline edit, an event
    /// element raises the open-editor intent, everything else just keeps
    /// its selection.
    pub fn double_click(&mut self, id: &str) {
        let Some(element) = self.element(id) else {
            return;
        };
        let kind = element.kind;
        self.select(id);
        if kind.inline_editable() {
            self.editing = Some(id.to_string());
        } else if kind == ElementKind::Event {
            self.events.push(CanvasEvent::OpenEventEditor { id: id.to_string() });
        }
    }

    /// Enter inline edit explicitly (the toolbar pencil). Returns the
    /// current text for the input field, or `None` when the kind does not
    /// support inline editing.
    pub fn start_inline_edit(&mut self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if !element.kind.inline_editable() {
            return None;
        }
        let current = element.content.as_plain().unwrap_or_default().to_string();
        self.select(id);
        self.editing = Some(id.to_string());
        Some(current)
    }

    /// Commit the inline edit with the input's final text.
    pub fn commit_inline_edit(&mut self, id: &str, text: impl Into<String>) {
        if self.editing.as_deref() != Some(id) {
            return;
        }
        self.editing = None;
        self.update(
            id,
            ElementUpdate {
                content: Some(Content::Plain(text.into())),
                ..Default::default()
            },
        );
    }

    /// Abandon the inline edit, keeping the previous content.
    pub fn cancel_inline_edit(&mut self) {
        self.editing = None;
    }
}

fn clamp_into(canvas: Canvas, element: &mut Element) {
    element.width = element.width.max(MIN_ELEMENT_SIZE);
    element.height = element.height.max(MIN_ELEMENT_SIZE);
    element.x = clamp_axis(element.x, element.width, canvas.width);
    element.y = clamp_axis(element.y, element.height, canvas.height);
}

/// Clamp one axis to `[0, canvas - size]`. An element larger than the
/// canvas pins to 0.
fn clamp_axis(pos: f64, size: f64, canvas: f64) -> f64 {
    pos.max(0.0).min((canvas - size).max(0.0))
}
