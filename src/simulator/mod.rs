//! # Android-TV Simulator
//!
//! The simulated hotel TV home screen: a fixed-shape configuration object
//! ([`TemplateData`]) edited through form controls, and a preview
//! renderer that turns it into the HTML the editor's TV frame displays.
//!
//! The configuration is independent of the page canvas: it drives the
//! home screen (logo, background, five cards, six app icons, weather and
//! clock), is mutated through [`TemplateData::apply_partial`] or the
//! per-field accessors, and is exported/imported as a standalone JSON
//! blob.

mod config;
mod render;

pub use config::{
    App, AppKey, Apps, Card, CardKey, CardPosition, Cards, TemplateData, TemplatePatch,
    TimeFormat, TimeSettings, Weather,
};
pub use render::render_preview;
