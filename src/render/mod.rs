//! Rendering module for turning content into HTML, text and JSON.

mod html;
mod json;
mod options;
mod renderer;
mod result;
pub mod streaming;
mod target;
mod text;
pub mod visitor;

pub use html::{to_html, to_html_with_options, HtmlTarget};
pub use json::{to_json, to_json_blocks, to_json_segments, JsonFormat};
pub use options::RenderOptions;
pub use renderer::{latex_error_message, math_error_message, ContentRenderer};
pub use result::{RenderResult, RenderStats};
pub use streaming::{collect_html, RenderEvent, StreamingRenderer};
pub use target::{replay, FragmentTree, RenderTarget};
pub use text::to_text;
pub use visitor::{
    CompositeVisitor, ContentVisitor, DefaultVisitor, HtmlAsTextVisitor, MathSourceVisitor,
    SkipHtmlVisitor, VisitorAction,
};
