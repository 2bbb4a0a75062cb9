pub mod buffer;
pub mod color;
pub mod element;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod layout;
pub mod motion;
pub mod render;
pub mod scroll;
pub mod style;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use color::{Color, Rgb};
pub use element::{find_element, subtree_contains, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use geometry::{Edges, Rect};
pub use hit::{hit_test, hit_test_focusable, hit_test_scrollable};
pub use input::{TextInputData, TextInputState};
pub use layout::{layout, LayoutResult, ScrollArea};
pub use motion::{Easing, MotionState, TransitionConfig, Transitions};
pub use scroll::ScrollState;
pub use style::Style;
pub use terminal::Terminal;
pub use types::*;
