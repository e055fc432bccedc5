mod excalidraw;

pub use excalidraw::{ExcalidrawDoc, render};
