mod diagnostics;
mod render;
