pub mod line_cursor;

pub use line_cursor::LineCursor;
