pub mod pdf;

pub use pdf::extract_pdf_text;
