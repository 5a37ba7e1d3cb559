// Résumé builder core: the document store, the edit protocol and the preview
// projection. Views and the export layer only ever read `ResumePreview`.

pub mod edits;
pub mod forms;
pub mod handlers;
pub mod preview;
pub mod store;

pub use store::ResumeStore;
